use serde::{Deserialize, Serialize};

/// One row of the jobs dataset. Column names follow the CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Occupation")]
    pub occupation: String,
    #[serde(rename = "Domain of Interest", default)]
    pub domain: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    /// Precomputed "skills + domain" text. This is the document that gets vectorized.
    #[serde(rename = "Skill and Domain")]
    pub skill_and_domain: String,
}

