//! User query — the request-scoped selection of skills and a domain.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A selection as submitted by the client. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl UserQuery {
    #[cfg(test)]
    pub fn new<I, S>(skills: I, domain: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            domain: domain.map(String::from),
        }
    }

    /// Rejects selections with more than `max_skills` skills.
    pub fn validate(&self, max_skills: usize) -> Result<(), AppError> {
        if self.skills.len() > max_skills {
            return Err(AppError::Validation(format!(
                "At most {max_skills} skills may be selected, got {}",
                self.skills.len()
            )));
        }
        Ok(())
    }

    /// The domain, if one was chosen. Blank strings count as unset.
    pub fn selected_domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// True when both at least one skill and a domain are present.
    pub fn is_complete(&self) -> bool {
        !self.skills.is_empty() && self.selected_domain().is_some()
    }
}

/// Removes all whitespace so a multi-word skill vectorizes as a single term.
pub fn normalize_skill(skill: &str) -> String {
    skill.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Builds the query document: normalized skills joined by `,`, then `,` and the raw domain.
pub fn build_query_document<S: AsRef<str>>(skills: &[S], domain: &str) -> String {
    let normalized: Vec<String> = skills.iter().map(|s| normalize_skill(s.as_ref())).collect();
    format!("{},{}", normalized.join(","), domain)
}
