//! Catalog — the read-only data context loaded once at startup.
//!
//! Holds the job corpus, the skill label catalogue and the distinct domains derived from the
//! jobs. Handlers receive it through `AppState` behind an `Arc`; nothing mutates it afterwards.

pub mod handlers;
pub mod loader;

use std::collections::HashSet;

use crate::models::job::JobRecord;

// ────────────────────────────────────────────────────────────────────────────
// Skill catalogue
// ────────────────────────────────────────────────────────────────────────────

/// Unique skill labels in first-appearance order. Only used to populate suggestions.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    labels: Vec<String>,
}

impl SkillCatalog {
    /// Builds a catalogue from raw labels, trimming them and dropping blanks and duplicates.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let labels = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .filter(|l| seen.insert(l.clone()))
            .collect();
        Self { labels }
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Type-ahead suggestions: labels containing `query` (case-insensitive), capped at `limit`.
    /// A blank query returns the head of the catalogue.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.labels
            .iter()
            .filter(|l| needle.is_empty() || l.to_lowercase().contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub jobs: Vec<JobRecord>,
    pub skills: SkillCatalog,
    pub domains: Vec<String>,
}

impl Catalog {
    pub fn new(jobs: Vec<JobRecord>, skills: SkillCatalog) -> Self {
        let domains = distinct_domains(&jobs);
        Self {
            jobs,
            skills,
            domains,
        }
    }
}

/// Distinct non-empty job domains, in the order they first appear in the corpus.
pub fn distinct_domains(jobs: &[JobRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    jobs.iter()
        .map(|j| j.domain.trim())
        .filter(|d| !d.is_empty())
        .filter(|d| seen.insert(d.to_string()))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(occupation: &str, domain: &str) -> JobRecord {
        JobRecord {
            occupation: occupation.to_string(),
            domain: domain.to_string(),
            description: None,
            skill_and_domain: String::new(),
        }
    }

    #[test]
    fn test_distinct_domains_keeps_first_appearance_order() {
        let jobs = vec![
            job("a", "Engineering"),
            job("b", "Business Analytics"),
            job("c", "Engineering"),
            job("d", "Healthcare"),
        ];
        assert_eq!(
            distinct_domains(&jobs),
            vec!["Engineering", "Business Analytics", "Healthcare"]
        );
    }

    #[test]
    fn test_distinct_domains_drops_missing() {
        let jobs = vec![job("a", ""), job("b", "   "), job("c", "Law")];
        assert_eq!(distinct_domains(&jobs), vec!["Law"]);
    }

    #[test]
    fn test_skill_catalog_dedups_and_drops_blanks() {
        let skills = SkillCatalog::from_labels(["Python", "", "  SQL ", "Python", "SQL"]);
        assert_eq!(skills.labels(), &["Python".to_string(), "SQL".to_string()]);
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_suggest_is_case_insensitive_substring() {
        let skills =
            SkillCatalog::from_labels(["Data Visualization", "Python", "Big Data", "Welding"]);
        assert_eq!(skills.suggest("data", 10), vec!["Data Visualization", "Big Data"]);
        assert_eq!(skills.suggest("PYTH", 10), vec!["Python"]);
    }

    #[test]
    fn test_suggest_respects_limit_and_blank_query() {
        let skills = SkillCatalog::from_labels(["a1", "a2", "a3"]);
        assert_eq!(skills.suggest("", 2), vec!["a1", "a2"]);
        assert!(skills.suggest("zzz", 5).is_empty());
    }

    #[test]
    fn test_catalog_new_derives_domains() {
        let catalog = Catalog::new(vec![job("a", "Law")], SkillCatalog::default());
        assert_eq!(catalog.domains, vec!["Law"]);
        assert!(catalog.skills.is_empty());
    }
}
