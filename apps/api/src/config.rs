use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::recommend::recommender::DEFAULT_TOP_K;

const DEFAULT_MAX_SKILLS: usize = 5;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_csv_path: PathBuf,
    pub skills_csv_path: PathBuf,
    pub skill_label_column: String,
    pub top_k: usize,
    pub max_skills: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            jobs_csv_path: PathBuf::from("datasets/updated_jobs_grouped.csv"),
            skills_csv_path: PathBuf::from("datasets/skills.csv"),
            skill_label_column: "skills_en.preferredLabel".to_string(),
            top_k: DEFAULT_TOP_K,
            max_skills: DEFAULT_MAX_SKILLS,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            jobs_csv_path: optional_env("JOBS_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.jobs_csv_path),
            skills_csv_path: optional_env("SKILLS_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.skills_csv_path),
            skill_label_column: optional_env("SKILL_LABEL_COLUMN")
                .unwrap_or(defaults.skill_label_column),
            top_k: parse_env("TOP_K", defaults.top_k)?,
            max_skills: parse_env("MAX_SKILLS", defaults.max_skills)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
