//! Dataset loader — reads the jobs CSV and the skill label export at startup.
//!
//! Any I/O or schema problem is fatal: errors carry the file path and row so the process
//! exits with a readable message.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::catalog::{Catalog, SkillCatalog};
use crate::config::Config;
use crate::models::job::JobRecord;

/// Loads both datasets named in `config` and assembles the catalog.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let jobs = load_jobs(&config.jobs_csv_path)?;
    let skills = load_skills(&config.skills_csv_path, &config.skill_label_column)?;
    if skills.is_empty() {
        warn!(
            "Skills dataset '{}' has no labels; suggestions will be empty",
            config.skills_csv_path.display()
        );
    }

    let catalog = Catalog::new(jobs, skills);
    info!(
        "Catalog loaded: {} jobs, {} domains, {} skills",
        catalog.jobs.len(),
        catalog.domains.len(),
        catalog.skills.len()
    );
    Ok(catalog)
}

pub fn load_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open jobs dataset '{}'", path.display()))?;
    read_jobs(file).with_context(|| format!("Malformed jobs dataset '{}'", path.display()))
}

pub fn load_skills(path: &Path, label_column: &str) -> Result<SkillCatalog> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open skills dataset '{}'", path.display()))?;
    read_skills(file, label_column)
        .with_context(|| format!("Malformed skills dataset '{}'", path.display()))
}

/// Parses job rows. `Occupation` and `Skill and Domain` must be present in every row.
pub fn read_jobs<R: Read>(reader: R) -> Result<Vec<JobRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut jobs = Vec::new();
    for (i, row) in rdr.deserialize::<JobRecord>().enumerate() {
        // Header is line 1, so data rows start at line 2.
        let line = i + 2;
        let mut job = row.with_context(|| format!("Invalid job row at line {line}"))?;
        if job.occupation.is_empty() {
            bail!("Job row at line {line} has an empty Occupation");
        }
        if job.skill_and_domain.is_empty() {
            bail!("Job row at line {line} has an empty Skill and Domain");
        }
        if job.description.as_deref().is_some_and(str::is_empty) {
            job.description = None;
        }
        jobs.push(job);
    }
    Ok(jobs)
}

/// Reads the skill label column, dropping blanks and duplicates.
pub fn read_skills<R: Read>(reader: R, label_column: &str) -> Result<SkillCatalog> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers().context("Failed to read skills header")?;
    let Some(column) = headers.iter().position(|h| h.trim() == label_column) else {
        bail!("Skills dataset has no '{label_column}' column");
    };

    let mut labels = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let record = row.with_context(|| format!("Invalid skill row at line {}", i + 2))?;
        if let Some(label) = record.get(column) {
            labels.push(label.to_string());
        }
    }
    Ok(SkillCatalog::from_labels(labels))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const JOBS_CSV: &str = "\
Occupation,Domain of Interest,Description,Skill and Domain
Data Analyst,Business Analytics,Turns data into decisions.,\"python,datavisualization,businessanalytics\"
Civil Engineer,Engineering,,\"autocad,structuralanalysis,engineering\"
Archivist,,Keeps records.,\"cataloguing,archives\"
";

    #[test]
    fn test_read_jobs_parses_rows() {
        let jobs = read_jobs(JOBS_CSV.as_bytes()).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].occupation, "Data Analyst");
        assert_eq!(jobs[0].domain, "Business Analytics");
        assert_eq!(
            jobs[0].skill_and_domain,
            "python,datavisualization,businessanalytics"
        );
        assert_eq!(
            jobs[0].description.as_deref(),
            Some("Turns data into decisions.")
        );
    }

    #[test]
    fn test_read_jobs_empty_description_is_none() {
        let jobs = read_jobs(JOBS_CSV.as_bytes()).unwrap();
        assert_eq!(jobs[1].description, None);
        assert_eq!(jobs[2].domain, "");
    }

    #[test]
    fn test_read_jobs_ignores_extra_columns() {
        let csv = "Id,Occupation,Domain of Interest,Description,Skill and Domain\n\
                   7,Nurse,Healthcare,Cares.,\"patientcare,healthcare\"\n";
        let jobs = read_jobs(csv.as_bytes()).unwrap();
        assert_eq!(jobs[0].occupation, "Nurse");
    }

    #[test]
    fn test_read_jobs_missing_document_column_fails() {
        let csv = "Occupation,Domain of Interest,Description\nNurse,Healthcare,Cares.\n";
        assert!(read_jobs(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_jobs_empty_occupation_fails() {
        let csv = "Occupation,Domain of Interest,Description,Skill and Domain\n,Law,,\"x,y\"\n";
        let err = read_jobs(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }

    #[test]
    fn test_read_jobs_empty_document_fails() {
        let csv = "Occupation,Domain of Interest,Description,Skill and Domain\n\
                   Nurse,Healthcare,,\"patientcare,healthcare\"\n\
                   Ghost,Law,,\n";
        let err = read_jobs(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"), "got: {message}");
        assert!(message.contains("Skill and Domain"), "got: {message}");
    }

    #[test]
    fn test_read_skills_dedups_label_column() {
        let csv = "occupation,skills_en.preferredLabel\n\
                   Analyst,Python\n\
                   Engineer,Python\n\
                   Engineer,\n\
                   Analyst,Data Visualization\n";
        let skills = read_skills(csv.as_bytes(), "skills_en.preferredLabel").unwrap();
        assert_eq!(
            skills.labels(),
            &["Python".to_string(), "Data Visualization".to_string()]
        );
    }

    #[test]
    fn test_read_skills_missing_column_fails() {
        let csv = "occupation,label\nAnalyst,Python\n";
        let err = read_skills(csv.as_bytes(), "skills_en.preferredLabel").unwrap_err();
        assert!(err.to_string().contains("skills_en.preferredLabel"));
    }

    #[test]
    fn test_load_jobs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(JOBS_CSV.as_bytes()).unwrap();

        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 3);
    }

    #[test]
    fn test_load_jobs_missing_file_is_fatal() {
        let err = load_jobs(Path::new("/nonexistent/jobs.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/jobs.csv"));
    }

    const SKILLS_CSV: &str = "\
occupation,skills_en.preferredLabel
Data Analyst,Python
Data Analyst,Data Visualization
Civil Engineer,AutoCAD
Civil Engineer,Python
";

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_skills_from_file() {
        let file = write_temp(SKILLS_CSV);
        let skills = load_skills(file.path(), "skills_en.preferredLabel").unwrap();
        assert_eq!(skills.len(), 3);
        assert_eq!(skills.suggest("auto", 5), vec!["AutoCAD"]);
    }

    #[test]
    fn test_load_skills_missing_file_is_fatal() {
        let err = load_skills(Path::new("/nonexistent/skills.csv"), "skills_en.preferredLabel")
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/skills.csv"));
    }

    #[test]
    fn test_load_catalog_from_files() {
        let jobs = write_temp(JOBS_CSV);
        let skills = write_temp(SKILLS_CSV);
        let config = Config {
            jobs_csv_path: jobs.path().to_path_buf(),
            skills_csv_path: skills.path().to_path_buf(),
            ..Config::default()
        };

        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.jobs.len(), 3);
        assert_eq!(catalog.domains, vec!["Business Analytics", "Engineering"]);
        assert_eq!(catalog.skills.len(), 3);
    }

    #[test]
    fn test_load_catalog_missing_skills_file_is_fatal() {
        let jobs = write_temp(JOBS_CSV);
        let config = Config {
            jobs_csv_path: jobs.path().to_path_buf(),
            skills_csv_path: "/nonexistent/skills.csv".into(),
            ..Config::default()
        };

        let err = load_catalog(&config).unwrap_err();
        assert!(err.to_string().contains("skills dataset"), "got: {err}");
    }
}
