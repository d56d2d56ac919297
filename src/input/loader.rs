//! Record parsing for the supported input formats

use crate::error::{Result, ResumeAnalyzerError};
use crate::model::JobPosting;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

pub trait RecordLoader {
    fn parse<T: DeserializeOwned>(&self, content: &str, origin: &Path) -> Result<T>;
}

pub struct JsonLoader;

impl RecordLoader for JsonLoader {
    fn parse<T: DeserializeOwned>(&self, content: &str, origin: &Path) -> Result<T> {
        serde_json::from_str(content).map_err(|e| {
            ResumeAnalyzerError::InvalidInput(format!("Failed to parse JSON '{}': {}", origin.display(), e))
        })
    }
}

pub struct TomlLoader;

impl RecordLoader for TomlLoader {
    fn parse<T: DeserializeOwned>(&self, content: &str, origin: &Path) -> Result<T> {
        toml::from_str(content).map_err(|e| {
            ResumeAnalyzerError::InvalidInput(format!("Failed to parse TOML '{}': {}", origin.display(), e))
        })
    }
}

/// A job file holds one posting, a bare list, or a `jobs` list (the only list form TOML allows)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobDocument {
    Many(Vec<JobPosting>),
    Catalog { jobs: Vec<JobPosting> },
    One(JobPosting),
}

impl JobDocument {
    pub fn into_postings(self) -> Vec<JobPosting> {
        match self {
            JobDocument::Many(jobs) | JobDocument::Catalog { jobs } => jobs,
            JobDocument::One(job) => vec![job],
        }
    }
}
