//! Input manager for loading resume and job records from disk

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::loader::{JobDocument, JsonLoader, RecordLoader, TomlLoader};
use crate::model::{JobPosting, Resume};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_resume(&mut self, path: &Path) -> Result<Resume> {
        info!("Loading resume: {}", path.display());
        self.load_record(path).await
    }

    /// Load every posting in a job file
    pub async fn load_jobs(&mut self, path: &Path) -> Result<Vec<JobPosting>> {
        info!("Loading job postings: {}", path.display());
        let document: JobDocument = self.load_record(path).await?;
        let jobs = document.into_postings();
        debug!("{} posting(s) in {}", jobs.len(), path.display());
        Ok(jobs)
    }

    /// Load and concatenate postings from several files, in argument order
    pub async fn load_all_jobs(&mut self, paths: &[impl AsRef<Path>]) -> Result<Vec<JobPosting>> {
        let mut jobs = Vec::new();
        for path in paths {
            jobs.extend(self.load_jobs(path.as_ref()).await?);
        }
        Ok(jobs)
    }

    async fn load_record<T: DeserializeOwned>(&mut self, path: &Path) -> Result<T> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read_text(path).await?;

        match file_type {
            FileType::Json => JsonLoader.parse(&content, path),
            FileType::Toml => TomlLoader.parse(&content, path),
            FileType::Unknown => Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported file type for: {} (expected .json or .toml)",
                path.display()
            ))),
        }
    }

    async fn read_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                debug!("Using cached content for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = fs::read_to_string(path).await?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
