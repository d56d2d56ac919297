//! Job posting records

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};

/// Structured job ad with must-have requirements and optional nice-to-haves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<Vec<String>>,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: String::new(),
            requirements: Vec::new(),
            preferred_skills: None,
        }
    }

    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferred_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn preferred(&self) -> &[String] {
        self.preferred_skills.as_deref().unwrap_or(&[])
    }

    /// Requirements followed by preferred skills, duplicates kept
    pub fn desired_skills(&self) -> impl Iterator<Item = &str> {
        self.requirements
            .iter()
            .chain(self.preferred().iter())
            .map(|s| s.as_str())
    }

    /// Display label, e.g. "Backend Developer @ Data Systems Corp."
    pub fn label(&self) -> String {
        format!("{} @ {}", self.title, self.company)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ResumeAnalyzerError::InvalidInput("job title is empty".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "job '{}' has no company",
                self.title
            )));
        }
        if self.desired_skills().any(|s| s.trim().is_empty()) {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "job '{}' lists an empty skill",
                self.label()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desired_skills_order() {
        let job = JobPosting::new("Dev", "Acme")
            .with_requirements(["Rust", "SQL"])
            .with_preferred_skills(["Docker", "Rust"]);

        let skills: Vec<&str> = job.desired_skills().collect();
        assert_eq!(skills, vec!["Rust", "SQL", "Docker", "Rust"]);
    }

    #[test]
    fn test_missing_preferred_skills_field() {
        let json = r#"{"title":"Dev","company":"Acme","description":"","requirements":["Go"]}"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.preferred().is_empty());
        assert_eq!(job.desired_skills().count(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(JobPosting::new("Dev", "Acme").validate().is_ok());
        assert!(JobPosting::new(" ", "Acme").validate().is_err());
        assert!(JobPosting::new("Dev", "Acme")
            .with_requirements(["Go", ""])
            .validate()
            .is_err());
    }
}
