//! Candidate resume records

use crate::error::{Result, ResumeAnalyzerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for skills that carry no category
pub const UNCATEGORIZED: &str = "Other";

/// Structured candidate profile, as produced by the upload/parse step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: EndDate,
    /// Achievement bullets, most relevant first
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// End of an experience entry: a calendar date or the literal `Present`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EndDate {
    Date(NaiveDate),
    Present,
}

impl EndDate {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            EndDate::Date(date) => Some(*date),
            EndDate::Present => None,
        }
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            EndDate::Present => write!(f, "Present"),
        }
    }
}

impl TryFrom<String> for EndDate {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("present") {
            return Ok(EndDate::Present);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(EndDate::Date)
            .map_err(|e| format!("invalid end date '{}': {}", value, e))
    }
}

impl From<EndDate> for String {
    fn from(value: EndDate) -> Self {
        value.to_string()
    }
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            category: None,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

impl Resume {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            summary: None,
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Skill names in resume order
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }

    /// Group skills by category, keeping the order in which categories first appear
    pub fn skills_by_category(&self) -> Vec<(String, Vec<&Skill>)> {
        let mut groups: Vec<(String, Vec<&Skill>)> = Vec::new();

        for skill in &self.skills {
            let category = skill.category_or_default();
            match groups.iter_mut().find(|(name, _)| name == category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((category.to_string(), vec![skill])),
            }
        }

        groups
    }

    /// Reject records the parse step should never have produced
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("resume name is empty"));
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(invalid(format!("resume email '{}' is not an address", self.email)));
        }

        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(invalid("skill name is empty"));
            }
            if let Some(level) = skill.level {
                if !(1..=10).contains(&level) {
                    return Err(invalid(format!(
                        "skill '{}' has level {}, expected 1-10",
                        skill.name, level
                    )));
                }
            }
        }

        for entry in &self.education {
            if entry.start_date > entry.end_date {
                return Err(invalid(format!(
                    "education at '{}' ends ({}) before it starts ({})",
                    entry.institution, entry.end_date, entry.start_date
                )));
            }
        }

        for entry in &self.experience {
            if let Some(end) = entry.end_date.as_date() {
                if entry.start_date > end {
                    return Err(invalid(format!(
                        "experience at '{}' ends ({}) before it starts ({})",
                        entry.company, end, entry.start_date
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ResumeAnalyzerError {
    ResumeAnalyzerError::InvalidInput(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn minimal_resume() -> Resume {
        let mut resume = Resume::new("Jane Doe", "jane@example.com");
        resume.skills.push(Skill::new("Rust").with_level(8).with_category("Programming"));
        resume
    }

    #[test]
    fn test_end_date_parsing() {
        assert_eq!(EndDate::try_from("Present".to_string()).unwrap(), EndDate::Present);
        assert_eq!(
            EndDate::try_from("2023-02-28".to_string()).unwrap(),
            EndDate::Date(date("2023-02-28"))
        );
        assert!(EndDate::try_from("last spring".to_string()).is_err());
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "experience": [{
                "company": "Acme",
                "title": "Engineer",
                "startDate": "2021-01-01",
                "endDate": "Present",
                "description": ["Built things"]
            }],
            "skills": [{ "name": "Go", "level": 6 }]
        }"#;

        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.experience[0].end_date, EndDate::Present);
        assert!(resume.education.is_empty());
        assert_eq!(resume.skills[0].level, Some(6));
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_skills_by_category() {
        let mut resume = minimal_resume();
        resume.skills.push(Skill::new("Teamwork"));
        resume.skills.push(Skill::new("Go").with_category("Programming"));

        let groups = resume.skills_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Programming");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, UNCATEGORIZED);
    }

    #[test]
    fn test_validate_accepts_well_formed_resume() {
        assert!(minimal_resume().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut resume = minimal_resume();
        resume.email = "not-an-address".to_string();
        assert!(matches!(resume.validate(), Err(ResumeAnalyzerError::InvalidInput(_))));

        let mut resume = minimal_resume();
        resume.skills.push(Skill::new("Haskell").with_level(11));
        assert!(resume.validate().is_err());

        let mut resume = minimal_resume();
        resume.education.push(Education {
            institution: "Uni".to_string(),
            degree: "BSc".to_string(),
            field: "CS".to_string(),
            start_date: date("2020-09-01"),
            end_date: date("2016-05-30"),
        });
        assert!(resume.validate().is_err());
    }

    #[test]
    fn test_validate_allows_present_end_date() {
        let mut resume = minimal_resume();
        resume.experience.push(Experience {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            location: None,
            start_date: date("2021-01-01"),
            end_date: EndDate::Present,
            description: vec![],
        });
        assert!(resume.validate().is_ok());
    }
}
