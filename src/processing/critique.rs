//! Rule-based resume improvement suggestions

use crate::config::CritiqueConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::model::Resume;
use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SuggestionKind {
    ExpandSummary,
    AddSkills,
    QuantifyAchievements,
    AddEducation,
    DetailRole { company: String },
    WellStructured,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

impl Suggestion {
    fn new(kind: SuggestionKind) -> Self {
        let message = match &kind {
            SuggestionKind::ExpandSummary => "Add a more detailed professional summary to highlight your expertise and career goals.".to_string(),
            SuggestionKind::AddSkills => "Add more skills relevant to your target positions.".to_string(),
            SuggestionKind::QuantifyAchievements => "Add quantifiable achievements to your work experience (e.g., 'Increased sales by 20%').".to_string(),
            SuggestionKind::AddEducation => "Add educational background to strengthen your profile.".to_string(),
            SuggestionKind::DetailRole { company } => format!("Add more details to your role at {}.", company),
            SuggestionKind::WellStructured => "Your resume looks well-structured! Consider customizing it for specific job applications.".to_string(),
        };
        Self { kind, message }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Independent checks over resume fields, reported in evaluation order
pub struct CritiqueEngine {
    achievement_verbs: AhoCorasick,
    percentage: Regex,
    config: CritiqueConfig,
}

impl CritiqueEngine {
    pub fn new(config: CritiqueConfig) -> Result<Self> {
        let achievement_verbs = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(&config.achievement_verbs)
            .map_err(|e| ResumeAnalyzerError::Processing(format!("Failed to build achievement matcher: {}", e)))?;

        let percentage = Regex::new(r"[0-9]+%")
            .map_err(|e| ResumeAnalyzerError::Processing(format!("Invalid percentage pattern: {}", e)))?;

        Ok(Self {
            achievement_verbs,
            percentage,
            config,
        })
    }

    /// Never empty: a positive note stands in when no rule fires
    pub fn critique(&self, resume: &Resume) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        // UTF-16 code units, the length web clients report for the same text
        let summary_chars = resume
            .summary
            .as_deref()
            .map(|s| s.encode_utf16().count())
            .unwrap_or(0);
        if summary_chars < self.config.min_summary_chars {
            suggestions.push(Suggestion::new(SuggestionKind::ExpandSummary));
        }

        if resume.skills.len() < self.config.min_skills {
            suggestions.push(Suggestion::new(SuggestionKind::AddSkills));
        }

        let quantified = resume
            .experience
            .iter()
            .flat_map(|exp| exp.description.iter())
            .any(|bullet| self.is_quantified(bullet));
        if !quantified {
            suggestions.push(Suggestion::new(SuggestionKind::QuantifyAchievements));
        }

        if resume.education.is_empty() {
            suggestions.push(Suggestion::new(SuggestionKind::AddEducation));
        }

        for exp in &resume.experience {
            if exp.description.len() < self.config.min_bullets_per_role {
                suggestions.push(Suggestion::new(SuggestionKind::DetailRole {
                    company: exp.company.clone(),
                }));
            }
        }

        if suggestions.is_empty() {
            suggestions.push(Suggestion::new(SuggestionKind::WellStructured));
        }

        suggestions
    }

    /// Bullet names an achievement verb or a percentage
    pub fn is_quantified(&self, bullet: &str) -> bool {
        self.achievement_verbs.is_match(bullet) || self.percentage.is_match(bullet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, EndDate, Experience, Skill};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn role(company: &str, bullets: &[&str]) -> Experience {
        Experience {
            company: company.to_string(),
            title: "Engineer".to_string(),
            location: None,
            start_date: date(2020, 1, 1),
            end_date: EndDate::Present,
            description: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn polished_resume() -> Resume {
        let mut resume = Resume::new("Jane Doe", "jane@example.com");
        resume.summary = Some("Backend engineer with seven years of experience building payment systems.".to_string());
        resume.skills = ["Rust", "Go", "SQL", "Kafka", "Docker", "AWS", "gRPC", "Linux"]
            .iter()
            .map(|s| Skill::new(*s))
            .collect();
        resume.education.push(Education {
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: date(2012, 9, 1),
            end_date: date(2016, 6, 1),
        });
        resume.experience.push(role(
            "Acme",
            &["Increased checkout throughput by 20%", "Led a team of four"],
        ));
        resume
    }

    fn engine() -> CritiqueEngine {
        CritiqueEngine::new(CritiqueConfig::default()).unwrap()
    }

    #[test]
    fn test_polished_resume_gets_positive_note() {
        let suggestions = engine().critique(&polished_resume());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::WellStructured);
    }

    #[test]
    fn test_only_missing_summary_is_flagged() {
        let mut resume = polished_resume();
        resume.summary = None;

        let suggestions = engine().critique(&resume);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::ExpandSummary);
    }

    #[test]
    fn test_short_summary_is_flagged() {
        let mut resume = polished_resume();
        resume.summary = Some("Engineer.".to_string());
        assert_eq!(engine().critique(&resume)[0].kind, SuggestionKind::ExpandSummary);
    }

    #[test]
    fn test_rule_order_for_sparse_resume() {
        let mut resume = Resume::new("Sam", "sam@example.com");
        resume.skills.push(Skill::new("Excel"));
        resume.experience.push(role("Shop", &["Handled the till"]));
        resume.experience.push(role("Cafe", &["Made coffee", "Opened the store"]));

        let kinds: Vec<SuggestionKind> = engine().critique(&resume).into_iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::ExpandSummary,
                SuggestionKind::AddSkills,
                SuggestionKind::QuantifyAchievements,
                SuggestionKind::AddEducation,
                SuggestionKind::DetailRole { company: "Shop".to_string() },
            ]
        );
    }

    #[test]
    fn test_detail_role_message_names_company() {
        let mut resume = polished_resume();
        resume.experience.push(role("Globex", &["Reduced cloud spend"]));

        let suggestions = engine().critique(&resume);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].message, "Add more details to your role at Globex.");
    }

    #[test]
    fn test_quantified_detection() {
        let engine = engine();
        assert!(engine.is_quantified("DELIVERED the project early"));
        assert!(engine.is_quantified("Cut latency 35%"));
        assert!(engine.is_quantified("Saved the team hours each week"));
        assert!(!engine.is_quantified("Wrote documentation"));
        assert!(!engine.is_quantified("Grew revenue by half a percent"));
        assert!(!engine.is_quantified("Cut costs by ٢٠%"));
    }

    #[test]
    fn test_summary_length_counts_code_units() {
        let mut resume = polished_resume();
        // 25 decomposed accents: 25 graphemes, 50 code units
        resume.summary = Some("e\u{301}".repeat(25));
        assert_eq!(engine().critique(&resume)[0].kind, SuggestionKind::WellStructured);

        resume.summary = Some("é".repeat(49));
        assert_eq!(engine().critique(&resume)[0].kind, SuggestionKind::ExpandSummary);
    }

    #[test]
    fn test_empty_resume_is_never_silent() {
        let resume = Resume::new("Empty", "empty@example.com");
        let suggestions = engine().critique(&resume);
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions.len(), 4);
    }
}
