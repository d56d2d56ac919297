//! Resume to job compatibility scoring

use crate::config::ScoringConfig;
use crate::model::{JobPosting, Resume};
use crate::processing::normalizer::SkillMatcher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 0-100 compatibility between one resume and one posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub label: MatchLabel,
    pub matched_requirements: Vec<String>,
    pub unmatched_requirements: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_component: f64,
    pub experience_component: f64,
    pub baseline: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    Strong,
    Good,
    Potential,
    Low,
}

impl MatchLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => MatchLabel::Strong,
            60..=79 => MatchLabel::Good,
            40..=59 => MatchLabel::Potential,
            _ => MatchLabel::Low,
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchLabel::Strong => "Strong Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Potential => "Potential Match",
            MatchLabel::Low => "Low Match",
        };
        write!(f, "{}", text)
    }
}

/// Fixed-formula scorer: requirement coverage, per-role experience credit and a baseline
pub struct MatchScorer<'a> {
    matcher: &'a dyn SkillMatcher,
    weights: ScoringConfig,
}

impl<'a> MatchScorer<'a> {
    pub fn new(matcher: &'a dyn SkillMatcher, weights: ScoringConfig) -> Self {
        Self { matcher, weights }
    }

    pub fn score(&self, resume: &Resume, job: &JobPosting) -> MatchResult {
        let resume_skills: Vec<String> = resume
            .skill_names()
            .map(|name| name.to_lowercase())
            .collect();
        let resume_skills: Vec<&str> = resume_skills.iter().map(|s| s.as_str()).collect();

        let (matched, unmatched): (Vec<String>, Vec<String>) = job
            .requirements
            .iter()
            .map(|req| req.to_lowercase())
            .partition(|req| self.matcher.matches_any(&resume_skills, req));

        let total = matched.len() + unmatched.len();
        let skill_component = if total == 0 {
            0.0
        } else {
            matched.len() as f64 * self.weights.skill_weight / total as f64
        };

        let experience_component = (resume.experience.len() as f64
            * self.weights.experience_points_per_role)
            .min(self.weights.experience_cap);

        let raw = (skill_component + experience_component + self.weights.baseline)
            .min(self.weights.max_score);
        let score = raw.round().clamp(0.0, 100.0) as u8;

        MatchResult {
            score,
            label: MatchLabel::from_score(score),
            matched_requirements: matched,
            unmatched_requirements: unmatched,
            breakdown: ScoreBreakdown {
                skill_component,
                experience_component,
                baseline: self.weights.baseline,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EndDate, Experience, Skill};
    use crate::processing::normalizer::{LooseContains, TokenAlias};
    use chrono::NaiveDate;

    fn role(company: &str) -> Experience {
        Experience {
            company: company.to_string(),
            title: "Engineer".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: EndDate::Present,
            description: vec!["Shipped features".to_string()],
        }
    }

    fn resume_with(skills: &[&str], roles: usize) -> Resume {
        let mut resume = Resume::new("Jane Doe", "jane@example.com");
        resume.skills = skills.iter().map(|s| Skill::new(*s)).collect();
        resume.experience = (0..roles).map(|i| role(&format!("Company {}", i))).collect();
        resume
    }

    #[test]
    fn test_two_of_three_requirements_with_two_roles() {
        let resume = resume_with(&["JavaScript", "React"], 2);
        let job = JobPosting::new("Frontend", "Acme").with_requirements(["JavaScript", "React", "HTML/CSS"]);

        for matcher in [&LooseContains as &dyn SkillMatcher, &TokenAlias::new()] {
            let result = MatchScorer::new(matcher, ScoringConfig::default()).score(&resume, &job);
            assert_eq!(result.score, 70);
            assert_eq!(result.breakdown.skill_component, 40.0);
            assert_eq!(result.breakdown.experience_component, 20.0);
            assert_eq!(result.unmatched_requirements, vec!["html/css"]);
            assert_eq!(result.label, MatchLabel::Good);
        }
    }

    #[test]
    fn test_no_requirements_scores_experience_plus_baseline() {
        let job = JobPosting::new("Anything", "Acme");
        let matcher = TokenAlias::new();
        let scorer = MatchScorer::new(&matcher, ScoringConfig::default());

        assert_eq!(scorer.score(&resume_with(&[], 0), &job).score, 10);
        assert_eq!(scorer.score(&resume_with(&["Go"], 1), &job).score, 20);
        assert_eq!(scorer.score(&resume_with(&["Go"], 7), &job).score, 40);
    }

    #[test]
    fn test_experience_credit_is_capped() {
        let matcher = LooseContains;
        let scorer = MatchScorer::new(&matcher, ScoringConfig::default());
        let job = JobPosting::new("Dev", "Acme").with_requirements(["Rust"]);

        let full = scorer.score(&resume_with(&["Rust"], 12), &job);
        assert_eq!(full.breakdown.experience_component, 30.0);
        assert_eq!(full.score, 100);
    }

    #[test]
    fn test_rounds_to_nearest_integer() {
        let matcher = TokenAlias::new();
        let scorer = MatchScorer::new(&matcher, ScoringConfig::default());
        let job = JobPosting::new("Dev", "Acme").with_requirements(["Rust", "Go", "Zig"]);
        let job7 = JobPosting::new("Dev", "Acme")
            .with_requirements(["Rust", "Go", "Zig", "Nim", "Odin", "Ada", "Lua"]);
        assert_eq!(scorer.score(&resume_with(&["Rust"], 0), &job).score, 30);
        // 60/7 = 8.57 + 10 = 18.57
        assert_eq!(scorer.score(&resume_with(&["Rust"], 0), &job7).score, 19);
    }

    #[test]
    fn test_score_is_deterministic_and_bounded() {
        let matcher = LooseContains;
        let scorer = MatchScorer::new(&matcher, ScoringConfig::default());
        let resume = resume_with(&["Node.js", "SQL", "Docker"], 3);
        let job = JobPosting::new("Backend", "Acme")
            .with_requirements(["Node.js", "Express", "MongoDB or PostgreSQL"]);

        let first = scorer.score(&resume, &job);
        let second = scorer.score(&resume, &job);
        assert_eq!(first, second);
        assert!(first.score <= 100);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MatchLabel::from_score(100), MatchLabel::Strong);
        assert_eq!(MatchLabel::from_score(80), MatchLabel::Strong);
        assert_eq!(MatchLabel::from_score(60), MatchLabel::Good);
        assert_eq!(MatchLabel::from_score(40), MatchLabel::Potential);
        assert_eq!(MatchLabel::from_score(39), MatchLabel::Low);
        assert_eq!(MatchLabel::Potential.to_string(), "Potential Match");
    }
}
