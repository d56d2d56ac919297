//! Skill gap analysis and course recommendations

use crate::config::{CourseStrategy, RecommendationConfig};
use crate::model::{JobPosting, Resume};
use crate::processing::normalizer::SkillMatcher;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Course title pattern bound to a provider
#[derive(Debug, Clone, Copy)]
pub struct CourseTemplate {
    pub provider: &'static str,
    prefix: &'static str,
    suffix: &'static str,
}

impl CourseTemplate {
    pub fn title(&self, skill: &str) -> String {
        format!("{}{}{}", self.prefix, skill, self.suffix)
    }
}

pub const COURSE_TEMPLATES: [CourseTemplate; 4] = [
    CourseTemplate { provider: "Coursera", prefix: "Complete ", suffix: " Masterclass" },
    CourseTemplate { provider: "Udemy", prefix: "", suffix: " for Professionals" },
    CourseTemplate { provider: "LinkedIn Learning", prefix: "", suffix: " Essential Training" },
    CourseTemplate { provider: "edX", prefix: "Introduction to ", suffix: "" },
];

/// Picks which course template explains a missing skill
pub trait CourseSelector: Send {
    /// Index into [`COURSE_TEMPLATES`]
    fn select(&mut self, skill: &str) -> usize;
}

/// Uniform random choice; reproducible when seeded
pub struct RandomCourses {
    rng: StdRng,
}

impl RandomCourses {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl CourseSelector for RandomCourses {
    fn select(&mut self, _skill: &str) -> usize {
        self.rng.gen_range(0..COURSE_TEMPLATES.len())
    }
}

/// Same skill text always maps to the same template
#[derive(Debug, Default, Clone, Copy)]
pub struct StableCourses;

impl CourseSelector for StableCourses {
    fn select(&mut self, skill: &str) -> usize {
        let sum = skill
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        sum % COURSE_TEMPLATES.len()
    }
}

/// Build the selector named in configuration
pub fn selector_for(config: &RecommendationConfig) -> Box<dyn CourseSelector> {
    match config.strategy {
        CourseStrategy::Random => Box::new(RandomCourses::new(config.seed)),
        CourseStrategy::Stable => Box::new(StableCourses),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendation {
    pub skill: String,
    pub course: String,
    pub provider: String,
}

/// A missing skill that resembles something already on the resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearMiss {
    pub skill: String,
    pub resume_skill: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    /// Lower-cased, requirements first, then preferred skills
    pub missing_skills: Vec<String>,
    /// `recommendations[i]` explains `missing_skills[i]`
    pub recommendations: Vec<CourseRecommendation>,
    pub coverage_percent: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub near_misses: Vec<NearMiss>,
}

pub struct SkillGapAnalyzer<'a> {
    matcher: &'a dyn SkillMatcher,
    near_miss_threshold: f64,
}

impl<'a> SkillGapAnalyzer<'a> {
    pub fn new(matcher: &'a dyn SkillMatcher, near_miss_threshold: f64) -> Self {
        Self {
            matcher,
            near_miss_threshold,
        }
    }

    pub fn analyze(
        &self,
        resume: &Resume,
        job: &JobPosting,
        selector: &mut dyn CourseSelector,
    ) -> SkillGapResult {
        let resume_skills: Vec<String> = resume
            .skill_names()
            .map(|name| name.to_lowercase())
            .collect();
        let resume_refs: Vec<&str> = resume_skills.iter().map(|s| s.as_str()).collect();

        let desired: Vec<String> = job.desired_skills().map(|s| s.to_lowercase()).collect();

        let missing_skills: Vec<String> = desired
            .iter()
            .filter(|skill| !self.matcher.matches_any(&resume_refs, skill))
            .cloned()
            .collect();

        let recommendations = missing_skills
            .iter()
            .map(|skill| {
                let template = COURSE_TEMPLATES[selector.select(skill) % COURSE_TEMPLATES.len()];
                CourseRecommendation {
                    skill: skill.clone(),
                    course: template.title(skill),
                    provider: template.provider.to_string(),
                }
            })
            .collect();

        let coverage_percent = if desired.is_empty() {
            100
        } else {
            let present = desired.len() - missing_skills.len();
            (present as f64 * 100.0 / desired.len() as f64).round() as u8
        };

        let near_misses = missing_skills
            .iter()
            .filter_map(|skill| self.closest(skill, &resume_skills))
            .collect();

        SkillGapResult {
            missing_skills,
            recommendations,
            coverage_percent,
            near_misses,
        }
    }

    fn closest(&self, missing: &str, resume_skills: &[String]) -> Option<NearMiss> {
        resume_skills
            .iter()
            .map(|candidate| (candidate, jaro_winkler(missing, candidate)))
            .filter(|(_, similarity)| *similarity >= self.near_miss_threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, similarity)| NearMiss {
                skill: missing.to_string(),
                resume_skill: candidate.clone(),
                similarity,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Skill;
    use crate::processing::normalizer::{LooseContains, TokenAlias};

    fn resume_with(skills: &[&str]) -> Resume {
        let mut resume = Resume::new("Jane Doe", "jane@example.com");
        resume.skills = skills.iter().map(|s| Skill::new(*s)).collect();
        resume
    }

    #[test]
    fn test_single_missing_skill_lowercased() {
        let resume = resume_with(&["Node.js"]);
        let job = JobPosting::new("Backend", "Acme").with_requirements(["Node.js", "Express"]);

        for matcher in [&LooseContains as &dyn SkillMatcher, &TokenAlias::new()] {
            let analyzer = SkillGapAnalyzer::new(matcher, 0.85);
            let result = analyzer.analyze(&resume, &job, &mut RandomCourses::new(Some(1)));

            assert_eq!(result.missing_skills, vec!["express"]);
            assert_eq!(result.recommendations.len(), 1);
            assert_eq!(result.recommendations[0].skill, "express");
            assert_eq!(result.coverage_percent, 50);
        }
    }

    #[test]
    fn test_preferred_skills_follow_requirements() {
        let resume = resume_with(&["Rust"]);
        let job = JobPosting::new("Dev", "Acme")
            .with_requirements(["Go", "Rust"])
            .with_preferred_skills(["Docker", "Go"]);
        let matcher = TokenAlias::new();

        let result = SkillGapAnalyzer::new(&matcher, 0.85).analyze(&resume, &job, &mut StableCourses);
        assert_eq!(result.missing_skills, vec!["go", "docker", "go"]);
        assert_eq!(result.recommendations.len(), result.missing_skills.len());
        for (rec, skill) in result.recommendations.iter().zip(&result.missing_skills) {
            assert_eq!(&rec.skill, skill);
        }
    }

    #[test]
    fn test_case_insensitive_equal_skills_leave_no_gap() {
        let resume = resume_with(&["TypeScript", "GraphQL", "redis"]);
        let job = JobPosting::new("Dev", "Acme")
            .with_requirements(["typescript", "GRAPHQL"])
            .with_preferred_skills(["Redis"]);

        for matcher in [&LooseContains as &dyn SkillMatcher, &TokenAlias::new()] {
            let result = SkillGapAnalyzer::new(matcher, 0.85).analyze(&resume, &job, &mut StableCourses);
            assert!(result.missing_skills.is_empty());
            assert!(result.recommendations.is_empty());
            assert_eq!(result.coverage_percent, 100);
        }
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let resume = resume_with(&[]);
        let job = JobPosting::new("Dev", "Acme").with_requirements(["Go", "Kafka", "Terraform", "Helm"]);
        let matcher = TokenAlias::new();
        let analyzer = SkillGapAnalyzer::new(&matcher, 0.85);

        let first = analyzer.analyze(&resume, &job, &mut RandomCourses::new(Some(42)));
        let second = analyzer.analyze(&resume, &job, &mut RandomCourses::new(Some(42)));
        assert_eq!(first, second);
        assert_eq!(first.coverage_percent, 0);
    }

    #[test]
    fn test_course_titles_follow_templates() {
        let titles: Vec<String> = COURSE_TEMPLATES.iter().map(|t| t.title("express")).collect();
        assert_eq!(
            titles,
            vec![
                "Complete express Masterclass",
                "express for Professionals",
                "express Essential Training",
                "Introduction to express",
            ]
        );

        let mut stable = StableCourses;
        let picked = stable.select("express");
        assert_eq!(picked, stable.select("express"));
        assert!(picked < COURSE_TEMPLATES.len());
    }

    #[test]
    fn test_near_miss_reported_for_similar_skill() {
        let resume = resume_with(&["PostgresQL Admin", "Kubernetes"]);
        let job = JobPosting::new("Ops", "Acme").with_requirements(["Kubernets"]);
        let matcher = TokenAlias::new();

        let result = SkillGapAnalyzer::new(&matcher, 0.85).analyze(&resume, &job, &mut StableCourses);
        assert_eq!(result.missing_skills, vec!["kubernets"]);
        assert_eq!(result.near_misses.len(), 1);
        assert_eq!(result.near_misses[0].resume_skill, "kubernetes");
    }

    #[test]
    fn test_empty_job_has_full_coverage() {
        let matcher = LooseContains;
        let result = SkillGapAnalyzer::new(&matcher, 0.85).analyze(
            &resume_with(&["Go"]),
            &JobPosting::new("Dev", "Acme"),
            &mut StableCourses,
        );
        assert_eq!(result.coverage_percent, 100);
        assert!(result.missing_skills.is_empty());
    }
}
