//! Report structures combining match, gap and critique results

use crate::config::{CourseStrategy, MatchMode};
use crate::model::Resume;
use crate::processing::critique::Suggestion;
use crate::processing::gaps::SkillGapResult;
use crate::processing::scorer::{MatchLabel, MatchResult};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything one analysis run produced for a resume and its postings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Who was analyzed
    pub candidate: CandidateSummary,

    /// Resume improvement suggestions, in rule order
    pub suggestions: Vec<Suggestion>,

    /// Per-posting results, best score first
    pub job_reports: Vec<JobReport>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub name: String,
    pub email: String,
    pub skill_count: usize,
    pub experience_count: usize,
    pub education_count: usize,
    pub skill_groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReport {
    /// 1-based position after ranking
    pub rank: usize,
    pub title: String,
    pub company: String,
    pub match_result: MatchResult,
    pub gaps: SkillGapResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the analyzer used
    pub analyzer_version: String,

    /// Where the resume came from (file path or "sample")
    pub resume_source: String,

    /// Where the postings came from
    pub job_sources: Vec<String>,

    /// Total processing time
    pub processing_time_ms: u64,

    pub match_mode: MatchMode,
    pub course_strategy: CourseStrategy,
    pub seed: Option<u64>,
}

impl CandidateSummary {
    pub fn from_resume(resume: &Resume) -> Self {
        let skill_groups = resume
            .skills_by_category()
            .into_iter()
            .map(|(category, skills)| SkillGroup {
                category,
                skills: skills.into_iter().map(|s| s.name.clone()).collect(),
            })
            .collect();

        Self {
            name: resume.name.clone(),
            email: resume.email.clone(),
            skill_count: resume.skills.len(),
            experience_count: resume.experience.len(),
            education_count: resume.education.len(),
            skill_groups,
        }
    }
}

impl ReportMetadata {
    pub fn new(match_mode: MatchMode, course_strategy: CourseStrategy, seed: Option<u64>) -> Self {
        Self {
            generated_at: SystemTime::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: String::new(),
            job_sources: Vec::new(),
            processing_time_ms: 0,
            match_mode,
            course_strategy,
            seed,
        }
    }
}

impl JobReport {
    pub fn label(&self) -> MatchLabel {
        self.match_result.label
    }
}

impl AnalysisReport {
    pub fn with_sources(mut self, resume_source: impl Into<String>, job_sources: Vec<String>) -> Self {
        self.metadata.resume_source = resume_source.into();
        self.metadata.job_sources = job_sources;
        self
    }

    pub fn best_match(&self) -> Option<&JobReport> {
        self.job_reports.first()
    }

    /// One-line summary of the strongest posting
    pub fn verdict(&self) -> String {
        match self.best_match() {
            Some(best) => format!(
                "Best fit: {} at {} ({}%, {})",
                best.title,
                best.company,
                best.match_result.score,
                best.label()
            ),
            None => "No job postings were analyzed".to_string(),
        }
    }
}
