//! Analysis engine coordinating scoring, gap analysis and critique

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::model::{JobPosting, Resume};
use crate::output::report::{AnalysisReport, CandidateSummary, JobReport, ReportMetadata};
use crate::processing::critique::{CritiqueEngine, Suggestion};
use crate::processing::gaps::{selector_for, CourseSelector, SkillGapAnalyzer, SkillGapResult};
use crate::processing::normalizer::{matcher_for, SkillMatcher};
use crate::processing::scorer::{MatchResult, MatchScorer};
use log::{debug, info};
use std::time::Instant;

/// Main analysis engine; each call works only on its arguments
pub struct AnalysisEngine {
    matcher: Box<dyn SkillMatcher>,
    critique_engine: CritiqueEngine,
    course_selector: Box<dyn CourseSelector>,
    config: Config,
}

/// One posting's score, tagged with its position in the input list
#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub job_index: usize,
    pub result: MatchResult,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let matcher = matcher_for(config.matching.mode);
        let critique_engine = CritiqueEngine::new(config.critique.clone())?;
        let course_selector = selector_for(&config.recommendations);

        debug!(
            "Analysis engine ready (match mode: {:?}, courses: {:?})",
            config.matching.mode, config.recommendations.strategy
        );

        Ok(Self {
            matcher,
            critique_engine,
            course_selector,
            config: config.clone(),
        })
    }

    /// Swap the course selector, e.g. for a seeded run
    pub fn with_course_selector(mut self, selector: Box<dyn CourseSelector>) -> Self {
        self.course_selector = selector;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self, resume: &Resume, job: &JobPosting) -> MatchResult {
        MatchScorer::new(self.matcher.as_ref(), self.config.scoring.clone()).score(resume, job)
    }

    pub fn skill_gaps(&mut self, resume: &Resume, job: &JobPosting) -> SkillGapResult {
        let analyzer = SkillGapAnalyzer::new(
            self.matcher.as_ref(),
            self.config.recommendations.near_miss_threshold,
        );
        analyzer.analyze(resume, job, self.course_selector.as_mut())
    }

    pub fn critique(&self, resume: &Resume) -> Vec<Suggestion> {
        self.critique_engine.critique(resume)
    }

    /// Score every posting, best first; ties keep input order
    pub fn rank(&self, resume: &Resume, jobs: &[JobPosting]) -> Vec<RankedMatch> {
        let mut ranked: Vec<RankedMatch> = jobs
            .iter()
            .enumerate()
            .map(|(job_index, job)| RankedMatch {
                job_index,
                result: self.score(resume, job),
            })
            .collect();

        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked
    }

    /// Validate inputs, then critique the resume and score and gap-check every posting
    pub fn analyze(&mut self, resume: &Resume, jobs: &[JobPosting]) -> Result<AnalysisReport> {
        let start_time = Instant::now();

        resume.validate()?;
        for (index, job) in jobs.iter().enumerate() {
            job.validate().map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("job posting #{}: {}", index + 1, e))
            })?;
        }

        info!(
            "Analyzing resume of {} against {} job posting(s)",
            resume.name,
            jobs.len()
        );

        let suggestions = self.critique(resume);
        let ranked = self.rank(resume, jobs);

        let mut job_reports = Vec::with_capacity(ranked.len());
        for (position, ranked_match) in ranked.into_iter().enumerate() {
            let job = &jobs[ranked_match.job_index];
            let gaps = self.skill_gaps(resume, job);
            debug!(
                "{}: score {} with {} missing skill(s)",
                job.label(),
                ranked_match.result.score,
                gaps.missing_skills.len()
            );

            job_reports.push(JobReport {
                rank: position + 1,
                title: job.title.clone(),
                company: job.company.clone(),
                match_result: ranked_match.result,
                gaps,
            });
        }

        let mut metadata = ReportMetadata::new(
            self.config.matching.mode,
            self.config.recommendations.strategy,
            self.config.recommendations.seed,
        );
        metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;

        Ok(AnalysisReport {
            candidate: CandidateSummary::from_resume(resume),
            suggestions,
            job_reports,
            metadata,
        })
    }
}
