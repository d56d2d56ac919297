//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::{AnalysisReport, JobReport};
use crate::processing::critique::Suggestion;
use crate::processing::gaps::CourseRecommendation;
use crate::processing::scorer::MatchLabel;
use askama::Template;
use colored::{Color, Colorize};
use serde_json::json;
use std::path::Path;

/// Which parts of a report a command asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    Full,
    Matches,
    Gaps,
    Critique,
}

impl ReportView {
    fn shows_suggestions(self) -> bool {
        matches!(self, ReportView::Full | ReportView::Critique)
    }

    fn shows_matches(self) -> bool {
        matches!(self, ReportView::Full | ReportView::Matches)
    }

    fn shows_gaps(self) -> bool {
        matches!(self, ReportView::Full | ReportView::Gaps)
    }
}

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport, view: ReportView) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

fn generated_at(report: &AnalysisReport) -> String {
    chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn label_color(label: MatchLabel) -> Color {
    match label {
        MatchLabel::Strong => Color::Green,
        MatchLabel::Good => Color::Yellow,
        MatchLabel::Potential => Color::BrightYellow,
        MatchLabel::Low => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, job: &JobReport) -> String {
        let label = job.label();
        if self.use_colors {
            format!("[{}]", label.to_string().color(label_color(label)).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_match(&self, job: &JobReport, output: &mut String) {
        let result = &job.match_result;
        output.push_str(&format!(
            "{}. {} @ {}: {}% {}\n",
            job.rank,
            job.title,
            job.company,
            result.score,
            self.format_score_badge(job)
        ));

        if self.detailed {
            output.push_str(&format!(
                "   Skills: {:.1} | Experience: {:.1} | Baseline: {:.1}\n",
                result.breakdown.skill_component,
                result.breakdown.experience_component,
                result.breakdown.baseline
            ));
            if !result.matched_requirements.is_empty() {
                output.push_str(&format!(
                    "   {} {}\n",
                    self.colorize("✓", Color::Green),
                    result.matched_requirements.join(", ")
                ));
            }
            if !result.unmatched_requirements.is_empty() {
                output.push_str(&format!(
                    "   {} {}\n",
                    self.colorize("✗", Color::Red),
                    result.unmatched_requirements.join(", ")
                ));
            }
        }
    }

    fn format_gaps(&self, job: &JobReport, output: &mut String) {
        let gaps = &job.gaps;
        output.push_str(&format!(
            "{} @ {}: {}% skill coverage\n",
            job.title, job.company, gaps.coverage_percent
        ));

        if gaps.missing_skills.is_empty() {
            output.push_str(&format!("   {}\n", self.colorize("No missing skills", Color::Green)));
            return;
        }

        for rec in &gaps.recommendations {
            output.push_str(&format!(
                "   • {}: {} ({})\n",
                self.colorize(&rec.skill, Color::Red),
                rec.course,
                rec.provider
            ));
        }

        if self.detailed {
            for near in &gaps.near_misses {
                output.push_str(&format!(
                    "   💡 '{}' resembles your '{}' ({:.0}% similar)\n",
                    near.skill,
                    near.resume_skill,
                    near.similarity * 100.0
                ));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport, view: ReportView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            generated_at(report),
            report.metadata.processing_time_ms
        ));

        let candidate = &report.candidate;
        output.push_str(&format!(
            "Candidate: {} <{}> | {} skills, {} roles, {} education entries\n",
            candidate.name,
            candidate.email,
            candidate.skill_count,
            candidate.experience_count,
            candidate.education_count
        ));

        if self.detailed && !candidate.skill_groups.is_empty() {
            output.push_str(&self.format_header("Skills by Category", 3));
            for group in &candidate.skill_groups {
                output.push_str(&format!("  {}: {}\n", group.category, group.skills.join(", ")));
            }
        }

        if view.shows_suggestions() {
            output.push_str(&self.format_header("Resume Suggestions", 2));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion.message));
            }
        }

        if view.shows_matches() && !report.job_reports.is_empty() {
            output.push_str(&self.format_header("Job Matches", 2));
            for job in &report.job_reports {
                self.format_match(job, &mut output);
            }
        }

        if view.shows_gaps() && !report.job_reports.is_empty() {
            output.push_str(&self.format_header("Skill Gaps", 2));
            for job in &report.job_reports {
                self.format_gaps(job, &mut output);
            }
        }

        if view.shows_matches() {
            output.push_str(&format!("\n{}\n", self.colorize(&report.verdict(), Color::Cyan)));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport, view: ReportView) -> Result<String> {
        let value = match view {
            ReportView::Full => serde_json::to_value(report)?,
            ReportView::Critique => json!({
                "candidate": report.candidate.name,
                "suggestions": report.suggestions,
            }),
            ReportView::Matches => json!(report
                .job_reports
                .iter()
                .map(|job| json!({
                    "rank": job.rank,
                    "title": job.title,
                    "company": job.company,
                    "match": job.match_result,
                }))
                .collect::<Vec<_>>()),
            ReportView::Gaps => json!(report
                .job_reports
                .iter()
                .map(|job| json!({
                    "title": job.title,
                    "company": job.company,
                    "gaps": job.gaps,
                }))
                .collect::<Vec<_>>()),
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_badge(label: MatchLabel) -> &'static str {
        match label {
            MatchLabel::Strong => "🟢",
            MatchLabel::Good => "🟡",
            MatchLabel::Potential => "🟠",
            MatchLabel::Low => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport, view: ReportView) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 📊 Resume Analysis: {}\n\n", report.candidate.name));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Matching:** {:?}\n\n",
                generated_at(report),
                report.metadata.processing_time_ms,
                report.metadata.match_mode
            ));
        }

        if view.shows_suggestions() {
            output.push_str("## Resume Suggestions\n\n");
            for suggestion in &report.suggestions {
                output.push_str(&format!("- {}\n", suggestion.message));
            }
            output.push('\n');
        }

        if view.shows_matches() && !report.job_reports.is_empty() {
            output.push_str("## Job Matches\n\n");
            output.push_str("| Rank | Position | Company | Score | Match |\n");
            output.push_str("|------|----------|---------|-------|-------|\n");
            for job in &report.job_reports {
                output.push_str(&format!(
                    "| {} | {} | {} | {}% | {} {} |\n",
                    job.rank,
                    job.title,
                    job.company,
                    job.match_result.score,
                    Self::markdown_badge(job.label()),
                    job.label()
                ));
            }
            output.push_str(&format!("\n**Verdict:** {}\n\n", report.verdict()));
        }

        if view.shows_gaps() && !report.job_reports.is_empty() {
            output.push_str("## Skill Gaps\n\n");
            for job in &report.job_reports {
                output.push_str(&format!(
                    "### {} @ {} ({}% coverage)\n\n",
                    job.title, job.company, job.gaps.coverage_percent
                ));
                if job.gaps.recommendations.is_empty() {
                    output.push_str("No missing skills.\n\n");
                    continue;
                }
                for rec in &job.gaps.recommendations {
                    output.push_str(&format!("- **{}**: {} *({})*\n", rec.skill, rec.course, rec.provider));
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// One ranked posting as the HTML template shows it
struct HtmlJobRow<'a> {
    rank: usize,
    title: &'a str,
    company: &'a str,
    score: u8,
    label: MatchLabel,
    label_class: &'static str,
    coverage: u8,
    recommendations: &'a [CourseRecommendation],
}

impl<'a> HtmlJobRow<'a> {
    fn from_report(job: &'a JobReport) -> Self {
        let label_class = match job.label() {
            MatchLabel::Strong => "label-strong",
            MatchLabel::Good => "label-good",
            MatchLabel::Potential => "label-potential",
            MatchLabel::Low => "label-low",
        };

        Self {
            rank: job.rank,
            title: &job.title,
            company: &job.company,
            score: job.match_result.score,
            label: job.label(),
            label_class,
            coverage: job.gaps.coverage_percent,
            recommendations: &job.gaps.recommendations,
        }
    }
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { text-align: left; padding: 6px 10px; border-bottom: 1px solid #e9ecef; }
        .label-strong { color: #28a745; } .label-good { color: #b8860b; }
        .label-potential { color: #fd7e14; } .label-low { color: #dc3545; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>📊 Resume Analysis: {{ candidate }}</h1>
        <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        {% if show_suggestions %}
        <div class="section">
            <h2>Resume Suggestions</h2>
            <ul>
            {% for suggestion in suggestions %}
                <li>{{ suggestion.message }}</li>
            {% endfor %}
            </ul>
        </div>
        {% endif %}
        {% if show_matches %}
        <div class="section">
            <h2>Job Matches</h2>
            <table>
                <tr><th>#</th><th>Position</th><th>Company</th><th>Score</th><th>Match</th></tr>
            {% for job in jobs %}
                <tr><td>{{ job.rank }}</td><td>{{ job.title }}</td><td>{{ job.company }}</td><td>{{ job.score }}%</td><td class="{{ job.label_class }}">{{ job.label }}</td></tr>
            {% endfor %}
            </table>
            <p><strong>{{ verdict }}</strong></p>
        </div>
        {% endif %}
        {% if show_gaps %}
        <div class="section">
            <h2>Skill Gaps</h2>
            {% for job in jobs %}
            <h3>{{ job.title }} @ {{ job.company }} ({{ job.coverage }}% coverage)</h3>
            <ul>
            {% for rec in job.recommendations %}
                <li><strong>{{ rec.skill }}</strong>: {{ rec.course }} <em>({{ rec.provider }})</em></li>
            {% endfor %}
            </ul>
            {% endfor %}
        </div>
        {% endif %}
        <div class="metadata">
            <p>Generated by Resume Analyzer v{{ version }} ({{ match_mode }} matching)</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    candidate: &'a str,
    generated_at: String,
    processing_time: u64,
    show_suggestions: bool,
    show_matches: bool,
    show_gaps: bool,
    suggestions: &'a [Suggestion],
    jobs: Vec<HtmlJobRow<'a>>,
    verdict: String,
    version: &'a str,
    match_mode: String,
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data<'a>(&self, report: &'a AnalysisReport, view: ReportView) -> HtmlTemplate<'a> {
        HtmlTemplate {
            include_styles: self.include_styles,
            candidate: &report.candidate.name,
            generated_at: generated_at(report),
            processing_time: report.metadata.processing_time_ms,
            show_suggestions: view.shows_suggestions(),
            show_matches: view.shows_matches() && !report.job_reports.is_empty(),
            show_gaps: view.shows_gaps() && !report.job_reports.is_empty(),
            suggestions: &report.suggestions,
            jobs: report.job_reports.iter().map(HtmlJobRow::from_report).collect(),
            verdict: report.verdict(),
            version: &report.metadata.analyzer_version,
            match_mode: format!("{:?}", report.metadata.match_mode).to_lowercase(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport, view: ReportView) -> Result<String> {
        self.create_template_data(report, view)
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat, view: ReportView) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report, view),
            OutputFormat::Json => self.json_formatter.format_report(report, view),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report, view),
            OutputFormat::Html => self.html_formatter.format_report(report, view),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
