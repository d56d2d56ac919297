//! Resume analyzer: match a parsed resume against job postings

use clap::Parser;
use log::{error, info, warn};
use resume_analyzer::catalog::{sample_job_postings, sample_resume};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::input::InputManager;
use resume_analyzer::model::{JobPosting, Resume};
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator, ReportView};
use resume_analyzer::output::report::AnalysisReport;
use resume_analyzer::processing::analyzer::AnalysisEngine;
use resume_analyzer::{Result, ResumeAnalyzerError};
use std::path::{Path, PathBuf};
use std::process;

const INPUT_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

/// Options shared by every reporting command
struct ReportRequest {
    view: ReportView,
    output: Option<String>,
    detailed: bool,
    save: Option<PathBuf>,
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Match { resume, job, detailed, output, save } => {
            let mut input_manager = InputManager::new();
            let (resume_record, jobs) = load_inputs(&mut input_manager, &resume, &job).await?;
            let report = run_analysis(&config, &resume_record, &jobs)?
                .with_sources(source_name(&resume), sources(&job));
            emit(&config, &report, ReportRequest { view: ReportView::Matches, output, detailed, save })?;
        }

        Commands::Gaps { resume, job, seed, detailed, output, save } => {
            if seed.is_some() {
                config.recommendations.seed = seed;
            }
            let mut input_manager = InputManager::new();
            let (resume_record, jobs) = load_inputs(&mut input_manager, &resume, &job).await?;
            let report = run_analysis(&config, &resume_record, &jobs)?
                .with_sources(source_name(&resume), sources(&job));
            emit(&config, &report, ReportRequest { view: ReportView::Gaps, output, detailed, save })?;
        }

        Commands::Critique { resume, output } => {
            let mut input_manager = InputManager::new();
            let (resume_record, _) = load_inputs(&mut input_manager, &resume, &[]).await?;
            let report = run_analysis(&config, &resume_record, &[])?
                .with_sources(source_name(&resume), Vec::new());
            emit(
                &config,
                &report,
                ReportRequest { view: ReportView::Critique, output, detailed: false, save: None },
            )?;
        }

        Commands::Analyze { resume, job, sample_jobs, detailed, output, save, seed } => {
            if seed.is_some() {
                config.recommendations.seed = seed;
            }
            let mut input_manager = InputManager::new();
            let (resume_record, mut jobs) = load_inputs(&mut input_manager, &resume, &job).await?;

            let mut job_sources = sources(&job);
            if sample_jobs {
                jobs.extend(sample_job_postings());
                job_sources.push("sample".to_string());
            }
            if jobs.is_empty() {
                warn!("No job postings given; only the resume critique will be reported");
            }

            let report = run_analysis(&config, &resume_record, &jobs)?
                .with_sources(source_name(&resume), job_sources);
            emit(&config, &report, ReportRequest { view: ReportView::Full, output, detailed, save })?;
        }

        Commands::Jobs => {
            println!("💼 Sample Job Postings\n");
            for (i, job) in sample_job_postings().iter().enumerate() {
                println!("{}. {}", i + 1, job.label());
                println!("   {}", job.description);
                println!("   Requirements: {}", job.requirements.join(", "));
                if !job.preferred().is_empty() {
                    println!("   Preferred: {}", job.preferred().join(", "));
                }
                println!();
            }
        }

        Commands::Demo { output, seed } => {
            if seed.is_some() {
                config.recommendations.seed = seed;
            }
            info!("Running demo analysis on the built-in sample data");
            let report = run_analysis(&config, &sample_resume(), &sample_job_postings())?
                .with_sources("sample", vec!["sample".to_string()]);
            emit(&config, &report, ReportRequest { view: ReportView::Full, output, detailed: true, save: None })?;
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

async fn load_inputs(
    input_manager: &mut InputManager,
    resume: &Path,
    jobs: &[PathBuf],
) -> Result<(Resume, Vec<JobPosting>)> {
    cli::validate_file_extension(resume, INPUT_EXTENSIONS)
        .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
    for job in jobs {
        cli::validate_file_extension(job, INPUT_EXTENSIONS)
            .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Job posting file: {}", e)))?;
    }

    let resume_record = input_manager.load_resume(resume).await?;
    let job_records = input_manager.load_all_jobs(jobs).await?;
    Ok((resume_record, job_records))
}

fn run_analysis(config: &Config, resume: &Resume, jobs: &[JobPosting]) -> Result<AnalysisReport> {
    let mut engine = AnalysisEngine::new(config)?;
    engine.analyze(resume, jobs)
}

fn emit(config: &Config, report: &AnalysisReport, request: ReportRequest) -> Result<()> {
    let format = match &request.output {
        Some(output) => cli::parse_output_format(output).map_err(ResumeAnalyzerError::InvalidInput)?,
        None => config.output.format,
    };

    // Saved files stay plain text
    let use_colors = config.output.color_output && request.save.is_none();
    let detailed = request.detailed || config.output.detailed;
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
    let content = generator.generate_report(report, &format, request.view)?;

    match &request.save {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(suggest_filename(&format, &report.metadata.resume_source, true))
            } else {
                path.clone()
            };
            save_report_to_file(&content, &target)?;
            println!("💾 Report saved to {}", target.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

fn source_name(path: &Path) -> String {
    path.display().to_string()
}

fn sources(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| source_name(p)).collect()
}
