//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(version)]
#[command(about = "Score a parsed resume against job postings")]
#[command(long_about = "Match a structured resume against job postings, list missing skills with course \
suggestions, and critique the resume itself")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank job postings by match score
    Match {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job posting files (JSON, TOML); repeat for several
        #[arg(short, long, required = true, num_args = 1..)]
        job: Vec<PathBuf>,

        /// Show score breakdown and matched requirements
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List missing skills with course recommendations
    Gaps {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job posting files (JSON, TOML)
        #[arg(short, long, required = true, num_args = 1..)]
        job: Vec<PathBuf>,

        /// Seed for course selection
        #[arg(long)]
        seed: Option<u64>,

        /// Show near-miss hints
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Suggest improvements to the resume itself
    Critique {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Full report: critique, ranked matches and skill gaps
    Analyze {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job posting files (JSON, TOML)
        #[arg(short, long, num_args = 1..)]
        job: Vec<PathBuf>,

        /// Include the built-in sample job catalog
        #[arg(long)]
        sample_jobs: bool,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seed for course selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the built-in sample job postings
    Jobs,

    /// Analyze the sample resume against the sample job postings
    Demo {
        /// Output format: console, json, markdown, html (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for course selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
