//! CLI interface for resume insight

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-insight")]
#[command(about = "Resume strength analysis tool")]
#[command(
    long_about = "Score a resume for skills coverage, experience relevance, ATS readiness and impact, store the analysis reports per user, and export them"
)]
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
    /// Analyze a resume file and store the report
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Comma-separated target skills; defaults to the built-in catalog
        #[arg(short, long)]
        skills: Option<String>,

        /// User the report belongs to
        #[arg(short, long, default_value = "local")]
        user: String,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Skip storing the report
        #[arg(long)]
        no_store: bool,

        /// Include a preview of the extracted text in the stored report
        #[arg(short, long)]
        detailed: bool,
    },

    /// Stored report commands
    Reports {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// List a user's reports, newest first
    List {
        /// User to list reports for
        #[arg(short, long, default_value = "local")]
        user: String,
    },

    /// Show a single report
    Show {
        /// Report id
        id: String,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Export a report to a file
    Export {
        /// Report id
        id: String,

        /// Output format: json, markdown, html
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Destination file
        #[arg(short, long)]
        save: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
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

/// Split a comma-separated skill list into keywords
pub fn parse_skill_list(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
