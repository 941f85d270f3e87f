//! Resume insight: resume strength analysis with stored reports

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod rate_limit;
mod report;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, ReportAction};
use config::Config;
use error::{Result, ResumeInsightError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use processing::catalog::SkillCatalog;
use processing::scorer::ResumeScorer;
use processing::text_processor::{TextProcessor, PREVIEW_LEN};
use report::store::{JsonFileReportStore, MemoryReportStore, ReportStore};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            skills,
            user,
            output,
            save,
            no_store,
            detailed,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown", "doc", "docx"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            println!("🚀 Resume strength analysis");
            println!("📄 Resume: {}", resume.display());

            let mut input_manager = InputManager::new()
                .with_cache(config.extraction.enable_caching)
                .with_max_file_bytes(config.extraction.max_file_bytes);

            println!("\n📂 Extracting text...");
            let text = input_manager.extract_text(&resume).await?;
            println!(
                "📊 Extracted {} characters, {} words",
                text.len(),
                TextProcessor::word_count(&text)
            );

            let scorer = ResumeScorer::new();
            let analysis = match skills.as_deref() {
                Some(list) => {
                    let catalog = SkillCatalog::from_keywords(cli::parse_skill_list(list));
                    println!("🎯 Scoring against {} target skills", catalog.len());
                    scorer.analyze_with_catalog(&text, &catalog)
                }
                None => scorer.analyze(&text),
            };

            let preview = if detailed {
                Some(TextProcessor::preview(&text, PREVIEW_LEN))
            } else {
                None
            };

            let mut store = open_store(&config, no_store)?;
            let stored = store.insert(&user, analysis, preview)?;
            store.close()?;
            if !no_store {
                println!("💾 Stored report {} for user {}", stored.id, user);
            }

            let generator = ReportGenerator::new(config.output.color_output);
            let rendered = generator.format(&stored, &output_format)?;

            match save {
                Some(path) => {
                    generator.save_to_file(&rendered, &path)?;
                    println!("📝 Saved report to {}", path.display());
                }
                None => {
                    println!();
                    println!("{}", rendered);
                }
            }

            Ok(())
        }

        Commands::Reports { action } => run_report_command(action, config),

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeInsightError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::reset()?;
                    println!("✅ Configuration reset to defaults");
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path().display());
                }
            }
            Ok(())
        }
    }
}

fn run_report_command(action: ReportAction, config: Config) -> Result<()> {
    let store = JsonFileReportStore::open(&config.storage.reports_path)?;
    let generator = ReportGenerator::new(config.output.color_output);

    match action {
        ReportAction::List { user } => {
            let reports = store.list_for_user(&user)?;
            if reports.is_empty() {
                println!("No reports stored for user {}", user);
                return Ok(());
            }

            println!("📋 {} report(s) for user {}:", reports.len(), user);
            for report in reports {
                println!(
                    "  {}  {}  overall {:>3}/100",
                    report.id,
                    report.created_at.format("%Y-%m-%d %H:%M"),
                    report.scores.overall
                );
            }
            Ok(())
        }

        ReportAction::Show { id, output } => {
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;
            let report = store
                .get(&id)?
                .ok_or(ResumeInsightError::ReportNotFound(id))?;

            println!("{}", generator.format(&report, &output_format)?);
            Ok(())
        }

        ReportAction::Export { id, output, save } => {
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;
            let report = store
                .get(&id)?
                .ok_or(ResumeInsightError::ReportNotFound(id))?;

            let rendered = generator.format(&report, &output_format)?;
            generator.save_to_file(&rendered, &save)?;
            println!("📝 Exported report to {}", save.display());
            Ok(())
        }
    }
}

/// Pick the persistent store, or a throwaway one for --no-store runs.
fn open_store(config: &Config, no_store: bool) -> Result<Box<dyn ReportStore>> {
    if no_store {
        Ok(Box::new(MemoryReportStore::new()))
    } else {
        Ok(Box::new(JsonFileReportStore::open(
            &config.storage.reports_path,
        )?))
    }
}
