//! Configuration management for resume insight
//!
//! Scoring weights, thresholds, and catalogs are design constants and are
//! deliberately not configurable; see the scoring module.

use crate::error::{Result, ResumeInsightError};
use crate::input::manager::DEFAULT_MAX_FILE_BYTES;
use crate::rate_limit::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub rate_limit: RateLimitConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Upload size cap in bytes; larger resumes are rejected before parsing.
    pub max_file_bytes: u64,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub window_secs: i64,
    pub max_requests: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where the JSON report store lives.
    pub reports_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        let reports_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resume-insight")
            .join("reports.json");

        Self {
            extraction: ExtractionConfig {
                max_file_bytes: DEFAULT_MAX_FILE_BYTES,
                enable_caching: true,
            },
            rate_limit: RateLimitConfig {
                window_secs: DEFAULT_WINDOW_SECS,
                max_requests: DEFAULT_MAX_REQUESTS,
            },
            storage: StorageConfig { reports_path },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the given path, or from the default location, creating the
    /// default file on first use.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeInsightError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else if path.is_some() {
            Err(ResumeInsightError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeInsightError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-insight")
            .join("config.toml")
    }

    pub fn reset() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }
}
