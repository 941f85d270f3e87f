//! Resume insight library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod rate_limit;
pub mod report;
pub mod output;

pub use error::{Result, ResumeInsightError};
pub use config::Config;
pub use processing::scorer::{AnalysisResult, ResumeScorer, Scores};
