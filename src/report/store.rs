//! Report persistence
//!
//! Stores are injected by the caller and carry an explicit lifecycle: open,
//! use, close. There is no process-wide singleton.

use crate::error::{Result, ResumeInsightError};
use crate::processing::scorer::AnalysisResult;
use crate::report::AnalysisReport;
use chrono::Utc;
use log::{debug, info};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub trait ReportStore {
    /// Persist an analysis for a user. The store assigns the report id and
    /// creation timestamp and returns the full record.
    fn insert(
        &mut self,
        user_id: &str,
        analysis: AnalysisResult,
        text_preview: Option<String>,
    ) -> Result<AnalysisReport>;

    fn get(&self, id: &str) -> Result<Option<AnalysisReport>>;

    /// All reports for a user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisReport>>;

    /// Flush and release the store. Further use after close is a caller bug.
    fn close(&mut self) -> Result<()>;
}

/// Volatile store for tests and embedding callers that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    // insertion order; listing reverses it
    reports: Vec<AnalysisReport>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    fn push(&mut self, user_id: &str, analysis: AnalysisResult, text_preview: Option<String>) -> AnalysisReport {
        let report = AnalysisReport::new(
            Uuid::new_v4().to_string(),
            user_id.to_string(),
            Utc::now(),
            analysis,
            text_preview,
        );
        self.reports.push(report.clone());
        report
    }
}

impl ReportStore for MemoryReportStore {
    fn insert(
        &mut self,
        user_id: &str,
        analysis: AnalysisResult,
        text_preview: Option<String>,
    ) -> Result<AnalysisReport> {
        Ok(self.push(user_id, analysis, text_preview))
    }

    fn get(&self, id: &str) -> Result<Option<AnalysisReport>> {
        Ok(self.reports.iter().find(|r| r.id == id).cloned())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisReport>> {
        Ok(self
            .reports
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// File-backed store so separate CLI runs see each other's reports.
/// The whole report list is a single JSON document; open loads it, insert
/// writes through, close flushes once more.
pub struct JsonFileReportStore {
    path: PathBuf,
    inner: MemoryReportStore,
    dirty: bool,
}

impl JsonFileReportStore {
    pub fn open(path: &Path) -> Result<Self> {
        let inner = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let reports: Vec<AnalysisReport> = serde_json::from_str(&content).map_err(|e| {
                ResumeInsightError::Storage(format!(
                    "Failed to parse report store '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            debug!("Loaded {} reports from {}", reports.len(), path.display());
            MemoryReportStore { reports }
        } else {
            MemoryReportStore::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.inner.reports)?;
        std::fs::write(&self.path, content)?;
        self.dirty = false;
        Ok(())
    }
}

impl ReportStore for JsonFileReportStore {
    fn insert(
        &mut self,
        user_id: &str,
        analysis: AnalysisResult,
        text_preview: Option<String>,
    ) -> Result<AnalysisReport> {
        let report = self.inner.push(user_id, analysis, text_preview);
        self.dirty = true;
        self.flush()?;
        info!("Stored report {} for user {}", report.id, user_id);
        Ok(report)
    }

    fn get(&self, id: &str) -> Result<Option<AnalysisReport>> {
        self.inner.get(id)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<AnalysisReport>> {
        self.inner.list_for_user(user_id)
    }

    fn close(&mut self) -> Result<()> {
        self.flush()
    }
}
