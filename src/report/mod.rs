//! Analysis report records and their storage

pub mod store;

use crate::processing::scorer::{AnalysisResult, Scores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted analysis, owned by a user. The store assigns `id` and
/// `created_at`; everything else comes from the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub scores: Scores,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
}

impl AnalysisReport {
    pub fn new(
        id: String,
        user_id: String,
        created_at: DateTime<Utc>,
        analysis: AnalysisResult,
        text_preview: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            created_at,
            scores: analysis.scores,
            missing_skills: analysis.missing_skills,
            recommendations: analysis.recommendations,
            text_preview,
        }
    }
}
