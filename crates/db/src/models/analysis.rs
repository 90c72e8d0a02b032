//! Scored-analysis entity model and DTOs.

use clarity_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `analyses` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Analysis {
    pub id: DbId,
    pub submission_id: DbId,
    pub positioning_score: i32,
    pub icp_score: i32,
    pub differentiation_score: i32,
    pub pricing_score: i32,
    pub competitors: serde_json::Value,
    pub suggestions: serde_json::Value,
    pub full_report: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for creating an analysis row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalysis {
    pub positioning_score: i32,
    pub icp_score: i32,
    pub differentiation_score: i32,
    pub pricing_score: i32,
    pub competitors: serde_json::Value,
    pub suggestions: serde_json::Value,
    pub full_report: serde_json::Value,
}

/// Positioning and ICP scores of a parent submission's latest analysis,
/// fed back into the next iteration's prompt.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct PreviousScores {
    pub positioning_score: i32,
    pub icp_score: i32,
}
