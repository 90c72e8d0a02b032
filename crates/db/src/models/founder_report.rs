//! Founder-report and execution-task models.

use clarity_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `founder_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FounderReport {
    pub id: DbId,
    pub submission_id: DbId,
    pub positioning_verdict: String,
    pub brutal_truth: String,
    pub focus_areas: serde_json::Value,
    pub ignore_areas: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for creating a founder report with its execution plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFounderReport {
    pub positioning_verdict: String,
    pub brutal_truth: String,
    pub focus_areas: serde_json::Value,
    pub ignore_areas: serde_json::Value,
    /// (day, description) pairs; one execution_tasks row each.
    pub plan: Vec<(i32, String)>,
}

/// A row from the `execution_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExecutionTask {
    pub id: DbId,
    pub report_id: DbId,
    pub day: i32,
    pub description: String,
}

/// An execution task joined with one user's progress status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskWithProgress {
    pub id: DbId,
    pub report_id: DbId,
    pub day: i32,
    pub description: String,
    pub status: Option<String>,
}
