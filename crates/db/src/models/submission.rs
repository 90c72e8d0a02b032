//! Submission entity model and DTOs.

use clarity_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub user_id: DbId,
    pub parent_id: Option<DbId>,
    pub landing_page_url: Option<String>,
    pub target_customer: String,
    pub value_prop: String,
    pub stage: String,
    pub product_type: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    pub user_id: DbId,
    pub parent_id: Option<DbId>,
    pub landing_page_url: Option<String>,
    pub target_customer: String,
    pub value_prop: String,
    pub stage: String,
    pub product_type: Option<String>,
    /// Lifecycle status at insert. The analyze flow writes `analyzed`
    /// because the report is persisted in the same transaction.
    pub status: String,
}

/// One dashboard row: a submission joined with its latest analysis scores,
/// the owner's pod counter, and founder-report presence.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubmissionOverview {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub landing_page_url: Option<String>,
    pub target_customer: String,
    pub value_prop: String,
    pub stage: String,
    pub product_type: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub analysis_id: Option<DbId>,
    pub positioning_score: Option<i32>,
    pub icp_score: Option<i32>,
    pub differentiation_score: Option<i32>,
    pub pricing_score: Option<i32>,
    pub founder_report_id: Option<DbId>,
    pub reviews_completed: Option<i32>,
}
