//! Peer-review models.

use clarity_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table: one peer's four answers about one
/// target submission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub pod_id: DbId,
    pub submission_id: DbId,
    pub reviewer_id: DbId,
    pub question_1: String,
    pub question_2: String,
    pub question_3: String,
    pub question_4: String,
    pub created_at: Timestamp,
}

/// DTO for submitting a review. The reviewer comes from the auth context.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub pod_id: DbId,
    pub submission_id: DbId,
    pub question_1: String,
    pub question_2: String,
    pub question_3: String,
    pub question_4: String,
}

/// A pod-mate submission the caller has not reviewed yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingReview {
    pub pod_member_id: DbId,
    pub pod_id: DbId,
    pub submission_id: DbId,
    pub landing_page_url: Option<String>,
    pub stage: String,
    pub value_prop: String,
}
