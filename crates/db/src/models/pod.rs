//! Review-pod and membership models.

use clarity_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Pod is accepting/awaiting reviews.
pub const POD_STATUS_ACTIVE: &str = "active";

/// Pod has finished its review cycle.
pub const POD_STATUS_CLOSED: &str = "closed";

/// A row from the `review_pods` table. Members are fixed at creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewPod {
    pub id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}

/// A row from the `pod_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PodMember {
    pub id: DbId,
    pub pod_id: DbId,
    pub submission_id: DbId,
    pub user_id: DbId,
    pub reviews_completed: i32,
}

/// A membership joined with the submission summary a reviewer needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PodMemberContext {
    pub id: DbId,
    pub pod_id: DbId,
    pub submission_id: DbId,
    pub user_id: DbId,
    pub landing_page_url: Option<String>,
    pub target_customer: String,
    pub value_prop: String,
}
