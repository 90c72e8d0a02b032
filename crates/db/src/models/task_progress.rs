//! Task-progress model.

use clarity_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `task_progress` table: one founder's self-reported state
/// for one execution task. Unique on (task_id, user_id), mutable forever.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskProgress {
    pub id: DbId,
    pub task_id: DbId,
    pub user_id: DbId,
    pub status: String,
    pub updated_at: Timestamp,
}
