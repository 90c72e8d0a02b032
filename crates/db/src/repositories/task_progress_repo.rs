//! Repository for the `task_progress` table.

use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::task_progress::TaskProgress;

pub struct TaskProgressRepo;

impl TaskProgressRepo {
    /// Upsert one user's progress for one task.
    ///
    /// Idempotent on (task_id, user_id): repeating the call keeps a single
    /// row and retains the latest status.
    pub async fn upsert(
        pool: &PgPool,
        task_id: DbId,
        user_id: DbId,
        status: &str,
    ) -> Result<TaskProgress, sqlx::Error> {
        sqlx::query_as::<_, TaskProgress>(
            "INSERT INTO task_progress (task_id, user_id, status)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_task_progress_task_user
             DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
             RETURNING id, task_id, user_id, status, updated_at",
        )
        .bind(task_id)
        .bind(user_id)
        .bind(status)
        .fetch_one(pool)
        .await
    }
}
