//! Execution-task progress handler.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use clarity_core::error::CoreError;
use clarity_core::task_plan::validate_progress_status;
use clarity_core::types::DbId;
use clarity_db::repositories::{FounderReportRepo, TaskProgressRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateTaskProgressRequest {
    pub status: Option<String>,
}

/// PUT /tasks/{id}/progress
///
/// Upsert the caller's progress for one execution task. Idempotent on
/// (task, user): repeating the call keeps one row with the latest status.
pub async fn update_task_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTaskProgressRequest>,
) -> AppResult<impl IntoResponse> {
    let status = input
        .status
        .ok_or_else(|| AppError::BadRequest("Status is required".into()))?;
    validate_progress_status(&status)?;

    FounderReportRepo::find_task(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ExecutionTask",
            id: task_id.to_string(),
        }))?;

    let progress = TaskProgressRepo::upsert(&state.pool, task_id, auth.user_id, &status).await?;

    Ok(Json(DataResponse { data: progress }))
}
