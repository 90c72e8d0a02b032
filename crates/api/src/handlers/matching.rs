//! The matching endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use clarity_core::error::CoreError;
use clarity_core::types::DbId;
use clarity_db::repositories::{MatchOutcome, MatchingRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRequest {
    pub submission_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_id: Option<DbId>,
    pub message: String,
}

/// POST /matching
///
/// Attempt to group the caller's submission into a review pod. The caller
/// must own the submission; ownership is checked before any mutation.
pub async fn trigger_matching(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<MatchingRequest>,
) -> AppResult<Json<MatchingResponse>> {
    let submission_id = input
        .submission_id
        .ok_or_else(|| AppError::BadRequest("Submission ID is required".into()))?;

    let submission = SubmissionRepo::find_by_id(&state.pool, submission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: submission_id.to_string(),
        }))?;

    if submission.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this submission".into(),
        )));
    }

    let outcome = MatchingRepo::match_submission(&state.pool, submission_id).await?;

    match outcome {
        MatchOutcome::Matched { pod_id } => Ok(Json(MatchingResponse {
            success: true,
            pod_id: Some(pod_id),
            message: "Pod created!".into(),
        })),
        MatchOutcome::Waiting => Ok(Json(MatchingResponse {
            success: false,
            pod_id: None,
            message: "Added to waiting pool".into(),
        })),
        MatchOutcome::NotReady => Err(AppError::Core(CoreError::Conflict(
            "Submission is not ready for matching".into(),
        ))),
        MatchOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: submission_id.to_string(),
        })),
    }
}
