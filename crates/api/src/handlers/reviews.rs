//! Peer-review handlers: submit, pending list, review-form context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use clarity_core::error::CoreError;
use clarity_core::types::DbId;
use clarity_db::models::review::CreateReview;
use clarity_db::repositories::{PodRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub pod_id: Option<DbId>,
    pub submission_id: Option<DbId>,
    pub question_1: Option<String>,
    pub question_2: Option<String>,
    pub question_3: Option<String>,
    pub question_4: Option<String>,
}

/// POST /reviews
///
/// Submit one peer review. The caller must be a member of the pod, the
/// target submission must belong to the same pod and not be the caller's
/// own. A duplicate review of the same target maps to 409.
pub async fn submit_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    let (Some(pod_id), Some(submission_id), Some(q1), Some(q2), Some(q3), Some(q4)) = (
        input.pod_id,
        input.submission_id,
        non_empty(input.question_1),
        non_empty(input.question_2),
        non_empty(input.question_3),
        non_empty(input.question_4),
    ) else {
        return Err(AppError::BadRequest("All fields are required".into()));
    };

    // The caller must sit in the pod they are reviewing for.
    PodRepo::member_for_user_in_pod(&state.pool, pod_id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("Not a member of this pod".into()))
        })?;

    // The target must be another member's submission in the same pod.
    let target = PodRepo::member_for_submission(&state.pool, submission_id)
        .await?
        .filter(|m| m.pod_id == pod_id)
        .ok_or_else(|| {
            AppError::BadRequest("Submission is not part of this pod".into())
        })?;
    if target.user_id == auth.user_id {
        return Err(AppError::BadRequest(
            "Cannot review your own submission".into(),
        ));
    }

    let review = ReviewRepo::submit(
        &state.pool,
        auth.user_id,
        &CreateReview {
            pod_id,
            submission_id,
            question_1: q1,
            question_2: q2,
            question_3: q3,
            question_4: q4,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        pod_id,
        submission_id,
        review_id = review.id,
        "Peer review submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// GET /reviews/pending
///
/// Pod-mate submissions awaiting the caller's review.
pub async fn pending_reviews(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pending = ReviewRepo::pending_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: pending }))
}

/// GET /pod-members/{id}
///
/// The review-form context for one pod member: pod, submission, and the
/// submission summary. Restricted to members of the same pod.
pub async fn pod_member_context(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let context = PodRepo::member_context(&state.pool, member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PodMember",
            id: member_id.to_string(),
        }))?;

    PodRepo::member_for_user_in_pod(&state.pool, context.pod_id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("Not a member of this pod".into()))
        })?;

    Ok(Json(DataResponse { data: context }))
}
