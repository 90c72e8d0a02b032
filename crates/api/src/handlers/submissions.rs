//! Submission listing and the gated insights view.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use clarity_core::error::CoreError;
use clarity_core::gating::insights_unlocked;
use clarity_core::types::DbId;
use clarity_db::models::founder_report::{FounderReport, TaskWithProgress};
use clarity_db::models::review::Review;
use clarity_db::models::submission::{Submission, SubmissionOverview};
use clarity_db::repositories::{FounderReportRepo, PodRepo, ReviewRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /submissions
///
/// The caller's submissions, newest first, with score summaries and pod
/// progress for the dashboard.
pub async fn list_submissions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SubmissionOverview>>>> {
    let submissions = SubmissionRepo::list_overview_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// The insights payload: report, plan, and (once unlocked) peer reviews.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub report: FounderReport,
    pub tasks: Vec<TaskWithProgress>,
    /// Peer reviews of this submission. Empty while locked.
    pub reviews: Vec<Review>,
    /// Whether peer feedback is still withheld from the viewer.
    pub locked: bool,
    /// Reviews the viewer has completed for their pod-mates.
    pub reviews_completed: i32,
}

/// GET /submissions/{id}/insights
///
/// The founder report for one of the caller's submissions, with execution
/// tasks and the caller's progress. Peer reviews are included only once
/// the caller has completed the required number of reviews themselves;
/// until then the response is marked locked and carries no review content.
pub async fn submission_insights(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(submission_id): Path<DbId>,
) -> AppResult<Json<DataResponse<InsightsResponse>>> {
    let submission = find_owned_submission(&state, submission_id, auth.user_id).await?;

    let report = FounderReportRepo::find_by_submission(&state.pool, submission.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FounderReport",
            id: submission_id.to_string(),
        }))?;

    let tasks =
        FounderReportRepo::tasks_with_progress(&state.pool, report.id, auth.user_id).await?;

    // The viewer owns this submission, so its membership row (if matched)
    // carries the viewer's own completed-review counter.
    let reviews_completed = PodRepo::member_for_submission(&state.pool, submission.id)
        .await?
        .map(|m| m.reviews_completed)
        .unwrap_or(0);

    let locked = !insights_unlocked(reviews_completed);
    let reviews = if locked {
        Vec::new()
    } else {
        ReviewRepo::list_for_submission(&state.pool, submission.id).await?
    };

    Ok(Json(DataResponse {
        data: InsightsResponse {
            report,
            tasks,
            reviews,
            locked,
            reviews_completed,
        },
    }))
}

/// Load a submission and verify the caller owns it.
pub(crate) async fn find_owned_submission(
    state: &AppState,
    submission_id: DbId,
    user_id: DbId,
) -> AppResult<Submission> {
    let submission = SubmissionRepo::find_by_id(&state.pool, submission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: submission_id.to_string(),
        }))?;

    if submission.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this submission".into(),
        )));
    }
    Ok(submission)
}
