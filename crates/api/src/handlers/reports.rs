//! Stored-report retrieval.
//!
//! A report id is either a numeric analysis id (persisted flow) or an
//! `analysis-*` guest-cache key (unauthenticated flow). Numeric lookups
//! require the caller to own the underlying submission; a guest key is
//! itself the read capability.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use clarity_core::error::CoreError;
use clarity_core::types::DbId;
use clarity_db::repositories::{AnalysisRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::guest_cache::is_guest_key;
use crate::middleware::auth::OptionalAuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /analyses/{id}
pub async fn get_report(
    OptionalAuthUser(user): OptionalAuthUser,
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if let Ok(analysis_id) = report_id.parse::<DbId>() {
        let auth = user.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })?;

        let analysis = AnalysisRepo::find_by_id(&state.pool, analysis_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Analysis",
                id: report_id.clone(),
            }))?;

        let submission = SubmissionRepo::find_by_id(&state.pool, analysis.submission_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Submission",
                id: analysis.submission_id.to_string(),
            }))?;
        if submission.user_id != auth.user_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "You do not own this report".into(),
            )));
        }

        return Ok(Json(DataResponse {
            data: analysis.full_report,
        }));
    }

    if is_guest_key(&report_id) {
        if let Some(report) = state.guest_cache.load(&report_id).map_err(AppError::Core)? {
            let data = serde_json::to_value(&report)
                .map_err(|e| AppError::InternalError(format!("Serialize: {e}")))?;
            return Ok(Json(DataResponse { data }));
        }
    }

    Err(AppError::Core(CoreError::NotFound {
        entity: "Analysis",
        id: report_id,
    }))
}
