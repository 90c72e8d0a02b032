//! Route definitions.

pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /analyze                      AI analysis (scored or founder-report flow)
/// GET  /analyses/{id}                stored report (db id or guest key)
/// POST /matching                     group a submission into a review pod
/// GET  /submissions                  caller's submissions with score summaries
/// GET  /submissions/{id}/insights    founder report + plan + gated peer reviews
/// POST /reviews                      submit a peer review
/// GET  /reviews/pending              pod-mate submissions awaiting review
/// GET  /pod-members/{id}             review-form context
/// PUT  /tasks/{id}/progress          upsert execution-task progress
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/analyses/{id}", get(handlers::reports::get_report))
        .route("/matching", post(handlers::matching::trigger_matching))
        .route("/submissions", get(handlers::submissions::list_submissions))
        .route(
            "/submissions/{id}/insights",
            get(handlers::submissions::submission_insights),
        )
        .route("/reviews", post(handlers::reviews::submit_review))
        .route("/reviews/pending", get(handlers::reviews::pending_reviews))
        .route(
            "/pod-members/{id}",
            get(handlers::reviews::pod_member_context),
        )
        .route(
            "/tasks/{id}/progress",
            put(handlers::tasks::update_task_progress),
        )
}
