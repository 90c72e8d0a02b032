//! HTTP-level integration tests for execution-task progress.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, create_user, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

use clarity_core::submission::STATUS_ANALYZED;
use clarity_db::models::founder_report::CreateFounderReport;
use clarity_db::models::submission::CreateSubmission;
use clarity_db::repositories::FounderReportRepo;

async fn seeded_task(pool: &PgPool, user_id: i64) -> i64 {
    let submission = CreateSubmission {
        user_id,
        parent_id: None,
        landing_page_url: None,
        target_customer: "urban consumers".to_string(),
        value_prop: "a produce delivery app".to_string(),
        stage: "pre-revenue".to_string(),
        product_type: None,
        status: STATUS_ANALYZED.to_string(),
    };
    let report = CreateFounderReport {
        positioning_verdict: "v".to_string(),
        brutal_truth: "t".to_string(),
        focus_areas: serde_json::json!([]),
        ignore_areas: serde_json::json!([]),
        plan: (1..=7).map(|d| (d, format!("Day {d} task"))).collect(),
    };
    let (_, saved) = FounderReportRepo::create_with_submission(pool, &submission, &report)
        .await
        .unwrap();
    let tasks = FounderReportRepo::tasks_with_progress(pool, saved.id, user_id)
        .await
        .unwrap();
    tasks[0].id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_progress_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/v1/tasks/1/progress")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from(json!({"status": "done"}).to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_task_is_404(pool: PgPool) {
    let user = create_user(&pool, "founder@test.com").await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        &app,
        "/api/v1/tasks/999999/progress",
        &auth_token(user),
        json!({"status": "done"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_status_is_400(pool: PgPool) {
    let user = create_user(&pool, "founder@test.com").await;
    let task_id = seeded_task(&pool, user).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        &app,
        &format!("/api/v1/tasks/{task_id}/progress"),
        &auth_token(user),
        json!({"status": "paused"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Repeating the upsert keeps one row and retains the latest status.
#[sqlx::test(migrations = "../db/migrations")]
async fn progress_upsert_is_idempotent_via_api(pool: PgPool) {
    let user = create_user(&pool, "founder@test.com").await;
    let task_id = seeded_task(&pool, user).await;
    let app = common::build_test_app(pool.clone());
    let token = auth_token(user);

    let first = put_json_auth(
        &app,
        &format!("/api/v1/tasks/{task_id}/progress"),
        &token,
        json!({"status": "done"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let first_json = body_json(first).await;
    assert_eq!(first_json["data"]["status"], "done");

    let second = put_json_auth(
        &app,
        &format!("/api/v1/tasks/{task_id}/progress"),
        &token,
        json!({"status": "skipped"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let second_json = body_json(second).await;
    assert_eq!(second_json["data"]["status"], "skipped");
    assert_eq!(second_json["data"]["id"], first_json["data"]["id"]);

    let rows: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM task_progress WHERE task_id = $1 AND user_id = $2",
    )
    .bind(task_id)
    .bind(user)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(rows.0, 1);
}
