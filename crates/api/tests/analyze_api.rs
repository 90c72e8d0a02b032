//! HTTP-level integration tests for the analyze endpoint, with the model
//! provider and the landing page served by mock servers.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, create_user, get, get_auth, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clarity_core::submission::STATUS_ANALYZED;
use clarity_db::repositories::SubmissionRepo;

// ---------------------------------------------------------------------------
// Mock helpers
// ---------------------------------------------------------------------------

fn model_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

fn scored_report_json() -> String {
    json!({
        "positioning": {"score": 8, "feedback": "Clear.", "suggestions": ["Sharpen the headline"]},
        "icp": {"score": 7, "feedback": "Specific.", "suggestions": ["Name the role"]},
        "differentiation": {"score": 9, "feedback": "Unique.", "suggestions": ["Lead with it"]},
        "pricing": {"score": 6, "feedback": "Vague.", "suggestions": ["Show tiers"]},
        "competitors": [
            {"name": "Rival", "description": "Generic tool", "weakness": "Slow", "strength": "Brand"}
        ],
        "headlineSuggestions": ["Feedback in a day", "Ship with confidence", "Design faster"]
    })
    .to_string()
}

fn verdict_report_json() -> String {
    let plan: Vec<serde_json::Value> = (1..=7)
        .map(|d| json!({"day": d, "task": format!("Day {d} task")}))
        .collect();
    json!({
        "positioningVerdict": "You are building X for Y who struggle with Z.",
        "brutalTruth": "The audience is too broad.",
        "focusAreas": ["Talk to five users"],
        "ignoreAreas": ["Branding"],
        "sevenDayPlan": plan
    })
    .to_string()
}

/// Mock server answering both the model call and a landing page GET.
async fn advisor_mock(model_text: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_response(model_text)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/landing"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Acme</title></head><body>\
             <h1>Ship faster</h1>\
             <p>Feedback for freelance designers within a single day.</p>\
             </body></html>",
        ))
        .mount(&server)
        .await;
    server
}

fn scored_request(landing_url: &str) -> serde_json::Value {
    json!({
        "landingPageUrl": landing_url,
        "targetCustomer": "freelance designers",
        "valueProp": "feedback tool",
        "stage": "pre-revenue"
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_missing_fields_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/analyze",
        json!({"landingPageUrl": "https://example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_invalid_stage_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut request = scored_request("https://example.com");
    request["stage"] = json!("unicorn");
    let response = post_json(&app, "/api/v1/analyze", request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Scored flow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_guest_returns_cached_report(pool: PgPool) {
    let server = advisor_mock(&scored_report_json()).await;
    let app = common::build_test_app_with_advisor(pool, &server.uri());

    let landing = format!("{}/landing", server.uri());
    let response = post_json(&app, "/api/v1/analyze", scored_request(&landing)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let analysis_id = json["analysisId"].as_str().unwrap();
    assert!(analysis_id.starts_with("analysis-"));
    assert_eq!(json["savedToDb"], false);
    assert_eq!(json["submission"]["targetCustomer"], "freelance designers");

    for dimension in ["positioning", "icp", "differentiation", "pricing"] {
        let score = json["analysis"][dimension]["score"].as_i64().unwrap();
        assert!((1..=10).contains(&score), "{dimension} score out of range");
    }

    // The guest key is the read capability for the stored report.
    let fetched = get(&app, &format!("/api/v1/analyses/{analysis_id}")).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_json = body_json(fetched).await;
    assert_eq!(fetched_json["data"]["kind"], "scored");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_authed_persists_submission_and_analysis(pool: PgPool) {
    let user = create_user(&pool, "founder@test.com").await;
    let server = advisor_mock(&scored_report_json()).await;
    let app = common::build_test_app_with_advisor(pool.clone(), &server.uri());

    let landing = format!("{}/landing", server.uri());
    let response = post_json_auth(
        &app,
        "/api/v1/analyze",
        &auth_token(user),
        scored_request(&landing),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["savedToDb"], true);
    let analysis_id: i64 = json["analysisId"].as_str().unwrap().parse().unwrap();

    let overview = SubmissionRepo::list_overview_for_user(&pool, user)
        .await
        .unwrap();
    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].status, STATUS_ANALYZED);
    assert_eq!(overview[0].analysis_id, Some(analysis_id));
    assert_eq!(overview[0].positioning_score, Some(8));

    // The owner can read the stored report back; others cannot.
    let token = auth_token(user);
    let fetched = get_auth(&app, &format!("/api/v1/analyses/{analysis_id}"), &token).await;
    assert_eq!(fetched.status(), StatusCode::OK);

    let anon = get(&app, &format!("/api/v1/analyses/{analysis_id}")).await;
    assert_eq!(anon.status(), StatusCode::UNAUTHORIZED);

    let other = create_user(&pool, "other@test.com").await;
    let foreign = get_auth(
        &app,
        &format!("/api/v1/analyses/{analysis_id}"),
        &auth_token(other),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::FORBIDDEN);
}

/// A dead landing page degrades the prompt, not the request.
#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_tolerates_page_fetch_failure(pool: PgPool) {
    let server = advisor_mock(&scored_report_json()).await;
    let app = common::build_test_app_with_advisor(pool, &server.uri());

    // Connection refused immediately; no page content reaches the prompt.
    let response = post_json(
        &app,
        "/api/v1/analyze",
        scored_request("http://127.0.0.1:1/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["analysis"]["positioning"]["score"], 8);
}

/// Unparseable model output is fatal to the request.
#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_malformed_model_output_is_500(pool: PgPool) {
    let server = advisor_mock("I refuse to produce JSON today.").await;
    let app = common::build_test_app_with_advisor(pool, &server.uri());

    let response = post_json(
        &app,
        "/api/v1/analyze",
        scored_request("http://127.0.0.1:1/"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "AI_GENERATION_FAILED");
}

// ---------------------------------------------------------------------------
// Founder-report flow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_founder_flow_guest(pool: PgPool) {
    let server = advisor_mock(&verdict_report_json()).await;
    let app = common::build_test_app_with_advisor(pool, &server.uri());

    let response = post_json(
        &app,
        "/api/v1/analyze",
        json!({
            "building": "a produce delivery app",
            "whoIsFor": "urban consumers",
            "painPoint": "no access to fresh produce",
            "stage": "just-an-idea"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["savedToDb"], false);
    assert_eq!(json["report"]["sevenDayPlan"].as_array().unwrap().len(), 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn analyze_founder_flow_persists_report_and_tasks(pool: PgPool) {
    let user = create_user(&pool, "founder@test.com").await;
    let server = advisor_mock(&verdict_report_json()).await;
    let app = common::build_test_app_with_advisor(pool.clone(), &server.uri());

    let response = post_json_auth(
        &app,
        "/api/v1/analyze",
        &auth_token(user),
        json!({
            "building": "a produce delivery app",
            "whoIsFor": "urban consumers",
            "painPoint": "no access to fresh produce",
            "stage": "pre-revenue"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["savedToDb"], true);

    let overview = SubmissionRepo::list_overview_for_user(&pool, user)
        .await
        .unwrap();
    assert_eq!(overview.len(), 1);
    assert!(overview[0].founder_report_id.is_some());
    // Intake fields land on the shared submission shape.
    assert_eq!(overview[0].target_customer, "urban consumers");
    assert_eq!(overview[0].value_prop, "a produce delivery app");

    let submission_id = overview[0].id;
    let insights = get_auth(
        &app,
        &format!("/api/v1/submissions/{submission_id}/insights"),
        &auth_token(user),
    )
    .await;
    assert_eq!(insights.status(), StatusCode::OK);

    let insights_json = body_json(insights).await;
    assert_eq!(insights_json["data"]["tasks"].as_array().unwrap().len(), 7);
    assert_eq!(insights_json["data"]["locked"], true);
    assert!(insights_json["data"]["reviews"].as_array().unwrap().is_empty());
}
