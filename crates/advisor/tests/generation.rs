//! Integration tests for the advisor service against a mock provider.

use clarity_advisor::{AdvisorError, AdvisorService, GeminiConfig};
use clarity_advisor::prompt::{ReportFacts, ScoredFacts};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn service_for(server: &MockServer) -> AdvisorService {
    AdvisorService::new(GeminiConfig {
        api_url: server.uri(),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    })
}

fn facts() -> ScoredFacts<'static> {
    ScoredFacts {
        target_customer: "freelance designers",
        value_prop: "feedback tool",
    }
}

/// Wrap raw model text in the provider's response envelope.
fn model_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

fn scored_json() -> String {
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

async fn mount_model_text(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(model_response(text)))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Scored analysis
// ---------------------------------------------------------------------------

/// A well-formed model response parses into a validated report.
#[tokio::test]
async fn test_scored_analysis_parses_report() {
    let server = MockServer::start().await;
    mount_model_text(&server, &scored_json()).await;

    let report = service_for(&server)
        .analyze_scored(&facts(), None, None, None)
        .await
        .unwrap();

    assert_eq!(report.scores(), [8, 7, 9, 6]);
    assert_eq!(report.competitors.len(), 1);
    assert_eq!(report.headline_suggestions.len(), 3);
}

/// JSON wrapped in code fences and prose still parses.
#[tokio::test]
async fn test_fenced_output_parses() {
    let server = MockServer::start().await;
    let text = format!("Here is your analysis:\n```json\n{}\n```\nGood luck!", scored_json());
    mount_model_text(&server, &text).await;

    let report = service_for(&server)
        .analyze_scored(&facts(), None, None, None)
        .await
        .unwrap();
    assert_eq!(report.positioning.score, 8);
}

/// A response without any JSON object is malformed output.
#[tokio::test]
async fn test_no_json_is_malformed() {
    let server = MockServer::start().await;
    mount_model_text(&server, "I cannot analyze this product.").await;

    let err = service_for(&server)
        .analyze_scored(&facts(), None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::MalformedOutput(_)));
}

/// An out-of-range score fails shape validation.
#[tokio::test]
async fn test_out_of_range_score_is_malformed() {
    let server = MockServer::start().await;
    let text = scored_json().replace("\"score\":8", "\"score\":14");
    mount_model_text(&server, &text).await;

    let err = service_for(&server)
        .analyze_scored(&facts(), None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::MalformedOutput(_)));
}

/// A non-2xx provider response surfaces status and body.
#[tokio::test]
async fn test_provider_error_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .analyze_scored(&facts(), None, None, None)
        .await
        .unwrap_err();
    match err {
        AdvisorError::Api { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Founder report
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_founder_report_parses_plan() {
    let server = MockServer::start().await;
    let plan: Vec<serde_json::Value> = (1..=7)
        .map(|d| json!({"day": d, "task": format!("Day {d} task")}))
        .collect();
    let text = json!({
        "positioningVerdict": "You are building X for Y who struggle with Z.",
        "brutalTruth": "The audience is too broad.",
        "focusAreas": ["Talk to five users"],
        "ignoreAreas": ["Branding"],
        "sevenDayPlan": plan
    })
    .to_string();
    mount_model_text(&server, &text).await;

    let facts = ReportFacts {
        building: "a produce delivery app",
        who_is_for: "urban consumers",
        pain_point: "no access to fresh produce",
        stage: "pre-revenue",
    };
    let report = service_for(&server)
        .founder_report(&facts, None)
        .await
        .unwrap();

    assert_eq!(report.seven_day_plan.len(), 7);
    assert_eq!(report.seven_day_plan[0].day, 1);
    assert!(report.positioning_verdict.starts_with("You are building"));
}

/// A plan with an out-of-range day fails validation.
#[tokio::test]
async fn test_bad_plan_day_is_malformed() {
    let server = MockServer::start().await;
    let text = json!({
        "positioningVerdict": "v",
        "brutalTruth": "t",
        "focusAreas": [],
        "ignoreAreas": [],
        "sevenDayPlan": [{"day": 12, "task": "too far out"}]
    })
    .to_string();
    mount_model_text(&server, &text).await;

    let facts = ReportFacts {
        building: "b",
        who_is_for: "w",
        pain_point: "p",
        stage: "mvp",
    };
    let err = service_for(&server)
        .founder_report(&facts, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AdvisorError::MalformedOutput(_)));
}

// ---------------------------------------------------------------------------
// Page fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_fetch_page_extracts_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Acme</title></head><body>\
             <h1>Ship faster</h1>\
             <p>Feedback for freelance designers within a single day.</p>\
             </body></html>",
        ))
        .mount(&server)
        .await;

    let content = service_for(&server).fetch_page(&server.uri()).await.unwrap();
    assert_eq!(content.title, "Acme");
    assert_eq!(content.headings, vec!["Ship faster"]);
    assert_eq!(content.paragraphs.len(), 1);
}

#[tokio::test]
async fn test_fetch_page_non_2xx_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_page(&server.uri()).await.unwrap_err();
    assert!(matches!(err, AdvisorError::Api { status: 404, .. }));
}
