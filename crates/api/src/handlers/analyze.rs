//! The analyze endpoint.
//!
//! One endpoint serves two intake generations: the scored-analysis flow
//! (landing page + positioning facts, returns four scored dimensions) and
//! the founder-report flow (three free-text answers, returns a verdict and
//! a seven-day plan). The handler dispatches on which field group is
//! present.
//!
//! Guests get a report too: the result lands in the guest cache and the
//! cache key is returned as the report id. The same fallback catches
//! persistence failures for signed-in founders, so a generated report is
//! never thrown away.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use clarity_advisor::prompt::{ReportFacts, ScoredFacts};
use clarity_advisor::PageContent;
use clarity_core::report::{Report, ScoredReport, VerdictReport};
use clarity_core::stage::validate_stage;
use clarity_core::submission::STATUS_ANALYZED;
use clarity_core::types::DbId;
use clarity_db::models::analysis::CreateAnalysis;
use clarity_db::models::founder_report::CreateFounderReport;
use clarity_db::models::submission::CreateSubmission;
use clarity_db::repositories::{AnalysisRepo, FounderReportRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::guest_cache::new_guest_key;
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

/// Union of both intake shapes; the handler validates per flow.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    // Scored flow.
    pub landing_page_url: Option<String>,
    pub pricing_page_url: Option<String>,
    pub target_customer: Option<String>,
    pub value_prop: Option<String>,
    pub product_type: Option<String>,
    // Founder-report flow.
    pub building: Option<String>,
    pub who_is_for: Option<String>,
    pub pain_point: Option<String>,
    // Shared.
    pub stage: Option<String>,
    pub parent_id: Option<DbId>,
}

/// Echo of the scored-flow inputs, returned alongside the analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEcho {
    pub landing_page_url: String,
    pub target_customer: String,
    pub value_prop: String,
    pub stage: String,
    pub product_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAnalyzeResponse {
    pub analysis_id: String,
    pub saved_to_db: bool,
    pub submission: SubmissionEcho,
    pub analysis: ScoredReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderAnalyzeResponse {
    pub analysis_id: String,
    pub saved_to_db: bool,
    pub report: VerdictReport,
    pub success: bool,
}

/// POST /analyze
pub async fn analyze(
    OptionalAuthUser(user): OptionalAuthUser,
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Response> {
    let founder_flow =
        input.building.is_some() || input.who_is_for.is_some() || input.pain_point.is_some();

    if founder_flow {
        founder_report_flow(state, user, input)
            .await
            .map(IntoResponse::into_response)
    } else {
        scored_flow(state, user, input)
            .await
            .map(IntoResponse::into_response)
    }
}

/// Fetch a page if a URL was given, treating failure as missing content.
async fn fetch_optional(state: &AppState, url: Option<&str>) -> Option<PageContent> {
    let url = url?;
    match state.advisor.fetch_page(url).await {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::warn!(url, error = %err, "Page fetch failed; continuing without content");
            None
        }
    }
}

/// Serialize a value for a JSONB column.
fn to_json<T: Serialize>(value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| AppError::InternalError(format!("Serialize: {e}")))
}

/// Previous positioning/ICP scores of an owned parent submission.
async fn previous_scores(
    state: &AppState,
    user: Option<&AuthUser>,
    parent_id: Option<DbId>,
) -> AppResult<Option<(i32, i32)>> {
    let (Some(user), Some(parent_id)) = (user, parent_id) else {
        return Ok(None);
    };
    let Some(parent) = SubmissionRepo::find_by_id(&state.pool, parent_id).await? else {
        return Ok(None);
    };
    if parent.user_id != user.user_id {
        return Ok(None);
    }
    let scores = AnalysisRepo::previous_scores(&state.pool, parent_id).await?;
    Ok(scores.map(|s| (s.positioning_score, s.icp_score)))
}

async fn scored_flow(
    state: AppState,
    user: Option<AuthUser>,
    input: AnalyzeRequest,
) -> AppResult<Json<ScoredAnalyzeResponse>> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    let (Some(url), Some(target_customer), Some(value_prop), Some(stage)) = (
        non_empty(input.landing_page_url),
        non_empty(input.target_customer),
        non_empty(input.value_prop),
        non_empty(input.stage),
    ) else {
        return Err(AppError::BadRequest("Missing required fields".into()));
    };
    validate_stage(&stage)?;

    let previous = previous_scores(&state, user.as_ref(), input.parent_id).await?;

    let page = fetch_optional(&state, Some(url.as_str())).await;
    let pricing = fetch_optional(&state, input.pricing_page_url.as_deref()).await;

    let facts = ScoredFacts {
        target_customer: &target_customer,
        value_prop: &value_prop,
    };
    let report = state
        .advisor
        .analyze_scored(&facts, page.as_ref(), pricing.as_ref(), previous)
        .await?;

    let (analysis_id, saved_to_db) = match &user {
        Some(auth) => {
            let submission = CreateSubmission {
                user_id: auth.user_id,
                parent_id: input.parent_id,
                landing_page_url: Some(url.clone()),
                target_customer: target_customer.clone(),
                value_prop: value_prop.clone(),
                stage: stage.clone(),
                product_type: input.product_type.clone(),
                status: STATUS_ANALYZED.to_string(),
            };
            let analysis = CreateAnalysis {
                positioning_score: report.positioning.score,
                icp_score: report.icp.score,
                differentiation_score: report.differentiation.score,
                pricing_score: report.pricing.score,
                competitors: to_json(&report.competitors)?,
                suggestions: to_json(&report.headline_suggestions)?,
                full_report: to_json(&Report::Scored(report.clone()))?,
            };
            match AnalysisRepo::create_with_submission(&state.pool, &submission, &analysis).await
            {
                Ok((created, saved)) => {
                    tracing::info!(
                        user_id = auth.user_id,
                        submission_id = created.id,
                        analysis_id = saved.id,
                        "Analysis persisted"
                    );
                    (saved.id.to_string(), true)
                }
                Err(err) => {
                    tracing::error!(
                        user_id = auth.user_id,
                        error = %err,
                        "Persisting analysis failed; falling back to guest cache"
                    );
                    (cache_for_guest(&state, Report::Scored(report.clone()))?, false)
                }
            }
        }
        None => (cache_for_guest(&state, Report::Scored(report.clone()))?, false),
    };

    Ok(Json(ScoredAnalyzeResponse {
        analysis_id,
        saved_to_db,
        submission: SubmissionEcho {
            landing_page_url: url,
            target_customer,
            value_prop,
            stage,
            product_type: input.product_type,
        },
        analysis: report,
    }))
}

async fn founder_report_flow(
    state: AppState,
    user: Option<AuthUser>,
    input: AnalyzeRequest,
) -> AppResult<Json<FounderAnalyzeResponse>> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    let (Some(building), Some(who_is_for), Some(pain_point), Some(stage)) = (
        non_empty(input.building),
        non_empty(input.who_is_for),
        non_empty(input.pain_point),
        non_empty(input.stage),
    ) else {
        return Err(AppError::BadRequest("Missing required fields".into()));
    };
    validate_stage(&stage)?;

    let landing_page_url = input.landing_page_url.filter(|s| !s.trim().is_empty());
    let page = fetch_optional(&state, landing_page_url.as_deref()).await;

    let facts = ReportFacts {
        building: &building,
        who_is_for: &who_is_for,
        pain_point: &pain_point,
        stage: &stage,
    };
    let report = state.advisor.founder_report(&facts, page.as_ref()).await?;

    let (analysis_id, saved_to_db) = match &user {
        Some(auth) => {
            // The two intake fields map onto the shared submission shape:
            // the audience is the target customer, the product description
            // is the value prop. The pain point lives in the report.
            let submission = CreateSubmission {
                user_id: auth.user_id,
                parent_id: input.parent_id,
                landing_page_url: landing_page_url.clone(),
                target_customer: who_is_for.clone(),
                value_prop: building.clone(),
                stage: stage.clone(),
                product_type: None,
                status: STATUS_ANALYZED.to_string(),
            };
            let create_report = CreateFounderReport {
                positioning_verdict: report.positioning_verdict.clone(),
                brutal_truth: report.brutal_truth.clone(),
                focus_areas: to_json(&report.focus_areas)?,
                ignore_areas: to_json(&report.ignore_areas)?,
                plan: report
                    .seven_day_plan
                    .iter()
                    .map(|t| (t.day, t.task.clone()))
                    .collect(),
            };
            match FounderReportRepo::create_with_submission(&state.pool, &submission, &create_report)
                .await
            {
                Ok((created, saved)) => {
                    tracing::info!(
                        user_id = auth.user_id,
                        submission_id = created.id,
                        report_id = saved.id,
                        "Founder report persisted"
                    );
                    (saved.id.to_string(), true)
                }
                Err(err) => {
                    tracing::error!(
                        user_id = auth.user_id,
                        error = %err,
                        "Persisting founder report failed; falling back to guest cache"
                    );
                    (
                        cache_for_guest(&state, Report::VerdictPlan(report.clone()))?,
                        false,
                    )
                }
            }
        }
        None => (
            cache_for_guest(&state, Report::VerdictPlan(report.clone()))?,
            false,
        ),
    };

    Ok(Json(FounderAnalyzeResponse {
        analysis_id,
        saved_to_db,
        report,
        success: true,
    }))
}

/// Store a report in the guest cache, returning the minted key.
fn cache_for_guest(state: &AppState, report: Report) -> AppResult<String> {
    let key = new_guest_key();
    state
        .guest_cache
        .save(&key, &report)
        .map_err(AppError::Core)?;
    Ok(key)
}
