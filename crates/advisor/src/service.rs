//! High-level advisor service: fetch, prompt, generate, parse.

use std::time::Duration;

use clarity_core::report::{ScoredReport, VerdictReport};

use crate::client::{GeminiClient, GeminiConfig};
use crate::error::AdvisorError;
use crate::extract::extract_json_object;
use crate::fetch::{self, PageContent, FETCH_TIMEOUT_SECS, FETCH_USER_AGENT};
use crate::prompt::{report_prompt, scored_prompt, ReportFacts, ScoredFacts};

/// Composes the content fetcher and the generation client into the two
/// report operations the API exposes.
pub struct AdvisorService {
    client: GeminiClient,
    fetch_http: reqwest::Client,
}

impl AdvisorService {
    /// Build the service from a generation config.
    ///
    /// The page-fetch client gets the fixed 10-second timeout and bot user
    /// agent; the generation client keeps the provider's default timeout.
    pub fn new(config: GeminiConfig) -> Self {
        let fetch_http = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(FETCH_USER_AGENT)
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            client: GeminiClient::new(config),
            fetch_http,
        }
    }

    /// Build the service from environment variables. Panics when
    /// `GEMINI_API_KEY` is missing.
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    /// Fetch and distill a landing page. Callers treat failure as
    /// "proceed without page content".
    pub async fn fetch_page(&self, url: &str) -> Result<PageContent, AdvisorError> {
        fetch::fetch_page(&self.fetch_http, url).await
    }

    /// Run the scored analysis: one generation call, then extract and
    /// validate the report.
    pub async fn analyze_scored(
        &self,
        facts: &ScoredFacts<'_>,
        page: Option<&PageContent>,
        pricing: Option<&PageContent>,
        previous_scores: Option<(i32, i32)>,
    ) -> Result<ScoredReport, AdvisorError> {
        let prompt = scored_prompt(facts, page, pricing, previous_scores);
        let raw = self.client.generate(&prompt).await?;

        let value = extract_json_object(&raw)?;
        let report: ScoredReport = serde_json::from_value(value)
            .map_err(|e| AdvisorError::MalformedOutput(format!("Unexpected report shape: {e}")))?;
        report
            .validate()
            .map_err(|e| AdvisorError::MalformedOutput(e.to_string()))?;

        Ok(report)
    }

    /// Generate the verdict/execution-plan report.
    pub async fn founder_report(
        &self,
        facts: &ReportFacts<'_>,
        page: Option<&PageContent>,
    ) -> Result<VerdictReport, AdvisorError> {
        let prompt = report_prompt(facts, page);
        let raw = self.client.generate(&prompt).await?;

        let value = extract_json_object(&raw)?;
        let report: VerdictReport = serde_json::from_value(value)
            .map_err(|e| AdvisorError::MalformedOutput(format!("Unexpected report shape: {e}")))?;
        report
            .validate()
            .map_err(|e| AdvisorError::MalformedOutput(e.to_string()))?;

        Ok(report)
    }
}
