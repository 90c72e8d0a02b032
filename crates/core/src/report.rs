//! AI report shapes.
//!
//! Two report flavors exist, from two generations of the product: the
//! scored-dimension analysis and the verdict/execution-plan report. Both
//! are carried as one tagged [`Report`] so storage and the API hand around
//! a single type instead of two loosely-related schemas.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inclusive score range for every analysis dimension.
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

/// Number of days in a founder execution plan.
pub const PLAN_DAYS: i32 = 7;

/// One analysis dimension: score plus actionable feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub score: i32,
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Score delta against the parent submission, when previous scores
    /// were supplied for an iteration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_delta: Option<f64>,
}

/// A competitor identified by the benchmark section of the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub description: String,
    pub weakness: String,
    pub strength: String,
}

/// The scored-dimension analysis: four dimensions, competitive benchmark,
/// and alternative headlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReport {
    pub positioning: Dimension,
    pub icp: Dimension,
    pub differentiation: Dimension,
    pub pricing: Dimension,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub headline_suggestions: Vec<String>,
}

/// One day of the execution plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTask {
    pub day: i32,
    pub task: String,
}

/// The verdict/execution-plan report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictReport {
    pub positioning_verdict: String,
    pub brutal_truth: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub ignore_areas: Vec<String>,
    pub seven_day_plan: Vec<PlanTask>,
}

/// A generated report of either flavor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Report {
    Scored(ScoredReport),
    VerdictPlan(VerdictReport),
}

impl ScoredReport {
    /// All four dimension scores, in display order.
    pub fn scores(&self) -> [i32; 4] {
        [
            self.positioning.score,
            self.icp.score,
            self.differentiation.score,
            self.pricing.score,
        ]
    }

    /// Validate that every dimension score is within range.
    pub fn validate(&self) -> Result<(), CoreError> {
        for score in self.scores() {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(CoreError::Validation(format!(
                    "Dimension score {score} out of range {MIN_SCORE}..={MAX_SCORE}"
                )));
            }
        }
        Ok(())
    }
}

impl VerdictReport {
    /// Validate the execution plan: non-empty, every day within 1..=7.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.seven_day_plan.is_empty() {
            return Err(CoreError::Validation(
                "Execution plan must contain at least one task".into(),
            ));
        }
        for task in &self.seven_day_plan {
            if !(1..=PLAN_DAYS).contains(&task.day) {
                return Err(CoreError::Validation(format!(
                    "Execution plan day {} out of range 1..={PLAN_DAYS}",
                    task.day
                )));
            }
        }
        Ok(())
    }
}
