//! Repository for the `submissions` table.
//!
//! Submissions are only ever inserted together with their report (see
//! [`crate::repositories::AnalysisRepo`] and
//! [`crate::repositories::FounderReportRepo`]), so this repository covers
//! reads.

use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{Submission, SubmissionOverview};

/// Column list shared across queries.
pub(crate) const COLUMNS: &str = "id, user_id, parent_id, landing_page_url, target_customer, \
     value_prop, stage, product_type, status, created_at, updated_at";

pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Find a submission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one user's submissions, newest first, each joined with its
    /// latest analysis scores, founder-report presence, and the pod
    /// membership counter the dashboard needs.
    pub async fn list_overview_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SubmissionOverview>, sqlx::Error> {
        sqlx::query_as::<_, SubmissionOverview>(
            "SELECT s.id, s.parent_id, s.landing_page_url, s.target_customer,
                    s.value_prop, s.stage, s.product_type, s.status, s.created_at,
                    a.id AS analysis_id,
                    a.positioning_score, a.icp_score,
                    a.differentiation_score, a.pricing_score,
                    fr.id AS founder_report_id,
                    pm.reviews_completed
             FROM submissions s
             LEFT JOIN LATERAL (
                 SELECT id, positioning_score, icp_score,
                        differentiation_score, pricing_score
                 FROM analyses
                 WHERE submission_id = s.id
                 ORDER BY created_at DESC
                 LIMIT 1
             ) a ON TRUE
             LEFT JOIN LATERAL (
                 SELECT id
                 FROM founder_reports
                 WHERE submission_id = s.id
                 ORDER BY created_at DESC
                 LIMIT 1
             ) fr ON TRUE
             LEFT JOIN pod_members pm ON pm.submission_id = s.id
             WHERE s.user_id = $1
             ORDER BY s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
