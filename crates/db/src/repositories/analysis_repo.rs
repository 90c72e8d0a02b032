//! Repository for the `analyses` table.

use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::analysis::{Analysis, CreateAnalysis, PreviousScores};
use crate::models::submission::{CreateSubmission, Submission};
use crate::repositories::submission_repo;

/// Column list shared across queries.
const COLUMNS: &str = "id, submission_id, positioning_score, icp_score, \
     differentiation_score, pricing_score, competitors, suggestions, \
     full_report, created_at";

pub struct AnalysisRepo;

impl AnalysisRepo {
    /// Insert a submission and its analysis in one transaction.
    ///
    /// The submission row carries the status from `submission` (the analyze
    /// flow passes `analyzed` since the report lands in the same commit).
    /// Any failure rolls both inserts back.
    pub async fn create_with_submission(
        pool: &PgPool,
        submission: &CreateSubmission,
        analysis: &CreateAnalysis,
    ) -> Result<(Submission, Analysis), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let sub_query = format!(
            "INSERT INTO submissions
                (user_id, parent_id, landing_page_url, target_customer,
                 value_prop, stage, product_type, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {}",
            submission_repo::COLUMNS
        );
        let created: Submission = sqlx::query_as(&sub_query)
            .bind(submission.user_id)
            .bind(submission.parent_id)
            .bind(&submission.landing_page_url)
            .bind(&submission.target_customer)
            .bind(&submission.value_prop)
            .bind(&submission.stage)
            .bind(&submission.product_type)
            .bind(&submission.status)
            .fetch_one(&mut *tx)
            .await?;

        let analysis_query = format!(
            "INSERT INTO analyses
                (submission_id, positioning_score, icp_score,
                 differentiation_score, pricing_score, competitors,
                 suggestions, full_report)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let saved: Analysis = sqlx::query_as(&analysis_query)
            .bind(created.id)
            .bind(analysis.positioning_score)
            .bind(analysis.icp_score)
            .bind(analysis.differentiation_score)
            .bind(analysis.pricing_score)
            .bind(&analysis.competitors)
            .bind(&analysis.suggestions)
            .bind(&analysis.full_report)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((created, saved))
    }

    /// Find an analysis by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Analysis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM analyses WHERE id = $1");
        sqlx::query_as::<_, Analysis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Positioning and ICP scores of the latest analysis for a submission.
    /// Feeds improvement tracking when a founder iterates.
    pub async fn previous_scores(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Option<PreviousScores>, sqlx::Error> {
        sqlx::query_as::<_, PreviousScores>(
            "SELECT positioning_score, icp_score
             FROM analyses
             WHERE submission_id = $1
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(submission_id)
        .fetch_optional(pool)
        .await
    }
}
