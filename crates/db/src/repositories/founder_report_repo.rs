//! Repository for the `founder_reports` and `execution_tasks` tables.

use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::founder_report::{
    CreateFounderReport, ExecutionTask, FounderReport, TaskWithProgress,
};
use crate::models::submission::{CreateSubmission, Submission};
use crate::repositories::submission_repo;

/// Column list shared across queries.
const COLUMNS: &str = "id, submission_id, positioning_verdict, brutal_truth, \
     focus_areas, ignore_areas, created_at";

pub struct FounderReportRepo;

impl FounderReportRepo {
    /// Insert a submission, its founder report, and the execution plan in
    /// one transaction. Any failure rolls the whole sequence back.
    pub async fn create_with_submission(
        pool: &PgPool,
        submission: &CreateSubmission,
        report: &CreateFounderReport,
    ) -> Result<(Submission, FounderReport), sqlx::Error> {
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

        let report_query = format!(
            "INSERT INTO founder_reports
                (submission_id, positioning_verdict, brutal_truth,
                 focus_areas, ignore_areas)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let saved: FounderReport = sqlx::query_as(&report_query)
            .bind(created.id)
            .bind(&report.positioning_verdict)
            .bind(&report.brutal_truth)
            .bind(&report.focus_areas)
            .bind(&report.ignore_areas)
            .fetch_one(&mut *tx)
            .await?;

        for (day, description) in &report.plan {
            sqlx::query(
                "INSERT INTO execution_tasks (report_id, day, description)
                 VALUES ($1, $2, $3)",
            )
            .bind(saved.id)
            .bind(day)
            .bind(description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok((created, saved))
    }

    /// Latest founder report for a submission.
    pub async fn find_by_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Option<FounderReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM founder_reports
             WHERE submission_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, FounderReport>(&query)
            .bind(submission_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an execution task by its internal ID.
    pub async fn find_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Option<ExecutionTask>, sqlx::Error> {
        sqlx::query_as::<_, ExecutionTask>(
            "SELECT id, report_id, day, description FROM execution_tasks WHERE id = $1",
        )
        .bind(task_id)
        .fetch_optional(pool)
        .await
    }

    /// The report's execution plan, day order, joined with one user's
    /// progress status.
    pub async fn tasks_with_progress(
        pool: &PgPool,
        report_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<TaskWithProgress>, sqlx::Error> {
        sqlx::query_as::<_, TaskWithProgress>(
            "SELECT t.id, t.report_id, t.day, t.description, tp.status
             FROM execution_tasks t
             LEFT JOIN task_progress tp
                 ON tp.task_id = t.id AND tp.user_id = $2
             WHERE t.report_id = $1
             ORDER BY t.day ASC",
        )
        .bind(report_id)
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
