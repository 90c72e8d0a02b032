//! Repository for the `reviews` table.

use clarity_core::gating::REVIEWS_TO_UNLOCK;
use clarity_core::submission::{STATUS_MATCHED, STATUS_REVIEWED};
use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, PendingReview, Review};

/// Column list shared across queries.
const COLUMNS: &str = "id, pod_id, submission_id, reviewer_id, \
     question_1, question_2, question_3, question_4, created_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Submit one review in a single transaction: insert the row,
    /// increment the reviewer's `reviews_completed` counter on their
    /// membership in the pod, and flip the target submission to
    /// `reviewed` once it has received the required number of reviews.
    ///
    /// A duplicate (pod, reviewer, target) insert violates
    /// `uq_reviews_pod_reviewer_submission` and rolls everything back.
    pub async fn submit(
        pool: &PgPool,
        reviewer_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO reviews
                (pod_id, submission_id, reviewer_id,
                 question_1, question_2, question_3, question_4)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let review: Review = sqlx::query_as(&query)
            .bind(input.pod_id)
            .bind(input.submission_id)
            .bind(reviewer_id)
            .bind(&input.question_1)
            .bind(&input.question_2)
            .bind(&input.question_3)
            .bind(&input.question_4)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE pod_members SET reviews_completed = reviews_completed + 1
             WHERE pod_id = $1 AND user_id = $2",
        )
        .bind(input.pod_id)
        .bind(reviewer_id)
        .execute(&mut *tx)
        .await?;

        let (received,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM reviews WHERE submission_id = $1")
                .bind(input.submission_id)
                .fetch_one(&mut *tx)
                .await?;

        if received >= i64::from(REVIEWS_TO_UNLOCK) {
            sqlx::query(
                "UPDATE submissions SET status = $1, updated_at = NOW()
                 WHERE id = $2 AND status = $3",
            )
            .bind(STATUS_REVIEWED)
            .bind(input.submission_id)
            .bind(STATUS_MATCHED)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(review)
    }

    /// All reviews targeting a submission, oldest first.
    pub async fn list_for_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE submission_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(submission_id)
            .fetch_all(pool)
            .await
    }

    /// Pod-mate submissions the user has not reviewed yet, across all of
    /// their pods.
    pub async fn pending_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PendingReview>, sqlx::Error> {
        sqlx::query_as::<_, PendingReview>(
            "SELECT other.id AS pod_member_id, other.pod_id, other.submission_id,
                    s.landing_page_url, s.stage, s.value_prop
             FROM pod_members me
             JOIN pod_members other
                 ON other.pod_id = me.pod_id AND other.user_id <> me.user_id
             JOIN submissions s ON s.id = other.submission_id
             WHERE me.user_id = $1
               AND NOT EXISTS (
                   SELECT 1 FROM reviews r
                   WHERE r.reviewer_id = $1
                     AND r.submission_id = other.submission_id
               )
             ORDER BY s.created_at ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
