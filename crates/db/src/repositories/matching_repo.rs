//! The matching engine's persistence sequence.
//!
//! The whole match-and-create sequence runs in one transaction: lock the
//! requesting submission, pick one waiting candidate, create the pod,
//! insert both memberships, flip both statuses. Concurrent matching
//! attempts against the same candidate are excluded by the row locks
//! (`FOR UPDATE` / `SKIP LOCKED`); the `uq_pod_members_submission`
//! constraint backs them as a hard stop.

use clarity_core::submission::{STATUS_ANALYZED, STATUS_MATCHED};
use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::pod::POD_STATUS_ACTIVE;

/// Result of a matching attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A pod was created containing the submission and one candidate.
    Matched { pod_id: DbId },
    /// No compatible candidate exists; the submission keeps waiting.
    Waiting,
    /// The submission is not in the `analyzed` state (never analyzed, or
    /// already pooled).
    NotReady,
    /// The submission does not exist.
    NotFound,
}

pub struct MatchingRepo;

impl MatchingRepo {
    /// Attempt to group a submission into a review pod.
    ///
    /// Candidate selection: status `analyzed`, same stage, different
    /// owner, not already a pod member; the oldest waiting submission
    /// wins. Candidates locked by a concurrent matcher are skipped rather
    /// than waited on.
    pub async fn match_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<MatchOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(DbId, String, String)> = sqlx::query_as(
            "SELECT user_id, stage, status FROM submissions WHERE id = $1 FOR UPDATE",
        )
        .bind(submission_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (user_id, stage, status) = match current {
            Some(row) => row,
            None => return Ok(MatchOutcome::NotFound),
        };
        if status != STATUS_ANALYZED {
            return Ok(MatchOutcome::NotReady);
        }

        let candidate: Option<(DbId, DbId)> = sqlx::query_as(
            "SELECT id, user_id FROM submissions
             WHERE status = $1
               AND stage = $2
               AND user_id <> $3
               AND id <> $4
               AND NOT EXISTS (
                   SELECT 1 FROM pod_members pm
                   WHERE pm.submission_id = submissions.id
               )
             ORDER BY created_at ASC, id ASC
             LIMIT 1
             FOR UPDATE SKIP LOCKED",
        )
        .bind(STATUS_ANALYZED)
        .bind(&stage)
        .bind(user_id)
        .bind(submission_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (candidate_id, candidate_user_id) = match candidate {
            Some(row) => row,
            None => return Ok(MatchOutcome::Waiting),
        };

        let (pod_id,): (DbId,) =
            sqlx::query_as("INSERT INTO review_pods (status) VALUES ($1) RETURNING id")
                .bind(POD_STATUS_ACTIVE)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query(
            "INSERT INTO pod_members (pod_id, submission_id, user_id)
             VALUES ($1, $2, $3), ($1, $4, $5)",
        )
        .bind(pod_id)
        .bind(submission_id)
        .bind(user_id)
        .bind(candidate_id)
        .bind(candidate_user_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE submissions SET status = $1, updated_at = NOW()
             WHERE id = $2 OR id = $3",
        )
        .bind(STATUS_MATCHED)
        .bind(submission_id)
        .bind(candidate_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(submission_id, candidate_id, pod_id, "Review pod formed");

        Ok(MatchOutcome::Matched { pod_id })
    }
}
