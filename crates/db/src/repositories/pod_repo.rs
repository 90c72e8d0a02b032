//! Repository for the `review_pods` and `pod_members` tables.
//!
//! Pods are only created by the matching engine
//! ([`crate::repositories::MatchingRepo`]); this repository covers reads.

use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::pod::{PodMember, PodMemberContext, ReviewPod};

/// Column list for pod_members queries.
const MEMBER_COLUMNS: &str = "id, pod_id, submission_id, user_id, reviews_completed";

pub struct PodRepo;

impl PodRepo {
    /// Find a pod by its internal ID.
    pub async fn find_pod(pool: &PgPool, id: DbId) -> Result<Option<ReviewPod>, sqlx::Error> {
        sqlx::query_as::<_, ReviewPod>(
            "SELECT id, status, created_at FROM review_pods WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find a membership row by its internal ID.
    pub async fn find_member(pool: &PgPool, id: DbId) -> Result<Option<PodMember>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM pod_members WHERE id = $1");
        sqlx::query_as::<_, PodMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A membership joined with the submission summary shown to reviewers.
    pub async fn member_context(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Option<PodMemberContext>, sqlx::Error> {
        sqlx::query_as::<_, PodMemberContext>(
            "SELECT pm.id, pm.pod_id, pm.submission_id, pm.user_id,
                    s.landing_page_url, s.target_customer, s.value_prop
             FROM pod_members pm
             JOIN submissions s ON s.id = pm.submission_id
             WHERE pm.id = $1",
        )
        .bind(member_id)
        .fetch_optional(pool)
        .await
    }

    /// One user's membership row in a specific pod.
    pub async fn member_for_user_in_pod(
        pool: &PgPool,
        pod_id: DbId,
        user_id: DbId,
    ) -> Result<Option<PodMember>, sqlx::Error> {
        let query =
            format!("SELECT {MEMBER_COLUMNS} FROM pod_members WHERE pod_id = $1 AND user_id = $2");
        sqlx::query_as::<_, PodMember>(&query)
            .bind(pod_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// The membership row for a submission, if it has been pooled.
    pub async fn member_for_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Option<PodMember>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM pod_members WHERE submission_id = $1");
        sqlx::query_as::<_, PodMember>(&query)
            .bind(submission_id)
            .fetch_optional(pool)
            .await
    }

    /// All membership rows of a pod.
    pub async fn members_of_pod(
        pool: &PgPool,
        pod_id: DbId,
    ) -> Result<Vec<PodMember>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM pod_members WHERE pod_id = $1 ORDER BY id");
        sqlx::query_as::<_, PodMember>(&query)
            .bind(pod_id)
            .fetch_all(pool)
            .await
    }
}
