//! Repository for the `profiles` table.
//!
//! Rows are owned by the hosted auth provider; this repository exists for
//! lookups and for provisioning rows in tests and provider-sync tooling.

use clarity_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile};

/// Column list shared across queries.
const COLUMNS: &str = "id, email, display_name, created_at";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (email, display_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.display_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
