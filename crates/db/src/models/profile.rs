//! Profile model.
//!
//! Profile rows are provisioned by the hosted auth provider; the service
//! only reads them and inserts rows in tests.

use clarity_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a profile (test fixtures and provider sync).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub email: String,
    pub display_name: Option<String>,
}
