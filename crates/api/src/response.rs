//! Shared response envelope types for API handlers.
//!
//! Dashboard-facing endpoints use a `{ "data": ... }` envelope. The analyze
//! and matching endpoints keep their own flat shapes, which older clients
//! depend on; those live next to their handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
