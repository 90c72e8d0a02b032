use std::sync::Arc;

use clarity_advisor::AdvisorService;

use crate::config::ServerConfig;
use crate::guest_cache::GuestCache;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clarity_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Content fetcher + AI report generator.
    pub advisor: Arc<AdvisorService>,
    /// Storage for unauthenticated analysis results.
    pub guest_cache: Arc<dyn GuestCache>,
}
