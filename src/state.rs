use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// The shared application state.
///
/// Cloned into every handler via Axum's state extraction. Everything in
/// here is cheaply cloneable (pool and Arc handles).
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: sqlx::SqlitePool,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Request/domain counters exposed on /metrics.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config), metrics: Metrics::new() }
    }
}
