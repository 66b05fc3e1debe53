use std::sync::Arc;

use portfolio_notify::ContactNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Delivers studio notifications for new contact submissions.
    pub notifier: Arc<dyn ContactNotifier>,
}
