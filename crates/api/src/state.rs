use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bearer-token verifier; `None` for services without protected routes.
    pub verifier: Option<Arc<TokenVerifier>>,
}
