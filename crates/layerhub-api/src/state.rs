//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use layerhub_auth::TokenVerifier;
use layerhub_core::config::AppConfig;
use layerhub_service::{FolderService, LayerService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Bearer-token verifier.
    pub verifier: Arc<TokenVerifier>,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// Layer service.
    pub layer_service: Arc<LayerService>,
}
