//! Application builder — wires repositories, services, and state into an
//! Axum app and runs the server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tracing::{info, warn};

use layerhub_auth::TokenVerifier;
use layerhub_core::config::AppConfig;
use layerhub_core::error::AppError;
use layerhub_core::traits::storage::{ContentFetcher, ObjectStore};
use layerhub_database::repositories::{FolderRepository, LayerRepository};
use layerhub_entity::folder::store::FolderStore;
use layerhub_entity::layer::store::LayerStore;
use layerhub_service::{FolderService, LayerService};
use layerhub_storage::{HttpContentFetcher, S3ObjectStore};

use crate::router::build_router;
use crate::state::AppState;

/// Build the Axum application from a fully-constructed state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Construct the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let objects: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(&config.storage));
    let fetcher: Arc<dyn ContentFetcher> = Arc::new(HttpContentFetcher::new()?);
    let verifier = Arc::new(TokenVerifier::new(&config.auth)?);

    let folder_repo: Arc<dyn FolderStore> = Arc::new(FolderRepository::new(db_pool.clone()));
    let layer_repo: Arc<dyn LayerStore> = Arc::new(LayerRepository::new(db_pool.clone()));

    let folder_service = Arc::new(FolderService::new(Arc::clone(&folder_repo)));
    let layer_service = Arc::new(LayerService::new(
        layer_repo,
        folder_repo,
        objects,
        fetcher,
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        verifier,
        folder_service,
        layer_service,
    })
}

/// Run the LayerHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    // Bucket bootstrap is best-effort: link-backed layers keep working
    // when the object store is down at boot.
    let objects = S3ObjectStore::new(&config.storage);
    if let Err(e) = objects.ensure_bucket().await {
        warn!(error = %e, bucket = %config.storage.bucket, "Object store bucket bootstrap failed");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("LayerHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
