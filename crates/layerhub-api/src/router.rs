//! Route definitions for the LayerHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(layer_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Folder CRUD and lookups.
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders", patch(handlers::folder::update_folder))
        .route("/folders", delete(handlers::folder::delete_folder))
        .route("/folders/by-parent", get(handlers::folder::list_by_parent))
}

/// Layer CRUD, lookups, and content retrieval.
fn layer_routes() -> Router<AppState> {
    Router::new()
        .route("/layers", get(handlers::layer::list_layers))
        .route("/layers", post(handlers::layer::create_layer))
        .route("/layers", delete(handlers::layer::delete_layer))
        .route("/layers/by-folder", get(handlers::layer::list_by_folder))
        .route("/layers/content", get(handlers::layer::layer_content))
        .route("/layers/{id}", patch(handlers::layer::update_layer))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
