//! # layerhub-api
//!
//! HTTP API layer for LayerHub built on Axum: routing, handlers, request
//! and response DTOs, the auth extractor, and the boundary-owned mapping
//! from domain error kinds to HTTP status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
