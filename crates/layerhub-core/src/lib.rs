//! # layerhub-core
//!
//! Core crate for LayerHub. Contains the trait seams for the object store
//! gateway and outbound content fetching, configuration schemas, shared
//! list-query types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LayerHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
