//! # layerhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the LayerHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
