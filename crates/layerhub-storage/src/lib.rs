//! # layerhub-storage
//!
//! Object store gateway for LayerHub. Implements the
//! [`layerhub_core::traits::ObjectStore`] trait against an S3-compatible
//! endpoint (MinIO in the default deployment) and provides the
//! bounded-timeout HTTP content fetcher used by layer content retrieval.

pub mod fetcher;
pub mod gateway;
pub mod link;

pub use fetcher::HttpContentFetcher;
pub use gateway::S3ObjectStore;
