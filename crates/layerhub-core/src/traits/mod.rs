//! Core traits defined in `layerhub-core` and implemented by other crates.

pub mod storage;

pub use storage::{ContentFetcher, ObjectStore};
