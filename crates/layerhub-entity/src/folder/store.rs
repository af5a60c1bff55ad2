//! Folder repository contract.

use async_trait::async_trait;

use layerhub_core::result::AppResult;
use layerhub_core::types::ListQuery;

use super::model::{CreateFolder, Folder, FolderPatch};

/// Persistence operations for folders.
///
/// Implemented against PostgreSQL in `layerhub-database`; the services
/// depend on this trait so the domain logic is testable without a live
/// database.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a folder by ID.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>>;

    /// Find a folder by its (globally unique) name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Folder>>;

    /// List folders in insertion order with an optional window.
    async fn list(&self, query: &ListQuery) -> AppResult<Vec<Folder>>;

    /// List folders under the given parent; `None` lists root folders.
    async fn list_by_parent(
        &self,
        parent_id: Option<i64>,
        query: &ListQuery,
    ) -> AppResult<Vec<Folder>>;

    /// Insert a new folder and return the stored row.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Apply a patch to a folder, stamping the modifier and modification
    /// date, and return the updated row.
    async fn update(
        &self,
        id: i64,
        patch: &FolderPatch,
        modified_by: &str,
    ) -> AppResult<Folder>;

    /// Delete a folder. Returns `true` if a row was removed. Descendant
    /// folders and their layers are removed by the storage-level cascade.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
