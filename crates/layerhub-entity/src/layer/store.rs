//! Layer repository contract.

use async_trait::async_trait;

use layerhub_core::result::AppResult;
use layerhub_core::types::ListQuery;

use super::model::{CreateLayer, Layer};

/// Persistence operations for layers.
#[async_trait]
pub trait LayerStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a layer by ID.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Layer>>;

    /// Find a layer by its (globally unique) name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Layer>>;

    /// List layers in insertion order with an optional window.
    async fn list(&self, query: &ListQuery) -> AppResult<Vec<Layer>>;

    /// List layers filed under the given folder; `None` lists unfiled layers.
    async fn list_by_folder(
        &self,
        folder_id: Option<i64>,
        query: &ListQuery,
    ) -> AppResult<Vec<Layer>>;

    /// Insert a new layer and return the stored row.
    async fn create(&self, data: &CreateLayer) -> AppResult<Layer>;

    /// Reassign a layer to a folder (or unfile it with `None`), stamping
    /// the modifier and modification date. Returns the updated row.
    async fn set_folder(
        &self,
        id: i64,
        folder_id: Option<i64>,
        modified_by: &str,
    ) -> AppResult<Layer>;

    /// Delete a layer record. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
