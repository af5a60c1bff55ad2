//! Folder CRUD operations and hierarchy invariants.

use std::sync::Arc;

use tracing::info;

use layerhub_core::error::AppError;
use layerhub_core::types::ListQuery;
use layerhub_entity::folder::model::{CreateFolder, Folder, FolderPatch};
use layerhub_entity::folder::store::FolderStore;

use crate::context::RequestContext;

/// Manages folder CRUD operations.
///
/// All validation happens before any write (check-then-execute), so a
/// failed request never leaves partial state behind.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folders: Arc<dyn FolderStore>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name (globally unique).
    pub name: String,
    /// Parent folder ID (None for root-level).
    pub parent_id: Option<i64>,
}

/// Request to update a folder; absent fields are left untouched.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateFolderRequest {
    /// The folder to update.
    pub id: i64,
    /// New name.
    pub name: Option<String>,
    /// New parent folder.
    pub parent_id: Option<i64>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folders: Arc<dyn FolderStore>) -> Self {
        Self { folders }
    }

    /// Lists folders in insertion order, optionally windowed.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Folder>, AppError> {
        self.folders.list(query).await
    }

    /// Lists folders under a parent; `None` lists root-level folders.
    ///
    /// A supplied parent must exist.
    pub async fn list_by_parent(
        &self,
        parent_id: Option<i64>,
        query: &ListQuery,
    ) -> Result<Vec<Folder>, AppError> {
        if let Some(parent_id) = parent_id {
            self.require_folder(parent_id).await?;
        }
        self.folders.list_by_parent(parent_id, query).await
    }

    /// Creates a new folder.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        if self.folders.find_by_name(&req.name).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Folder with name {} already exists",
                req.name
            )));
        }

        if let Some(parent_id) = req.parent_id {
            self.require_parent(parent_id).await?;
        }

        let folder = self
            .folders
            .create(&CreateFolder {
                name: req.name,
                parent_id: req.parent_id,
                created_by: ctx.actor().to_string(),
                modified_by: ctx.actor().to_string(),
            })
            .await?;

        info!(
            actor = %ctx.actor(),
            folder_id = folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Applies a partial update to a folder.
    ///
    /// Renaming to the folder's current name is a no-op, not a conflict.
    /// The hierarchy is not checked for cycles on re-parenting.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        req: UpdateFolderRequest,
    ) -> Result<Folder, AppError> {
        let current = self.require_folder(req.id).await?;

        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Folder name cannot be empty"));
            }
            if *name != current.name && self.folders.find_by_name(name).await?.is_some() {
                return Err(AppError::already_exists(format!(
                    "Folder with name {name} already exists"
                )));
            }
        }

        if let Some(parent_id) = req.parent_id {
            self.require_parent(parent_id).await?;
        }

        let patch = FolderPatch {
            name: req.name,
            parent_id: req.parent_id,
        };

        let folder = self.folders.update(req.id, &patch, ctx.actor()).await?;

        info!(
            actor = %ctx.actor(),
            folder_id = folder.id,
            name = %folder.name,
            "Folder updated"
        );

        Ok(folder)
    }

    /// Deletes a folder.
    ///
    /// The storage-level cascade removes every descendant folder and the
    /// layers filed under them; blobs of cascade-deleted layers stay in
    /// the object store.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        self.require_folder(id).await?;
        self.folders.delete(id).await?;

        info!(actor = %ctx.actor(), folder_id = id, "Folder deleted");
        Ok(())
    }

    /// Fetch a folder or fail with NotFound.
    async fn require_folder(&self, id: i64) -> Result<Folder, AppError> {
        self.folders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder with id {id} does not exist")))
    }

    /// Verify a parent reference or fail with NotFound.
    async fn require_parent(&self, parent_id: i64) -> Result<(), AppError> {
        if self.folders.find_by_id(parent_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Parent folder with id {parent_id} does not exist"
            )));
        }
        Ok(())
    }
}
