//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named container in the layer hierarchy.
///
/// Folder names are globally unique. `parent_id` is null for root-level
/// folders; deleting a folder cascades to its descendant folders and the
/// layers filed under them at the storage level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier, assigned on creation.
    pub id: i64,
    /// Folder name, unique across all folders.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<i64>,
    /// Identity that created the folder.
    pub created_by: String,
    /// Identity that last modified the folder.
    pub modified_by: String,
    /// When the folder was created.
    pub creation_date: DateTime<Utc>,
    /// When the folder was last modified.
    pub modification_date: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<i64>,
    /// Identity creating the folder.
    pub created_by: String,
    /// Identity recorded as the last modifier (same as creator here).
    pub modified_by: String,
}

/// Explicit optional-field update for a folder.
///
/// Each field is applied only when populated; absent fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderPatch {
    /// New folder name.
    pub name: Option<String>,
    /// New parent folder.
    pub parent_id: Option<i64>,
}

impl FolderPatch {
    /// Whether the patch changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent_id.is_none()
    }
}
