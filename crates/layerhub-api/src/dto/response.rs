//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use layerhub_entity::folder::model::Folder;
use layerhub_entity::layer::model::Layer;

/// Folder representation returned by every folder endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderResponse {
    /// Folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    pub parent_id: Option<i64>,
    /// Creating identity.
    pub created_by: String,
    /// Last modifying identity.
    pub modified_by: String,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Last modification timestamp.
    pub modification_date: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            parent_id: folder.parent_id,
            created_by: folder.created_by,
            modified_by: folder.modified_by,
            creation_date: folder.creation_date,
            modification_date: folder.modification_date,
        }
    }
}

/// Layer representation returned by every layer endpoint.
///
/// Only the creation timestamp is exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerResponse {
    /// Layer ID.
    pub id: i64,
    /// Layer name.
    pub name: String,
    /// Content retrieval URL.
    pub file_link: String,
    /// Containing folder ID.
    pub folder_id: Option<i64>,
    /// Creating identity.
    pub created_by: String,
    /// Last modifying identity.
    pub modified_by: String,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
}

impl From<Layer> for LayerResponse {
    fn from(layer: Layer) -> Self {
        Self {
            id: layer.id,
            name: layer.name,
            file_link: layer.file_link,
            folder_id: layer.folder_id,
            created_by: layer.created_by,
            modified_by: layer.modified_by,
            creation_date: layer.creation_date,
        }
    }
}

/// Status message returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Human-readable outcome.
    pub status: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}
