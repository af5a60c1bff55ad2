//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Update folder request body; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    /// The folder to update.
    pub id: i64,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New parent folder.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Update layer request body. `folder_id` is always applied: null
/// unfiles the layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLayerRequest {
    /// Target folder.
    #[serde(default)]
    pub folder_id: Option<i64>,
}
