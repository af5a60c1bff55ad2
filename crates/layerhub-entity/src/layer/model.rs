//! Layer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named reference to geospatial content.
///
/// `file_link` is the single authoritative retrieval URL, set once at
/// creation: either a time-limited object-store URL (the layer was created
/// from an uploaded file) or an external server link stored verbatim. No
/// operation migrates a layer between the two after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Layer {
    /// Unique layer identifier, assigned on creation.
    pub id: i64,
    /// Layer name, unique across all layers.
    pub name: String,
    /// Containing folder (null means unfiled).
    pub folder_id: Option<i64>,
    /// Authoritative content retrieval URL.
    pub file_link: String,
    /// Identity that created the layer.
    pub created_by: String,
    /// Identity that last modified the layer.
    pub modified_by: String,
    /// When the layer was created.
    pub creation_date: DateTime<Utc>,
    /// When the layer was last modified.
    pub modification_date: DateTime<Utc>,
}

/// Data required to create a new layer record.
///
/// `file_link` is resolved before the record is written: uploads go to the
/// object store first and the presigned URL lands here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLayer {
    /// Layer name.
    pub name: String,
    /// Containing folder (None for unfiled).
    pub folder_id: Option<i64>,
    /// Resolved content retrieval URL.
    pub file_link: String,
    /// Identity creating the layer.
    pub created_by: String,
    /// Identity recorded as the last modifier (same as creator here).
    pub modified_by: String,
}
