//! Folder CRUD handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use layerhub_service::folder::service::{
    CreateFolderRequest as SvcCreateFolder, UpdateFolderRequest as SvcUpdateFolder,
};

use crate::dto::request::{CreateFolderRequest, UpdateFolderRequest};
use crate::dto::response::{FolderResponse, StatusResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// Query parameters for listing folders by parent.
#[derive(Debug, Clone, Deserialize)]
pub struct ByParentParams {
    /// Parent folder; omitted lists root-level folders.
    pub parent_id: Option<i64>,
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Number of items to skip.
    pub offset: Option<i64>,
}

/// Query parameter identifying the folder to delete.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteParams {
    /// Folder ID.
    pub id: i64,
}

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FolderResponse>>, ApiError> {
    let folders = state.folder_service.list(&params.into_query()).await?;
    Ok(Json(folders.into_iter().map(FolderResponse::from).collect()))
}

/// GET /api/folders/by-parent
pub async fn list_by_parent(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ByParentParams>,
) -> Result<Json<Vec<FolderResponse>>, ApiError> {
    let query = layerhub_core::types::ListQuery::new(params.limit, params.offset);
    let folders = state
        .folder_service
        .list_by_parent(params.parent_id, &query)
        .await?;
    Ok(Json(folders.into_iter().map(FolderResponse::from).collect()))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<FolderResponse>, ApiError> {
    let folder = state
        .folder_service
        .create(
            &auth,
            SvcCreateFolder {
                name: req.name,
                parent_id: req.parent_id,
            },
        )
        .await?;
    Ok(Json(folder.into()))
}

/// PATCH /api/folders
pub async fn update_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateFolderRequest>,
) -> Result<Json<FolderResponse>, ApiError> {
    let folder = state
        .folder_service
        .update(
            &auth,
            SvcUpdateFolder {
                id: req.id,
                name: req.name,
                parent_id: req.parent_id,
            },
        )
        .await?;
    Ok(Json(folder.into()))
}

/// DELETE /api/folders?id=
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<DeleteParams>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.folder_service.delete(&auth, params.id).await?;
    Ok(Json(StatusResponse {
        status: format!("Folder with id {} was successfully deleted", params.id),
    }))
}
