//! Layer CRUD and content handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use serde::Deserialize;

use layerhub_core::error::AppError;
use layerhub_service::layer::service::CreateLayerRequest as SvcCreateLayer;
use layerhub_service::layer::upload::{LayerFile, UploadSource};

use crate::dto::request::UpdateLayerRequest;
use crate::dto::response::{LayerResponse, StatusResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ListParams};
use crate::state::AppState;

/// Query parameters for listing layers by folder.
#[derive(Debug, Clone, Deserialize)]
pub struct ByFolderParams {
    /// Containing folder; omitted lists unfiled layers.
    pub folder_id: Option<i64>,
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Number of items to skip.
    pub offset: Option<i64>,
}

/// Query parameter naming the layer to create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParams {
    /// Layer name.
    pub name: String,
}

/// Query parameter identifying a layer.
#[derive(Debug, Clone, Deserialize)]
pub struct IdParams {
    /// Layer ID.
    pub id: i64,
}

/// GET /api/layers
pub async fn list_layers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<LayerResponse>>, ApiError> {
    let layers = state.layer_service.list(&params.into_query()).await?;
    Ok(Json(layers.into_iter().map(LayerResponse::from).collect()))
}

/// GET /api/layers/by-folder
pub async fn list_by_folder(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ByFolderParams>,
) -> Result<Json<Vec<LayerResponse>>, ApiError> {
    let query = layerhub_core::types::ListQuery::new(params.limit, params.offset);
    let layers = state
        .layer_service
        .list_by_folder(params.folder_id, &query)
        .await?;
    Ok(Json(layers.into_iter().map(LayerResponse::from).collect()))
}

/// POST /api/layers?name=
///
/// Multipart body carrying exactly one of a `file` part or a
/// `server_link` field, plus an optional `folder_id` field.
pub async fn create_layer(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<CreateParams>,
    mut multipart: Multipart,
) -> Result<Json<LayerResponse>, ApiError> {
    let mut source = UploadSource::default();
    let mut folder_id = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| AppError::validation("Uploaded file is missing a filename"))?
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
                source.file = Some(LayerFile { filename, data });
            }
            Some("server_link") => {
                let link = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read server_link: {e}")))?;
                if !link.is_empty() {
                    source.server_link = Some(link);
                }
            }
            Some("folder_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read folder_id: {e}")))?;
                if !text.is_empty() {
                    folder_id = Some(
                        text.parse::<i64>()
                            .map_err(|_| AppError::validation("folder_id must be an integer"))?,
                    );
                }
            }
            _ => {}
        }
    }

    let layer = state
        .layer_service
        .create(
            &auth,
            SvcCreateLayer {
                name: params.name,
                folder_id,
                source,
            },
        )
        .await?;

    Ok(Json(layer.into()))
}

/// PATCH /api/layers/{id}
pub async fn update_layer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(layer_id): Path<i64>,
    Json(req): Json<UpdateLayerRequest>,
) -> Result<Json<LayerResponse>, ApiError> {
    let layer = state
        .layer_service
        .update(&auth, layer_id, req.folder_id)
        .await?;
    Ok(Json(layer.into()))
}

/// DELETE /api/layers?id=
pub async fn delete_layer(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<IdParams>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.layer_service.delete(&auth, params.id).await?;
    Ok(Json(StatusResponse {
        status: format!("Layer with id {} was successfully deleted", params.id),
    }))
}

/// GET /api/layers/content?id=
///
/// Returns the fetched content for store-hosted layers, or the layer's
/// link verbatim for externally-hosted ones, as plain text.
pub async fn layer_content(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<IdParams>,
) -> Result<String, ApiError> {
    let content = state.layer_service.get_content(params.id).await?;
    Ok(content)
}
