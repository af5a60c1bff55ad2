//! Layer CRUD operations and file-lifecycle coordination.

use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use layerhub_core::error::AppError;
use layerhub_core::traits::storage::{ContentFetcher, ObjectStore};
use layerhub_core::types::ListQuery;
use layerhub_entity::folder::store::FolderStore;
use layerhub_entity::layer::model::{CreateLayer, Layer};
use layerhub_entity::layer::store::LayerStore;

use crate::context::RequestContext;
use crate::layer::upload::{self, UploadSource};

/// Manages layer CRUD operations and coordinates the object store.
///
/// Creation resolves `file_link` before the record is written: an
/// uploaded file goes to the object store first and the presigned
/// retrieval URL is persisted; a server link is persisted verbatim. The
/// two steps are not atomic — a database failure after a successful
/// upload leaves an orphaned blob, which is the one acknowledged
/// consistency gap of this design.
#[derive(Debug, Clone)]
pub struct LayerService {
    /// Layer repository.
    layers: Arc<dyn LayerStore>,
    /// Folder repository, for reference checks.
    folders: Arc<dyn FolderStore>,
    /// Object store gateway.
    objects: Arc<dyn ObjectStore>,
    /// Outbound content fetcher.
    fetcher: Arc<dyn ContentFetcher>,
}

/// Request to create a new layer.
#[derive(Debug, Clone)]
pub struct CreateLayerRequest {
    /// Layer name (globally unique).
    pub name: String,
    /// Containing folder (None for unfiled).
    pub folder_id: Option<i64>,
    /// The content source: exactly one of file or server link.
    pub source: UploadSource,
}

impl LayerService {
    /// Creates a new layer service.
    pub fn new(
        layers: Arc<dyn LayerStore>,
        folders: Arc<dyn FolderStore>,
        objects: Arc<dyn ObjectStore>,
        fetcher: Arc<dyn ContentFetcher>,
    ) -> Self {
        Self {
            layers,
            folders,
            objects,
            fetcher,
        }
    }

    /// Lists layers in insertion order, optionally windowed.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Layer>, AppError> {
        self.layers.list(query).await
    }

    /// Lists layers filed under a folder; `None` lists unfiled layers.
    ///
    /// A supplied folder must exist; the check gates the listing but the
    /// listing itself just filters on `folder_id`.
    pub async fn list_by_folder(
        &self,
        folder_id: Option<i64>,
        query: &ListQuery,
    ) -> Result<Vec<Layer>, AppError> {
        if let Some(folder_id) = folder_id {
            self.require_folder(folder_id).await?;
        }
        self.layers.list_by_folder(folder_id, query).await
    }

    /// Creates a new layer.
    ///
    /// Validation order: source XOR, folder reference, name uniqueness,
    /// file extension. Only after every check passes is the file uploaded
    /// (when present) and the record persisted.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateLayerRequest,
    ) -> Result<Layer, AppError> {
        req.source.validate()?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Layer name cannot be empty"));
        }

        if let Some(link) = &req.source.server_link {
            if Url::parse(link).is_err() {
                return Err(AppError::validation("Server link is not valid"));
            }
        }

        if let Some(folder_id) = req.folder_id {
            self.require_folder(folder_id).await?;
        }

        if self.layers.find_by_name(&req.name).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Layer with name {} already exists",
                req.name
            )));
        }

        if let Some(file) = &req.source.file {
            if !upload::is_geo_file(&file.filename) {
                return Err(AppError::unsupported_file_type(format!(
                    "File type .{} is not an accepted geo format",
                    upload::extension_of(&file.filename)
                )));
            }
        }

        let file_link = match req.source.file {
            Some(file) => {
                self.objects.put_object(&file.filename, file.data).await?;
                self.objects.presigned_get_url(&file.filename).await?
            }
            // validate() guarantees the link is present here
            None => req.source.server_link.unwrap_or_default(),
        };

        let layer = self
            .layers
            .create(&CreateLayer {
                name: req.name,
                folder_id: req.folder_id,
                file_link,
                created_by: ctx.actor().to_string(),
                modified_by: ctx.actor().to_string(),
            })
            .await?;

        info!(
            actor = %ctx.actor(),
            layer_id = layer.id,
            name = %layer.name,
            "Layer created"
        );

        Ok(layer)
    }

    /// Reassigns a layer to a folder, or unfiles it with `None`.
    ///
    /// The folder reference is the only mutable field after creation.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        layer_id: i64,
        folder_id: Option<i64>,
    ) -> Result<Layer, AppError> {
        if let Some(folder_id) = folder_id {
            self.require_folder(folder_id).await?;
        }

        self.require_layer(layer_id).await?;

        let layer = self
            .layers
            .set_folder(layer_id, folder_id, ctx.actor())
            .await?;

        info!(
            actor = %ctx.actor(),
            layer_id = layer.id,
            folder_id = ?layer.folder_id,
            "Layer moved"
        );

        Ok(layer)
    }

    /// Deletes a layer, removing the backing blob when the layer's link
    /// points at the object store.
    ///
    /// Blob removal is best-effort: a storage failure is logged as a
    /// warning and never blocks deleting the record.
    pub async fn delete(&self, ctx: &RequestContext, layer_id: i64) -> Result<(), AppError> {
        let layer = self.require_layer(layer_id).await?;

        if self.objects.is_store_link(&layer.file_link) {
            match self.objects.object_key_from_link(&layer.file_link) {
                Some(key) => {
                    if let Err(e) = self.objects.delete_object(&key).await {
                        warn!(
                            layer_id,
                            key = %key,
                            error = %e,
                            "Failed to delete layer blob; removing the record anyway"
                        );
                    }
                }
                None => {
                    warn!(
                        layer_id,
                        file_link = %layer.file_link,
                        "Store-hosted link carries no recognizable object key"
                    );
                }
            }
        }

        self.layers.delete(layer_id).await?;

        info!(actor = %ctx.actor(), layer_id, "Layer deleted");
        Ok(())
    }

    /// Fetches a layer's content.
    ///
    /// Store-hosted links are fetched server-side with a bounded timeout
    /// and the body is returned on HTTP 200. Every other outcome —
    /// non-200, fetch failure, or an externally-hosted link — returns the
    /// link itself: externally-hosted layers are deliberately not fetched
    /// server-side.
    pub async fn get_content(&self, layer_id: i64) -> Result<String, AppError> {
        let layer = self.require_layer(layer_id).await?;

        if self.objects.is_store_link(&layer.file_link) {
            match self.fetcher.fetch_text(&layer.file_link).await {
                Ok(Some(body)) => return Ok(body),
                Ok(None) => {}
                Err(e) => {
                    warn!(layer_id, error = %e, "Content fetch failed; returning the link");
                }
            }
        }

        Ok(layer.file_link)
    }

    /// Fetch a layer or fail with NotFound.
    async fn require_layer(&self, id: i64) -> Result<Layer, AppError> {
        self.layers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Layer with id {id} does not exist")))
    }

    /// Verify a folder reference or fail with NotFound.
    async fn require_folder(&self, folder_id: i64) -> Result<(), AppError> {
        if self.folders.find_by_id(folder_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Folder with id {folder_id} does not exist"
            )));
        }
        Ok(())
    }
}
