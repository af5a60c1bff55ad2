//! In-memory fakes behind the store traits, for service-level tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;

use layerhub_auth::Identity;
use layerhub_core::error::AppError;
use layerhub_core::result::AppResult;
use layerhub_core::traits::storage::{ContentFetcher, ObjectStore};
use layerhub_core::types::ListQuery;
use layerhub_entity::folder::model::{CreateFolder, Folder, FolderPatch};
use layerhub_entity::folder::store::FolderStore;
use layerhub_entity::layer::model::{CreateLayer, Layer};
use layerhub_entity::layer::store::LayerStore;

use crate::context::RequestContext;

/// A request context acting as the "tester" identity.
pub fn test_context() -> RequestContext {
    RequestContext::new(Identity {
        subject: None,
        username: "tester".to_string(),
        roles: Vec::new(),
    })
}

fn window<T: Clone>(rows: &[T], query: &ListQuery) -> Vec<T> {
    let offset = query.offset.unwrap_or(0).max(0) as usize;
    let limit = query.limit.map(|l| l.max(0) as usize).unwrap_or(usize::MAX);
    rows.iter().skip(offset).take(limit).cloned().collect()
}

/// In-memory folder store.
#[derive(Debug, Default)]
pub struct MemoryFolderStore {
    rows: Mutex<Vec<Folder>>,
}

impl MemoryFolderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        Ok(self.rows.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Folder>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.name == name)
            .cloned())
    }

    async fn list(&self, query: &ListQuery) -> AppResult<Vec<Folder>> {
        Ok(window(&self.rows.lock().unwrap(), query))
    }

    async fn list_by_parent(
        &self,
        parent_id: Option<i64>,
        query: &ListQuery,
    ) -> AppResult<Vec<Folder>> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<Folder> = rows
            .iter()
            .filter(|f| f.parent_id == parent_id)
            .cloned()
            .collect();
        Ok(window(&matching, query))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let folder = Folder {
            id: rows.last().map(|f| f.id + 1).unwrap_or(1),
            name: data.name.clone(),
            parent_id: data.parent_id,
            created_by: data.created_by.clone(),
            modified_by: data.modified_by.clone(),
            creation_date: now,
            modification_date: now,
        };
        rows.push(folder.clone());
        Ok(folder)
    }

    async fn update(
        &self,
        id: i64,
        patch: &FolderPatch,
        modified_by: &str,
    ) -> AppResult<Folder> {
        let mut rows = self.rows.lock().unwrap();
        let folder = rows
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("Folder with id {id} does not exist")))?;
        if let Some(name) = &patch.name {
            folder.name = name.clone();
        }
        if let Some(parent_id) = patch.parent_id {
            folder.parent_id = Some(parent_id);
        }
        folder.modified_by = modified_by.to_string();
        folder.modification_date = Utc::now();
        Ok(folder.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        Ok(rows.len() < before)
    }
}

/// In-memory layer store.
#[derive(Debug, Default)]
pub struct MemoryLayerStore {
    rows: Mutex<Vec<Layer>>,
}

impl MemoryLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl LayerStore for MemoryLayerStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Layer>> {
        Ok(self.rows.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Layer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.name == name)
            .cloned())
    }

    async fn list(&self, query: &ListQuery) -> AppResult<Vec<Layer>> {
        Ok(window(&self.rows.lock().unwrap(), query))
    }

    async fn list_by_folder(
        &self,
        folder_id: Option<i64>,
        query: &ListQuery,
    ) -> AppResult<Vec<Layer>> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<Layer> = rows
            .iter()
            .filter(|l| l.folder_id == folder_id)
            .cloned()
            .collect();
        Ok(window(&matching, query))
    }

    async fn create(&self, data: &CreateLayer) -> AppResult<Layer> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let layer = Layer {
            id: rows.last().map(|l| l.id + 1).unwrap_or(1),
            name: data.name.clone(),
            folder_id: data.folder_id,
            file_link: data.file_link.clone(),
            created_by: data.created_by.clone(),
            modified_by: data.modified_by.clone(),
            creation_date: now,
            modification_date: now,
        };
        rows.push(layer.clone());
        Ok(layer)
    }

    async fn set_folder(
        &self,
        id: i64,
        folder_id: Option<i64>,
        modified_by: &str,
    ) -> AppResult<Layer> {
        let mut rows = self.rows.lock().unwrap();
        let layer = rows
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::not_found(format!("Layer with id {id} does not exist")))?;
        layer.folder_id = folder_id;
        layer.modified_by = modified_by.to_string();
        layer.modification_date = Utc::now();
        Ok(layer.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.id != id);
        Ok(rows.len() < before)
    }
}

/// In-memory object store pretending to live at `minio.test:9000`.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    blobs: Mutex<HashMap<String, Bytes>>,
    fail_deletes: AtomicBool,
}

const FAKE_ENDPOINT: &str = "http://minio.test:9000";
const FAKE_BUCKET: &str = "layers";

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.blobs.lock().unwrap().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.lock().unwrap().is_empty()
    }

    /// Make every subsequent delete fail, simulating a store outage.
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn ensure_bucket(&self) -> AppResult<()> {
        Ok(())
    }

    async fn put_object(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.blobs.lock().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    async fn presigned_get_url(&self, key: &str) -> AppResult<String> {
        Ok(format!(
            "{FAKE_ENDPOINT}/{FAKE_BUCKET}/{key}?X-Amz-Expires=604800"
        ))
    }

    async fn delete_object(&self, key: &str) -> AppResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::storage("simulated store outage"));
        }
        self.blobs.lock().unwrap().remove(key);
        Ok(())
    }

    fn is_store_link(&self, link: &str) -> bool {
        link.starts_with(FAKE_ENDPOINT)
    }

    fn object_key_from_link(&self, link: &str) -> Option<String> {
        let path = link.strip_prefix(&format!("{FAKE_ENDPOINT}/{FAKE_BUCKET}/"))?;
        let key = path.split('?').next().unwrap_or(path);
        if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        }
    }
}

/// Content fetcher returning a canned outcome.
#[derive(Debug, Default)]
pub struct StaticContentFetcher {
    body: Option<String>,
    fail: bool,
}

impl StaticContentFetcher {
    /// Every fetch answers HTTP 200 with the given body.
    pub fn body(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            fail: false,
        }
    }

    /// Every fetch answers with a non-200 status.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Every fetch fails at the transport level.
    pub fn failing() -> Self {
        Self {
            body: None,
            fail: true,
        }
    }
}

#[async_trait]
impl ContentFetcher for StaticContentFetcher {
    async fn fetch_text(&self, _url: &str) -> AppResult<Option<String>> {
        if self.fail {
            return Err(AppError::storage("simulated fetch failure"));
        }
        Ok(self.body.clone())
    }
}
