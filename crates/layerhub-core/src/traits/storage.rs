//! Object store gateway and outbound content-fetch traits.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the blob store backing file-based layers.
///
/// The [`ObjectStore`] trait is defined here in `layerhub-core` and
/// implemented in `layerhub-storage` against an S3-compatible endpoint.
/// Objects are addressed by name; retrieval goes through time-limited
/// presigned URLs so that a layer's `file_link` is always an ordinary
/// HTTP URL regardless of where the content lives.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create the configured bucket if it does not exist yet.
    async fn ensure_bucket(&self) -> AppResult<()>;

    /// Store an object under the given key, overwriting any previous object.
    async fn put_object(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Issue a time-limited retrieval URL for the given key.
    async fn presigned_get_url(&self, key: &str) -> AppResult<String>;

    /// Delete the object stored under the given key.
    async fn delete_object(&self, key: &str) -> AppResult<()>;

    /// Whether the given link points at this store's endpoint.
    fn is_store_link(&self, link: &str) -> bool;

    /// Extract the object key from a retrieval URL issued by this store.
    ///
    /// Returns `None` for links that do not address an object in the
    /// configured bucket.
    fn object_key_from_link(&self, link: &str) -> Option<String>;
}

/// Trait for fetching layer content over HTTP.
///
/// Implemented in `layerhub-storage` with a bounded-timeout client; the
/// layer service falls back to returning the raw link when a fetch does
/// not produce a 200 response.
#[async_trait]
pub trait ContentFetcher: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the URL and return the response body as text on HTTP 200.
    ///
    /// A non-200 response yields `Ok(None)`; transport failures (timeout,
    /// connection refused) yield an error.
    async fn fetch_text(&self, url: &str) -> AppResult<Option<String>>;
}
