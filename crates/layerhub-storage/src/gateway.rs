//! S3-compatible object store gateway.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use layerhub_core::config::StorageConfig;
use layerhub_core::error::{AppError, ErrorKind};
use layerhub_core::result::AppResult;
use layerhub_core::traits::storage::ObjectStore;

use crate::link;

/// Object store gateway over an S3-compatible endpoint.
///
/// Path-style addressing is forced so that presigned URLs keep the shape
/// `http://endpoint/bucket/key`, which [`ObjectStore::object_key_from_link`]
/// relies on.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    endpoint: String,
    presign_ttl: Duration,
}

impl S3ObjectStore {
    /// Create a new gateway from storage configuration.
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "layerhub",
        );

        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint_url())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            endpoint: config.endpoint.clone(),
            presign_ttl: Duration::from_secs(config.presign_ttl_seconds),
        }
    }

    /// The bucket this gateway writes to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn ensure_bucket(&self) -> AppResult<()> {
        let head = self.client.head_bucket().bucket(&self.bucket).send().await;
        if head.is_ok() {
            return Ok(());
        }

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create bucket '{}'", self.bucket),
                    e,
                )
            })?;

        info!(bucket = %self.bucket, "Created object store bucket");
        Ok(())
    }

    async fn put_object(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to store object '{key}'"),
                    e,
                )
            })?;
        Ok(())
    }

    async fn presigned_get_url(&self, key: &str) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(self.presign_ttl).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Invalid presign expiry", e)
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to presign retrieval URL for '{key}'"),
                    e,
                )
            })?;

        Ok(request.uri().to_string())
    }

    async fn delete_object(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object '{key}'"),
                    e,
                )
            })?;
        Ok(())
    }

    fn is_store_link(&self, link: &str) -> bool {
        link::same_authority(&self.endpoint, link)
    }

    fn object_key_from_link(&self, link: &str) -> Option<String> {
        link::object_key(&self.bucket, link)
    }
}
