//! Object store configuration.

use serde::{Deserialize, Serialize};

/// S3-compatible object store configuration (MinIO in the default deployment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store endpoint authority, `host:port` without a scheme.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Region name (ignored by MinIO but required by the SDK).
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket holding all layer blobs.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Whether to connect over TLS.
    #[serde(default)]
    pub secure: bool,
    /// Lifetime of presigned retrieval URLs in seconds.
    #[serde(default = "default_presign_ttl")]
    pub presign_ttl_seconds: u64,
}

impl StorageConfig {
    /// Full endpoint URL with the scheme implied by the `secure` flag.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}", self.endpoint)
    }
}

fn default_endpoint() -> String {
    "localhost:9000".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_bucket() -> String {
    "layers".to_string()
}

fn default_presign_ttl() -> u64 {
    604_800 // 7 days
}
