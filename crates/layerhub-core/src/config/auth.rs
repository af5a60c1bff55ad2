//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token verification configuration.
///
/// `mode` selects the verification strategy: `"disabled"` accepts every
/// request as the anonymous identity, `"keycloak"` verifies RS256 tokens
/// against the identity provider's published realm key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Verification mode: `"disabled"` or `"keycloak"`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Realm endpoint that publishes the provider's public key.
    #[serde(default)]
    pub public_key_url: String,
    /// OpenID userinfo endpoint; empty derives it from `public_key_url`.
    #[serde(default)]
    pub user_info_url: String,
    /// Timeout for identity-provider requests in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// TTL for cached token → identity lookups in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            public_key_url: String::new(),
            user_info_url: String::new(),
            request_timeout_seconds: default_request_timeout(),
            cache_ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_mode() -> String {
    "disabled".to_string()
}

fn default_request_timeout() -> u64 {
    5
}

fn default_cache_ttl() -> u64 {
    300
}
