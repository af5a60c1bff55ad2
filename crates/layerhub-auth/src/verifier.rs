//! Bearer-token verification against the identity provider.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use moka::future::Cache;
use tokio::sync::RwLock;
use tracing::warn;

use layerhub_core::config::AuthConfig;
use layerhub_core::error::AppError;

use crate::claims::Claims;
use crate::identity::Identity;
use crate::mode::AuthMode;

/// Detail message used for every identity-provider availability failure.
const PROVIDER_UNAVAILABLE: &str = "Token verification service unavailable";

/// Verifies bearer tokens and resolves them into an [`Identity`].
///
/// In `keycloak` mode the realm public key is fetched once and kept for
/// the process lifetime; verified token → identity lookups are cached
/// with a TTL so repeated requests skip both the decode and the optional
/// userinfo round trip.
pub struct TokenVerifier {
    mode: AuthMode,
    config: AuthConfig,
    http: reqwest::Client,
    decoding_key: RwLock<Option<DecodingKey>>,
    identities: Cache<String, Identity>,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("mode", &self.mode)
            .finish()
    }
}

impl TokenVerifier {
    /// Create a verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let mode = AuthMode::parse(&config.mode)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    layerhub_core::error::ErrorKind::Internal,
                    "Failed to build identity provider client",
                    e,
                )
            })?;

        let identities = Cache::builder()
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Ok(Self {
            mode,
            config: config.clone(),
            http,
            decoding_key: RwLock::new(None),
            identities,
        })
    }

    /// The verification mode this verifier runs in.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Verify the bearer token (if any) and resolve the acting identity.
    ///
    /// In disabled mode the token is ignored entirely. In keycloak mode a
    /// missing or invalid token fails with an authentication error; an
    /// unreachable provider fails with a service-unavailable error.
    pub async fn verify(&self, bearer: Option<&str>) -> Result<Identity, AppError> {
        match self.mode {
            AuthMode::Disabled => Ok(Identity::anonymous()),
            AuthMode::Keycloak => {
                let token =
                    bearer.ok_or_else(|| AppError::authentication("Missing bearer token"))?;

                if let Some(identity) = self.identities.get(token).await {
                    return Ok(identity);
                }

                let key = self.decoding_key().await?;
                let claims = self.decode_token(token, &key)?;

                let mut identity = claims.into_identity();
                if !self.config.user_info_url.is_empty() {
                    if let Some(username) = self.fetch_user_info(token).await? {
                        identity.username = username;
                    }
                }

                self.identities
                    .insert(token.to_string(), identity.clone())
                    .await;
                Ok(identity)
            }
        }
    }

    /// Fetch (or reuse) the realm's RS256 public key.
    async fn decoding_key(&self) -> Result<DecodingKey, AppError> {
        if let Some(key) = self.decoding_key.read().await.as_ref() {
            return Ok(key.clone());
        }

        let realm: serde_json::Value = self
            .http
            .get(&self.config.public_key_url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach identity provider");
                AppError::service_unavailable(PROVIDER_UNAVAILABLE)
            })?
            .error_for_status()
            .map_err(|_| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?
            .json()
            .await
            .map_err(|_| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?;

        let public_key = realm
            .get("public_key")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?;

        let pem = wrap_public_key_pem(public_key);
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|_| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?;

        *self.decoding_key.write().await = Some(key.clone());
        Ok(key)
    }

    /// Decode and validate the token signature, expiry, and structure.
    fn decode_token(&self, token: &str, key: &DecodingKey) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 5;

        decode::<Claims>(token, key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!(error = %e, "Token validation failed");
                AppError::authentication(e.to_string())
            })
    }

    /// Fetch the preferred username from the userinfo endpoint.
    async fn fetch_user_info(&self, token: &str) -> Result<Option<String>, AppError> {
        let info: serde_json::Value = self
            .http
            .get(&self.config.user_info_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?
            .error_for_status()
            .map_err(|_| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?
            .json()
            .await
            .map_err(|_| AppError::service_unavailable(PROVIDER_UNAVAILABLE))?;

        Ok(info
            .get("preferred_username")
            .and_then(|v| v.as_str())
            .map(String::from))
    }
}

/// Wrap the raw base64 key body the realm endpoint publishes into PEM.
fn wrap_public_key_pem(key: &str) -> String {
    format!("-----BEGIN PUBLIC KEY-----\n{key}\n-----END PUBLIC KEY-----")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: &str) -> AuthConfig {
        AuthConfig {
            mode: mode.to_string(),
            ..AuthConfig::default()
        }
    }

    #[tokio::test]
    async fn test_disabled_mode_ignores_token() {
        let verifier = TokenVerifier::new(&config("disabled")).expect("verifier");
        let identity = verifier.verify(None).await.expect("identity");
        assert_eq!(identity.username, "Anonymous");

        let identity = verifier.verify(Some("whatever")).await.expect("identity");
        assert_eq!(identity.username, "Anonymous");
    }

    #[tokio::test]
    async fn test_keycloak_mode_requires_token() {
        let verifier = TokenVerifier::new(&config("keycloak")).expect("verifier");
        let err = verifier.verify(None).await.expect_err("should fail");
        assert_eq!(err.kind, layerhub_core::error::ErrorKind::Authentication);
    }

    #[test]
    fn test_wrap_public_key_pem() {
        let pem = wrap_public_key_pem("MIIBIjAN");
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert!(pem.ends_with("\n-----END PUBLIC KEY-----"));
        assert!(pem.contains("MIIBIjAN"));
    }
}
