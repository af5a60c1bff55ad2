//! Token claims published by the identity provider.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Subset of the OpenID Connect claims LayerHub cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Stable subject identifier.
    pub sub: Option<String>,
    /// Preferred username for display and attribution.
    pub preferred_username: Option<String>,
    /// Full name fallback when no preferred username is set.
    pub name: Option<String>,
    /// Expiration timestamp (seconds since epoch), validated by the decoder.
    pub exp: i64,
    /// Realm-level role grants.
    pub realm_access: Option<RealmAccess>,
}

/// Realm role container as Keycloak publishes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmAccess {
    /// Role names.
    pub roles: Vec<String>,
}

impl Claims {
    /// Resolve the claims into the identity used for attribution.
    pub fn into_identity(self) -> Identity {
        let username = self
            .preferred_username
            .or(self.name)
            .or_else(|| self.sub.clone())
            .unwrap_or_else(|| "Anonymous".to_string());

        Identity {
            subject: self.sub,
            username,
            roles: self.realm_access.map(|r| r.roles).unwrap_or_default(),
        }
    }
}
