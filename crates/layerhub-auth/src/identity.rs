//! The authenticated identity threaded through every service call.

use serde::{Deserialize, Serialize};

/// Identity resolved from a verified bearer token.
///
/// Attribution fields on created and modified records come from
/// `username`; there is no implicit global "current user".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Stable subject identifier from the token (absent in disabled mode).
    pub subject: Option<String>,
    /// Preferred username used for record attribution.
    pub username: String,
    /// Realm roles granted to the identity.
    pub roles: Vec<String>,
}

impl Identity {
    /// The identity every request acts as when verification is disabled.
    pub fn anonymous() -> Self {
        Self {
            subject: None,
            username: "Anonymous".to_string(),
            roles: vec!["__admin".to_string()],
        }
    }
}
