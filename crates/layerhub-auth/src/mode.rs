//! Authentication mode switch.

use layerhub_core::error::AppError;

/// How inbound bearer tokens are verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// No verification; every request acts as the anonymous identity.
    Disabled,
    /// RS256 verification against the Keycloak realm public key.
    Keycloak,
}

impl AuthMode {
    /// Parse the configured mode string.
    pub fn parse(mode: &str) -> Result<Self, AppError> {
        match mode.to_ascii_lowercase().as_str() {
            "disabled" => Ok(Self::Disabled),
            "keycloak" => Ok(Self::Keycloak),
            other => Err(AppError::configuration(format!(
                "Unknown auth mode '{other}' (expected 'disabled' or 'keycloak')"
            ))),
        }
    }
}
