//! `AuthUser` extractor — verifies the bearer token and injects the
//! request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use layerhub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated request context available in handlers.
///
/// In disabled-auth mode every request resolves to the anonymous
/// identity without touching the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let identity = state.verifier.verify(token).await?;

        Ok(AuthUser(RequestContext::new(identity)))
    }
}
