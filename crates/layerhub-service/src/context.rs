//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};

use layerhub_auth::Identity;

/// Context for the current authenticated request.
///
/// Built by the API layer's auth extractor and passed into every service
/// method so each operation knows *who* is acting; attribution fields on
/// created and modified records come from here rather than from any
/// implicit global.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The verified identity performing the request.
    pub identity: Identity,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            request_time: Utc::now(),
        }
    }

    /// The username recorded in `created_by` / `modified_by` fields.
    pub fn actor(&self) -> &str {
        &self.identity.username
    }
}
