//! Limit/offset query parameters for list endpoints.

use serde::{Deserialize, Serialize};

/// Optional pagination window for list queries.
///
/// Both fields are optional: an empty query returns the full collection in
/// insertion order. Values are passed through to the SQL `LIMIT`/`OFFSET`
/// clauses unchanged (a null bind means unbounded).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Number of items to skip from the start of the collection.
    pub offset: Option<i64>,
}

impl ListQuery {
    /// Create a bounded query window.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Whether the query requests the full, unpaginated collection.
    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }
}
