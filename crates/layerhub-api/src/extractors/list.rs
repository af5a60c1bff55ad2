//! Limit/offset query parameter extractor.

use serde::Deserialize;

use layerhub_core::types::ListQuery;

/// Query parameters for list endpoints; both are optional and an empty
/// query returns the full collection.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListParams {
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Number of items to skip.
    pub offset: Option<i64>,
}

impl ListParams {
    /// Converts to the core list query.
    pub fn into_query(self) -> ListQuery {
        ListQuery::new(self.limit, self.offset)
    }
}
