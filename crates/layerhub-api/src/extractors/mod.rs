//! Request extractors.

pub mod auth;
pub mod list;

pub use auth::AuthUser;
pub use list::ListParams;
