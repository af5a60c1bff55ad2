//! # layerhub-auth
//!
//! Bearer-token verification for LayerHub. Supports two modes selected by
//! configuration: `disabled` (every request acts as the anonymous
//! identity) and `keycloak` (RS256 tokens verified against the identity
//! provider's published realm key, with cached token → identity lookups).

pub mod claims;
pub mod identity;
pub mod mode;
pub mod verifier;

pub use identity::Identity;
pub use mode::AuthMode;
pub use verifier::TokenVerifier;
