//! # layerhub-service
//!
//! Business logic services for LayerHub. The folder and layer services
//! own the validation rules, state transitions, and storage-coordination
//! contract the HTTP handlers rely on: check-then-execute validation so
//! no partial state is written on a validation failure, the file/link
//! exclusive-source rule, and the upload-then-persist flow for
//! file-backed layers.

pub mod context;
pub mod folder;
pub mod layer;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use folder::FolderService;
pub use layer::LayerService;
