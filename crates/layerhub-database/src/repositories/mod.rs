//! Concrete repository implementations.

pub mod folder;
pub mod layer;

pub use folder::FolderRepository;
pub use layer::LayerRepository;
