//! Folder domain entities.

pub mod model;
pub mod store;

pub use model::{CreateFolder, Folder, FolderPatch};
pub use store::FolderStore;
