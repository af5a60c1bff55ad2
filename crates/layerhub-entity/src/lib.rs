//! # layerhub-entity
//!
//! Domain entity models for LayerHub. Every struct in this crate
//! represents a database table row or a domain value object; entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! `sqlx::FromRow`. Each entity module also defines the repository
//! contract (`FolderStore`, `LayerStore`) implemented by
//! `layerhub-database` — the trait needs the entity types, so it lives
//! here rather than in `layerhub-core`.

pub mod folder;
pub mod layer;
