//! Artefact bundle model shared by the refembed weaver and host tooling.
//!
//! An artefact is a `.tar.zst` bundle holding a reserved `manifest.json`
//! entry (structured metadata and dependency references) alongside zero or
//! more named binary resources. This crate defines the in-memory model and
//! the container store used to read and write bundles; it knows nothing
//! about embedding policy, which lives in the `refembed` crate.

pub mod artefact;
pub mod manifest;
pub mod metadata;
pub mod schema_version;
pub mod store;

pub use artefact::{Artefact, Resource};
pub use manifest::Manifest;
pub use metadata::{MetaValue, MetadataItem};
pub use schema_version::SchemaVersion;
pub use store::{ArtefactStore, StoreError, TarZstStore};
