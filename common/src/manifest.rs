//! Manifest schema for artefact bundles.
//!
//! Each bundle ships a reserved `manifest.json` entry capturing the schema
//! version, the ordered metadata item list, and the ordered list of
//! dependency references. Resource content lives in the surrounding bundle,
//! not in the manifest; the manifest describes only structure.

use crate::metadata::MetadataItem;
use crate::schema_version::SchemaVersion;
use serde::{Deserialize, Serialize};

/// The manifest stored under the reserved `manifest.json` bundle entry.
///
/// Metadata and reference order is significant and preserved exactly as
/// stored; consumers that fold over metadata rely on it.
///
/// # Examples
///
/// ```
/// use refembed_common::manifest::Manifest;
/// use refembed_common::metadata::MetadataItem;
///
/// let manifest = Manifest::new(
///     vec![MetadataItem::new("refembed.include_all", Vec::new())],
///     vec!["refembed-rt".to_owned()],
/// );
/// assert_eq!(manifest.metadata().len(), 1);
/// assert!(manifest.has_reference("refembed-rt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    schema_version: SchemaVersion,
    #[serde(default)]
    metadata: Vec<MetadataItem>,
    #[serde(default)]
    references: Vec<String>,
}

impl Manifest {
    /// Construct a manifest at the current schema version.
    #[must_use]
    pub fn new(metadata: Vec<MetadataItem>, references: Vec<String>) -> Self {
        Self {
            schema_version: SchemaVersion::current(),
            metadata,
            references,
        }
    }

    /// Return the manifest schema version.
    #[must_use]
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Return the ordered metadata items.
    #[must_use]
    pub fn metadata(&self) -> &[MetadataItem] {
        &self.metadata
    }

    /// Replace the metadata list wholesale, returning the previous list.
    ///
    /// Metadata rewriting is two-phase: callers read [`Self::metadata`],
    /// decide which items to retain, and swap in the rebuilt list here. There
    /// is deliberately no per-index removal, which would invite index-shift
    /// bugs while iterating.
    pub fn replace_metadata(&mut self, metadata: Vec<MetadataItem>) -> Vec<MetadataItem> {
        std::mem::replace(&mut self.metadata, metadata)
    }

    /// Return the ordered dependency reference names.
    #[must_use]
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Check whether a dependency reference is present.
    #[must_use]
    pub fn has_reference(&self, name: &str) -> bool {
        self.references.iter().any(|r| r == name)
    }

    /// Remove a dependency reference by name.
    ///
    /// Returns `true` if a reference was removed.
    pub fn remove_reference(&mut self, name: &str) -> bool {
        let before = self.references.len();
        self.references.retain(|r| r != name);
        before != self.references.len()
    }
}
