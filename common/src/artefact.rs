//! In-memory artefact value: manifest plus named resource table.
//!
//! An [`Artefact`] owns everything a weave pass mutates — the manifest's
//! metadata and references, and the table of named binary resources. Stores
//! materialise an `Artefact` from a bundle on disk and persist the modified
//! value back out; nothing here touches the filesystem.

use crate::manifest::Manifest;

/// A named binary resource stored in an artefact bundle.
///
/// Whether the bytes are compressed is encoded in the name (a `.compressed`
/// suffix by convention); the resource table itself treats content as
/// opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Resource name, unique within one artefact.
    pub name: String,
    /// Opaque content bytes.
    pub bytes: Vec<u8>,
}

impl Resource {
    /// Create a resource from a name and content bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// An artefact bundle held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artefact {
    manifest: Manifest,
    resources: Vec<Resource>,
}

impl Artefact {
    /// Assemble an artefact from a manifest and existing resources.
    #[must_use]
    pub fn new(manifest: Manifest, resources: Vec<Resource>) -> Self {
        Self {
            manifest,
            resources,
        }
    }

    /// Return the manifest.
    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Return the manifest for mutation.
    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    /// Return the resource table in storage order.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Look up a resource by exact name.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Check whether a resource of the given name exists.
    #[must_use]
    pub fn has_resource(&self, name: &str) -> bool {
        self.resource(name).is_some()
    }

    /// Append a resource to the table.
    ///
    /// Returns `false` and leaves the table unchanged when a resource of the
    /// same name already exists; callers decide how loudly to report the
    /// collision.
    pub fn add_resource(&mut self, resource: Resource) -> bool {
        if self.has_resource(&resource.name) {
            return false;
        }
        self.resources.push(resource);
        true
    }
}
