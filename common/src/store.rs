//! Container store seam and the `.tar.zst` bundle implementation.
//!
//! A store materialises an [`Artefact`] from a bundle on disk and persists a
//! modified artefact back out. The trait keeps the weaving pipeline ignorant
//! of the physical container; [`TarZstStore`] is the concrete format — a
//! zstd-compressed tar archive whose reserved `manifest.json` entry holds the
//! manifest, with every other entry a named resource.

use crate::artefact::{Artefact, Resource};
use crate::manifest::Manifest;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::{Read, Write};

/// The reserved bundle entry holding the manifest.
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// Errors arising from loading or persisting artefact bundles.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error while reading or writing a bundle.
    #[error("bundle I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bundle has no `manifest.json` entry.
    #[error("bundle {path} has no {MANIFEST_ENTRY} entry")]
    MissingManifest {
        /// Path of the offending bundle.
        path: Utf8PathBuf,
    },

    /// The `manifest.json` entry could not be parsed.
    #[error("invalid manifest in {path}: {reason}")]
    InvalidManifest {
        /// Path of the offending bundle.
        path: Utf8PathBuf,
        /// Description of the parse failure.
        reason: String,
    },
}

/// Trait for loading and persisting artefact bundles, enabling test mocking.
#[cfg_attr(test, mockall::automock)]
pub trait ArtefactStore {
    /// Load the bundle at `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingManifest`] if the bundle lacks the
    /// reserved manifest entry, [`StoreError::InvalidManifest`] if that entry
    /// does not parse, and [`StoreError::Io`] on read failures.
    fn load(&self, path: &Utf8Path) -> Result<Artefact, StoreError>;

    /// Persist `artefact` as a bundle at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on write failures.
    fn persist(&self, artefact: &Artefact, path: &Utf8Path) -> Result<(), StoreError>;
}

/// Default store reading and writing `.tar.zst` bundles.
///
/// `persist` writes to a temporary file beside the destination and renames it
/// into place, so a bundle on disk is always either the old or the new
/// content, never a torn write.
pub struct TarZstStore;

impl ArtefactStore for TarZstStore {
    fn load(&self, path: &Utf8Path) -> Result<Artefact, StoreError> {
        let file = std::fs::File::open(path.as_std_path())?;
        let decoder = zstd::Decoder::new(file)?;
        let mut archive = tar::Archive::new(decoder);

        let mut manifest: Option<Manifest> = None;
        let mut resources = Vec::new();

        for entry_result in archive.entries()? {
            let mut entry = entry_result?;
            let entry_name = entry.path()?.to_string_lossy().into_owned();

            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;

            if entry_name == MANIFEST_ENTRY {
                let parsed = serde_json::from_slice(&bytes).map_err(|e| {
                    StoreError::InvalidManifest {
                        path: path.to_owned(),
                        reason: e.to_string(),
                    }
                })?;
                manifest = Some(parsed);
            } else {
                resources.push(Resource::new(entry_name, bytes));
            }
        }

        let manifest = manifest.ok_or_else(|| StoreError::MissingManifest {
            path: path.to_owned(),
        })?;
        log::debug!(
            "loaded bundle {path}: {} metadata item(s), {} resource(s)",
            manifest.metadata().len(),
            resources.len()
        );
        Ok(Artefact::new(manifest, resources))
    }

    fn persist(&self, artefact: &Artefact, path: &Utf8Path) -> Result<(), StoreError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
            _ => Utf8PathBuf::from("."),
        };
        let mut temp = tempfile::NamedTempFile::new_in(dir.as_std_path())?;

        let manifest_json = serde_json::to_vec_pretty(artefact.manifest())
            .map_err(|e| StoreError::Io(std::io::Error::other(e)))?;

        // Explicitly finish both the tar builder and the zstd encoder so the
        // frame is complete before the rename.
        let encoder = zstd::Encoder::new(&mut temp, 0)?;
        let mut builder = tar::Builder::new(encoder);
        append_entry(&mut builder, MANIFEST_ENTRY, &manifest_json)?;
        for resource in artefact.resources() {
            append_entry(&mut builder, &resource.name, &resource.bytes)?;
        }
        let encoder = builder.into_inner()?;
        encoder.finish()?;

        temp.persist(path.as_std_path())
            .map_err(|e| StoreError::Io(e.error))?;
        log::debug!("persisted bundle {path}: {} resource(s)", artefact.resources().len());
        Ok(())
    }
}

/// Append one in-memory entry to a tar builder.
fn append_entry<W: Write>(
    builder: &mut tar::Builder<W>,
    name: &str,
    bytes: &[u8],
) -> Result<(), StoreError> {
    let mut header = tar::Header::new_gnu();
    header.set_size(bytes.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, name, bytes)?;
    Ok(())
}
