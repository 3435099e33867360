//! Resource synthesis: compression decision and final blob production.
//!
//! For each included candidate the synthesizer decides compression (per-name
//! override, else the policy default), optionally applies a single-stream
//! headerless DEFLATE pass at the best setting, and emits the final named
//! resource. A resource whose computed name already exists in the artefact is
//! skipped with a warning rather than duplicated, which is also what makes a
//! repeated pass over woven output a no-op.

use crate::candidate::Candidate;
use crate::error::{Result, WeaveError};
use crate::policy::EmbedPolicy;
use camino::Utf8PathBuf;
use flate2::Compression;
use flate2::write::DeflateEncoder;
use refembed_common::artefact::{Artefact, Resource};
use std::io::Write;

/// Synthesize the resource for one included candidate.
///
/// Returns `Ok(None)` when the computed resource name collides with an
/// existing resource; the collision is logged and the pass continues.
///
/// # Errors
///
/// Returns [`WeaveError::Read`] if the candidate's content cannot be read.
/// Read failures are fatal to the remaining pass.
pub fn synthesize(
    policy: &EmbedPolicy,
    candidate: &Candidate,
    artefact: &Artefact,
) -> Result<Option<Resource>> {
    let compress = policy.compression_for(&candidate.name);
    let name = policy.resource_name(&candidate.name, compress);

    if artefact.has_resource(&name) {
        log::warn!("{}", WeaveError::Conflict { name });
        return Ok(None);
    }

    let content = candidate.read()?;
    let bytes = if compress {
        deflate(&name, &content)?
    } else {
        content
    };

    Ok(Some(Resource::new(name, bytes)))
}

/// Compress `bytes` as a raw DEFLATE stream at the best setting.
///
/// Raw means headerless: no zlib or gzip framing, matching what consumers of
/// `.compressed` resources expect to inflate.
fn deflate(name: &str, bytes: &[u8]) -> Result<Vec<u8>> {
    let write_error = |e: std::io::Error| WeaveError::Write {
        path: Utf8PathBuf::from(name),
        reason: e.to_string(),
    };

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes).map_err(write_error)?;
    encoder.finish().map_err(write_error)
}
