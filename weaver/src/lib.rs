//! refembed weaver library.
//!
//! This crate implements the directive resolution and resource synthesis
//! pipeline behind the `refembed` post-build step: embedding directives are
//! extracted from an artefact bundle's own metadata, folded into an
//! embedding policy, applied to a host-supplied candidate list, and the
//! selected candidates are synthesized into named, optionally compressed
//! resources in the woven output. It is used by the `refembed` CLI binary
//! and can be consumed programmatically by other build hosts.
//!
//! # Modules
//!
//! - [`candidate`] - Named binary blobs eligible for embedding
//! - [`cli`] - Command-line argument definitions
//! - [`directive`] - Directive recognition and positional parsing
//! - [`error`] - Weave error taxonomy
//! - [`extractor`] - Directive extraction and support reference stripping
//! - [`output`] - Progress output formatting for the CLI
//! - [`policy`] - Embedding policy resolution
//! - [`selector`] - Candidate selection under the policy
//! - [`synthesizer`] - Compression and resource blob production
//! - [`weaver`] - Weave pass orchestration

pub mod candidate;
pub mod cli;
pub mod directive;
pub mod error;
pub mod extractor;
pub mod output;
pub mod policy;
pub mod selector;
pub mod synthesizer;
pub mod weaver;
