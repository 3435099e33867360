//! Directive extraction from artefact metadata.
//!
//! Extraction is the self-consuming step that makes repeated weave passes
//! safe: every recognised directive item is parsed and removed from the
//! artefact, and the tool's own runtime support reference is stripped, so a
//! woven output carries no trace of the weaver. Removal is two-phase — the
//! metadata list is taken whole, partitioned, and the retained complement
//! swapped back in — so no list is ever mutated while being iterated.

use crate::directive::Directive;
use refembed_common::artefact::Artefact;

/// Name of the runtime support dependency stripped from woven output.
pub const SUPPORT_DEPENDENCY: &str = "refembed-rt";

/// Outcome of directive extraction over one artefact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Parsed directives in stored metadata order.
    pub directives: Vec<Directive>,
    /// Count of recognised metadata items removed (parsed or malformed).
    pub removed_items: usize,
    /// Count of recognised items dropped because their shape was malformed.
    pub dropped_malformed: usize,
    /// Whether the support dependency reference was present and removed.
    pub support_reference_removed: bool,
}

/// Extract and strip all embedding directives from `artefact`.
///
/// Malformed recognised items are dropped with a warning but still removed
/// from the output; unrelated metadata and references are preserved in
/// order.
pub fn extract_directives(artefact: &mut Artefact) -> Extraction {
    let previous = artefact.manifest_mut().replace_metadata(Vec::new());

    let mut directives = Vec::new();
    let mut retained = Vec::with_capacity(previous.len());
    let mut removed_items = 0;
    let mut dropped_malformed = 0;

    for item in previous {
        if !Directive::recognises(&item.identity) {
            retained.push(item);
            continue;
        }
        removed_items += 1;
        match Directive::try_from(&item) {
            Ok(directive) => directives.push(directive),
            Err(err) => {
                log::warn!("dropping directive: {err}");
                dropped_malformed += 1;
            }
        }
    }

    artefact.manifest_mut().replace_metadata(retained);
    let support_reference_removed = artefact.manifest_mut().remove_reference(SUPPORT_DEPENDENCY);

    Extraction {
        directives,
        removed_items,
        dropped_malformed,
        support_reference_removed,
    }
}
