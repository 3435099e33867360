//! Weave pass orchestration.
//!
//! One pass flows strictly forward: extract directives, resolve the policy,
//! select candidates, synthesize resources, write the output bundle. There
//! are no retries, no partial commits, and no resumption; a fatal error takes
//! the single edge to [`PassState::Failed`] and the pass is over. The fatal
//! error is caught here at the pass boundary and folded into the report, so
//! the host decides whether a failed pass fails its build.

use crate::candidate::Candidate;
use crate::error::{Result, WeaveError};
use crate::extractor::extract_directives;
use crate::policy::EmbedPolicy;
use crate::selector::select;
use crate::synthesizer::synthesize;
use camino::Utf8Path;
use refembed_common::store::ArtefactStore;
use std::fmt;

/// Lifecycle states of one weave pass.
///
/// A pass advances left to right and terminates in [`Self::Done`] or, via the
/// single failure edge from any non-terminal state, in [`Self::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    /// Pass constructed, nothing read yet.
    Idle,
    /// Loading the artefact and extracting directives.
    Extracting,
    /// Folding directives into the embedding policy.
    Resolving,
    /// Applying the inclusion rule to the candidate list.
    Selecting,
    /// Producing resource blobs for the included candidates.
    Synthesizing,
    /// Persisting the output bundle.
    Writing,
    /// Terminal: the pass completed.
    Done,
    /// Terminal: the pass aborted on a fatal error.
    Failed,
}

impl PassState {
    /// Check whether the pass has finished, successfully or not.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for PassState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Extracting => "extracting",
            Self::Resolving => "resolving",
            Self::Selecting => "selecting",
            Self::Synthesizing => "synthesizing",
            Self::Writing => "writing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Summary of one weave pass.
#[derive(Debug)]
pub struct WeaveReport {
    /// Terminal state of the pass.
    pub state: PassState,
    /// The fatal error, when the pass failed.
    pub failure: Option<WeaveError>,
    /// Names of resources added to the output, in synthesis order.
    pub resources_added: Vec<String>,
    /// Count of directives parsed and applied.
    pub directives_applied: usize,
    /// Count of recognised directives dropped as malformed.
    pub directives_dropped: usize,
    /// Count of resources skipped over name collisions.
    pub conflicts_skipped: usize,
    /// Filter names that matched no supplied candidate.
    pub unmatched_filters: Vec<String>,
    /// Whether the runtime support reference was stripped.
    pub support_reference_removed: bool,
}

impl WeaveReport {
    fn failed(failure: WeaveError) -> Self {
        Self {
            state: PassState::Failed,
            failure: Some(failure),
            resources_added: Vec::new(),
            directives_applied: 0,
            directives_dropped: 0,
            conflicts_skipped: 0,
            unmatched_filters: Vec::new(),
            support_reference_removed: false,
        }
    }

    /// Check whether the pass completed.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.state == PassState::Done
    }
}

/// Runs weave passes against a container store.
pub struct Weaver<'a> {
    store: &'a dyn ArtefactStore,
}

impl<'a> Weaver<'a> {
    /// Create a weaver over the given store.
    #[must_use]
    pub fn new(store: &'a dyn ArtefactStore) -> Self {
        Self { store }
    }

    /// Run one weave pass from `input` to `output`.
    ///
    /// Fatal errors are caught at this boundary: the returned report carries
    /// [`PassState::Failed`] and the originating error instead of
    /// propagating it, and the failing stage is logged.
    #[must_use]
    pub fn execute(
        &self,
        input: &Utf8Path,
        output: &Utf8Path,
        candidates: &[Candidate],
    ) -> WeaveReport {
        let mut state = PassState::Idle;
        match self.run(input, output, candidates, &mut state) {
            Ok(report) => report,
            Err(err) => {
                log::error!("weave pass failed during {state}: {err}");
                WeaveReport::failed(err)
            }
        }
    }

    fn run(
        &self,
        input: &Utf8Path,
        output: &Utf8Path,
        candidates: &[Candidate],
        state: &mut PassState,
    ) -> Result<WeaveReport> {
        *state = PassState::Extracting;
        let mut artefact = self.store.load(input).map_err(|e| WeaveError::Read {
            path: input.to_owned(),
            reason: e.to_string(),
        })?;
        let extraction = extract_directives(&mut artefact);

        *state = PassState::Resolving;
        let policy = EmbedPolicy::resolve(&extraction.directives);

        *state = PassState::Selecting;
        let selection = select(&policy, candidates);
        for name in &selection.unmatched_filters {
            log::warn!("directive names {name}, but no such candidate was supplied");
        }

        *state = PassState::Synthesizing;
        let mut resources_added = Vec::new();
        let mut conflicts_skipped = 0;
        for candidate in &selection.included {
            match synthesize(&policy, candidate, &artefact)? {
                Some(resource) => {
                    let name = resource.name.clone();
                    if artefact.add_resource(resource) {
                        resources_added.push(name);
                    } else {
                        conflicts_skipped += 1;
                    }
                }
                None => conflicts_skipped += 1,
            }
        }

        *state = PassState::Writing;
        self.store
            .persist(&artefact, output)
            .map_err(|e| WeaveError::Write {
                path: output.to_owned(),
                reason: e.to_string(),
            })?;

        *state = PassState::Done;
        Ok(WeaveReport {
            state: PassState::Done,
            failure: None,
            resources_added,
            directives_applied: extraction.directives.len(),
            directives_dropped: extraction.dropped_malformed,
            conflicts_skipped,
            unmatched_filters: selection.unmatched_filters,
            support_reference_removed: extraction.support_reference_removed,
        })
    }
}
