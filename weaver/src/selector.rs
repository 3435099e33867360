//! Candidate selection against the resolved policy.
//!
//! A candidate is included iff `exclude_mode XOR filter-match`: allow-list
//! mode embeds exactly the named candidates, deny-list mode embeds everything
//! except them. Selection consumes a working copy of the filter set, so
//! filter names that matched no candidate are left over afterwards and can be
//! reported as no-ops instead of being silently ignored.

use crate::candidate::Candidate;
use crate::policy::EmbedPolicy;
use std::collections::HashSet;

/// Outcome of selecting candidates under a policy.
#[derive(Debug)]
pub struct Selection<'a> {
    /// Included candidates, input order preserved.
    pub included: Vec<&'a Candidate>,
    /// Filter names that matched no candidate, sorted for stable reporting.
    pub unmatched_filters: Vec<String>,
}

/// Apply the policy's inclusion rule to an ordered candidate list.
#[must_use]
pub fn select<'a>(policy: &EmbedPolicy, candidates: &'a [Candidate]) -> Selection<'a> {
    let mut filter: HashSet<String> = policy.filter().clone();

    let included = candidates
        .iter()
        .filter(|candidate| policy.exclude_mode() ^ filter.remove(candidate.name.as_str()))
        .collect();

    let mut unmatched_filters: Vec<String> = filter.into_iter().collect();
    unmatched_filters.sort();

    Selection {
        included,
        unmatched_filters,
    }
}
