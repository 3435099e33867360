//! Embedding policy resolution.
//!
//! Folds the ordered directive list into one immutable [`EmbedPolicy`].
//! Directive order is semantically significant: the fold runs forward once,
//! with no sorting, deduplication, or backtracking. Inclusion mode is fixed
//! by the first mode-fixing directive and never changes afterwards, so an
//! `Include` seen after `IncludeAll` re-allows a name instead of switching
//! the artefact to allow-list mode.

use crate::directive::Directive;
use std::collections::{HashMap, HashSet};

/// Resource name prefix used when no `Config` directive overrides it.
pub const DEFAULT_PREFIX: &str = "refembed";

/// Suffix marking a resource stored with raw DEFLATE compression.
pub const COMPRESSED_SUFFIX: &str = ".compressed";

/// The resolved embedding policy for one weave pass.
///
/// The meaning of the filter set is mode-dependent: under allow-list mode it
/// names the candidates to embed; under deny-list mode it names the
/// candidates to leave out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPolicy {
    prefix: String,
    filter: HashSet<String>,
    exclude_mode: bool,
    default_compression: bool,
    compression_overrides: HashMap<String, bool>,
}

impl EmbedPolicy {
    /// Fold directives, in stored order, into a policy.
    #[must_use]
    pub fn resolve(directives: &[Directive]) -> Self {
        let mut prefix = DEFAULT_PREFIX.to_owned();
        let mut filter = HashSet::new();
        // Set-once: the first mode-fixing directive wins, later ones only
        // edit the filter set under the established mode.
        let mut mode: Option<bool> = None;
        let mut default_compression = false;
        let mut compression_overrides = HashMap::new();

        for directive in directives {
            match directive {
                Directive::Config {
                    compress,
                    prefix: new_prefix,
                } => {
                    // A later Config(false) never downgrades compression.
                    if *compress {
                        default_compression = true;
                    }
                    if let Some(p) = new_prefix {
                        prefix.clone_from(p);
                    }
                }
                Directive::IncludeAll => {
                    mode.get_or_insert(true);
                }
                Directive::Include { name, compress } => {
                    let exclude = *mode.get_or_insert(false);
                    if exclude {
                        filter.remove(name);
                    } else {
                        filter.insert(name.clone());
                    }
                    if let Some(c) = compress {
                        compression_overrides.insert(name.clone(), *c);
                    }
                }
                Directive::Exclude { name } => {
                    let exclude = *mode.get_or_insert(true);
                    if exclude {
                        filter.insert(name.clone());
                    } else {
                        filter.remove(name);
                    }
                }
            }
        }

        Self {
            prefix: format!("{prefix}."),
            filter,
            exclude_mode: mode.unwrap_or(false),
            default_compression,
            compression_overrides,
        }
    }

    /// Return the resource name prefix, including its trailing dot.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return `true` when the filter set names candidates to leave out.
    #[must_use]
    pub fn exclude_mode(&self) -> bool {
        self.exclude_mode
    }

    /// Return the mode-dependent filter set.
    #[must_use]
    pub fn filter(&self) -> &HashSet<String> {
        &self.filter
    }

    /// Decide whether a candidate name is included under this policy.
    #[must_use]
    pub fn includes(&self, name: &str) -> bool {
        self.exclude_mode ^ self.filter.contains(name)
    }

    /// Decide whether a candidate's content should be compressed.
    #[must_use]
    pub fn compression_for(&self, name: &str) -> bool {
        self.compression_overrides
            .get(name)
            .copied()
            .unwrap_or(self.default_compression)
    }

    /// Compute the final resource name for a candidate.
    #[must_use]
    pub fn resource_name(&self, name: &str, compressed: bool) -> String {
        let suffix = if compressed { COMPRESSED_SUFFIX } else { "" };
        format!("{}{name}{suffix}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the policy fold: mode fixation, filter edits,
    //! compression precedence, and the resource name law.

    use super::*;

    fn include(name: &str) -> Directive {
        Directive::Include {
            name: name.to_owned(),
            compress: None,
        }
    }

    fn include_with(name: &str, compress: bool) -> Directive {
        Directive::Include {
            name: name.to_owned(),
            compress: Some(compress),
        }
    }

    fn exclude(name: &str) -> Directive {
        Directive::Exclude {
            name: name.to_owned(),
        }
    }

    #[test]
    fn empty_directive_list_yields_vacuous_allow_list() {
        let policy = EmbedPolicy::resolve(&[]);
        assert!(!policy.exclude_mode());
        assert!(policy.filter().is_empty());
        assert!(!policy.includes("anything"));
        assert_eq!(policy.prefix(), "refembed.");
    }

    #[test]
    fn first_include_fixes_allow_list_mode() {
        let policy = EmbedPolicy::resolve(&[include("libalpha"), Directive::IncludeAll]);
        assert!(!policy.exclude_mode());
        assert!(policy.includes("libalpha"));
        assert!(!policy.includes("libbeta"));
    }

    #[test]
    fn first_include_all_fixes_deny_list_mode() {
        let policy = EmbedPolicy::resolve(&[Directive::IncludeAll, exclude("noisy")]);
        assert!(policy.exclude_mode());
        assert!(!policy.includes("noisy"));
        assert!(policy.includes("libalpha"));
    }

    #[test]
    fn lone_exclude_fixes_deny_list_mode() {
        let policy = EmbedPolicy::resolve(&[exclude("libalpha")]);
        assert!(policy.exclude_mode());
        assert_eq!(policy.filter().len(), 1);
        assert!(!policy.includes("libalpha"));
        assert!(policy.includes("libbeta"));
        assert!(policy.includes("libgamma"));
    }

    #[test]
    fn include_under_deny_mode_re_allows() {
        let policy = EmbedPolicy::resolve(&[
            Directive::IncludeAll,
            exclude("libalpha"),
            include("libalpha"),
        ]);
        assert!(policy.includes("libalpha"));
    }

    #[test]
    fn exclude_under_allow_mode_revokes() {
        let policy = EmbedPolicy::resolve(&[
            include("libalpha"),
            include("libbeta"),
            exclude("libalpha"),
        ]);
        assert!(!policy.includes("libalpha"));
        assert!(policy.includes("libbeta"));
    }

    #[test]
    fn permuting_later_directives_never_changes_mode() {
        let tail_orders: [[Directive; 2]; 2] = [
            [include("a"), exclude("b")],
            [exclude("b"), include("a")],
        ];
        for tail in tail_orders {
            let mut directives = vec![Directive::IncludeAll];
            directives.extend(tail);
            let policy = EmbedPolicy::resolve(&directives);
            assert!(policy.exclude_mode(), "mode must stay fixed by IncludeAll");
        }
    }

    #[test]
    fn config_compression_never_downgrades() {
        let policy = EmbedPolicy::resolve(&[
            Directive::Config {
                compress: true,
                prefix: None,
            },
            Directive::Config {
                compress: false,
                prefix: None,
            },
        ]);
        assert!(policy.compression_for("anything"));
    }

    #[test]
    fn last_prefix_overwrite_wins() {
        let policy = EmbedPolicy::resolve(&[
            Directive::Config {
                compress: false,
                prefix: Some("first".to_owned()),
            },
            Directive::Config {
                compress: false,
                prefix: Some("second".to_owned()),
            },
        ]);
        assert_eq!(policy.prefix(), "second.");
    }

    #[test]
    fn override_beats_default_compression() {
        let policy = EmbedPolicy::resolve(&[
            Directive::Config {
                compress: true,
                prefix: Some("X".to_owned()),
            },
            include_with("libalpha", false),
            include("libbeta"),
        ]);

        assert!(!policy.exclude_mode());
        assert!(policy.includes("libalpha"));
        assert!(policy.includes("libbeta"));
        assert!(!policy.includes("libgamma"));
        assert!(!policy.compression_for("libalpha"));
        assert!(policy.compression_for("libbeta"));
        assert_eq!(policy.prefix(), "X.");
    }

    #[test]
    fn resource_name_appends_suffix_only_when_compressed() {
        let policy = EmbedPolicy::resolve(&[]);
        assert_eq!(policy.resource_name("libalpha", false), "refembed.libalpha");
        assert_eq!(
            policy.resource_name("libalpha", true),
            "refembed.libalpha.compressed"
        );
    }
}
