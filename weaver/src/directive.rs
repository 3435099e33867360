//! Embedding directive parsing.
//!
//! Directives arrive as loosely typed metadata items; this module turns the
//! recognised identities into a structured [`Directive`] value at the
//! boundary, rejecting malformed shapes with an explicit parse error rather
//! than silently dropping arguments. Arguments are matched positionally by
//! type: the first boolean-typed argument and the first string-typed
//! argument, wherever they sit in the list.

use crate::error::WeaveError;
use refembed_common::metadata::MetadataItem;

/// Identity of the configuration directive: `(compress?, prefix?)`.
pub const CONFIG_IDENTITY: &str = "refembed.config";

/// Identity of the include-all directive: no arguments.
pub const INCLUDE_ALL_IDENTITY: &str = "refembed.include_all";

/// Identity of the include directive: `(name, compress?)`.
pub const INCLUDE_IDENTITY: &str = "refembed.include";

/// Identity of the exclude directive: `(name)`.
pub const EXCLUDE_IDENTITY: &str = "refembed.exclude";

/// One declarative embedding instruction extracted from artefact metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Set the default compression flag and/or the resource name prefix.
    Config {
        /// When `true`, compress resources that carry no per-name override.
        compress: bool,
        /// Replacement for the default resource name prefix.
        prefix: Option<String>,
    },
    /// Switch to deny-list mode: embed everything not explicitly excluded.
    IncludeAll,
    /// Name a candidate to embed (allow-list) or re-allow (deny-list).
    Include {
        /// Candidate name.
        name: String,
        /// Per-name compression override.
        compress: Option<bool>,
    },
    /// Name a candidate to exclude (deny-list) or revoke (allow-list).
    Exclude {
        /// Candidate name.
        name: String,
    },
}

impl Directive {
    /// Check whether an identity names one of the recognised directives.
    #[must_use]
    pub fn recognises(identity: &str) -> bool {
        matches!(
            identity,
            CONFIG_IDENTITY | INCLUDE_ALL_IDENTITY | INCLUDE_IDENTITY | EXCLUDE_IDENTITY
        )
    }
}

impl TryFrom<&MetadataItem> for Directive {
    type Error = WeaveError;

    fn try_from(item: &MetadataItem) -> Result<Self, WeaveError> {
        match item.identity.as_str() {
            CONFIG_IDENTITY => Ok(Self::Config {
                compress: item.first_bool().unwrap_or(false),
                prefix: item.first_text().map(ToOwned::to_owned),
            }),
            INCLUDE_ALL_IDENTITY => Ok(Self::IncludeAll),
            INCLUDE_IDENTITY => {
                let name = required_name(item)?;
                Ok(Self::Include {
                    name,
                    compress: item.first_bool(),
                })
            }
            EXCLUDE_IDENTITY => {
                let name = required_name(item)?;
                Ok(Self::Exclude { name })
            }
            other => Err(WeaveError::DirectiveParse {
                identity: other.to_owned(),
                reason: "unrecognised directive identity".to_owned(),
            }),
        }
    }
}

/// Extract the mandatory string-typed name argument.
fn required_name(item: &MetadataItem) -> Result<String, WeaveError> {
    item.first_text()
        .map(ToOwned::to_owned)
        .ok_or_else(|| WeaveError::DirectiveParse {
            identity: item.identity.clone(),
            reason: "missing string-typed name argument".to_owned(),
        })
}
