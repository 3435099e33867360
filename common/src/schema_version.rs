//! Schema version newtype for artefact manifest versioning.
//!
//! Restricts the version to the range `1..=CURRENT_MAX`. A bundle written by
//! a newer tool than this build can read is rejected at deserialisation time
//! rather than being half-understood.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The highest manifest schema version this build can read.
const CURRENT_MAX: u32 = 1;

/// A validated manifest schema version.
///
/// Additive manifest changes increment the version while keeping backward
/// compatibility; breaking changes require a tool release that reads both
/// versions during the transition.
///
/// # Examples
///
/// ```
/// use refembed_common::schema_version::SchemaVersion;
///
/// let v = SchemaVersion::current();
/// assert_eq!(u32::from(v), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SchemaVersion(u32);

impl SchemaVersion {
    /// Return the current (latest) schema version.
    #[must_use]
    pub fn current() -> Self {
        Self(CURRENT_MAX)
    }

    /// Return the inner version number.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Error raised for a schema version outside the readable range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported manifest schema version {value} (this build reads 1..={max})")]
pub struct UnsupportedSchemaVersion {
    /// The version found in the manifest.
    pub value: u32,
    /// The highest version this build can read.
    pub max: u32,
}

impl TryFrom<u32> for SchemaVersion {
    type Error = UnsupportedSchemaVersion;

    fn try_from(value: u32) -> Result<Self, UnsupportedSchemaVersion> {
        if value == 0 || value > CURRENT_MAX {
            return Err(UnsupportedSchemaVersion {
                value,
                max: CURRENT_MAX,
            });
        }
        Ok(Self(value))
    }
}

impl From<SchemaVersion> for u32 {
    fn from(v: SchemaVersion) -> Self {
        v.0
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
