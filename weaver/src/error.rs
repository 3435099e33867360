//! Error types for the refembed weaver.
//!
//! The taxonomy separates fatal conditions, which abort the remaining pass,
//! from recoverable ones, which are logged and skipped: a malformed directive
//! or a resource name collision never takes the whole pass down, while an
//! unreadable artefact or candidate does.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during a weave pass.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// A recognised directive had a malformed argument shape.
    ///
    /// Non-fatal: the directive is dropped and the pass continues.
    #[error("malformed directive {identity}: {reason}")]
    DirectiveParse {
        /// Identity of the offending metadata item.
        identity: String,
        /// Description of the shape mismatch.
        reason: String,
    },

    /// The artefact or a candidate's content could not be read.
    ///
    /// Fatal: aborts the remaining pass.
    #[error("cannot read {path}: {reason}")]
    Read {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// The output artefact could not be persisted.
    ///
    /// Fatal: aborts the pass.
    #[error("cannot write {path}: {reason}")]
    Write {
        /// Path that could not be written.
        path: Utf8PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// A synthesised resource name collides with an existing resource.
    ///
    /// Non-fatal: the offending resource is skipped and the pass continues.
    #[error("resource {name} already exists; skipping")]
    Conflict {
        /// The colliding resource name.
        name: String,
    },
}

/// Result type alias using [`WeaveError`].
pub type Result<T> = std::result::Result<T, WeaveError>;

#[cfg(test)]
mod tests {
    //! Display-message tests for the error taxonomy.

    use super::*;

    #[test]
    fn directive_parse_names_the_identity() {
        let err = WeaveError::DirectiveParse {
            identity: "refembed.include".to_owned(),
            reason: "missing name argument".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("refembed.include"));
        assert!(msg.contains("missing name argument"));
    }

    #[test]
    fn read_error_includes_path_and_reason() {
        let err = WeaveError::Read {
            path: Utf8PathBuf::from("deps/libalpha.bin"),
            reason: "permission denied".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("deps/libalpha.bin"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn write_error_includes_path() {
        let err = WeaveError::Write {
            path: Utf8PathBuf::from("out/app.tar.zst"),
            reason: "disk full".to_owned(),
        };
        assert!(err.to_string().contains("out/app.tar.zst"));
    }

    #[test]
    fn conflict_names_the_resource() {
        let err = WeaveError::Conflict {
            name: "refembed.alpha".to_owned(),
        };
        assert!(err.to_string().contains("refembed.alpha"));
    }
}
