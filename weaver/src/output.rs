//! Progress output formatting for the weaver CLI.
//!
//! The weaver library logs through the `log` facade; the CLI reports
//! user-facing progress and summaries on stderr through these helpers so the
//! bundle paths on stdout stay machine-consumable.

use crate::weaver::WeaveReport;
use std::fmt::Display;
use std::io::Write;

/// Write one line to stderr, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort progress output.
    }
}

/// Format the one-line summary for a completed pass.
#[must_use]
pub fn summary_message(report: &WeaveReport) -> String {
    let count = report.resources_added.len();
    let plural = if count == 1 { "resource" } else { "resources" };
    let mut message = format!(
        "Embedded {count} {plural} from {} directive(s)",
        report.directives_applied
    );
    if report.conflicts_skipped > 0 {
        message.push_str(&format!(", skipped {} conflict(s)", report.conflicts_skipped));
    }
    if report.directives_dropped > 0 {
        message.push_str(&format!(
            ", dropped {} malformed directive(s)",
            report.directives_dropped
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    //! Unit tests for summary formatting.

    use super::*;
    use crate::weaver::PassState;

    fn report(added: usize, conflicts: usize, dropped: usize) -> WeaveReport {
        WeaveReport {
            state: PassState::Done,
            failure: None,
            resources_added: (0..added).map(|i| format!("refembed.lib{i}")).collect(),
            directives_applied: added,
            directives_dropped: dropped,
            conflicts_skipped: conflicts,
            unmatched_filters: Vec::new(),
            support_reference_removed: true,
        }
    }

    #[test]
    fn singular_resource_count() {
        let message = summary_message(&report(1, 0, 0));
        assert!(message.contains("1 resource "));
        assert!(!message.contains("resources"));
    }

    #[test]
    fn mentions_conflicts_only_when_present() {
        assert!(!summary_message(&report(2, 0, 0)).contains("conflict"));
        assert!(summary_message(&report(2, 1, 0)).contains("skipped 1 conflict(s)"));
    }

    #[test]
    fn mentions_dropped_directives_only_when_present() {
        assert!(!summary_message(&report(2, 0, 0)).contains("malformed"));
        assert!(summary_message(&report(0, 0, 2)).contains("dropped 2 malformed"));
    }
}
