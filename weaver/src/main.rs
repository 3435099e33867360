//! refembed CLI entrypoint.
//!
//! This binary runs one weave pass: it loads the input bundle, applies its
//! embedding directives against the supplied dependency candidates, and
//! writes the woven bundle. A failed pass exits non-zero and leaves any
//! existing output untouched; whether that fails the surrounding build is
//! the build's decision.

use clap::Parser;
use refembed::candidate::{Candidate, candidates_from_dir};
use refembed::cli::Cli;
use refembed::error::Result;
use refembed::output::{summary_message, write_stderr_line};
use refembed::weaver::Weaver;
use refembed_common::store::TarZstStore;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    let exit_code = run(&cli, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> i32 {
    let candidates = match gather_candidates(cli) {
        Ok(candidates) => candidates,
        Err(err) => {
            write_stderr_line(stderr, err);
            return 1;
        }
    };

    if !cli.quiet {
        write_stderr_line(
            stderr,
            format!(
                "Weaving {} with {} candidate(s)...",
                cli.input,
                candidates.len()
            ),
        );
    }

    let store = TarZstStore;
    let report = Weaver::new(&store).execute(&cli.input, &cli.output, &candidates);

    if let Some(failure) = &report.failure {
        write_stderr_line(stderr, format!("weaving failed: {failure}"));
        return 1;
    }

    if !cli.quiet {
        for name in &report.unmatched_filters {
            write_stderr_line(
                stderr,
                format!("warning: directive names {name}, but no such candidate was supplied"),
            );
        }
        write_stderr_line(stderr, summary_message(&report));
        for name in &report.resources_added {
            write_stderr_line(stderr, format!("  - {name}"));
        }
    }

    0
}

/// Assemble the candidate list: explicit `--dep` files first, then the
/// `--deps-dir` enumeration.
fn gather_candidates(cli: &Cli) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(cli.deps.len());
    for path in &cli.deps {
        candidates.push(Candidate::from_path(path.clone())?);
    }
    if let Some(dir) = &cli.deps_dir {
        candidates.extend(candidates_from_dir(dir)?);
    }
    Ok(candidates)
}
