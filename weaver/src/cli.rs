//! CLI argument definitions for the refembed weaver.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary focused on orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Embed binary dependencies into an artefact bundle.
#[derive(Parser, Debug)]
#[command(name = "refembed")]
#[command(version, about)]
#[command(long_about = concat!(
    "Embed binary dependencies into an artefact bundle.\n\n",
    "refembed is a post-build step: it reads the embedding directives stored ",
    "in the input bundle's metadata, selects matching candidates from the ",
    "supplied dependency files, and writes a new bundle with the selected ",
    "content embedded as named, optionally compressed resources. The ",
    "directives and the refembed-rt dependency reference are stripped from ",
    "the output, so the result is self-contained.\n\n",
    "Candidates are supplied explicitly with --dep and/or enumerated from a ",
    "directory with --deps-dir; a candidate is named after its file stem.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Weave with explicit dependencies:\n",
    "    $ refembed target/app.tar.zst target/app.woven.tar.zst \\\n",
    "        --dep target/deps/libalpha.bin --dep target/deps/libbeta.bin\n\n",
    "  Weave against a dependency directory:\n",
    "    $ refembed target/app.tar.zst target/app.woven.tar.zst \\\n",
    "        --deps-dir target/deps\n",
))]
pub struct Cli {
    /// Input artefact bundle to weave.
    pub input: Utf8PathBuf,

    /// Output path for the woven bundle.
    pub output: Utf8PathBuf,

    /// Candidate dependency file (repeatable).
    #[arg(long = "dep", value_name = "PATH")]
    pub deps: Vec<Utf8PathBuf>,

    /// Directory whose regular files are supplied as candidates.
    #[arg(long, value_name = "DIR")]
    pub deps_dir: Option<Utf8PathBuf>,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}
