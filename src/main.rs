//! # Doc Graph CLI (`docgraph`)
//!
//! Run-once batch tool: scans the configured input directory for PDF
//! files, extracts title and text from each, and writes a single JSON
//! artifact holding per-document metadata records and a graph
//! representation (nodes + links) for a downstream viewer.
//!
//! ## Usage
//!
//! ```bash
//! docgraph                          # defaults: data/pdfs → data/processed_data.json
//! docgraph --config ./config/docgraph.toml
//! docgraph --dry-run                # list what would be processed
//! docgraph --limit 10               # only the first 10 files
//! docgraph --stdout > graph.json    # print instead of writing the file
//! ```
//!
//! A corrupt or unreadable PDF is logged and skipped; the run only fails
//! when the input directory holds no PDFs at all or the output cannot be
//! written.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use doc_graph::{build, config};

/// Build a document knowledge-graph JSON artifact from a directory of
/// PDFs.
#[derive(Parser)]
#[command(
    name = "docgraph",
    about = "Build a document knowledge-graph JSON artifact from a directory of PDFs",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Built-in defaults apply when the file does not exist, so the
    /// zero-flag invocation works out of the box.
    #[arg(long, default_value = "./config/docgraph.toml")]
    config: PathBuf,

    /// List discovered files without extracting or writing output.
    #[arg(long)]
    dry_run: bool,

    /// Maximum number of files to process.
    #[arg(long)]
    limit: Option<usize>,

    /// Print the JSON to stdout instead of writing the output file.
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        config::Config::default()
    };

    build::run_build(&cfg, cli.dry_run, cli.limit, cli.stdout)
}
