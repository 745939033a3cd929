//! Pipeline orchestration for a build run.
//!
//! Scan → empty check → extract/assemble → write, with the progress and
//! summary lines a batch run is expected to print. A single failed PDF is
//! non-fatal; an empty input directory ends the run before anything is
//! written.

use anyhow::{bail, Result};

use crate::builder::GraphBuilder;
use crate::config::Config;
use crate::export;
use crate::scan;

pub fn run_build(config: &Config, dry_run: bool, limit: Option<usize>, to_stdout: bool) -> Result<()> {
    let mut files = scan::scan_pdfs(&config.input)?;

    if let Some(lim) = limit {
        files.truncate(lim);
    }

    if files.is_empty() {
        bail!(
            "no PDF files found in {}. Place your PDFs there.",
            config.input.root.display()
        );
    }

    println!("Found {} PDF files. Processing...", files.len());

    if dry_run {
        println!("build (dry-run)");
        for file in &files {
            println!("  {}", file.name);
        }
        return Ok(());
    }

    let data = GraphBuilder::new(config).build(&files);
    let skipped = files.len() - data.documents.len();

    let output = if to_stdout {
        None
    } else {
        Some(config.output.path.as_path())
    };
    export::write_graph(&data, output)?;

    println!("build");
    println!("  documents: {}", data.documents.len());
    println!("  nodes: {}", data.graph.nodes.len());
    println!("  links: {}", data.graph.links.len());
    println!("  skipped: {}", skipped);
    println!("ok");

    Ok(())
}
