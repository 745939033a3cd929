//! # Doc Graph
//!
//! Builds a document knowledge-graph JSON artifact from a directory of
//! PDF files.
//!
//! Each PDF becomes a metadata record plus a graph node; the two
//! collections share identifiers so a downstream viewer can join them
//! directly. Link inference is a pluggable policy that currently emits no
//! links.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────┐   ┌─────────┐   ┌──────────────┐   ┌───────────┐
//! │  scan  │──▶│ extract │──▶│ GraphBuilder │──▶│ JSON file │
//! │ *.pdf  │   │ lopdf   │   │ ids/abstract │   │ documents │
//! └────────┘   └─────────┘   │ /keywords    │   │ + graph   │
//!                            └──────────────┘   └───────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! docgraph                          # data/pdfs → data/processed_data.json
//! docgraph --config ./config/docgraph.toml
//! docgraph --dry-run
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Output data types |
//! | [`scan`] | Filesystem discovery of input PDFs |
//! | [`extract`] | PDF text and metadata extraction |
//! | [`clean`] | Whitespace normalization |
//! | [`builder`] | Graph assembly |
//! | [`link`] | Link generation strategies |
//! | [`export`] | JSON artifact output |
//! | [`build`] | Pipeline orchestration |

pub mod build;
pub mod builder;
pub mod clean;
pub mod config;
pub mod export;
pub mod extract;
pub mod link;
pub mod models;
pub mod scan;
