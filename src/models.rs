//! Core data types for the document graph.
//!
//! The serializable types here map directly onto the JSON artifact the
//! viewer consumes: a flat `documents` list plus an aligned `nodes`/`links`
//! graph. Documents and nodes are produced in lockstep and share ids.

use serde::Serialize;
use std::path::PathBuf;

/// A scanned input file before extraction.
#[derive(Debug, Clone)]
pub struct PdfFile {
    /// Path relative to the input root, as recorded in the output.
    pub name: String,
    /// Full path used to open the file.
    pub path: PathBuf,
}

/// Per-PDF metadata entry in the output's `documents` list.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub path: String,
}

/// Visualization-facing representation of a document, aligned 1:1 with its
/// [`DocumentRecord`] by `id`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// An edge between two graph nodes. The schema is reserved; the default
/// link policy emits none.
#[derive(Debug, Clone, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub link_type: String,
}

/// The node/link half of the output.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// Top-level output structure, written as a single JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct GraphData {
    pub documents: Vec<DocumentRecord>,
    pub graph: Graph,
}
