//! JSON artifact output.
//!
//! Serializes the assembled [`GraphData`] as indented UTF-8 JSON. The
//! destination file is fully overwritten on each run; passing `None`
//! writes to stdout for piping.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::GraphData;

/// Write the graph data as pretty-printed JSON.
pub fn write_graph(data: &GraphData, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!(
                "Wrote {} documents, {} nodes to {}",
                data.documents.len(),
                data.graph.nodes.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentRecord, Graph, GraphNode};

    fn sample() -> GraphData {
        GraphData {
            documents: vec![DocumentRecord {
                id: "doc_000".to_string(),
                filename: "a.pdf".to_string(),
                title: "A".to_string(),
                abstract_text: "body...".to_string(),
                keywords: vec!["knowledge graph".to_string(), "AI".to_string()],
                path: "../data/pdfs/a.pdf".to_string(),
            }],
            graph: Graph {
                nodes: vec![GraphNode {
                    id: "doc_000".to_string(),
                    label: "A".to_string(),
                    node_type: "document".to_string(),
                }],
                links: Vec::new(),
            },
        }
    }

    #[test]
    fn writes_indented_json_with_renamed_fields() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out").join("graph.json");
        write_graph(&sample(), Some(&out)).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["documents"][0]["abstract"], "body...");
        assert_eq!(value["graph"]["nodes"][0]["type"], "document");
        assert!(value["graph"]["links"].as_array().unwrap().is_empty());
        // Indented output, not a single line.
        assert!(text.lines().count() > 1);
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graph.json");
        std::fs::write(&out, "stale").unwrap();
        write_graph(&sample(), Some(&out)).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with('{'));
        assert!(!text.contains("stale"));
    }
}
