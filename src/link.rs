//! Link generation strategies.
//!
//! Link inference between documents is out of scope for the current
//! pipeline: the shipped [`NoLinks`] policy keeps the graph sparse and
//! readable. The trait is the seam where a future similarity- or
//! keyword-overlap rule plugs in without touching the builder's control
//! flow.

use crate::models::{DocumentRecord, GraphLink, GraphNode};

/// Strategy that turns the aligned document/node lists into graph links.
pub trait LinkPolicy {
    fn links(&self, documents: &[DocumentRecord], nodes: &[GraphNode]) -> Vec<GraphLink>;
}

/// Default policy: no links between documents.
pub struct NoLinks;

impl LinkPolicy for NoLinks {
    fn links(&self, _documents: &[DocumentRecord], _nodes: &[GraphNode]) -> Vec<GraphLink> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_links_policy_is_empty() {
        let node = GraphNode {
            id: "doc_000".to_string(),
            label: "A".to_string(),
            node_type: "document".to_string(),
        };
        let links = NoLinks.links(&[], &[node.clone(), node]);
        assert!(links.is_empty());
    }
}
