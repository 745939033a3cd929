//! Graph assembly.
//!
//! Drives extraction over the scanned files, in order, and shapes the two
//! output collections. Documents and nodes are built in lockstep from the
//! same successful-extraction subsequence: one `doc_NNN` id per success.
//! A file that fails extraction is logged and skipped without consuming an
//! id, so ids stay gap-free.

use crate::clean::clean_text;
use crate::config::Config;
use crate::extract;
use crate::link::{LinkPolicy, NoLinks};
use crate::models::{DocumentRecord, Graph, GraphData, GraphNode, PdfFile};

pub struct GraphBuilder {
    config: Config,
    link_policy: Box<dyn LinkPolicy>,
}

impl GraphBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            link_policy: Box::new(NoLinks),
        }
    }

    /// Swap the link policy. The default emits no links.
    pub fn with_link_policy(mut self, policy: Box<dyn LinkPolicy>) -> Self {
        self.link_policy = policy;
        self
    }

    /// Process `files` in the order given and assemble the output.
    pub fn build(&self, files: &[PdfFile]) -> GraphData {
        let mut documents = Vec::new();
        let mut nodes = Vec::new();
        let mut counter = 0usize;

        for file in files {
            let extracted = match extract::extract(&file.path) {
                Ok(extracted) => extracted,
                Err(e) => {
                    eprintln!("Warning: skipping {}: {}", file.name, e);
                    continue;
                }
            };

            let id = format!("doc_{:03}", counter);
            counter += 1;

            documents.push(DocumentRecord {
                id: id.clone(),
                filename: file.name.clone(),
                title: extracted.title.clone(),
                abstract_text: self.make_abstract(&extracted.text),
                keywords: self.config.keywords.tags_for(&file.name),
                path: format!("{}/{}", self.config.output.viewer_prefix, file.name),
            });

            nodes.push(GraphNode {
                id,
                label: extracted.title,
                node_type: "document".to_string(),
            });
        }

        let links = self.link_policy.links(&documents, &nodes);

        GraphData {
            documents,
            graph: Graph { nodes, links },
        }
    }

    /// First `max_chars` characters of the raw text, normalized, with an
    /// ellipsis suffix. The cut happens on the raw text before cleaning and
    /// counts characters, never bytes. A document with no text at all gets
    /// the fixed placeholder instead.
    fn make_abstract(&self, raw: &str) -> String {
        if raw.is_empty() {
            return self.config.abstracts.placeholder.clone();
        }
        let head: String = raw.chars().take(self.config.abstracts.max_chars).collect();
        let mut out = clean_text(Some(&head));
        out.push_str("...");
        out
    }
}
