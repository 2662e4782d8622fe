// src/graph/graph.rs

use std::str::FromStr;

use tracing::debug;

use crate::errors::{Result, TaskdotError};
use crate::graph::node::{Node, NodeId};
use crate::graph::options::{GraphOption, NodeTag};

/// In-memory dependency graph parsed from markup text.
///
/// Nodes live in an arena in definition order; adjacency is stored as arena
/// indices. Insertion order is meaningful: it drives numbering and the
/// default serialization order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) options: Vec<GraphOption>,
}

/// Section of the markup currently being parsed.
enum Section {
    Definitions,
    Options,
    Dependencies,
}

impl Graph {
    /// Parse markup text into a graph.
    ///
    /// The text is processed line by line through three sections: definitions
    /// (the default), then `options`, then `dependencies`, each introduced by
    /// its literal section line. Parsing aborts on the first error; no
    /// partial graph is returned.
    pub fn parse(text: &str) -> Result<Self> {
        let mut graph = Graph::default();
        let mut section = Section::Definitions;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line {
                "options" => {
                    section = Section::Options;
                    continue;
                }
                "dependencies" => {
                    section = Section::Dependencies;
                    continue;
                }
                _ => {}
            }

            match section {
                Section::Definitions => {
                    debug!(%line, "definition");
                    let number = graph.nodes.len() as u32 + 1;
                    let node = Node::parse(line, number)?;
                    graph.nodes.push(node);
                }
                Section::Options => {
                    debug!(%line, "options");
                    for token in line.split_whitespace() {
                        let option = GraphOption::from_str(token)?;
                        if !graph.options.contains(&option) {
                            graph.options.push(option);
                        }
                    }
                }
                Section::Dependencies => {
                    debug!(%line, "dependency");
                    graph.add_dependency_line(line)?;
                }
            }
        }

        Ok(graph)
    }

    /// Apply one dependency line, either `A,B <- X,Y` (left requires right)
    /// or `A,B -> X,Y` (left provides to right), as a full cross product.
    fn add_dependency_line(&mut self, line: &str) -> Result<()> {
        let (requirers, providers) = if let Some((left, right)) = line.split_once("<-") {
            (left, right)
        } else if let Some((left, right)) = line.split_once("->") {
            (right, left)
        } else {
            return Err(TaskdotError::Syntax(format!(
                "dependency line without '<-' or '->': '{line}'"
            )));
        };

        for requirer in requirers.split(',') {
            let requirer = self.lookup(requirer.trim(), line)?;
            for provider in providers.split(',') {
                let provider = self.lookup(provider.trim(), line)?;
                self.add_edge(provider, requirer);
            }
        }
        Ok(())
    }

    /// Record that `requirer` depends on `provider`, keeping `requires` and
    /// `provides` as mutual inverses. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, provider: NodeId, requirer: NodeId) {
        if !self.nodes[requirer].requires.contains(&provider) {
            self.nodes[requirer].requires.push(provider);
        }
        if !self.nodes[provider].provides.contains(&requirer) {
            self.nodes[provider].provides.push(requirer);
        }
    }

    /// Find a node by its markup label.
    pub fn find_node(&self, label: &str) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.label == label)
    }

    fn lookup(&self, label: &str, line: &str) -> Result<NodeId> {
        self.find_node(label).ok_or_else(|| {
            TaskdotError::NodeNotFound(format!("'{label}' in dependency line '{line}'"))
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn options(&self) -> &[GraphOption] {
        &self.options
    }

    /// Whether a graph option was enabled in the markup.
    pub fn enabled(&self, option: GraphOption) -> bool {
        self.options.contains(&option)
    }

    /// Apply derived node state: drop removal-marked nodes when
    /// `remove_marked` is enabled, then tag newly-available tasks when
    /// `color_next` is enabled. Runs before reduction and compression.
    pub fn handle_options(&mut self) {
        if self.enabled(GraphOption::RemoveMarked) {
            self.remove_marked();
        }
        if self.enabled(GraphOption::ColorNext) {
            self.tag_next_available();
        }
    }

    /// Delete every node tagged for removal and scrub it from the adjacency
    /// lists of the survivors. Survivors keep their numbers.
    fn remove_marked(&mut self) {
        let keep: Vec<bool> = self
            .nodes
            .iter()
            .map(|node| node.tag != Some(NodeTag::Remove))
            .collect();
        if keep.iter().all(|&kept| kept) {
            return;
        }

        // Arena indices shift when nodes are dropped, so remap the survivors.
        let mut remap = vec![0usize; self.nodes.len()];
        let mut next = 0;
        for (id, kept) in keep.iter().enumerate() {
            if *kept {
                remap[id] = next;
                next += 1;
            }
        }

        let old = std::mem::take(&mut self.nodes);
        for (id, mut node) in old.into_iter().enumerate() {
            if !keep[id] {
                continue;
            }
            node.requires = node
                .requires
                .into_iter()
                .filter(|&req| keep[req])
                .map(|req| remap[req])
                .collect();
            node.provides = node
                .provides
                .into_iter()
                .filter(|&prov| keep[prov])
                .map(|prov| remap[prov])
                .collect();
            self.nodes.push(node);
        }
    }

    /// Tag every untagged node whose requirements all carry the complete tag.
    /// A node with no requirements qualifies vacuously.
    fn tag_next_available(&mut self) {
        let available: Vec<bool> = self
            .nodes
            .iter()
            .map(|node| {
                node.tag.is_none()
                    && node
                        .requires
                        .iter()
                        .all(|&req| self.nodes[req].tag == Some(NodeTag::Complete))
            })
            .collect();

        for (node, available) in self.nodes.iter_mut().zip(available) {
            if available {
                node.tag = Some(NodeTag::Next);
            }
        }
    }
}
