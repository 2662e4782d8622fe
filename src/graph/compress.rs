// src/graph/compress.rs

use crate::graph::Graph;
use crate::graph::node::NodeId;

/// Edge sets of one node in the scratch copy: relationships not yet claimed
/// by a canonical declaration.
struct EdgeSets {
    requires: Vec<NodeId>,
    provides: Vec<NodeId>,
}

impl Graph {
    /// Collapse the doubled `requires`/`provides` bookkeeping so each logical
    /// relationship is recorded on one side only.
    ///
    /// Greedy: repeatedly take the node with the most provisions or
    /// requirements (strictly larger provision count wins; ties fall to the
    /// requirement branch), keep that set as the canonical declaration, and
    /// delete the inverse records from the other endpoints. A scratch copy of
    /// the edge sets tracks what is still unclaimed.
    ///
    /// This is lossy for rendering purposes. It runs only ahead of the
    /// canonical markup rewrite, never before dot generation.
    pub fn compress_representation(&mut self) {
        if self.nodes.is_empty() {
            return;
        }

        let mut scratch: Vec<EdgeSets> = self
            .nodes
            .iter()
            .map(|node| EdgeSets {
                requires: node.requires.clone(),
                provides: node.provides.clone(),
            })
            .collect();

        loop {
            let provider = most_by(&scratch, |edges| edges.provides.len());
            let requirer = most_by(&scratch, |edges| edges.requires.len());

            let provide_count = scratch[provider].provides.len();
            let require_count = scratch[requirer].requires.len();

            // no relationships left to canonicalize
            if provide_count == 0 && require_count == 0 {
                break;
            }

            if provide_count > require_count {
                for member in scratch[provider].provides.clone() {
                    scratch[member].requires.retain(|&id| id != provider);
                    self.nodes[member].requires.retain(|&id| id != provider);
                }
                scratch[provider].provides.clear();
            } else {
                for member in scratch[requirer].requires.clone() {
                    scratch[member].provides.retain(|&id| id != requirer);
                    self.nodes[member].provides.retain(|&id| id != requirer);
                }
                scratch[requirer].requires.clear();
            }
        }
    }
}

/// First node with the largest count under `count`.
fn most_by(scratch: &[EdgeSets], count: impl Fn(&EdgeSets) -> usize) -> NodeId {
    let mut best = 0;
    for (id, edges) in scratch.iter().enumerate() {
        if count(edges) > count(&scratch[best]) {
            best = id;
        }
    }
    best
}
