// src/graph/reduce.rs

use tracing::warn;

use crate::graph::Graph;
use crate::graph::node::NodeId;
use crate::graph::options::GraphOption;

/// Signal that a walk ran longer than any acyclic path could.
struct CycleDetected;

impl Graph {
    /// Remove direct edges already implied by a longer path through an
    /// immediate child, leaving only edges not implied by transitivity.
    ///
    /// Skipped entirely when `noreduce` is enabled. The walk assumes the
    /// `provides` relation is acyclic; a path deeper than the node count is
    /// treated as a cycle, the reduction stops for the whole graph with a
    /// warning, and edges removed before detection stay removed.
    pub fn transitive_reduction(&mut self) {
        if self.enabled(GraphOption::NoReduce) {
            return;
        }

        let limit = self.nodes.len();
        for id in 0..self.nodes.len() {
            let children = self.nodes[id].provides.clone();
            for child in children {
                if self.reduce_from(id, child, true, 0, limit).is_err() {
                    warn!("cycle detected, skipping transitive reduction");
                    return;
                }
            }
        }
    }

    /// Walk the subgraph reachable from `current`, removing the direct edge
    /// between `root` and any deeper descendant that is also a direct child
    /// of `root`. Immediate children are checked but never modified.
    fn reduce_from(
        &mut self,
        root: NodeId,
        current: NodeId,
        immediate: bool,
        depth: usize,
        limit: usize,
    ) -> std::result::Result<(), CycleDetected> {
        if depth > limit {
            return Err(CycleDetected);
        }

        if !immediate && self.nodes[root].provides.contains(&current) {
            self.nodes[root].provides.retain(|&id| id != current);
            self.nodes[current].requires.retain(|&id| id != root);
        }

        let children = self.nodes[current].provides.clone();
        for child in children {
            self.reduce_from(root, child, false, depth + 1, limit)?;
        }
        Ok(())
    }
}
