// src/graph/render.rs

use crate::graph::Graph;
use crate::graph::node::Node;
use crate::graph::options::GraphOption;

impl Graph {
    /// Serialize the graph as graphviz dot text.
    ///
    /// Every edge is emitted from both endpoints' perspectives, so most
    /// edges appear twice; rendering engines deduplicate visually.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();

        out.push_str(
            "digraph g{\n  rankdir=LR;\n  ratio=fill;\n  node [style=filled];\n  overlap=false;\n",
        );
        if self.enabled(GraphOption::Circular) {
            out.push_str("  layout=neato;\n");
        }

        for node in &self.nodes {
            let label = self.dot_label(node);

            for &prov in &node.provides {
                out.push_str(&format!(
                    "  {} -> {}\n",
                    label,
                    self.dot_label(&self.nodes[prov])
                ));
            }
            for &req in &node.requires {
                out.push_str(&format!(
                    "  {} -> {}\n",
                    self.dot_label(&self.nodes[req]),
                    label
                ));
            }

            let mut statement = label;
            if let Some(tag) = node.tag {
                if self.enabled(tag.gate()) {
                    if let Some(color) = tag.color() {
                        statement.push(' ');
                        statement.push_str(color);
                    }
                }
            }
            out.push_str(&format!("  {statement}\n"));
        }

        out.push_str("}\n");
        out
    }

    /// Quoted dot identifier for a node: its display text plus its number in
    /// parentheses, unless `publish` suppresses the number.
    fn dot_label(&self, node: &Node) -> String {
        if self.enabled(GraphOption::Publish) {
            format!("\"{}\"", node.display_text)
        } else {
            format!("\"{} ({})\"", node.display_text, node.number)
        }
    }

    /// Serialize the graph back into canonical markup, suitable for
    /// overwriting the original input file.
    ///
    /// Definitions and dependency lines are keyed by node number. Run after
    /// [`Graph::compress_representation`] so each logical relationship is
    /// written once, as either a `->` or a `<-` line.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();

        out.push_str("#!/usr/bin/env taskdot\n");
        out.push_str("# 1 <- 2,3 => 1 requires 2 and 3\n");
        out.push_str("# 2 -> 3,4 => 2 provides 3 and 4\n\n");

        for node in &self.nodes {
            let flag = node.tag.and_then(|tag| tag.flag());
            match flag {
                Some(flag) => out.push_str(&format!(
                    "{:>4}: {}{}\n",
                    node.number, flag, node.description
                )),
                None => out.push_str(&format!("{:>4}: {}\n", node.number, node.description)),
            }
        }

        let options: Vec<String> = self.options.iter().map(|opt| opt.to_string()).collect();
        out.push_str("\noptions\n  ");
        out.push_str(&options.join(" "));
        out.push_str("\n\ndependencies\n");

        for node in &self.nodes {
            if !node.provides.is_empty() {
                let numbers: Vec<String> = node
                    .provides
                    .iter()
                    .map(|&prov| self.nodes[prov].number.to_string())
                    .collect();
                out.push_str(&format!("  {} -> {}\n", node.number, numbers.join(",")));
            }
            if !node.requires.is_empty() {
                let numbers: Vec<String> = node
                    .requires
                    .iter()
                    .map(|&req| self.nodes[req].number.to_string())
                    .collect();
                out.push_str(&format!("  {} <- {}\n", node.number, numbers.join(",")));
            }
        }

        out
    }
}
