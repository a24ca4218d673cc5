//! Deterministic text rendering of a structure tree, for tests and trace logs.

use std::fmt::Write;

use super::{NodeId, SNodeKind, YamlStructure};

impl YamlStructure {
    /// One line per node, children indented by two spaces.
    ///
    /// ```text
    /// Root tree_end=20
    ///   Key "server" 0..7 indent=0 tree_end=20
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root(), 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = self.node(id);
        let pad = "  ".repeat(depth);
        let _ = match &node.kind {
            SNodeKind::Root => writeln!(out, "{pad}Root tree_end={}", node.tree_end),
            SNodeKind::Key { key, .. } => writeln!(
                out,
                "{pad}Key {key:?} {}..{} indent={} tree_end={}",
                node.start,
                node.end,
                node.indent.unwrap_or_default(),
                node.tree_end
            ),
            SNodeKind::Seq => writeln!(
                out,
                "{pad}Seq {}..{} indent={} tree_end={}",
                node.start,
                node.end,
                node.indent.unwrap_or_default(),
                node.tree_end
            ),
            SNodeKind::Raw => match node.indent {
                Some(indent) => writeln!(
                    out,
                    "{pad}Raw {}..{} indent={indent}",
                    node.start, node.end
                ),
                None => writeln!(out, "{pad}Raw {}..{} transparent", node.start, node.end),
            },
        };
        for &child in &node.children {
            self.dump_node(child, depth + 1, out);
        }
    }
}
