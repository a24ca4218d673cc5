//! Indentation-derived structure of a YAML document.
//!
//! The tree is a flat arena: nodes refer to their parent and children by [`NodeId`].
//! Node `0` is always the root. Children are stored in document order, and every
//! node is allocated after its parent.

mod dump;
mod parser;

use crate::path::{YamlPath, YamlPathSegment};

pub use parser::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SNodeKind {
    Root,
    /// `key: ...`; `colon_offset` points at the `:`.
    Key { key: String, colon_offset: usize },
    /// A `- ` sequence entry.
    Seq,
    /// Anything else: scalar continuation, comment, blank line, malformed line.
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SNode {
    pub kind: SNodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Offset of the node's first character.
    pub start: usize,
    /// End of the node's opening line.
    pub end: usize,
    /// End of the last non-transparent line of this node's subtree.
    pub tree_end: usize,
    /// Leading spaces of the opening line. `None` for the root and for
    /// transparent (blank or comment-only) lines.
    pub indent: Option<usize>,
}

impl SNode {
    pub fn can_have_children(&self) -> bool {
        matches!(self.kind, SNodeKind::Root | SNodeKind::Key { .. } | SNodeKind::Seq)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self.kind, SNodeKind::Raw) && self.indent.is_none()
    }

    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            SNodeKind::Key { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn colon_offset(&self) -> Option<usize> {
        match &self.kind {
            SNodeKind::Key { colon_offset, .. } => Some(*colon_offset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlStructure {
    nodes: Vec<SNode>,
}

impl YamlStructure {
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &SNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SNode)> {
        self.node(id)
            .children
            .iter()
            .map(move |&child| (child, self.node(child)))
    }

    /// First child that is not a blank or comment line.
    pub fn first_real_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .find(|(_, node)| !node.is_transparent())
            .map(|(child, _)| child)
    }

    pub fn has_real_children(&self, id: NodeId) -> bool {
        self.first_real_child(id).is_some()
    }

    /// Direct key child of `id` whose key text equals `key`.
    // TODO: relax matching so `fooBar` also finds `foo-bar`.
    pub fn find_child_for_key(&self, id: NodeId, key: &str) -> Option<NodeId> {
        self.children(id)
            .find(|(_, node)| node.key() == Some(key))
            .map(|(child, _)| child)
    }

    /// Key node whose colon sits at `colon_offset`.
    pub fn key_at_colon(&self, colon_offset: usize) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.colon_offset() == Some(colon_offset))
            .map(|idx| NodeId(idx as u32))
    }

    /// Keys from the root down to `id` (inclusive).
    ///
    /// Returns `None` when a sequence entry lies on the way, since those positions are
    /// not addressable by a dotted property path.
    pub fn key_path(&self, id: NodeId) -> Option<YamlPath> {
        let mut keys = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            match &node.kind {
                SNodeKind::Root => break,
                SNodeKind::Key { key, .. } => keys.push(YamlPathSegment::val_at_key(key.clone())),
                SNodeKind::Seq | SNodeKind::Raw => return None,
            }
            current = node.parent;
        }
        keys.reverse();
        Some(YamlPath::new(keys))
    }

    /// Deepest child-bearing node that would own a line starting at `column`, looking
    /// only at nodes that open before `offset`.
    pub fn find_context(&self, offset: usize, column: usize) -> NodeId {
        let mut current = self.root();
        loop {
            let last_before = self
                .children(current)
                .filter(|(_, node)| !node.is_transparent() && node.start < offset)
                .last();
            match last_before {
                Some((child, node))
                    if node.can_have_children() && node.indent.is_some_and(|i| i < column) =>
                {
                    current = child;
                }
                _ => return current,
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx as u32), node))
    }
}
