use super::{NodeId, SNode, SNodeKind, YamlStructure};
use crate::document::Document;

/// Builds the structure tree for `doc`.
///
/// Never fails: lines that cannot be classified (tabs in indentation, stray colons,
/// unterminated quotes) become raw nodes.
pub fn parse(doc: &Document) -> YamlStructure {
    let text = doc.text();
    let mut builder = StructureBuilder::new();
    for line in 0..doc.number_of_lines() {
        let Ok(info) = doc.line_information(line) else {
            continue;
        };
        builder.line(&text[info.offset..info.end()], info.offset);
    }
    let structure = builder.finish();
    tracing::trace!(nodes = structure.len(), "parsed yaml structure");
    structure
}

struct StructureBuilder {
    nodes: Vec<SNode>,
    /// Open child-bearing nodes, innermost last.
    stack: Vec<NodeId>,
}

impl StructureBuilder {
    fn new() -> Self {
        Self {
            nodes: vec![SNode {
                kind: SNodeKind::Root,
                parent: None,
                children: Vec::new(),
                start: 0,
                end: 0,
                tree_end: 0,
                indent: None,
            }],
            stack: vec![NodeId::ROOT],
        }
    }

    fn line(&mut self, text: &str, line_offset: usize) {
        let line_end = line_offset + text.len();
        let content = text.trim_start_matches(' ');
        let indent = text.len() - content.len();

        // Blank and comment lines belong to whatever surrounds them.
        if content.trim().is_empty() {
            let top = self.top();
            self.add(top, SNodeKind::Raw, line_offset, line_end, None);
            return;
        }
        if content.starts_with('#') {
            let top = self.top();
            self.add(top, SNodeKind::Raw, line_offset + indent, line_end, None);
            return;
        }

        let parent = self.open(indent);
        if content.starts_with('\t') {
            tracing::trace!(line_offset, "tab in indentation; keeping line raw");
            self.add(
                parent,
                SNodeKind::Raw,
                line_offset + indent,
                line_end,
                Some(indent),
            );
            return;
        }
        self.classify(parent, text, line_offset, indent);
    }

    /// Classifies the content of `text` starting at `column` and attaches it to `parent`.
    fn classify(&mut self, parent: NodeId, text: &str, line_offset: usize, column: usize) {
        let line_end = line_offset + text.len();
        let start = line_offset + column;
        let rest = &text[column..];

        if is_seq_opener(rest) {
            let seq = self.add(parent, SNodeKind::Seq, start, line_end, Some(column));
            self.stack.push(seq);

            // `- key: value` and `- - item` carry a nested node on the same line.
            let after_dash = &rest[1..];
            let content = after_dash.trim_start_matches(' ');
            if !content.trim().is_empty() && !content.starts_with('#') {
                let content_column = column + 1 + (after_dash.len() - content.len());
                self.classify(seq, text, line_offset, content_column);
            }
            return;
        }

        match key_colon(rest) {
            Some(colon) => {
                let kind = SNodeKind::Key {
                    key: rest[..colon].trim_end().to_string(),
                    colon_offset: start + colon,
                };
                let key = self.add(parent, kind, start, line_end, Some(column));
                self.stack.push(key);
            }
            None => {
                self.add(parent, SNodeKind::Raw, start, line_end, Some(column));
            }
        }
    }

    /// Pops every open node indented at or beyond `indent` and returns the new top.
    fn open(&mut self, indent: usize) -> NodeId {
        while let Some(&top) = self.stack.last() {
            match self.nodes[top.index()].indent {
                Some(top_indent) if top_indent >= indent => {
                    self.stack.pop();
                }
                _ => break,
            }
        }
        self.top()
    }

    fn top(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn add(
        &mut self,
        parent: NodeId,
        kind: SNodeKind,
        start: usize,
        end: usize,
        indent: Option<usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            start,
            end,
            tree_end: end,
            indent,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    fn finish(mut self) -> YamlStructure {
        // Children are allocated after their parents, so a reverse sweep sees every
        // subtree complete before it is folded into its parent.
        for idx in (1..self.nodes.len()).rev() {
            let node = &self.nodes[idx];
            if node.is_transparent() {
                continue;
            }
            let tree_end = node.tree_end;
            if let Some(parent) = node.parent {
                let parent = &mut self.nodes[parent.index()];
                parent.tree_end = parent.tree_end.max(tree_end);
            }
        }
        YamlStructure { nodes: self.nodes }
    }
}

fn is_seq_opener(rest: &str) -> bool {
    rest == "-" || rest.starts_with("- ")
}

/// Byte index of the colon that makes `s` a `key: value` line.
///
/// The colon must sit outside quotes and brackets and be followed by a space, a tab
/// or the end of the line. A ` #` comment ends the search.
fn key_colon(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0usize;

    if let Some(&quote) = bytes.first().filter(|b| matches!(b, b'\'' | b'"')) {
        let close = bytes[1..].iter().position(|&b| b == quote)?;
        i = close + 2;
    }

    let mut depth = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'[' | b'{' => depth += 1,
            b']' | b'}' => depth = depth.saturating_sub(1),
            b'#' if i == 0 || bytes[i - 1] == b' ' => return None,
            b':' if depth == 0 => {
                if matches!(bytes.get(i + 1), None | Some(b' ') | Some(b'\t')) {
                    return (!s[..i].trim().is_empty()).then_some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
