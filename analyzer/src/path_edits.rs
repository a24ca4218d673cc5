//! Edits that make a property path exist in a YAML document.

use crate::document::Document;
use crate::edits::DocumentEdits;
use crate::error::EditError;
use crate::indent::{INDENT_BY, IndentUtil};
use crate::path::YamlPath;
use crate::structure::{NodeId, SNodeKind, YamlStructure};

/// Synthesises the minimal insertion that makes a [`YamlPath`] exist, and the caret
/// position where the value should be typed.
///
/// `structure` must have been parsed from `doc`.
pub struct YamlPathEdits<'a> {
    doc: &'a Document,
    structure: &'a YamlStructure,
    indent_util: IndentUtil,
    edits: DocumentEdits,
}

impl<'a> YamlPathEdits<'a> {
    pub fn new(doc: &'a Document, structure: &'a YamlStructure) -> Self {
        Self {
            doc,
            structure,
            indent_util: IndentUtil::for_document(doc),
            edits: DocumentEdits::new(),
        }
    }

    /// Ensures `path` exists below the document root, placing the caret where the
    /// value goes.
    pub fn create_path(&mut self, path: &YamlPath, append_text: &str) -> Result<(), EditError> {
        self.create_path_from(self.structure.root(), path, append_text)
    }

    /// Like [`YamlPathEdits::create_path`], relative to `node` instead of the root.
    pub fn create_path_from(
        &mut self,
        node: NodeId,
        path: &YamlPath,
        append_text: &str,
    ) -> Result<(), EditError> {
        let Some(segment) = path.segment(0) else {
            // The whole path exists: move the caret into its value.
            return self.move_cursor_into_value(node);
        };
        match self
            .structure
            .find_child_for_key(node, segment.to_prop_string())
        {
            Some(existing) => self.create_path_from(existing, &path.tail(), append_text),
            None => self.create_new_path(node, path, append_text),
        }
    }

    /// Emits `relative_path` at `insertion_point` without looking for existing keys.
    ///
    /// Used when completing mid-line: a new line is opened only when the current line
    /// already has text before `insertion_point`, except right after a `- ` marker.
    /// Nested keys are indented from the column where the first key lands.
    pub fn create_path_in_place(
        &mut self,
        context: NodeId,
        relative_path: &YamlPath,
        insertion_point: usize,
        append_text: &str,
    ) -> Result<(), EditError> {
        let start_on_new_line = self.need_newline(context, insertion_point)?;
        let indent = if start_on_new_line {
            self.child_indent(context)
        } else {
            self.doc.line_text_before(insertion_point)?.chars().count()
        };
        let text =
            self.path_insertion_text(relative_path, indent, start_on_new_line, append_text);
        self.edits.insert(insertion_point, text);
        Ok(())
    }

    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        self.edits.insert(offset, text);
    }

    pub fn delete(&mut self, start: usize, end: usize) {
        self.edits.delete(start, end);
    }

    pub fn edits(&self) -> &DocumentEdits {
        &self.edits
    }

    pub fn into_edits(self) -> DocumentEdits {
        self.edits
    }

    fn move_cursor_into_value(&mut self, node: NodeId) -> Result<(), EditError> {
        if let Some(child) = self.structure.first_real_child(node) {
            self.edits.move_cursor_to(self.structure.node(child).start);
            return Ok(());
        }
        if let SNodeKind::Key { colon_offset, .. } = self.structure.node(node).kind {
            // Validates the colon position against this document.
            self.doc.get_char(colon_offset)?;
            if self.doc.char_at(colon_offset + 1) == Some(' ') {
                self.edits.move_cursor_to(colon_offset + 2);
            } else {
                self.edits.move_cursor_to(colon_offset + 1);
            }
        }
        Ok(())
    }

    fn create_new_path(
        &mut self,
        parent: NodeId,
        path: &YamlPath,
        append_text: &str,
    ) -> Result<(), EditError> {
        let indent = self.child_indent(parent);
        let insertion_point = self.new_path_insertion_offset(parent)?;
        let start_on_new_line = self.line_has_text_before(insertion_point)?;
        let text = self.path_insertion_text(path, indent, start_on_new_line, append_text);
        tracing::trace!(%path, insertion_point, indent, "synthesising new path");
        self.edits.insert(insertion_point, text);
        Ok(())
    }

    fn path_insertion_text(
        &self,
        path: &YamlPath,
        mut indent: usize,
        start_on_new_line: bool,
        append_text: &str,
    ) -> String {
        let mut buf = String::new();
        for (i, segment) in path.segments().enumerate() {
            if start_on_new_line || i > 0 {
                self.indent_util.add_newline_with_indent(indent, &mut buf);
            }
            buf.push_str(segment.to_prop_string());
            buf.push(':');
            indent += INDENT_BY;
        }
        if !append_text.is_empty() && !append_text.starts_with(char::is_whitespace) {
            buf.push(' ');
        }
        buf.push_str(&self.indent_util.apply_indentation(append_text, indent));
        buf
    }

    fn child_indent(&self, parent: NodeId) -> usize {
        let node = self.structure.node(parent);
        match node.kind {
            SNodeKind::Root => 0,
            _ => node.indent.unwrap_or_default() + INDENT_BY,
        }
    }

    /// End of the last non-blank line of `parent`'s subtree.
    ///
    /// A root without any non-blank line takes the insertion at the end of the
    /// document.
    fn new_path_insertion_offset(&self, parent: NodeId) -> Result<usize, EditError> {
        if !self.structure.has_real_children(parent)
            && matches!(self.structure.node(parent).kind, SNodeKind::Root)
        {
            return Ok(self.doc.len());
        }
        let mut line = self.doc.line_of_offset(self.structure.node(parent).tree_end)?;
        loop {
            if self.doc.line_indentation(line)?.is_some() {
                return Ok(self.doc.line_information(line)?.end());
            }
            if line == 0 {
                return Ok(self.doc.len());
            }
            line -= 1;
        }
    }

    fn need_newline(&self, context: NodeId, insertion_point: usize) -> Result<bool, EditError> {
        if matches!(self.structure.node(context).kind, SNodeKind::Seq) {
            // After a `- ` it is fine to put the key on the same line.
            return Ok(false);
        }
        self.line_has_text_before(insertion_point)
    }

    fn line_has_text_before(&self, offset: usize) -> Result<bool, EditError> {
        Ok(!self.doc.line_text_before(offset)?.trim().is_empty())
    }
}
