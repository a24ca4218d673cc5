//! Indentation arithmetic for synthesised YAML text.

use crate::document::Document;

/// Column step between a key and its nested keys.
pub const INDENT_BY: usize = 2;

/// Builds indented text using a document's line delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentUtil {
    newline: &'static str,
}

impl Default for IndentUtil {
    fn default() -> Self {
        Self { newline: "\n" }
    }
}

impl IndentUtil {
    pub fn for_document(doc: &Document) -> Self {
        Self {
            newline: doc.default_line_delimiter(),
        }
    }

    pub fn newline(&self) -> &'static str {
        self.newline
    }

    /// Appends a line break followed by `indent` spaces.
    pub fn add_newline_with_indent(&self, indent: usize, buf: &mut String) {
        buf.push_str(self.newline);
        push_spaces(indent, buf);
    }

    /// Prefixes every line after the first with `indent` spaces.
    ///
    /// No line break is added or removed, so a trailing newline stays trailing: the
    /// (empty) line after it gets the indentation, which is where typing continues.
    pub fn apply_indentation(&self, text: &str, indent: usize) -> String {
        if indent == 0 || !text.contains('\n') {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + indent * 2);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
                push_spaces(indent, &mut out);
            }
            out.push_str(line);
        }
        out
    }
}

fn push_spaces(n: usize, buf: &mut String) {
    buf.extend(std::iter::repeat_n(' ', n));
}
