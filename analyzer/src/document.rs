//! Line-addressable text buffer.
//!
//! Offsets are UTF-8 byte offsets into [`Document::text`]; lines are 0-based.
//! Line information excludes the line delimiter (`\n` or `\r\n`).

use crate::error::EditError;

/// Start offset and length of one line, delimiter excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub offset: usize,
    pub length: usize,
}

impl LineInfo {
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    line_starts: Vec<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Document::new("")
    }
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The character starting at `offset`, or `None` at the end of the document.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset..).and_then(|rest| rest.chars().next())
    }

    pub fn get_char(&self, offset: usize) -> Result<char, EditError> {
        self.char_at(offset).ok_or(EditError::BadLocation {
            offset,
            len: self.len(),
        })
    }

    pub fn get(&self, offset: usize, len: usize) -> Result<&str, EditError> {
        let end = offset.saturating_add(len);
        self.text.get(offset..end).ok_or(EditError::BadLocation {
            offset: end,
            len: self.len(),
        })
    }

    pub fn number_of_lines(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_of_offset(&self, offset: usize) -> Result<usize, EditError> {
        self.check_offset(offset)?;
        Ok(match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        })
    }

    pub fn line_information(&self, line: usize) -> Result<LineInfo, EditError> {
        let Some(&offset) = self.line_starts.get(line) else {
            return Err(EditError::BadLine {
                line,
                lines: self.number_of_lines(),
            });
        };
        let end = match self.line_starts.get(line + 1) {
            Some(&next) => {
                let newline = next - 1;
                if newline > offset && self.text.as_bytes()[newline - 1] == b'\r' {
                    newline - 1
                } else {
                    newline
                }
            }
            None => self.text.len(),
        };
        Ok(LineInfo {
            offset,
            length: end - offset,
        })
    }

    pub fn line_information_of_offset(&self, offset: usize) -> Result<LineInfo, EditError> {
        self.line_information(self.line_of_offset(offset)?)
    }

    pub fn line_text(&self, line: usize) -> Result<&str, EditError> {
        let info = self.line_information(line)?;
        Ok(&self.text[info.offset..info.end()])
    }

    /// Text from the start of the line containing `offset` up to `offset`.
    pub fn line_text_before(&self, offset: usize) -> Result<&str, EditError> {
        let info = self.line_information_of_offset(offset)?;
        self.text
            .get(info.offset..offset)
            .ok_or(EditError::BadLocation {
                offset,
                len: self.len(),
            })
    }

    /// Leading spaces of `line`, or `None` for blank and comment-only lines.
    pub fn line_indentation(&self, line: usize) -> Result<Option<usize>, EditError> {
        let text = self.line_text(line)?;
        let content = text.trim_start_matches(' ');
        if content.trim().is_empty() || content.starts_with('#') {
            return Ok(None);
        }
        Ok(Some(text.len() - content.len()))
    }

    /// The line delimiter used by this document (`\r\n` if its first line uses it).
    pub fn default_line_delimiter(&self) -> &'static str {
        match self.text.find('\n') {
            Some(i) if i > 0 && self.text.as_bytes()[i - 1] == b'\r' => "\r\n",
            _ => "\n",
        }
    }

    /// Returns `(line, column)`, both 0-based, column in bytes.
    pub fn line_col(&self, offset: usize) -> Result<(usize, usize), EditError> {
        let line = self.line_of_offset(offset)?;
        Ok((line, offset - self.line_starts[line]))
    }

    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), EditError> {
        self.replace(offset, 0, text)
    }

    pub fn replace(&mut self, offset: usize, len: usize, text: &str) -> Result<(), EditError> {
        let end = offset.saturating_add(len);
        self.check_offset(offset)?;
        self.check_offset(end)?;
        self.text.replace_range(offset..end, text);
        self.line_starts = compute_line_starts(&self.text);
        Ok(())
    }

    /// Swaps in a whole new text in one step.
    pub fn set_text(&mut self, text: String) {
        self.line_starts = compute_line_starts(&text);
        self.text = text;
    }

    fn check_offset(&self, offset: usize) -> Result<(), EditError> {
        if offset > self.text.len() || !self.text.is_char_boundary(offset) {
            return Err(EditError::BadLocation {
                offset,
                len: self.len(),
            });
        }
        Ok(())
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut line_starts = vec![0];
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            line_starts.push(i + 1);
        }
    }
    line_starts
}
