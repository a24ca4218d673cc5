use thiserror::Error;

/// Positional and edit-validation failures.
///
/// Parse anomalies never surface here; the structure parser degrades them to raw nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("bad location: offset {offset} is outside a document of length {len}")]
    BadLocation { offset: usize, len: usize },
    #[error("bad line: {line} is outside a document with {lines} lines")]
    BadLine { line: usize, lines: usize },
    #[error("invalid edit range {start}..{end}")]
    InvalidEditRange { start: usize, end: usize },
    #[error("overlapping edits at offset {offset}")]
    OverlappingEdits { offset: usize },
}
