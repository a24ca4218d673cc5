/// Half-open byte span into a document: `[start, end)`.
///
/// `start` and `end` must be valid UTF-8 slice boundaries for that same document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    /// An empty span at `offset`.
    pub fn at(offset: usize) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Editor selection after an edit: `length == 0` is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub offset: usize,
    pub length: usize,
}

impl Selection {
    pub fn caret(offset: usize) -> Selection {
        Selection { offset, length: 0 }
    }
}
