use serde::Serialize;

/// A byte range `[start, end)` into the rope.
///
/// Lines and inline nodes store spans rather than copied text, so slicing the
/// rope with any span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves the start boundary `n` bytes backward.
    ///
    /// The caller guarantees the bytes before `start` belong to the same line.
    pub fn extend_start(&mut self, n: usize) {
        self.start -= n;
    }

    /// Moves the start boundary `n` bytes forward. Exact inverse of [`Span::extend_start`].
    pub fn shrink_start(&mut self, n: usize) {
        self.start += n;
    }
}
