//! Source location tracking

use serde::{Deserialize, Serialize};

/// A span representing a range in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the start
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-length span sitting at `offset`
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Caret containment: both ends count, so a caret sitting right after
    /// the last character of a token is still on that token.
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Merge two spans into one that covers both
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::at(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_is_inclusive() {
        let span = Span::new(3, 6);
        assert!(!span.touches(2));
        assert!(span.touches(3));
        assert!(span.touches(5));
        assert!(span.touches(6));
        assert!(!span.touches(7));
    }

    #[test]
    fn test_zero_length_span() {
        let span = Span::at(4);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(span.touches(4));
    }

    #[test]
    fn test_merge() {
        let merged = Span::new(4, 7).merge(Span::new(0, 2));
        assert_eq!(merged, Span::new(0, 7));
    }
}
