//! Position and span tracking for docstring nodes
//!
//! Every node of the docstring tree records where it came from so diagnostics and
//! source-mapped renderers can point back into the original text.
//!
//! ## Types
//!
//! - [`Position`] - A line:column position in the docstring
//! - [`Span`] - A start/end pair of positions
//!
//! ## Key Design
//!
//! - **Mandatory spans**: All nodes have required `location: Span` fields
//! - **No null spans**: Default position is (0, 0) to (0, 0), never None
//! - **Zero-based storage**: lines and columns are 0-based; columns are byte offsets
//!   into the line. Diagnostics convert to 1-based numbers at the display boundary.

use serde::Serialize;
use std::fmt;

/// Represents a position in the docstring (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 1-based (line, column) pair for operator-facing messages
    pub fn one_based(&self) -> (usize, usize) {
        (self.line + 1, self.column + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Represents a region of the docstring (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Check if a position is contained within this span
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_comparison() {
        let pos1 = Position::new(1, 5);
        let pos2 = Position::new(1, 5);
        let pos3 = Position::new(2, 3);

        assert_eq!(pos1, pos2);
        assert_ne!(pos1, pos3);
        assert!(pos1 < pos3);
    }

    #[test]
    fn test_position_one_based() {
        assert_eq!(Position::new(0, 0).one_based(), (1, 1));
        assert_eq!(Position::new(4, 7).one_based(), (5, 8));
    }

    #[test]
    fn test_span_contains_multiline() {
        let span = Span::new(Position::new(1, 5), Position::new(2, 10));

        assert!(!span.contains(Position::new(1, 4)));
        assert!(!span.contains(Position::new(0, 5)));

        assert!(span.contains(Position::new(1, 5)));
        assert!(span.contains(Position::new(2, 0)));
        assert!(span.contains(Position::new(2, 10)));

        assert!(!span.contains(Position::new(2, 11)));
        assert!(!span.contains(Position::new(3, 0)));
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Position::new(1, 0), Position::new(2, 5));
        assert_eq!(format!("{}", span), "1:0..2:5");
    }
}
