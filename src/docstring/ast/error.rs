//! Error types for docstring parsing
//!
//! Only three grammar violations are fatal: a missing colon in a colon-argument
//! entry, inconsistent indentation against the resolved indent unit, and an
//! argument entry following `**kwargs`. Everything else is absorbed as text.

use crate::docstring::ast::range::Position;
use std::fmt;

/// The kind of fatal parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `name ...: descr` shaped entry lacks its terminating colon
    MissingColon,
    /// Leading whitespace does not equal the resolved indent unit
    Indentation { expected: usize, found: usize },
    /// A plain or `*vararg` entry follows the `**kwargs` entry of an Args section
    Ordering,
    /// Parser invariant broken (e.g. indent unit read before it was resolved)
    Internal(String),
}

impl ParseErrorKind {
    /// Stable short name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ParseErrorKind::MissingColon => "MissingColonError",
            ParseErrorKind::Indentation { .. } => "IndentationError",
            ParseErrorKind::Ordering => "OrderingError",
            ParseErrorKind::Internal(_) => "InternalError",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingColon => write!(f, "no colon found after entry"),
            ParseErrorKind::Indentation { expected, found } => write!(
                f,
                "inconsistent indentation: expected {} spaces, found {}",
                expected, found
            ),
            ParseErrorKind::Ordering => write!(f, "argument cannot follow **kwargs"),
            ParseErrorKind::Internal(msg) => write!(f, "internal parser error: {}", msg),
        }
    }
}

/// A fatal parse error with its position and a window of surrounding lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
    pub source_context: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position, lines: &[String]) -> Self {
        Self {
            kind,
            position,
            source_context: format_source_context(lines, position.line),
        }
    }

    /// 1-based line number of the error
    pub fn line(&self) -> usize {
        self.position.one_based().0
    }

    /// 1-based column number of the error
    pub fn column(&self) -> usize {
        self.position.one_based().1
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} at line {}, column {}: {}",
            self.kind.name(),
            self.line(),
            self.column(),
            self.kind
        )?;
        write!(f, "{}", self.source_context)
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results with boxed errors (reduces stack size)
pub type ParseResult<T> = Result<T, Box<ParseError>>;

/// Format docstring context around an error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered (1-based) for easy reference.
pub fn format_source_context(lines: &[String], error_line: usize) -> String {
    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines
        .iter()
        .enumerate()
        .take(end_line)
        .skip(start_line)
    {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<String> {
        source.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_format_source_context() {
        let source = lines("line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7");

        let context = format_source_context(&source, 3);

        assert!(!context.contains("line 1"));
        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 5"));
        assert!(context.contains("line 6"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn test_format_source_context_at_start() {
        let source = lines("error line\nline 2");
        let context = format_source_context(&source, 0);
        assert_eq!(context, ">>   1 | error line\n     2 | line 2\n");
    }

    #[test]
    fn test_parse_error_display() {
        let source = lines("Args:\n    a descr");
        let err = ParseError::new(ParseErrorKind::MissingColon, Position::new(1, 6), &source);

        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 7);
        let rendered = err.to_string();
        assert!(rendered.starts_with("MissingColonError at line 2, column 7"));
        assert!(rendered.contains(">>   2 |     a descr"));
    }
}
