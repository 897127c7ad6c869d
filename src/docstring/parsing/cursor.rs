//! Line cursor
//!
//! An addressable view over the docstring lines with a `(line, column)` position.
//! The lines are the input split on line breaks plus one synthetic empty line at the
//! end. Reaching that sentinel is the end-of-input condition every parser loop checks,
//! so no separate EOF flag exists.
//!
//! The cursor also owns the lazily resolved indent unit: the number of spaces that
//! make one nesting level in this docstring. It is resolved once, from the first body
//! line of the first block section (or given up front by the caller).

use crate::docstring::ast::{ParseError, ParseErrorKind, ParseResult, Position, Span};
use crate::docstring::text::{dedent, indent_width, is_blank};

pub struct Cursor {
    lines: Vec<String>,
    lineno: usize,
    col: usize,
    indent_unit: Option<usize>,
    /// End of the last consumed text, used to close node spans
    last_end: Position,
}

impl Cursor {
    pub fn new(text: &str, indent_unit: Option<usize>) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        lines.push(String::new());
        Self {
            lines,
            lineno: 0,
            col: 0,
            indent_unit: indent_unit.filter(|unit| *unit > 0),
            last_end: Position::default(),
        }
    }

    /// Remainder of the current line from the cursor column
    pub fn current_line(&self) -> &str {
        &self.lines[self.lineno][self.col..]
    }

    /// Full text of a line, or "" past the end
    pub fn line_at(&self, lineno: usize) -> &str {
        self.lines.get(lineno).map(String::as_str).unwrap_or("")
    }

    /// The docstring lines without the end sentinel
    pub fn source_lines(&self) -> &[String] {
        &self.lines[..self.sentinel()]
    }

    pub fn lineno(&self) -> usize {
        self.lineno
    }

    pub fn position(&self) -> Position {
        Position::new(self.lineno, self.col)
    }

    pub fn last_end(&self) -> Position {
        self.last_end
    }

    /// Index of the synthetic trailing empty line
    pub fn sentinel(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn is_at_end(&self) -> bool {
        self.lineno >= self.sentinel()
    }

    /// Move the column forward by `bytes` within the current line
    pub fn advance(&mut self, bytes: usize) {
        let len = self.lines[self.lineno].len();
        self.col = (self.col + bytes).min(len);
        self.last_end = self.position();
    }

    /// Finish the current line and move to the start of the next one
    pub fn next_line(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.last_end = Position::new(self.lineno, self.lines[self.lineno].len());
        self.lineno += 1;
        self.col = 0;
    }

    /// Jump to the start of `lineno` (clamped to the sentinel)
    pub fn seek_line(&mut self, lineno: usize) {
        self.lineno = lineno.min(self.sentinel());
        self.col = 0;
    }

    /// Advance past the leading whitespace of the current line
    pub fn consume_spaces(&mut self) {
        let line = self.current_line();
        let spaces = line.len() - line.trim_start().len();
        self.col += spaces;
    }

    /// Skip blank lines when the rest of the current line is blank.
    ///
    /// Stops at the first non-blank line or at the sentinel.
    pub fn consume_blank_lines(&mut self) {
        if !is_blank(self.current_line()) || self.is_at_end() {
            return;
        }
        self.col = 0;
        self.lineno += 1;
        while self.lineno < self.sentinel() && is_blank(self.current_line()) {
            self.lineno += 1;
        }
    }

    /// Consume exactly one indent unit of leading whitespace.
    pub fn consume_fixed_indent(&mut self) -> ParseResult<()> {
        let unit = self.indent_unit()?;
        let line = self.current_line();
        let found = indent_width(line);
        if found != unit {
            return Err(self.error(ParseErrorKind::Indentation {
                expected: unit,
                found,
            }));
        }
        let bytes: usize = line.chars().take(unit).map(char::len_utf8).sum();
        self.col += bytes;
        Ok(())
    }

    pub fn has_indent_unit(&self) -> bool {
        self.indent_unit.is_some()
    }

    /// The resolved indent unit; reading it before resolution is an internal error
    pub fn indent_unit(&self) -> ParseResult<usize> {
        self.indent_unit.ok_or_else(|| {
            self.error(ParseErrorKind::Internal(
                "indent unit read before it was resolved".to_string(),
            ))
        })
    }

    /// Resolve the indent unit unless already known
    pub fn resolve_indent_unit(&mut self, unit: usize) {
        if self.indent_unit.is_none() && unit > 0 {
            self.indent_unit = Some(unit);
        }
    }

    /// True when the current line is a non-blank, indented line (a section body line)
    pub fn at_indented_line(&self) -> bool {
        let line = self.current_line();
        !is_blank(line) && indent_width(line) > 0
    }

    /// Fold an indented block starting at the current line into dedented text.
    ///
    /// Takes every following line that is blank or indented by at least `least_indent`
    /// and stops before the first non-blank line indented less. Blank lines inside the
    /// block are kept; trailing ones are skipped over but not part of the text. The
    /// cursor ends on the stopping line (or the sentinel).
    pub fn consume_block(&mut self, least_indent: usize) -> String {
        let start = self.lineno;
        let mut stop = self.sentinel();
        let mut last_content = None;

        for idx in start..self.sentinel() {
            let line = &self.lines[idx];
            if is_blank(line) {
                continue;
            }
            if indent_width(line) < least_indent {
                stop = idx;
                break;
            }
            last_content = Some(idx);
        }

        let text = match last_content {
            Some(last) => {
                self.last_end = Position::new(last, self.lines[last].len());
                dedent(&self.lines[start..=last].join("\n"))
                    .trim()
                    .to_string()
            }
            None => String::new(),
        };

        self.seek_line(stop);
        text
    }

    /// Run `consume`, stamping the span from the current position to the end of what
    /// it consumed.
    pub fn spanned<T, F>(&mut self, consume: F) -> ParseResult<(T, Span)>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        let start = self.position();
        let value = consume(self)?;
        let end = self.last_end.max(start);
        Ok((value, Span::new(start, end)))
    }

    /// Build an error at the current position
    pub fn error(&self, kind: ParseErrorKind) -> Box<ParseError> {
        self.error_at(kind, self.position())
    }

    pub fn error_at(&self, kind: ParseErrorKind, position: Position) -> Box<ParseError> {
        Box::new(ParseError::new(kind, position, self.source_lines()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_line() {
        let cursor = Cursor::new("a\nb", None);
        assert_eq!(cursor.sentinel(), 2);
        assert_eq!(cursor.source_lines().len(), 2);
        assert_eq!(cursor.line_at(2), "");
        assert_eq!(cursor.line_at(10), "");
    }

    #[test]
    fn test_empty_input_is_at_end() {
        let cursor = Cursor::new("", None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_line(), "");
    }

    #[test]
    fn test_consume_spaces_and_advance() {
        let mut cursor = Cursor::new("   word rest", None);
        cursor.consume_spaces();
        assert_eq!(cursor.current_line(), "word rest");
        cursor.advance(4);
        assert_eq!(cursor.current_line(), " rest");
        assert_eq!(cursor.last_end(), Position::new(0, 7));
    }

    #[test]
    fn test_consume_blank_lines() {
        let mut cursor = Cursor::new("a\n\n   \nb", None);
        cursor.consume_blank_lines();
        assert_eq!(cursor.lineno(), 0, "non-blank line is a no-op");

        cursor.next_line();
        cursor.consume_blank_lines();
        assert_eq!(cursor.lineno(), 3);
        assert_eq!(cursor.current_line(), "b");
    }

    #[test]
    fn test_consume_blank_lines_stops_at_sentinel() {
        let mut cursor = Cursor::new("a\n\n", None);
        cursor.next_line();
        cursor.consume_blank_lines();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_consume_fixed_indent() {
        let mut cursor = Cursor::new("    a: b", Some(4));
        cursor.consume_fixed_indent().unwrap();
        assert_eq!(cursor.current_line(), "a: b");
    }

    #[test]
    fn test_consume_fixed_indent_mismatch() {
        let mut cursor = Cursor::new("  a: b", Some(4));
        let err = cursor.consume_fixed_indent().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Indentation {
                expected: 4,
                found: 2
            }
        );
        assert_eq!((err.line(), err.column()), (1, 1));
    }

    #[test]
    fn test_indent_unit_unresolved_is_internal_error() {
        let cursor = Cursor::new("a", None);
        let err = cursor.indent_unit().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Internal(_)));
    }

    #[test]
    fn test_resolve_indent_unit_once() {
        let mut cursor = Cursor::new("a", Some(0));
        assert!(!cursor.has_indent_unit());
        cursor.resolve_indent_unit(2);
        cursor.resolve_indent_unit(4);
        assert_eq!(cursor.indent_unit().unwrap(), 2);
    }

    #[test]
    fn test_consume_block_stops_at_dedent() {
        let mut cursor = Cursor::new("    one\n\n      two\n\nnext", Some(4));
        let block = cursor.consume_block(4);
        assert_eq!(block, "one\n\n  two");
        assert_eq!(cursor.current_line(), "next");
        assert_eq!(cursor.last_end(), Position::new(2, 9));
    }

    #[test]
    fn test_consume_block_until_end() {
        let mut cursor = Cursor::new("    one\n    two\n\n", Some(4));
        assert_eq!(cursor.consume_block(4), "one\ntwo");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_consume_block_empty() {
        let mut cursor = Cursor::new("next", Some(4));
        assert_eq!(cursor.consume_block(4), "");
        assert_eq!(cursor.lineno(), 0);
    }

    #[test]
    fn test_spanned_records_consumed_region() {
        let mut cursor = Cursor::new("  abc def", None);
        cursor.consume_spaces();
        let (_, span) = cursor
            .spanned(|c| {
                c.advance(3);
                Ok(())
            })
            .unwrap();
        assert_eq!(span, Span::new(Position::new(0, 2), Position::new(0, 5)));
    }
}
