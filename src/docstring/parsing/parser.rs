//! Top-level docstring parser
//!
//!     The parser walks the docstring once, top to bottom:
//!         1. Leading inline roles (`{ver}`1.0+``) on the first line.
//!         2. The description: everything before the first section marker. Its first
//!            line may carry a type annotation (`int: the counter`); lines directly
//!            after it are soft-wrapped into the short description; the rest, after a
//!            blank line, is the long description.
//!         3. The section loop: marker lines are dispatched to their consumer, any
//!            other line is buffered and flushed as a free [`Text`] section when the
//!            next marker (or the end of input) is reached.
//!
//!     Only markers whose name is in the alias table count as boundaries, both when
//!     locating the end of the description and inside the loop.

use super::consumers::dispatch;
use super::cursor::Cursor;
use super::grammar::is_annotation;
use super::roles::consume_roles;
use super::sections::match_marker;
use crate::docstring::ast::{Docstring, ParseResult, Position, Section, Span, Text};
use crate::docstring::text::{dedent, is_blank};
use tracing::{debug, instrument};

/// Short and long description found before the first section
#[derive(Debug, Default)]
struct Description {
    annotation: Option<String>,
    descr: String,
    long_descr: String,
}

/// Free text lines waiting to become a [`Text`] section
#[derive(Debug, Default)]
struct TextBuffer {
    lines: Vec<String>,
    start: Option<Position>,
}

impl TextBuffer {
    fn push(&mut self, line: &str, at: Position) {
        self.start.get_or_insert(at);
        self.lines.push(line.to_string());
    }

    /// Emit the buffered text as a section, skipping it when only whitespace remains
    fn flush(&mut self, end: Position, sections: &mut Vec<Section>) {
        let value = self.lines.join("\n").trim().to_string();
        if let (false, Some(start)) = (value.is_empty(), self.start) {
            sections.push(Section::Text(Text {
                value,
                location: Span::new(start, end),
            }));
        }
        self.lines.clear();
        self.start = None;
    }
}

pub struct DocstringParser {
    cursor: Cursor,
}

impl DocstringParser {
    pub fn new(text: &str, indent: Option<usize>) -> Self {
        Self {
            cursor: Cursor::new(text, indent),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn parse(mut self) -> ParseResult<Docstring> {
        let roles = consume_roles(&mut self.cursor);
        self.cursor.consume_blank_lines();

        let boundary = self.find_first_marker();
        let description = if self.cursor.lineno() < boundary {
            self.consume_description(boundary)
        } else {
            Description::default()
        };
        self.cursor.seek_line(boundary);

        let mut sections = Vec::new();
        let mut buffer = TextBuffer::default();
        while !self.cursor.is_at_end() {
            match match_marker(self.cursor.current_line()) {
                Some(marker) => {
                    buffer.flush(self.cursor.last_end(), &mut sections);
                    sections.push(dispatch(&mut self.cursor, marker)?);
                }
                None => {
                    let at = self.cursor.position();
                    buffer.push(self.cursor.current_line(), at);
                    self.cursor.next_line();
                }
            }
            self.cursor.consume_blank_lines();
        }
        buffer.flush(self.cursor.last_end(), &mut sections);

        debug!(sections = sections.len(), "parsed docstring");
        Ok(Docstring {
            roles,
            annotation: description.annotation,
            descr: description.descr,
            long_descr: description.long_descr,
            sections,
            location: Span::new(Position::default(), self.cursor.last_end()),
        })
    }

    /// Index of the first valid marker line from the cursor on, or the sentinel
    fn find_first_marker(&self) -> usize {
        (self.cursor.lineno()..self.cursor.sentinel())
            .find(|idx| match_marker(self.cursor.line_at(*idx)).is_some())
            .unwrap_or_else(|| self.cursor.sentinel())
    }

    /// Consume the description lines in `[lineno, boundary)`
    fn consume_description(&mut self, boundary: usize) -> Description {
        let first = self.cursor.current_line().to_string();
        let mut description = Description::default();
        match split_annotation(&first) {
            Some((annotation, descr)) => {
                description.annotation = Some(annotation.to_string());
                description.descr = descr.to_string();
            }
            None => description.descr = first.trim().to_string(),
        }
        self.cursor.next_line();

        // Soft-wrapped continuation of the short description
        while self.cursor.lineno() < boundary && !is_blank(self.cursor.current_line()) {
            let line = self.cursor.current_line().trim();
            if !description.descr.is_empty() {
                description.descr.push(' ');
            }
            description.descr.push_str(line);
            self.cursor.next_line();
        }

        let start = self.cursor.lineno();
        let last_content = (start..boundary)
            .rev()
            .find(|idx| !is_blank(self.cursor.line_at(*idx)));
        if let Some(last) = last_content {
            let chunk: Vec<&str> = (start..=last).map(|idx| self.cursor.line_at(idx)).collect();
            description.long_descr = dedent(&chunk.join("\n")).trim().to_string();
            self.cursor.seek_line(last);
            self.cursor.next_line();
        }
        description
    }
}

/// Split `annotation: descr` on a first description line.
///
/// The annotation must run right up to the colon and be followed by a non-empty
/// description.
fn split_annotation(line: &str) -> Option<(&str, &str)> {
    let (before, after) = line.split_once(':')?;
    let descr = after.trim();
    (is_annotation(before) && !descr.is_empty()).then_some((before, descr))
}
