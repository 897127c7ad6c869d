//! Parsing module for Google style docstrings
//!
//!     The parser is a hand-written line cursor, layered bottom up:
//!         - [cursor]: addressable view over the lines, indentation handling, spans.
//!         - [roles]: inline `{name}`content`` tokens.
//!         - [colon_arg]: one `name (annotation) {role}*: descr` entry and its
//!           continuation block.
//!         - [sections]: marker recognition and the alias table.
//!         - [consumers]: one consumer per section kind, selected by the dispatcher.
//!         - [parser]: the description and the section loop.
//!
//! Input
//!
//!     The input must already be dedented as a whole (see
//!     [`cleandoc`](crate::docstring::text::cleandoc)). Section bodies are indented
//!     by a fixed unit; pass it in [`ParseOptions`] when known, otherwise it is taken
//!     from the first body line of the first block section.
//!
//! Errors
//!
//!     Three authoring mistakes abort the parse: an entry without its colon, an entry
//!     indented by something other than the unit, and arguments after `**kwargs`.
//!     Anything else that does not fit the grammar is kept as text.

pub mod colon_arg;
pub mod consumers;
pub mod cursor;
pub mod grammar;
pub mod parser;
pub mod roles;
pub mod sections;

pub use parser::DocstringParser;
pub use sections::{match_marker, SectionKind, SectionMarker, SECTION_ALIASES};

use crate::docstring::ast::{Docstring, ParseResult};

/// Options for a single parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Known indent unit; inferred from the first section body when `None`
    pub indent: Option<usize>,
}

impl ParseOptions {
    pub fn with_indent(indent: usize) -> Self {
        Self {
            indent: Some(indent),
        }
    }
}

/// Parse a docstring, inferring the indent unit.
pub fn parse_docstring(text: &str) -> ParseResult<Docstring> {
    parse_docstring_with(text, &ParseOptions::default())
}

/// Parse a docstring with explicit options.
pub fn parse_docstring_with(text: &str, options: &ParseOptions) -> ParseResult<Docstring> {
    DocstringParser::new(text, options.indent).parse()
}
