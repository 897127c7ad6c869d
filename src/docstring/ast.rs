//! Docstring tree
//!
//! The typed output of the parser: a [`Docstring`] root holding roles, descriptions
//! and [`Section`]s. Nodes are immutable once built and carry a [`Span`] each.

pub mod elements;
pub mod error;
pub mod range;
pub mod snapshot;

pub use elements::{
    Args, Attributes, ColonArg, Docstring, Examples, FrontMatter, InlineKind, InlineValue,
    Raises, Require, ReturnValue, Returns, Role, Section, Text, Yields,
};
pub use error::{format_source_context, ParseError, ParseErrorKind, ParseResult};
pub use range::{Position, Span};
pub use snapshot::{snapshot_from_docstring, snapshot_section, NodeSnapshot};
