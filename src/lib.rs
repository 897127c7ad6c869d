//! # docstring-parser
//!
//! A parser for Google style structured docstrings.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](docstring::testing).
//! Parser tests should prefer the fluent assertions over walking the tree by hand.

pub mod docstring;

pub use docstring::{
    parse_docstring, parse_docstring_with, Docstring, ParseError, ParseOptions, Section,
};
