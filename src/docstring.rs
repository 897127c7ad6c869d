//! Google style docstring parsing
//!
//!     Docstrings are loosely formatted: a short description, an optional long one,
//!     and indentation-delimited sections such as `Args:` or `Returns:`. This module
//!     turns them into a typed [`Docstring`](ast::Docstring) tree with source spans on
//!     every node, ready for a renderer.
//!
//! Layout
//!
//!     - [ast]: the node types, spans, parse errors and snapshots.
//!     - [parsing]: the line cursor parser.
//!     - [text]: dedent and cleandoc helpers.
//!     - [processor]: strict / lenient processing of many docstrings.
//!     - [config]: layered configuration for the `docparse` binary.
//!     - [formats]: treeviz, JSON and YAML output.
//!     - [testing]: fluent assertions for tests.

pub mod ast;
pub mod config;
pub mod formats;
pub mod parsing;
pub mod processor;
pub mod testing;
pub mod text;

pub use ast::{Docstring, ParseError, ParseErrorKind, ParseResult, Section};
pub use parsing::{parse_docstring, parse_docstring_with, ParseOptions};
pub use processor::{DocstringProcessor, ProcessingError, ProcessorOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG`; without it only this crate's warnings are
/// shown. Runs once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("docstring_parser=warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
