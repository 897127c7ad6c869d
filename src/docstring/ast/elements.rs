//! Docstring tree elements
//!
//! One module per node kind. All nodes are plain values with derived structural
//! equality and serde serialization; none hold back-references.

pub mod colon_arg;
pub mod docstring;
pub mod role;
pub mod section;

pub use colon_arg::ColonArg;
pub use docstring::Docstring;
pub use role::Role;
pub use section::{
    Args, Attributes, Examples, FrontMatter, InlineKind, InlineValue, Raises, Require,
    ReturnValue, Returns, Section, Text, Yields,
};
