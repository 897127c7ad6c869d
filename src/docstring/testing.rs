//! Testing utilities for docstring assertions
//!
//!     Tests that walk the tree by hand (`doc.sections[1]`, `if let Section::Args(..)`)
//!     get long quickly and break whenever a node changes shape. The fluent API here
//!     names what is being checked instead, and reports a path such as
//!     `sections[1].args[0]` when an expectation fails.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use docstring_parser::docstring::testing::assert_docstring;
//!
//!     let doc = parse_docstring(source).unwrap();
//!     assert_docstring(&doc)
//!         .descr("Write the file.")
//!         .section_count(2)
//!         .section(0, |s| {
//!             s.name("Args").assert_args().arg_count(1).arg(0, |a| {
//!                 a.name("path").annotation("str").descr("where to write")
//!             });
//!         })
//!         .section(1, |s| {
//!             s.assert_returns().annotated(|a| a.annotation("bool"));
//!         });
//!     ```

mod assertions;

pub use assertions::{
    ArgsAssertion, ColonArgAssertion, DocstringAssertion, EntriesAssertion, ReturnAssertion,
    SectionAssertion,
};

use crate::docstring::ast::Docstring;

/// Create an assertion builder for a parsed docstring
pub fn assert_docstring(doc: &Docstring) -> DocstringAssertion<'_> {
    DocstringAssertion { doc }
}
