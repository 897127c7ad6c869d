//! ColonArg element
//!
//!     A colon argument is a single documentation entry: an optional name, an optional
//!     parenthesized annotation, inline roles, a colon and a short description. A more
//!     indented block following the entry line becomes the long description.
//!
//! Syntax
//!
//!     <name> ("(" <annotation> ")")? <role>* ":" <descr>
//!         <long descr>...
//!
//!     Examples:
//!         path (str): where to write the file
//!         timeout {ver}`1.2.0+`: seconds before giving up.
//!             Zero disables the timeout.
//!
//!     In Raises sections the leading token is the exception type and is stored as
//!     the annotation; annotated Returns/Yields values have no name either.

use super::super::range::Span;
use super::role::Role;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColonArg {
    pub name: Option<String>,
    pub annotation: Option<String>,
    pub roles: Vec<Role>,
    pub descr: String,
    pub long_descr: String,
    pub location: Span,
}

impl ColonArg {
    /// An entry keyed by an argument or attribute name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::anonymous()
        }
    }

    /// An entry without a name (exception types, annotated return values)
    pub fn anonymous() -> Self {
        Self {
            name: None,
            annotation: None,
            roles: Vec::new(),
            descr: String::new(),
            long_descr: String::new(),
            location: Span::default(),
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = descr.into();
        self
    }

    pub fn with_long_descr(mut self, long_descr: impl Into<String>) -> Self {
        self.long_descr = long_descr.into();
        self
    }

    /// Preferred builder
    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }

    /// Name if present, otherwise the annotation (used for labels)
    pub fn key(&self) -> &str {
        self.name
            .as_deref()
            .or(self.annotation.as_deref())
            .unwrap_or("")
    }
}
