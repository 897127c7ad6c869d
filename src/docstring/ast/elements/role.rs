//! Role element
//!
//!     A role is an inline annotation token of the form `{name}`content``. Roles are
//!     used for version badges (`{ver}`1.1.0+``) and similar short markers in front
//!     of descriptions and after colon-argument names.
//!
//! Syntax
//!
//!     "{" <identifier> "}" "`" <content> "`"
//!
//!     Examples:
//!         {ver}`1.1.0+`
//!         {deprecated}`2.0`

use super::super::range::Span;
use serde::Serialize;
use std::fmt;

/// An inline `{name}`content`` token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub name: String,
    /// Display text; roles produced by the parser never carry one
    pub text: Option<String>,
    pub content: String,
    pub location: Span,
}

impl Role {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            content: content.into(),
            location: Span::default(),
        }
    }

    /// Preferred builder
    pub fn at(mut self, location: Span) -> Self {
        self.location = location;
        self
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}`{}`", self.name, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        let role = Role::new("ver", "1.1.0+");
        assert_eq!(role.to_string(), "{ver}`1.1.0+`");
        assert_eq!(role.text, None);
    }
}
