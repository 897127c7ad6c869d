//! Docstring root element
//!
//!     The root of the parsed tree. It holds the leading roles, an optional inline
//!     type annotation (`int: the counter` on a variable docstring), the short and
//!     long descriptions and every section in source order.

use super::super::range::{Position, Span};
use super::role::Role;
use super::section::Section;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Docstring {
    pub roles: Vec<Role>,
    pub annotation: Option<String>,
    pub descr: String,
    pub long_descr: String,
    pub sections: Vec<Section>,
    pub location: Span,
}

impl Docstring {
    /// First section whose node type matches, e.g. `"Args"`
    pub fn section(&self, node_type: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.node_type() == node_type)
    }

    /// Section whose span covers `pos`, for editor lookups
    pub fn section_at(&self, pos: Position) -> Option<&Section> {
        self.sections.iter().find(|s| s.location().contains(pos))
    }

    /// True when nothing at all was documented
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
            && self.annotation.is_none()
            && self.descr.is_empty()
            && self.long_descr.is_empty()
            && self.sections.is_empty()
    }
}
