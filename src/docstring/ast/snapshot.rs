//! Docstring Snapshot - a normalized intermediate representation of the tree
//!
//! This module provides a canonical, format-agnostic representation of a parsed
//! docstring suitable for line-oriented output formats (treeviz) and for compact
//! assertions in tests.
//!
//! The snapshot captures the complete tree structure with node types, labels,
//! attributes, and children - allowing each serializer to focus solely on
//! presentation without reimplementing traversal logic.

use super::elements::{ColonArg, Docstring, ReturnValue, Role, Section};
use serde::Serialize;
use std::collections::BTreeMap;

/// A snapshot of a docstring node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    /// The type of node (e.g., "Docstring", "Args", "ColonArg")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    fn with_optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.with_attribute(key, v),
            None => self,
        }
    }

    pub fn with_child(mut self, child: NodeSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

// ============================================================================
// Snapshot Building Functions
// ============================================================================

/// Build a snapshot of a whole docstring
pub fn snapshot_from_docstring(doc: &Docstring) -> NodeSnapshot {
    NodeSnapshot::new("Docstring", doc.descr.clone())
        .with_optional("annotation", doc.annotation.as_deref())
        .with_children(doc.roles.iter().map(snapshot_role))
        .with_children(
            (!doc.long_descr.is_empty())
                .then(|| NodeSnapshot::new("LongDescr", doc.long_descr.clone())),
        )
        .with_children(doc.sections.iter().map(snapshot_section))
}

fn snapshot_role(role: &Role) -> NodeSnapshot {
    NodeSnapshot::new("Role", role.content.clone()).with_attribute("name", role.name.clone())
}

fn snapshot_colon_arg(node_type: &str, arg: &ColonArg) -> NodeSnapshot {
    NodeSnapshot::new(node_type, arg.key())
        .with_optional("annotation", arg.annotation.as_deref())
        .with_attribute("descr", arg.descr.clone())
        .with_children(arg.roles.iter().map(snapshot_role))
        .with_children(
            (!arg.long_descr.is_empty())
                .then(|| NodeSnapshot::new("LongDescr", arg.long_descr.clone())),
        )
}

fn snapshot_return_value(value: &ReturnValue) -> NodeSnapshot {
    match value {
        ReturnValue::Annotated(arg) => snapshot_colon_arg("ColonArg", arg),
        ReturnValue::Text(text) => NodeSnapshot::new("Value", text.clone()),
    }
}

/// Build a snapshot of a single section
pub fn snapshot_section(section: &Section) -> NodeSnapshot {
    let base = NodeSnapshot::new(section.node_type(), section.name())
        .with_optional("version", section.version());

    match section {
        Section::Args(args) => base
            .with_children(args.args.iter().map(|a| snapshot_colon_arg("ColonArg", a)))
            .with_children(args.vararg.iter().map(|a| snapshot_colon_arg("VarArg", a)))
            .with_children(
                args.kwonlyargs
                    .iter()
                    .map(|a| snapshot_colon_arg("KwOnlyArg", a)),
            )
            .with_children(args.kwarg.iter().map(|a| snapshot_colon_arg("KwArg", a))),
        Section::Attributes(attrs) => {
            base.with_children(attrs.args.iter().map(|a| snapshot_colon_arg("ColonArg", a)))
        }
        Section::Raises(raises) => {
            base.with_children(raises.args.iter().map(|a| snapshot_colon_arg("ColonArg", a)))
        }
        Section::Returns(returns) => base.with_child(snapshot_return_value(&returns.value)),
        Section::Yields(yields) => base.with_child(snapshot_return_value(&yields.value)),
        Section::Require(s) => base.with_child(NodeSnapshot::new("Value", s.value.clone())),
        Section::Examples(s) => base.with_child(NodeSnapshot::new("Value", s.value.clone())),
        Section::FrontMatter(s) => base.with_child(NodeSnapshot::new("Value", s.value.clone())),
        Section::Text(text) => NodeSnapshot::new("Text", text.value.clone()),
        Section::InlineValue(inline) => base
            .with_attribute("kind", inline.kind.as_str())
            .with_child(NodeSnapshot::new("Value", inline.value.clone())),
    }
}
