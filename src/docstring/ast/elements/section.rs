//! Section elements
//!
//!     A section is introduced by a marker line such as `Args:` or `Returns (1.2.0+):`
//!     and, for block sections, followed by an indented body. Inline sections
//!     (`Version: 1.0`) keep their whole value on the marker line. Free text found
//!     between sections is kept, in order, as [`Text`] sections.
//!
//!     Every variant stores the literal marker name it was introduced with, so a
//!     localized `返回:` produces a [`Returns`] section named "返回".

use super::super::range::Span;
use super::colon_arg::ColonArg;
use serde::Serialize;

/// A typed docstring section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "kebab-case")]
pub enum Section {
    Args(Args),
    Attributes(Attributes),
    Raises(Raises),
    Returns(Returns),
    Yields(Yields),
    Require(Require),
    Examples(Examples),
    FrontMatter(FrontMatter),
    Text(Text),
    InlineValue(InlineValue),
}

impl Section {
    /// Node type name used by snapshots and assertion messages
    pub fn node_type(&self) -> &'static str {
        match self {
            Section::Args(_) => "Args",
            Section::Attributes(_) => "Attributes",
            Section::Raises(_) => "Raises",
            Section::Returns(_) => "Returns",
            Section::Yields(_) => "Yields",
            Section::Require(_) => "Require",
            Section::Examples(_) => "Examples",
            Section::FrontMatter(_) => "FrontMatter",
            Section::Text(_) => "Text",
            Section::InlineValue(_) => "InlineValue",
        }
    }

    /// Marker text the section was introduced with (empty for free text)
    pub fn name(&self) -> &str {
        match self {
            Section::Args(s) => &s.name,
            Section::Attributes(s) => &s.name,
            Section::Raises(s) => &s.name,
            Section::Returns(s) => &s.name,
            Section::Yields(s) => &s.name,
            Section::Require(s) => &s.name,
            Section::Examples(s) => &s.name,
            Section::FrontMatter(s) => &s.name,
            Section::Text(_) => "",
            Section::InlineValue(s) => &s.name,
        }
    }

    /// Version captured from the marker, for versioned variants
    pub fn version(&self) -> Option<&str> {
        match self {
            Section::Args(s) => s.version.as_deref(),
            Section::Attributes(s) => s.version.as_deref(),
            Section::Raises(s) => s.version.as_deref(),
            Section::Returns(s) => s.version.as_deref(),
            Section::Yields(s) => s.version.as_deref(),
            Section::Require(s) => s.version.as_deref(),
            _ => None,
        }
    }

    pub fn location(&self) -> Span {
        match self {
            Section::Args(s) => s.location,
            Section::Attributes(s) => s.location,
            Section::Raises(s) => s.location,
            Section::Returns(s) => s.location,
            Section::Yields(s) => s.location,
            Section::Require(s) => s.location,
            Section::Examples(s) => s.location,
            Section::FrontMatter(s) => s.location,
            Section::Text(s) => s.location,
            Section::InlineValue(s) => s.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Args {
    pub name: String,
    pub version: Option<String>,
    pub args: Vec<ColonArg>,
    pub vararg: Option<ColonArg>,
    pub kwonlyargs: Vec<ColonArg>,
    pub kwarg: Option<ColonArg>,
    pub location: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub name: String,
    pub version: Option<String>,
    pub args: Vec<ColonArg>,
    pub location: Span,
}

/// Exception list; entries carry the exception type as `annotation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Raises {
    pub name: String,
    pub version: Option<String>,
    pub args: Vec<ColonArg>,
    pub location: Span,
}

/// Value of a Returns/Yields section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReturnValue {
    /// `annotation: descr` with optional continuation
    Annotated(ColonArg),
    /// Free text when the first line is not annotation-shaped
    Text(String),
}

impl ReturnValue {
    pub fn as_annotated(&self) -> Option<&ColonArg> {
        match self {
            ReturnValue::Annotated(arg) => Some(arg),
            ReturnValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ReturnValue::Text(text) => Some(text),
            ReturnValue::Annotated(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Returns {
    pub name: String,
    pub version: Option<String>,
    pub value: ReturnValue,
    pub location: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Yields {
    pub name: String,
    pub version: Option<String>,
    pub value: ReturnValue,
    pub location: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Require {
    pub name: String,
    pub version: Option<String>,
    pub value: String,
    pub location: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Examples {
    pub name: String,
    pub value: String,
    pub location: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub name: String,
    pub value: String,
    pub location: Span,
}

/// Free text preserved between or around recognized sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
    pub location: Span,
}

/// Which single-line section an [`InlineValue`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineKind {
    Version,
    TypeVersion,
}

impl InlineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InlineKind::Version => "version",
            InlineKind::TypeVersion => "type-version",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineValue {
    pub name: String,
    pub kind: InlineKind,
    pub value: String,
    pub location: Span,
}
