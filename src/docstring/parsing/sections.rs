//! Section markers and canonical section identities
//!
//! A marker line has the shape `Name (version):` at column 0. It only counts as a
//! section boundary when `Name` is one of the known spellings in [`SECTION_ALIASES`];
//! marker-shaped prose such as `Note: see below` stays text.
//!
//! English and localized spellings map to the same [`SectionKind`]. Inline kinds keep
//! their value on the marker line (`Version: 1.0`); block kinds are followed by an
//! indented body. Text after a block marker's colon is only kept by the text-block
//! kinds, as the first line of their value. A double colon (`Example::`) is never a
//! marker.

use super::grammar::SECTION_MARKER_REGEX;

/// Canonical section identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Args,
    Attributes,
    Examples,
    FrontMatter,
    Raises,
    Returns,
    Require,
    Yields,
    Version,
    TypeVersion,
}

impl SectionKind {
    /// Normalized identity name
    pub fn identity(&self) -> &'static str {
        match self {
            SectionKind::Args => "args",
            SectionKind::Attributes => "attributes",
            SectionKind::Examples => "examples",
            SectionKind::FrontMatter => "frontmatter",
            SectionKind::Raises => "raises",
            SectionKind::Returns => "returns",
            SectionKind::Require => "require",
            SectionKind::Yields => "yields",
            SectionKind::Version => "version",
            SectionKind::TypeVersion => "type-version",
        }
    }

    /// Inline sections live entirely on their marker line
    pub fn is_inline(&self) -> bool {
        matches!(self, SectionKind::Version | SectionKind::TypeVersion)
    }

    /// Block kinds whose value is the dedented body text
    pub fn is_text_block(&self) -> bool {
        matches!(
            self,
            SectionKind::Require | SectionKind::Examples | SectionKind::FrontMatter
        )
    }

    /// Resolve a marker spelling
    pub fn from_alias(name: &str) -> Option<Self> {
        SECTION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, kind)| *kind)
    }
}

/// Every accepted marker spelling and the identity it resolves to
pub const SECTION_ALIASES: &[(&str, SectionKind)] = &[
    ("Args", SectionKind::Args),
    ("Arguments", SectionKind::Args),
    ("Parameters", SectionKind::Args),
    ("Params", SectionKind::Args),
    ("参数", SectionKind::Args),
    ("Attributes", SectionKind::Attributes),
    ("属性", SectionKind::Attributes),
    ("Example", SectionKind::Examples),
    ("Examples", SectionKind::Examples),
    ("示例", SectionKind::Examples),
    ("用法", SectionKind::Examples),
    ("FrontMatter", SectionKind::FrontMatter),
    ("前言", SectionKind::FrontMatter),
    ("Raises", SectionKind::Raises),
    ("Exceptions", SectionKind::Raises),
    ("Except", SectionKind::Raises),
    ("异常", SectionKind::Raises),
    ("Return", SectionKind::Returns),
    ("Returns", SectionKind::Returns),
    ("返回", SectionKind::Returns),
    ("Require", SectionKind::Require),
    ("要求", SectionKind::Require),
    ("Yield", SectionKind::Yields),
    ("Yields", SectionKind::Yields),
    ("生成器返回", SectionKind::Yields),
    ("Version", SectionKind::Version),
    ("版本", SectionKind::Version),
    ("Type-Version", SectionKind::TypeVersion),
    ("TypeVersion", SectionKind::TypeVersion),
    ("类型版本", SectionKind::TypeVersion),
];

/// A recognized section marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarker {
    /// Spelling as written
    pub name: String,
    pub kind: SectionKind,
    pub version: Option<String>,
    /// Text after the colon (the value of inline sections)
    pub rest: String,
}

/// Match a marker at the start of `line`, gated on the alias table
pub fn match_marker(line: &str) -> Option<SectionMarker> {
    let caps = SECTION_MARKER_REGEX.captures(line)?;
    let name = &caps[1];
    let kind = SectionKind::from_alias(name)?;
    let rest = caps.get(3).map_or("", |m| m.as_str());
    // `Example::` introduces an rst literal block, not a section
    if rest.starts_with(':') {
        return None;
    }
    Some(SectionMarker {
        name: name.to_string(),
        kind,
        version: caps.get(2).map(|m| m.as_str().to_string()),
        rest: rest.to_string(),
    })
}
