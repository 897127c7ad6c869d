//! Output formats for parsed docstrings
//!
//!     treeviz: one line per node, for reading and for snapshot tests.
//!     json / yaml: the full tree through its `Serialize` derives, spans included.

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use super::ast::Docstring;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Unknown format name
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Treeviz, OutputFormat::Json, OutputFormat::Yaml];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FormatError::FormatNotFound(s.to_string()))
    }
}

/// Render a docstring in the requested format
pub fn serialize_docstring(doc: &Docstring, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Treeviz => Ok(to_treeviz_str(doc)),
        OutputFormat::Json => serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::parsing::parse_docstring;

    #[test]
    fn test_format_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "html".parse::<OutputFormat>().unwrap_err(),
            FormatError::FormatNotFound("html".to_string())
        );
    }

    #[test]
    fn test_json_output() {
        let doc = parse_docstring("int: counter\n\nReturns:\n    str: name").unwrap();
        let json = serialize_docstring(&doc, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["annotation"], "int");
        assert_eq!(value["descr"], "counter");
        assert_eq!(value["sections"][0]["section"], "returns");
        assert_eq!(value["sections"][0]["value"]["annotation"], "str");
        assert_eq!(value["sections"][0]["location"]["start"]["line"], 2);
    }

    #[test]
    fn test_yaml_output() {
        let doc = parse_docstring("Version: 1.0").unwrap();
        let yaml = serialize_docstring(&doc, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("section: inline-value"));
        assert!(yaml.contains("kind: version"));
    }
}
