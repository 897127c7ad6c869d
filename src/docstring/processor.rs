//! Docstring processor
//!
//! Wraps the parser with the strictness policy callers need when documenting many
//! objects: either the first broken docstring aborts the run, or it is logged and
//! skipped. Optionally normalizes the raw text first (see [`cleandoc`]).

use super::ast::{Docstring, ParseError};
use super::config::DocstringConfig;
use super::parsing::{parse_docstring_with, ParseOptions};
use super::text::{cleandoc, CleanDocError};
use std::fmt;
use tracing::{debug, warn};

/// Processor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Return failures instead of skipping the docstring
    pub strict: bool,
    /// Known indent unit, inferred per docstring when `None`
    pub indent: Option<usize>,
    /// Run [`cleandoc`] before parsing
    pub clean: bool,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            strict: true,
            indent: None,
            clean: true,
        }
    }
}

impl From<&DocstringConfig> for ProcessorOptions {
    fn from(config: &DocstringConfig) -> Self {
        Self {
            strict: config.strict,
            indent: (config.indent > 0).then_some(config.indent),
            clean: config.clean,
        }
    }
}

/// Why a docstring could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    Clean {
        name: Option<String>,
        source: CleanDocError,
    },
    Parse {
        name: Option<String>,
        source: Box<ParseError>,
    },
}

impl ProcessingError {
    /// Name of the docstring owner, when processed through [`DocstringProcessor::process_all`]
    pub fn name(&self) -> Option<&str> {
        match self {
            ProcessingError::Clean { name, .. } | ProcessingError::Parse { name, .. } => {
                name.as_deref()
            }
        }
    }

    fn with_name(self, owner: &str) -> Self {
        match self {
            ProcessingError::Clean { source, .. } => ProcessingError::Clean {
                name: Some(owner.to_string()),
                source,
            },
            ProcessingError::Parse { source, .. } => ProcessingError::Parse {
                name: Some(owner.to_string()),
                source,
            },
        }
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            write!(f, "{}: ", name)?;
        }
        match self {
            ProcessingError::Clean { source, .. } => write!(f, "{}", source),
            ProcessingError::Parse { source, .. } => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Clean { source, .. } => Some(source),
            ProcessingError::Parse { source, .. } => Some(source.as_ref()),
        }
    }
}

/// A named docstring after processing; `docstring` is `None` when it was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub name: String,
    pub docstring: Option<Docstring>,
}

#[derive(Debug, Clone, Default)]
pub struct DocstringProcessor {
    options: ProcessorOptions,
}

impl DocstringProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Clean and parse one docstring.
    ///
    /// Lenient processors log the failure and return `Ok(None)`.
    pub fn process(&self, text: &str) -> Result<Option<Docstring>, ProcessingError> {
        match self.try_process(text) {
            Ok(doc) => Ok(Some(doc)),
            Err(err) if self.options.strict => Err(err),
            Err(err) => {
                warn!(error = %err, "skipping docstring");
                Ok(None)
            }
        }
    }

    /// Process `(name, text)` pairs in order, stopping at the first failure when strict
    pub fn process_all<'a, I>(&self, items: I) -> Result<Vec<Processed>, ProcessingError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut processed = Vec::new();
        for (name, text) in items {
            debug!(name, "processing docstring");
            let docstring = match self.try_process(text) {
                Ok(doc) => Some(doc),
                Err(err) if self.options.strict => return Err(err.with_name(name)),
                Err(err) => {
                    warn!(name, error = %err, "skipping docstring");
                    None
                }
            };
            processed.push(Processed {
                name: name.to_string(),
                docstring,
            });
        }
        Ok(processed)
    }

    fn try_process(&self, text: &str) -> Result<Docstring, ProcessingError> {
        let cleaned;
        let input = if self.options.clean {
            cleaned = cleandoc(text, self.options.strict)
                .map_err(|source| ProcessingError::Clean { name: None, source })?;
            cleaned.as_str()
        } else {
            text
        };
        let options = ParseOptions {
            indent: self.options.indent,
        };
        parse_docstring_with(input, &options)
            .map_err(|source| ProcessingError::Parse { name: None, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::ast::ParseErrorKind;

    const BROKEN: &str = "Args:\n    a descr";

    #[test]
    fn test_process_cleans_raw_docstring() {
        let processor = DocstringProcessor::default();
        let doc = processor
            .process("Summary.\n\n    Args:\n        a: first\n    ")
            .unwrap()
            .unwrap();
        assert_eq!(doc.descr, "Summary.");
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn test_strict_returns_error() {
        let processor = DocstringProcessor::default();
        let err = processor.process(BROKEN).unwrap_err();
        let ProcessingError::Parse { source, .. } = &err else {
            panic!("expected parse error, got {:?}", err);
        };
        assert_eq!(source.kind, ParseErrorKind::MissingColon);
    }

    #[test]
    fn test_lenient_skips() {
        let processor = DocstringProcessor::new(ProcessorOptions {
            strict: false,
            ..Default::default()
        });
        assert_eq!(processor.process(BROKEN).unwrap(), None);
    }

    #[test]
    fn test_strict_cleandoc_rejects_whitespace_only_lines() {
        let processor = DocstringProcessor::default();
        let err = processor.process("Summary.\n   \nMore.").unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::Clean {
                source: CleanDocError::WhitespaceOnlyLine { line: 2 },
                ..
            }
        ));
    }

    #[test]
    fn test_known_indent_is_enforced() {
        let processor = DocstringProcessor::new(ProcessorOptions {
            indent: Some(2),
            clean: false,
            ..Default::default()
        });
        let err = processor.process("Args:\n    a: b").unwrap_err();
        let ProcessingError::Parse { source, .. } = err else {
            panic!("expected parse error");
        };
        assert_eq!(
            source.kind,
            ParseErrorKind::Indentation {
                expected: 2,
                found: 4
            }
        );
    }

    #[test]
    fn test_process_all_stops_when_strict() {
        let processor = DocstringProcessor::default();
        let err = processor
            .process_all([("ok", "Fine."), ("broken", BROKEN), ("later", "Never seen.")])
            .unwrap_err();
        assert_eq!(err.name(), Some("broken"));
        assert!(err.to_string().starts_with("broken: MissingColonError"));
    }

    #[test]
    fn test_process_all_lenient_keeps_going() {
        let processor = DocstringProcessor::new(ProcessorOptions {
            strict: false,
            ..Default::default()
        });
        let processed = processor
            .process_all([("ok", "Fine."), ("broken", BROKEN), ("later", "Seen.")])
            .unwrap();
        assert_eq!(processed.len(), 3);
        assert!(processed[1].docstring.is_none());
        assert_eq!(processed[2].docstring.as_ref().unwrap().descr, "Seen.");
    }

    #[test]
    fn test_options_from_config() {
        let config = DocstringConfig {
            strict: false,
            indent: 0,
            clean: true,
        };
        let options = ProcessorOptions::from(&config);
        assert_eq!(options.indent, None);
        assert!(!options.strict);
    }
}
