//! Section dispatch and consumers
//!
//! The dispatcher is entered with the cursor on a marker line. Inline sections are
//! finished right there. For block sections it moves to the body, resolves the indent
//! unit from the first body line when still unknown, and hands over to the consumer
//! registered for the section identity.
//!
//! Consumers stop at the first line that is not an indented body line, so the caller
//! always resumes on a column-0 line or at the end of input.

use super::colon_arg::{consume_colon_arg, EntryKey};
use super::cursor::Cursor;
use super::grammar::is_annotation;
use super::sections::{SectionKind, SectionMarker};
use crate::docstring::ast::{
    Args, Attributes, ColonArg, Examples, FrontMatter, InlineKind, InlineValue, ParseErrorKind,
    ParseResult, Raises, Require, ReturnValue, Returns, Section, Span, Yields,
};
use crate::docstring::text::indent_width;
use tracing::debug;

/// Consume the section introduced by `marker` at the cursor line
pub fn dispatch(cursor: &mut Cursor, marker: SectionMarker) -> ParseResult<Section> {
    let start = cursor.position();
    debug!(
        section = marker.kind.identity(),
        name = %marker.name,
        line = start.line + 1,
        "dispatching section"
    );

    if marker.kind.is_inline() {
        let kind = match marker.kind {
            SectionKind::TypeVersion => InlineKind::TypeVersion,
            _ => InlineKind::Version,
        };
        cursor.next_line();
        return Ok(Section::InlineValue(InlineValue {
            name: marker.name,
            kind,
            value: marker.rest.trim().to_string(),
            location: Span::new(start, cursor.last_end()),
        }));
    }

    cursor.next_line();
    cursor.consume_blank_lines();
    if !cursor.has_indent_unit() && cursor.at_indented_line() {
        let unit = indent_width(cursor.current_line());
        debug!(unit, line = cursor.lineno() + 1, "resolved indent unit");
        cursor.resolve_indent_unit(unit);
    }

    let SectionMarker {
        name,
        kind,
        version,
        rest,
    } = marker;
    let lead = rest.trim();
    if !lead.is_empty() && !kind.is_text_block() {
        debug!(section = kind.identity(), lead, "dropping text after section marker");
    }

    let section = match kind {
        SectionKind::Args => {
            let mut args = consume_args(cursor)?;
            args.name = name;
            args.version = version;
            Section::Args(args)
        }
        SectionKind::Attributes => Section::Attributes(Attributes {
            name,
            version,
            args: consume_entries(cursor, EntryKey::Name)?,
            location: Span::default(),
        }),
        SectionKind::Raises => Section::Raises(Raises {
            name,
            version,
            args: consume_entries(cursor, EntryKey::ExceptionType)?,
            location: Span::default(),
        }),
        SectionKind::Returns => Section::Returns(Returns {
            name,
            version,
            value: consume_return_value(cursor)?,
            location: Span::default(),
        }),
        SectionKind::Yields => Section::Yields(Yields {
            name,
            version,
            value: consume_return_value(cursor)?,
            location: Span::default(),
        }),
        SectionKind::Require => Section::Require(Require {
            name,
            version,
            value: consume_text_block(cursor, lead)?,
            location: Span::default(),
        }),
        SectionKind::Examples => Section::Examples(Examples {
            name,
            value: consume_text_block(cursor, lead)?,
            location: Span::default(),
        }),
        SectionKind::FrontMatter => Section::FrontMatter(FrontMatter {
            name,
            value: consume_text_block(cursor, lead)?,
            location: Span::default(),
        }),
        SectionKind::Version | SectionKind::TypeVersion => {
            return Err(cursor.error_at(
                ParseErrorKind::Internal(format!(
                    "inline section {:?} reached a block consumer",
                    kind
                )),
                start,
            ))
        }
    };

    Ok(with_location(section, Span::new(start, cursor.last_end().max(start))))
}

fn with_location(mut section: Section, span: Span) -> Section {
    match &mut section {
        Section::Args(s) => s.location = span,
        Section::Attributes(s) => s.location = span,
        Section::Raises(s) => s.location = span,
        Section::Returns(s) => s.location = span,
        Section::Yields(s) => s.location = span,
        Section::Require(s) => s.location = span,
        Section::Examples(s) => s.location = span,
        Section::FrontMatter(s) => s.location = span,
        Section::Text(s) => s.location = span,
        Section::InlineValue(s) => s.location = span,
    }
    section
}

/// Args: plain entries, then `*vararg`, keyword-only entries and `**kwarg` last.
///
/// A repeated `*vararg` or `**kwarg` replaces the earlier one.
fn consume_args(cursor: &mut Cursor) -> ParseResult<Args> {
    let mut args = Vec::new();
    let mut vararg: Option<ColonArg> = None;
    let mut kwonlyargs = Vec::new();
    let mut kwarg: Option<ColonArg> = None;

    while cursor.at_indented_line() {
        cursor.consume_fixed_indent()?;
        let start = cursor.position();
        let line = cursor.current_line();
        if kwarg.is_some() && !line.starts_with("**") {
            return Err(cursor.error(ParseErrorKind::Ordering));
        }

        if line.starts_with("**") {
            cursor.advance(2);
            let mut arg = consume_colon_arg(cursor, EntryKey::Name, false)?;
            arg.location.start = start;
            kwarg = Some(arg);
        } else if line.starts_with('*') {
            cursor.advance(1);
            let mut arg = consume_colon_arg(cursor, EntryKey::Name, false)?;
            arg.location.start = start;
            vararg = Some(arg);
        } else {
            let arg = consume_colon_arg(cursor, EntryKey::Name, false)?;
            if vararg.is_some() {
                kwonlyargs.push(arg);
            } else {
                args.push(arg);
            }
        }
    }

    Ok(Args {
        name: String::new(),
        version: None,
        args,
        vararg,
        kwonlyargs,
        kwarg,
        location: Span::default(),
    })
}

/// Attributes and Raises: a flat list of entries
fn consume_entries(cursor: &mut Cursor, key: EntryKey) -> ParseResult<Vec<ColonArg>> {
    let mut entries = Vec::new();
    while cursor.at_indented_line() {
        entries.push(consume_colon_arg(cursor, key, true)?);
    }
    Ok(entries)
}

/// Returns and Yields: `annotation: descr` or free text
fn consume_return_value(cursor: &mut Cursor) -> ParseResult<ReturnValue> {
    if !cursor.at_indented_line() {
        return Ok(ReturnValue::Text(String::new()));
    }
    let unit = cursor.indent_unit()?;
    cursor.consume_fixed_indent()?;

    let annotated = cursor
        .current_line()
        .split_once(':')
        .map(|(before, after)| (before.trim_end(), after))
        .filter(|(before, _)| is_annotation(before))
        .map(|(before, after)| (before.to_string(), after.trim().to_string()));

    if let Some((annotation, descr)) = annotated {
        let (arg, span) = cursor.spanned(|cursor| {
            cursor.next_line();
            let long_descr = cursor.consume_block(unit);
            Ok(ColonArg::anonymous()
                .with_annotation(annotation)
                .with_descr(descr)
                .with_long_descr(long_descr))
        })?;
        return Ok(ReturnValue::Annotated(arg.at(span)));
    }

    let line = cursor.lineno();
    cursor.seek_line(line);
    Ok(ReturnValue::Text(cursor.consume_block(unit)))
}

/// Require, Examples and FrontMatter: the body verbatim, dedented.
///
/// Text after the marker colon becomes the first line of the value.
fn consume_text_block(cursor: &mut Cursor, lead: &str) -> ParseResult<String> {
    let body = if cursor.at_indented_line() {
        let unit = cursor.indent_unit()?;
        cursor.consume_block(unit)
    } else {
        String::new()
    };
    Ok(match (lead.is_empty(), body.is_empty()) {
        (true, _) => body,
        (false, true) => lead.to_string(),
        (false, false) => format!("{}\n{}", lead, body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::ast::Position;
    use crate::docstring::parsing::sections::match_marker;

    fn parse_section(text: &str) -> ParseResult<Section> {
        let mut cursor = Cursor::new(text, None);
        let marker = match_marker(cursor.current_line()).unwrap();
        dispatch(&mut cursor, marker)
    }

    #[test]
    fn test_inline_version() {
        let section = parse_section("Version: 1.1.0+").unwrap();
        let Section::InlineValue(inline) = section else {
            panic!("expected inline value, got {:?}", section);
        };
        assert_eq!(inline.kind, InlineKind::Version);
        assert_eq!(inline.value, "1.1.0+");
        assert_eq!(inline.name, "Version");
        assert_eq!(
            inline.location,
            Span::new(Position::new(0, 0), Position::new(0, 15))
        );
    }

    #[test]
    fn test_args_with_varargs() {
        let text = "Args (1.0+):\n    a: first\n    *args: rest\n    flag: kw only\n    **kwargs: options";
        let Section::Args(args) = parse_section(text).unwrap() else {
            panic!("expected args");
        };
        assert_eq!(args.name, "Args");
        assert_eq!(args.version.as_deref(), Some("1.0+"));
        assert_eq!(args.args.len(), 1);
        assert_eq!(args.vararg.as_ref().and_then(|a| a.name.as_deref()), Some("args"));
        assert_eq!(args.vararg.as_ref().unwrap().location.start, Position::new(2, 4));
        assert_eq!(args.kwonlyargs[0].name.as_deref(), Some("flag"));
        assert_eq!(args.kwarg.as_ref().unwrap().descr, "options");
        assert_eq!(args.location.end, Position::new(4, 21));
    }

    #[test]
    fn test_args_ordering_error() {
        let text = "Args:\n    **kw: d\n    late: e";
        let err = parse_section(text).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Ordering);
        assert_eq!((err.line(), err.column()), (3, 5));
    }

    #[test]
    fn test_repeated_kwarg_replaces_earlier() {
        let text = "Args:\n    **kw: first\n    **other: second";
        let Section::Args(args) = parse_section(text).unwrap() else {
            panic!("expected args");
        };
        let kwarg = args.kwarg.unwrap();
        assert_eq!(kwarg.name.as_deref(), Some("other"));
        assert_eq!(kwarg.descr, "second");
        assert_eq!(kwarg.location.start, Position::new(2, 4));
    }

    #[test]
    fn test_text_block_keeps_marker_lead() {
        let text = "Example: call it twice\n    f()\n    f()";
        let Section::Examples(examples) = parse_section(text).unwrap() else {
            panic!("expected examples");
        };
        assert_eq!(examples.value, "call it twice\nf()\nf()");

        let Section::Require(require) = parse_section("Require: network").unwrap() else {
            panic!("expected require");
        };
        assert_eq!(require.value, "network");
    }

    #[test]
    fn test_vararg_after_kwarg_is_ordering_error() {
        let err = parse_section("Args:\n    **kw: d\n    *rest: e").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Ordering);
    }

    #[test]
    fn test_empty_block_section() {
        let Section::Args(args) = parse_section("Args:\n\nText after").unwrap() else {
            panic!("expected args");
        };
        assert!(args.args.is_empty());
        assert!(args.vararg.is_none());
    }

    #[test]
    fn test_returns_annotated() {
        let text = "Returns:\n    int: the value\n    more detail";
        let Section::Returns(returns) = parse_section(text).unwrap() else {
            panic!("expected returns");
        };
        let value = returns.value.as_annotated().unwrap();
        assert_eq!(value.name, None);
        assert_eq!(value.annotation.as_deref(), Some("int"));
        assert_eq!(value.descr, "the value");
        assert_eq!(value.long_descr, "more detail");
    }

    #[test]
    fn test_returns_free_text() {
        let text = "Yields:\n    just a sentence.\n      continued";
        let Section::Yields(yields) = parse_section(text).unwrap() else {
            panic!("expected yields");
        };
        assert_eq!(yields.value.as_text(), Some("just a sentence.\n  continued"));
    }

    #[test]
    fn test_returns_non_annotation_before_colon() {
        let text = "Returns:\n    see http://example.com";
        let Section::Returns(returns) = parse_section(text).unwrap() else {
            panic!("expected returns");
        };
        assert_eq!(returns.value.as_text(), Some("see http://example.com"));
    }

    #[test]
    fn test_examples_verbatim() {
        let text = "Examples:\n    ```python\n    call()\n    ```\nAfter";
        let Section::Examples(examples) = parse_section(text).unwrap() else {
            panic!("expected examples");
        };
        assert_eq!(examples.value, "```python\ncall()\n```");
    }

    #[test]
    fn test_raises_entries() {
        let text = "Raises:\n    ValueError: short\n        long descr.";
        let Section::Raises(raises) = parse_section(text).unwrap() else {
            panic!("expected raises");
        };
        assert_eq!(raises.args.len(), 1);
        assert_eq!(raises.args[0].annotation.as_deref(), Some("ValueError"));
        assert_eq!(raises.args[0].long_descr, "long descr.");
    }
}
