//! ColonArg parser
//!
//! Parses one `name (annotation) {role}* : short description` entry and the more
//! indented continuation block after it. Used by the Args, Attributes and Raises
//! consumers.

use super::cursor::Cursor;
use super::grammar::{DOTTED_IDENTIFIER_REGEX, IDENTIFIER_REGEX};
use super::roles::consume_roles;
use crate::docstring::ast::{ColonArg, ParseErrorKind, ParseResult};

/// Which grammar the leading token of an entry follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKey {
    /// Unicode identifier stored as `name`, may be followed by `(annotation)`
    Name,
    /// ASCII dotted identifier stored as `annotation` (exception types)
    ExceptionType,
}

/// Nesting depth of section entries; their continuation sits one level deeper
const ENTRY_DEPTH: usize = 1;

/// Parse one entry at the cursor.
///
/// With `consume_indent`, one indent unit is consumed first; otherwise the caller
/// has already positioned the cursor (e.g. past a `*` or `**` marker).
pub fn consume_colon_arg(
    cursor: &mut Cursor,
    key: EntryKey,
    consume_indent: bool,
) -> ParseResult<ColonArg> {
    if consume_indent {
        cursor.consume_fixed_indent()?;
    }
    let (arg, span) = cursor.spanned(|cursor| consume_entry(cursor, key))?;
    Ok(arg.at(span))
}

fn consume_entry(cursor: &mut Cursor, key: EntryKey) -> ParseResult<ColonArg> {
    let regex = match key {
        EntryKey::Name => &*IDENTIFIER_REGEX,
        EntryKey::ExceptionType => &*DOTTED_IDENTIFIER_REGEX,
    };
    let token = match regex.find(cursor.current_line()) {
        Some(found) => found.as_str().to_string(),
        None => return Err(cursor.error(ParseErrorKind::MissingColon)),
    };
    cursor.advance(token.len());
    cursor.consume_spaces();

    let mut arg = match key {
        EntryKey::Name => {
            let mut arg = ColonArg::named(token);
            if let Some((annotation, len)) = paren_annotation(cursor.current_line()) {
                arg.annotation = Some(annotation);
                cursor.advance(len);
            }
            arg
        }
        EntryKey::ExceptionType => ColonArg::anonymous().with_annotation(token),
    };

    arg.roles = consume_roles(cursor);

    if !cursor.current_line().starts_with(':') {
        return Err(cursor.error(ParseErrorKind::MissingColon));
    }
    cursor.advance(1);
    arg.descr = cursor.current_line().trim().to_string();
    cursor.next_line();

    let unit = cursor.indent_unit()?;
    arg.long_descr = cursor.consume_block(unit * (ENTRY_DEPTH + 1));
    Ok(arg)
}

/// Match `(...)` at the start of `line` up to its balancing `)`.
///
/// Returns the trimmed content and the byte length of the whole group.
fn paren_annotation(line: &str) -> Option<(String, usize)> {
    if !line.starts_with('(') {
        return None;
    }
    let mut depth = 0usize;
    for (idx, ch) in line.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((line[1..idx].trim().to_string(), idx + 1));
                }
            }
            _ => {}
        }
    }
    None
}
