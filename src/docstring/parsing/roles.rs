//! Inline role scanner
//!
//! Recognizes runs of `{name}`content`` tokens separated only by whitespace,
//! starting at the cursor. Scanning stops at the first position that is not a role,
//! leaving the cursor there (after any whitespace).

use super::cursor::Cursor;
use super::grammar::ROLE_REGEX;
use crate::docstring::ast::{Role, Span};

/// Consume a single role at the cursor column
pub fn consume_role(cursor: &mut Cursor) -> Option<Role> {
    let start = cursor.position();
    let (name, content, len) = {
        let caps = ROLE_REGEX.captures(cursor.current_line())?;
        (caps[1].to_string(), caps[2].to_string(), caps[0].len())
    };
    cursor.advance(len);
    Some(Role::new(name, content).at(Span::new(start, cursor.position())))
}

/// Consume zero or more whitespace separated roles
pub fn consume_roles(cursor: &mut Cursor) -> Vec<Role> {
    let mut roles = Vec::new();
    loop {
        cursor.consume_spaces();
        match consume_role(cursor) {
            Some(role) => roles.push(role),
            None => break,
        }
    }
    roles
}
