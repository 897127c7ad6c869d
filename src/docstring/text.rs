//! Text normalization helpers
//!
//! The parser expects an already-dedented docstring. [`cleandoc`] performs that
//! normalization for raw docstrings lifted from source code; [`dedent`] is the
//! margin-removal step the parser applies to every indented block it folds.

use std::fmt;

/// Tab stops used when expanding tabs in raw docstrings
const TAB_SIZE: usize = 8;

/// Number of leading whitespace characters of a line
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// True for empty and whitespace-only lines
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Byte offset just past the first `count` characters of `line`
fn char_offset(line: &str, count: usize) -> usize {
    line.char_indices()
        .nth(count)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Remove the common leading whitespace of all non-blank lines.
///
/// Blank lines are left untouched. A text without non-blank lines is returned as is.
pub fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(indent_width)
        .min();

    let Some(margin) = margin else {
        return text.to_string();
    };

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                line
            } else {
                &line[char_offset(line, margin)..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expand tabs to the next multiple of [`TAB_SIZE`] columns
fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let spaces = TAB_SIZE - column % TAB_SIZE;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Errors raised by [`cleandoc`] in strict mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanDocError {
    /// A line consisting only of whitespace (1-based line number)
    WhitespaceOnlyLine { line: usize },
}

impl fmt::Display for CleanDocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanDocError::WhitespaceOnlyLine { line } => {
                write!(f, "line {} contains only whitespace", line)
            }
        }
    }
}

impl std::error::Error for CleanDocError {}

/// Normalize a raw docstring the way documentation tools do before parsing.
///
/// Tabs are expanded, the first line loses its leading whitespace, the common margin
/// of the following lines is removed and leading/trailing empty lines are dropped.
/// Whitespace-only lines lose the margin like any other line, so whitespace past the
/// margin survives. With `strict`, whitespace-only lines are rejected.
pub fn cleandoc(text: &str, strict: bool) -> Result<String, CleanDocError> {
    let expanded: Vec<String> = text.trim_end().lines().map(expand_tabs).collect();

    if strict {
        if let Some(idx) = expanded
            .iter()
            .position(|line| !line.is_empty() && is_blank(line))
        {
            return Err(CleanDocError::WhitespaceOnlyLine { line: idx + 1 });
        }
    }

    let margin = expanded
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = Vec::with_capacity(expanded.len());
    for (idx, line) in expanded.iter().enumerate() {
        if idx == 0 {
            lines.push(line.trim_start());
        } else {
            lines.push(&line[char_offset(line, margin)..]);
        }
    }

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);

    Ok(lines[start..end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_common_margin() {
        assert_eq!(dedent("    a\n      b\n    c"), "a\n  b\nc");
    }

    #[test]
    fn test_dedent_keeps_blank_lines() {
        assert_eq!(dedent("    a\n\n    b"), "a\n\nb");
        assert_eq!(dedent("    a\n  \n    b"), "a\n  \nb");
    }

    #[test]
    fn test_dedent_without_content() {
        assert_eq!(dedent(""), "");
        assert_eq!(dedent("   \n  "), "   \n  ");
    }

    #[test]
    fn test_dedent_cjk_content() {
        assert_eq!(dedent("  参数\n    说明"), "参数\n  说明");
    }

    #[test]
    fn test_cleandoc_first_line_and_margin() {
        let raw = "Summary line.\n\n    Details here.\n        Indented more.\n    ";
        assert_eq!(
            cleandoc(raw, false).unwrap(),
            "Summary line.\n\nDetails here.\n    Indented more."
        );
    }

    #[test]
    fn test_cleandoc_drops_leading_blank_lines() {
        let raw = "\n    Args:\n        a: descr\n    ";
        assert_eq!(cleandoc(raw, false).unwrap(), "Args:\n    a: descr");
    }

    #[test]
    fn test_cleandoc_expands_tabs() {
        assert_eq!(cleandoc("x\n\ta\n\t\tb", false).unwrap(), "x\na\n        b");
    }

    #[test]
    fn test_cleandoc_strict_rejects_whitespace_lines() {
        let raw = "Summary.\n    \n    more";
        assert_eq!(
            cleandoc(raw, true),
            Err(CleanDocError::WhitespaceOnlyLine { line: 2 })
        );
        assert_eq!(cleandoc(raw, false).unwrap(), "Summary.\n\nmore");
    }

    #[test]
    fn test_cleandoc_whitespace_line_keeps_excess_over_margin() {
        let raw = "Summary.\n      \n    more\n  \n    end";
        assert_eq!(cleandoc(raw, false).unwrap(), "Summary.\n  \nmore\n\nend");
    }

    #[test]
    fn test_cleandoc_empty() {
        assert_eq!(cleandoc("", false).unwrap(), "");
        assert_eq!(cleandoc("   \n  ", false).unwrap(), "");
    }
}
