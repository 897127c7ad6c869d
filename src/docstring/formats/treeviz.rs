//! Treeviz formatter for docstrings
//!
//! One line per node, nesting drawn with box connectors. Labels keep only their first
//! line and are truncated to 30 characters, so the output stays scannable.
//!
//!     ⧉ int: the counter
//!     ├─ ◦ 1.1.0+
//!     ├─ ☰ Args (1.0+)
//!     │ ├─ • path (str): where to write
//!     │ └─ ⁑ kwargs: extra options
//!     └─ ↩ Returns
//!       └─ • bool: success
//!
//! Icons
//!     Docstring: ⧉
//!     Role: ◦
//!     LongDescr, Text: ¶
//!     Args, Attributes: ☰
//!     Raises: ⚠
//!     Returns: ↩
//!     Yields: ↪
//!     Require: ⊢
//!     Examples: 𝒱
//!     FrontMatter: ⊤
//!     InlineValue: §
//!     ColonArg, KwOnlyArg: •
//!     VarArg: ∗
//!     KwArg: ⁑
//!     Value: ↵

use crate::docstring::ast::{snapshot_from_docstring, Docstring, NodeSnapshot};

const MAX_LABEL: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Docstring" => "⧉",
        "Role" => "◦",
        "LongDescr" | "Text" => "¶",
        "Args" | "Attributes" => "☰",
        "Raises" => "⚠",
        "Returns" => "↩",
        "Yields" => "↪",
        "Require" => "⊢",
        "Examples" => "𝒱",
        "FrontMatter" => "⊤",
        "InlineValue" => "§",
        "ColonArg" | "KwOnlyArg" => "•",
        "VarArg" => "∗",
        "KwArg" => "⁑",
        "Value" => "↵",
        _ => "○",
    }
}

/// Label shown for a node: its own label decorated with the attributes that
/// identify it (annotation, version, description)
fn display_label(snapshot: &NodeSnapshot) -> String {
    let label = snapshot.label.lines().next().unwrap_or("");
    let attr = |key: &str| snapshot.attributes.get(key).map(String::as_str);

    let text = match snapshot.node_type.as_str() {
        "Docstring" => match attr("annotation") {
            Some(annotation) => format!("{}: {}", annotation, label),
            None => label.to_string(),
        },
        "ColonArg" | "VarArg" | "KwOnlyArg" | "KwArg" => {
            let head = match attr("annotation") {
                Some(annotation) if annotation != label => format!("{} ({})", label, annotation),
                _ => label.to_string(),
            };
            match attr("descr") {
                Some(descr) if !descr.is_empty() => format!("{}: {}", head, descr),
                _ => head,
            }
        }
        _ => match attr("version") {
            Some(version) => format!("{} ({})", label, version),
            None => label.to_string(),
        },
    };
    truncate(text.trim(), MAX_LABEL)
}

fn format_line(lead: &str, snapshot: &NodeSnapshot) -> String {
    let label = display_label(snapshot);
    let parts = [lead, get_icon(&snapshot.node_type), label.as_str()];
    let line: Vec<&str> = parts.into_iter().filter(|part| !part.is_empty()).collect();
    format!("{}\n", line.join(" "))
}

fn format_snapshot(
    snapshot: &NodeSnapshot,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format_line(&format!("{}{}", prefix, connector), snapshot);

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, &child_prefix, i, child_count));
    }

    output
}

pub fn snapshot_to_treeviz(snapshot: &NodeSnapshot) -> String {
    let mut output = format_line("", snapshot);

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, "", i, child_count));
    }
    output
}

pub fn to_treeviz_str(doc: &Docstring) -> String {
    snapshot_to_treeviz(&snapshot_from_docstring(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::parsing::parse_docstring;

    #[test]
    fn test_treeviz_tree_shape() {
        let doc = parse_docstring(
            "int: the counter\n\nArgs (1.0+):\n    path (str): where to write\n    **kwargs: extra options\nReturns:\n    bool: success",
        )
        .unwrap();
        let output = to_treeviz_str(&doc);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "⧉ int: the counter");
        assert_eq!(lines[1], "├─ ☰ Args (1.0+)");
        assert_eq!(lines[2], "│ ├─ • path (str): where to write");
        assert_eq!(lines[3], "│ └─ ⁑ kwargs: extra options");
        assert_eq!(lines[4], "└─ ↩ Returns");
        assert_eq!(lines[5], "  └─ • bool: success");
    }

    #[test]
    fn test_labels_are_truncated() {
        let doc = parse_docstring("An extremely long summary line that goes on and on").unwrap();
        assert_eq!(to_treeviz_str(&doc), "⧉ An extremely long summary line...\n");
    }

    #[test]
    fn test_empty_docstring() {
        let doc = parse_docstring("").unwrap();
        assert_eq!(to_treeviz_str(&doc), "⧉\n");
    }
}
