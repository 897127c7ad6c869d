//! Token grammars
//!
//! Every pattern the parser matches against a line, compiled once. Patterns are
//! anchored at the cursor column (`^`) because the parser always matches at its
//! current position.
//!
//! Identifier grammars deliberately differ: argument and attribute names accept any
//! Unicode identifier (CJK names are common in localized docstrings), while exception
//! types in Raises use the stricter ASCII dotted form. Annotations are ASCII only.

use once_cell::sync::Lazy;
use regex::Regex;

/// `{name}`content`` inline role
pub(super) static ROLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([A-Za-z0-9_]+)\}`([^`]+)`").unwrap());

/// Argument or attribute name, Unicode aware
pub(super) static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\W\d]\w*").unwrap());

/// Exception type in Raises, e.g. `ValueError` or `http.client.HTTPException`
pub(super) static DOTTED_IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*").unwrap());

/// Lightweight type annotation, e.g. `Union[int, str]`; never ends with a space
static ANNOTATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_](?:[A-Za-z0-9_.\[\], ]*[A-Za-z0-9_.\[\],])?$").unwrap());

/// `Name (version):` section marker, the text after the colon is captured
pub(super) static SECTION_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\W\d][\w-]*) *(?:\(([0-9.+\-]+)\))? *:(.*)$").unwrap()
});

/// True when `text` is an annotation in its entirety
pub fn is_annotation(text: &str) -> bool {
    ANNOTATION_REGEX.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_grammar() {
        assert!(is_annotation("int"));
        assert!(is_annotation("Union[int, str]"));
        assert!(is_annotation("typing.Optional[Dict[str, int]]"));
        assert!(is_annotation("a"));

        assert!(!is_annotation(""));
        assert!(!is_annotation("int "));
        assert!(!is_annotation(" int"));
        assert!(!is_annotation("1int"));
        assert!(!is_annotation("Callable[..., int]x!"));
        assert!(!is_annotation("参数"));
    }

    #[test]
    fn test_identifier_grammars() {
        assert_eq!(IDENTIFIER_REGEX.find("name: x").map(|m| m.as_str()), Some("name"));
        assert_eq!(IDENTIFIER_REGEX.find("参数一: x").map(|m| m.as_str()), Some("参数一"));
        assert!(IDENTIFIER_REGEX.find("1abc").is_none());

        assert_eq!(
            DOTTED_IDENTIFIER_REGEX.find("http.client.HTTPException: x").map(|m| m.as_str()),
            Some("http.client.HTTPException")
        );
        assert!(DOTTED_IDENTIFIER_REGEX.find("异常: x").is_none());
    }

    #[test]
    fn test_role_grammar() {
        let caps = ROLE_REGEX.captures("{ver}`1.1.0+` rest").unwrap();
        assert_eq!(&caps[1], "ver");
        assert_eq!(&caps[2], "1.1.0+");
        assert!(ROLE_REGEX.captures("{ver}``").is_none());
        assert!(ROLE_REGEX.captures(" {ver}`1`").is_none());
    }

    #[test]
    fn test_section_marker_grammar() {
        let caps = SECTION_MARKER_REGEX.captures("Returns (1.2.0+):").unwrap();
        assert_eq!(&caps[1], "Returns");
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("1.2.0+"));

        let caps = SECTION_MARKER_REGEX.captures("Type-Version: 1.0").unwrap();
        assert_eq!(&caps[1], "Type-Version");
        assert_eq!(&caps[3], " 1.0");

        assert!(SECTION_MARKER_REGEX.captures("    Args:").is_none());
        assert!(SECTION_MARKER_REGEX.captures("Args (beta):").is_none());
    }
}
