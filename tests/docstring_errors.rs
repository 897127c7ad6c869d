//! Fatal parse errors and their diagnostics

use docstring_parser::docstring::ast::ParseErrorKind;
use docstring_parser::parse_docstring;
use rstest::rstest;

#[rstest]
#[case::no_colon("Args:\n    a descr", ParseErrorKind::MissingColon, 2, 7)]
#[case::no_name("Attributes:\n    (int): descr", ParseErrorKind::MissingColon, 2, 5)]
#[case::raises_no_colon("Raises:\n    ValueError when bad", ParseErrorKind::MissingColon, 2, 16)]
#[case::over_indented("Args:\n    a: one\n      b: two", ParseErrorKind::Indentation { expected: 4, found: 6 }, 3, 1)]
#[case::vararg_after_kwarg("Args:\n    **kw: d\n    *rest: e", ParseErrorKind::Ordering, 3, 5)]
#[case::kwonly_after_kwarg("Args:\n    *a: x\n    **kw: d\n    b: e", ParseErrorKind::Ordering, 4, 5)]
fn test_fatal_errors(
    #[case] text: &str,
    #[case] kind: ParseErrorKind,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = parse_docstring(text).unwrap_err();
    assert_eq!(err.kind, kind);
    assert_eq!((err.line(), err.column()), (line, column));
}

#[test]
fn test_diagnostic_message() {
    let text = "Summary.\n\nArgs:\n    a: one\n    b two\n    c: three\n\nclosing";
    let err = parse_docstring(text).unwrap_err();

    let expected = "MissingColonError at line 5, column 7: no colon found after entry\n\
                    \x20    3 | Args:\n\
                    \x20    4 |     a: one\n\
                    >>   5 |     b two\n\
                    \x20    6 |     c: three\n\
                    \x20    7 | \n";
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_context_window_is_clipped_at_start() {
    let err = parse_docstring("Args:\n  a b").unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(
        err.source_context,
        "     1 | Args:\n>>   2 |   a b\n"
    );
}

#[test]
fn test_unknown_markers_never_fail() {
    let text = "Summary.\n\nNote:\n    a b c\nWarning (1.0): careful\nSee Also:\n    other";
    let doc = parse_docstring(text).unwrap();
    assert!(doc.sections.is_empty());
    assert!(doc.long_descr.starts_with("Note:"));
}
