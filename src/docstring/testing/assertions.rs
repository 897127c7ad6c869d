//! Fluent assertions over docstring nodes

use crate::docstring::ast::{ColonArg, Docstring, ReturnValue, Role, Section};

fn assert_text(actual: &str, expected: &str, what: &str, context: &str) {
    assert_eq!(
        actual, expected,
        "{}: Expected {} to be '{}', but got '{}'",
        context, what, expected, actual
    );
}

fn assert_role(roles: &[Role], index: usize, name: &str, content: &str, context: &str) {
    let role = roles.get(index).unwrap_or_else(|| {
        panic!(
            "{}: Role index {} out of bounds ({} roles)",
            context,
            index,
            roles.len()
        )
    });
    let context = format!("{}.roles[{}]", context, index);
    assert_text(&role.name, name, "role name", &context);
    assert_text(&role.content, content, "role content", &context);
}

fn summarize_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| match s.name() {
            "" => s.node_type().to_string(),
            name => format!("{}({})", s.node_type(), name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Docstring
// ============================================================================

pub struct DocstringAssertion<'a> {
    pub(crate) doc: &'a Docstring,
}

impl<'a> DocstringAssertion<'a> {
    pub fn descr(self, expected: &str) -> Self {
        assert_text(&self.doc.descr, expected, "descr", "docstring");
        self
    }

    pub fn long_descr(self, expected: &str) -> Self {
        assert_text(&self.doc.long_descr, expected, "long_descr", "docstring");
        self
    }

    /// `None` asserts that no inline annotation was found
    pub fn annotation(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.doc.annotation.as_deref(),
            expected,
            "docstring: Expected annotation {:?}, found {:?}",
            expected,
            self.doc.annotation
        );
        self
    }

    pub fn role_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.roles.len(),
            expected,
            "docstring: Expected {} roles, found {}",
            expected,
            self.doc.roles.len()
        );
        self
    }

    pub fn role(self, index: usize, name: &str, content: &str) -> Self {
        assert_role(&self.doc.roles, index, name, content, "docstring");
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.doc.sections.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} sections, found {}: [{}]",
            expected,
            actual,
            summarize_sections(&self.doc.sections)
        );
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.doc.sections.len(),
            "Section index {} out of bounds (docstring has {} sections: [{}])",
            index,
            self.doc.sections.len(),
            summarize_sections(&self.doc.sections)
        );
        assertion(SectionAssertion {
            section: &self.doc.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }

    /// Assert the docstring span ends at the given 0-based line and column
    pub fn location_ends_at(self, line: usize, column: usize) -> Self {
        let end = self.doc.location.end;
        assert_eq!(
            (end.line, end.column),
            (line, column),
            "Expected docstring to end at {}:{}, found {}",
            line,
            column,
            end
        );
        self
    }
}

// ============================================================================
// Sections
// ============================================================================

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.section.node_type()
        )
    }

    /// Literal marker name, e.g. "Parameters" or "返回"
    pub fn name(self, expected: &str) -> Self {
        assert_text(self.section.name(), expected, "section name", &self.context);
        self
    }

    pub fn version(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.section.version(),
            expected,
            "{}: Expected version {:?}, found {:?}",
            self.context,
            expected,
            self.section.version()
        );
        self
    }

    /// Value of a Require, Examples, FrontMatter, Text or InlineValue section
    pub fn value(self, expected: &str) -> Self {
        let actual = match self.section {
            Section::Require(s) => &s.value,
            Section::Examples(s) => &s.value,
            Section::FrontMatter(s) => &s.value,
            Section::Text(s) => &s.value,
            Section::InlineValue(s) => &s.value,
            _ => self.unexpected("a section with a text value"),
        };
        assert_text(actual, expected, "value", &self.context);
        self
    }

    pub fn assert_text(self, expected: &str) -> Self {
        if !matches!(self.section, Section::Text(_)) {
            self.unexpected("Text");
        }
        self.value(expected)
    }

    pub fn assert_inline(self, kind: &str, expected: &str) -> Self {
        match self.section {
            Section::InlineValue(inline) => {
                assert_text(inline.kind.as_str(), kind, "inline kind", &self.context);
            }
            _ => self.unexpected("InlineValue"),
        }
        self.value(expected)
    }

    pub fn assert_args(self) -> ArgsAssertion<'a> {
        match self.section {
            Section::Args(args) => ArgsAssertion {
                args,
                context: self.context,
            },
            _ => self.unexpected("Args"),
        }
    }

    pub fn assert_attributes(self) -> EntriesAssertion<'a> {
        match self.section {
            Section::Attributes(s) => EntriesAssertion {
                entries: &s.args,
                context: self.context,
            },
            _ => self.unexpected("Attributes"),
        }
    }

    pub fn assert_raises(self) -> EntriesAssertion<'a> {
        match self.section {
            Section::Raises(s) => EntriesAssertion {
                entries: &s.args,
                context: self.context,
            },
            _ => self.unexpected("Raises"),
        }
    }

    pub fn assert_returns(self) -> ReturnAssertion<'a> {
        match self.section {
            Section::Returns(s) => ReturnAssertion {
                value: &s.value,
                context: self.context,
            },
            _ => self.unexpected("Returns"),
        }
    }

    pub fn assert_yields(self) -> ReturnAssertion<'a> {
        match self.section {
            Section::Yields(s) => ReturnAssertion {
                value: &s.value,
                context: self.context,
            },
            _ => self.unexpected("Yields"),
        }
    }
}

pub struct ArgsAssertion<'a> {
    pub(crate) args: &'a crate::docstring::ast::Args,
    pub(crate) context: String,
}

impl<'a> ArgsAssertion<'a> {
    pub fn arg_count(self, expected: usize) -> Self {
        assert_eq!(
            self.args.args.len(),
            expected,
            "{}: Expected {} positional args, found {}",
            self.context,
            expected,
            self.args.args.len()
        );
        self
    }

    pub fn arg<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ColonArgAssertion<'a>) -> ColonArgAssertion<'a>,
    {
        let context = format!("{}.args[{}]", self.context, index);
        let arg = self.args.args.get(index).unwrap_or_else(|| {
            panic!("{}: index out of bounds ({} args)", context, self.args.args.len())
        });
        assertion(ColonArgAssertion { arg, context });
        self
    }

    pub fn vararg<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ColonArgAssertion<'a>) -> ColonArgAssertion<'a>,
    {
        let context = format!("{}.vararg", self.context);
        let arg = self
            .args
            .vararg
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a vararg, found none", context));
        assertion(ColonArgAssertion { arg, context });
        self
    }

    pub fn no_vararg(self) -> Self {
        assert!(
            self.args.vararg.is_none(),
            "{}: Expected no vararg, found {:?}",
            self.context,
            self.args.vararg
        );
        self
    }

    pub fn kwonly_count(self, expected: usize) -> Self {
        assert_eq!(
            self.args.kwonlyargs.len(),
            expected,
            "{}: Expected {} keyword-only args, found {}",
            self.context,
            expected,
            self.args.kwonlyargs.len()
        );
        self
    }

    pub fn kwonly<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ColonArgAssertion<'a>) -> ColonArgAssertion<'a>,
    {
        let context = format!("{}.kwonlyargs[{}]", self.context, index);
        let arg = self.args.kwonlyargs.get(index).unwrap_or_else(|| {
            panic!(
                "{}: index out of bounds ({} keyword-only args)",
                context,
                self.args.kwonlyargs.len()
            )
        });
        assertion(ColonArgAssertion { arg, context });
        self
    }

    pub fn kwarg<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ColonArgAssertion<'a>) -> ColonArgAssertion<'a>,
    {
        let context = format!("{}.kwarg", self.context);
        let arg = self
            .args
            .kwarg
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a kwarg, found none", context));
        assertion(ColonArgAssertion { arg, context });
        self
    }

    pub fn no_kwarg(self) -> Self {
        assert!(
            self.args.kwarg.is_none(),
            "{}: Expected no kwarg, found {:?}",
            self.context,
            self.args.kwarg
        );
        self
    }
}

/// Attributes and Raises entries
pub struct EntriesAssertion<'a> {
    pub(crate) entries: &'a [ColonArg],
    pub(crate) context: String,
}

impl<'a> EntriesAssertion<'a> {
    pub fn entry_count(self, expected: usize) -> Self {
        assert_eq!(
            self.entries.len(),
            expected,
            "{}: Expected {} entries, found {}",
            self.context,
            expected,
            self.entries.len()
        );
        self
    }

    pub fn entry<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ColonArgAssertion<'a>) -> ColonArgAssertion<'a>,
    {
        let context = format!("{}.args[{}]", self.context, index);
        let arg = self.entries.get(index).unwrap_or_else(|| {
            panic!("{}: index out of bounds ({} entries)", context, self.entries.len())
        });
        assertion(ColonArgAssertion { arg, context });
        self
    }
}

pub struct ReturnAssertion<'a> {
    pub(crate) value: &'a ReturnValue,
    pub(crate) context: String,
}

impl<'a> ReturnAssertion<'a> {
    pub fn annotated<F>(self, assertion: F)
    where
        F: FnOnce(ColonArgAssertion<'a>) -> ColonArgAssertion<'a>,
    {
        match self.value {
            ReturnValue::Annotated(arg) => {
                assertion(ColonArgAssertion {
                    arg,
                    context: format!("{}.value", self.context),
                });
            }
            ReturnValue::Text(text) => panic!(
                "{}: Expected an annotated value, found text '{}'",
                self.context, text
            ),
        }
    }

    pub fn text(self, expected: &str) {
        match self.value {
            ReturnValue::Text(text) => assert_text(text, expected, "value", &self.context),
            ReturnValue::Annotated(arg) => panic!(
                "{}: Expected a text value, found annotated value {:?}",
                self.context, arg
            ),
        }
    }
}

// ============================================================================
// ColonArg
// ============================================================================

pub struct ColonArgAssertion<'a> {
    pub(crate) arg: &'a ColonArg,
    pub(crate) context: String,
}

impl<'a> ColonArgAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.arg.name.as_deref(),
            Some(expected),
            "{}: Expected name '{}', found {:?}",
            self.context,
            expected,
            self.arg.name
        );
        self
    }

    pub fn no_name(self) -> Self {
        assert!(
            self.arg.name.is_none(),
            "{}: Expected no name, found {:?}",
            self.context,
            self.arg.name
        );
        self
    }

    pub fn annotation(self, expected: &str) -> Self {
        assert_eq!(
            self.arg.annotation.as_deref(),
            Some(expected),
            "{}: Expected annotation '{}', found {:?}",
            self.context,
            expected,
            self.arg.annotation
        );
        self
    }

    pub fn no_annotation(self) -> Self {
        assert!(
            self.arg.annotation.is_none(),
            "{}: Expected no annotation, found {:?}",
            self.context,
            self.arg.annotation
        );
        self
    }

    pub fn descr(self, expected: &str) -> Self {
        assert_text(&self.arg.descr, expected, "descr", &self.context);
        self
    }

    pub fn long_descr(self, expected: &str) -> Self {
        assert_text(&self.arg.long_descr, expected, "long_descr", &self.context);
        self
    }

    pub fn role_count(self, expected: usize) -> Self {
        assert_eq!(
            self.arg.roles.len(),
            expected,
            "{}: Expected {} roles, found {}",
            self.context,
            expected,
            self.arg.roles.len()
        );
        self
    }

    pub fn role(self, index: usize, name: &str, content: &str) -> Self {
        assert_role(&self.arg.roles, index, name, content, &self.context);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::docstring::parsing::parse_docstring;
    use crate::docstring::testing::assert_docstring;

    #[test]
    fn test_fluent_assertions_pass() {
        let doc = parse_docstring(
            "{ver}`1.0` Summary.\n\nArgs:\n    a (int): first\n    **kw: rest\nYields:\n    free text",
        )
        .unwrap();
        assert_docstring(&doc)
            .descr("Summary.")
            .annotation(None)
            .role_count(1)
            .role(0, "ver", "1.0")
            .section_count(2)
            .section(0, |s| {
                s.name("Args")
                    .version(None)
                    .assert_args()
                    .arg_count(1)
                    .arg(0, |a| a.name("a").annotation("int").descr("first"))
                    .no_vararg()
                    .kwarg(|a| a.name("kw").descr("rest"));
            })
            .section(1, |s| s.assert_yields().text("free text"));
    }

    #[test]
    #[should_panic(expected = "sections[0]: Expected Raises, found Args")]
    fn test_wrong_section_type_panics() {
        let doc = parse_docstring("Args:\n    a: b").unwrap();
        assert_docstring(&doc).section(0, |s| {
            s.assert_raises();
        });
    }

    #[test]
    #[should_panic(expected = "Expected 2 sections, found 1: [Args(Args)]")]
    fn test_section_count_lists_sections() {
        let doc = parse_docstring("Args:\n    a: b").unwrap();
        assert_docstring(&doc).section_count(2);
    }
}
