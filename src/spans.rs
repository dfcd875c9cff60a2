//! Locates string, character, and comment literal ranges in raw text.
//!
//! The three passes run independently over the same text. Ranges from
//! different passes are never merged, so a quote inside a comment (or a
//! comment marker inside a string) can yield overlapping spans of two
//! kinds.

use std::sync::LazyLock;

use regex::Regex;

use crate::token::Span;

// A backslash passes the next character through, so `\"` never closes
// the literal.
static STRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:[^"\\]|\\(?s:.))*""#).expect("string pattern compiles")
});

static CHAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'(?:[^'\\]|\\(?s:.))*'").expect("char pattern compiles")
});

// An unclosed block comment runs to end of text.
static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//[^\n]*|/\*(?s:.)*?(?:\*/|\z)").expect("comment pattern compiles")
});

/// Literal ranges found in one text snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralSpans {
    pub strings: Vec<Span>,
    pub chars: Vec<Span>,
    pub comments: Vec<Span>,
}

impl LiteralSpans {
    /// True when `span` lies entirely inside any string, char, or comment
    /// range.
    #[must_use]
    pub fn covers(&self, span: Span) -> bool {
        self.strings
            .iter()
            .chain(&self.chars)
            .chain(&self.comments)
            .any(|outer| outer.contains(span))
    }
}

/// Find all string, char, and comment ranges in `text`.
#[must_use]
pub fn find_spans(text: &str) -> LiteralSpans {
    LiteralSpans {
        strings: match_spans(&STRING_PATTERN, text),
        chars: match_spans(&CHAR_PATTERN, text),
        comments: match_spans(&COMMENT_PATTERN, text),
    }
}

pub(crate) fn match_spans(pattern: &Regex, text: &str) -> Vec<Span> {
    pattern
        .find_iter(text)
        .map(|m| Span::new(m.start(), m.end()))
        .filter(|span| !span.is_empty())
        .collect()
}
