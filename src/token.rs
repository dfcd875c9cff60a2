use std::fmt;

/// Half-open byte range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when `other` lies entirely inside this span.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Token kinds produced by the classifier.
///
/// The declaration order is also the style-letter order used by
/// [`crate::StyleTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word from the keyword table.
    Keyword,
    /// Variable or function name.
    Identifier,
    /// Integer or decimal literal.
    Number,
    /// Single operator character.
    Operator,
    /// Double-quoted literal (`"..."`).
    String,
    /// Single-quoted literal (`'...'`).
    Char,
    /// Line (`// ...`) or block (`/* ... */`) comment.
    Comment,
    /// Never produced by the classifier; skipped when projecting styles.
    Whitespace,
}

impl TokenKind {
    /// Human-readable name shown in token listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::String => "String",
            Self::Char => "Char",
            Self::Comment => "Comment",
            Self::Whitespace => "Whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified, positioned span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.span.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    /// Slice of `source` covered by this token.
    ///
    /// Returns an empty string if the span does not fit `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.start..self.span.end).unwrap_or("")
    }
}
