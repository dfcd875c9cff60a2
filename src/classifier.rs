//! Pattern-pass lexical classifier used for highlighting.
//!
//! Passes run in a fixed order: literal spans (string, char, comment),
//! then keywords, numbers, operators, and identifiers. A match from the
//! later passes is dropped when it falls entirely inside a literal span.
//! The combined list is stable-sorted by start offset, so tokens that
//! start at the same offset keep pass order.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::Error;
use crate::spans::{LiteralSpans, find_spans, match_spans};
use crate::tables::LanguageTables;
use crate::token::{Token, TokenKind};

// Word boundaries are ASCII: a non-ASCII letter never joins a word.
const NUMBER_PATTERN: &str = r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)";

// One character per match; `==` and `&&` come out as two tokens.
const OPERATOR_PATTERN: &str = r"[+\-*/%=&|<>!]";

const IDENTIFIER_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_]*";

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::new(&LanguageTables::default()).expect("default tables compile")
});

/// Classify `text` with the default keyword table.
#[must_use]
pub fn classify(text: &str) -> Vec<Token> {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Compiled pattern set for one keyword table.
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: Vec<String>,
    keyword: Option<Regex>,
    number: Regex,
    operator: Regex,
    identifier: Regex,
}

impl Classifier {
    /// Compile the pattern passes for `tables`.
    ///
    /// An empty keyword list disables the keyword pass.
    pub fn new(tables: &LanguageTables) -> Result<Self, Error> {
        let keyword = if tables.keywords.is_empty() {
            None
        } else {
            let alternation = tables
                .keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)"))?)
        };

        Ok(Self {
            keywords: tables.keywords.clone(),
            keyword,
            number: Regex::new(NUMBER_PATTERN)?,
            operator: Regex::new(OPERATOR_PATTERN)?,
            identifier: Regex::new(IDENTIFIER_PATTERN)?,
        })
    }

    /// Produce the start-sorted token list for `text`.
    ///
    /// The list is rebuilt from scratch on every call.
    #[must_use]
    pub fn classify(&self, text: &str) -> Vec<Token> {
        let literals = find_spans(text);
        let mut tokens = literal_tokens(&literals);

        if let Some(keyword) = &self.keyword {
            push_unsuppressed(&mut tokens, keyword, text, &literals, TokenKind::Keyword);
        }
        push_unsuppressed(&mut tokens, &self.number, text, &literals, TokenKind::Number);
        push_unsuppressed(&mut tokens, &self.operator, text, &literals, TokenKind::Operator);

        for span in match_spans(&self.identifier, text) {
            if literals.covers(span) {
                trace!(start = span.start, end = span.end, "identifier suppressed");
                continue;
            }
            if self.is_keyword(&text[span.start..span.end]) {
                continue;
            }
            tokens.push(Token {
                kind: TokenKind::Identifier,
                span,
            });
        }

        tokens.sort_by_key(Token::start);

        debug!(len = text.len(), tokens = tokens.len(), "classified source");
        tokens
    }

    fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }
}

fn literal_tokens(literals: &LiteralSpans) -> Vec<Token> {
    let tagged = [
        (TokenKind::String, &literals.strings),
        (TokenKind::Char, &literals.chars),
        (TokenKind::Comment, &literals.comments),
    ];

    tagged
        .into_iter()
        .flat_map(|(kind, spans)| spans.iter().map(move |&span| Token { kind, span }))
        .collect()
}

fn push_unsuppressed(
    tokens: &mut Vec<Token>,
    pattern: &Regex,
    text: &str,
    literals: &LiteralSpans,
    kind: TokenKind,
) {
    for span in match_spans(pattern, text) {
        if literals.covers(span) {
            trace!(%kind, start = span.start, end = span.end, "match suppressed");
            continue;
        }
        tokens.push(Token { kind, span });
    }
}
