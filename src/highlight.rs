//! Projects a token list onto a per-byte style array.

use crate::token::{Token, TokenKind};

/// Style tag for one byte of the highlighted text.
///
/// Each tag maps to a style-buffer letter starting at `'A'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Keyword,
    Identifier,
    Number,
    Operator,
    String,
    Char,
    Comment,
    Whitespace,
}

impl StyleTag {
    /// Style-buffer letter for this tag (`'A'` for keywords through `'H'`
    /// for whitespace).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Keyword => 'A',
            Self::Identifier => 'B',
            Self::Number => 'C',
            Self::Operator => 'D',
            Self::String => 'E',
            Self::Char => 'F',
            Self::Comment => 'G',
            Self::Whitespace => 'H',
        }
    }
}

impl From<TokenKind> for StyleTag {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Keyword => Self::Keyword,
            TokenKind::Identifier => Self::Identifier,
            TokenKind::Number => Self::Number,
            TokenKind::Operator => Self::Operator,
            TokenKind::String => Self::String,
            TokenKind::Char => Self::Char,
            TokenKind::Comment => Self::Comment,
            TokenKind::Whitespace => Self::Whitespace,
        }
    }
}

/// Build the style array for a text of `len` bytes.
///
/// Every position starts as [`StyleTag::Identifier`]; each token then
/// stamps its range in list order, so later tokens win where ranges
/// overlap. Whitespace tokens are skipped. Ranges are clipped to `len`.
#[must_use]
pub fn project(len: usize, tokens: &[Token]) -> Vec<StyleTag> {
    let mut styles = vec![StyleTag::Identifier; len];

    for token in tokens {
        if token.kind == TokenKind::Whitespace {
            continue;
        }
        let end = token.end().min(len);
        let start = token.start().min(end);
        styles[start..end].fill(StyleTag::from(token.kind));
    }

    styles
}

/// Render a style array as its style-buffer letters.
#[must_use]
pub fn style_string(styles: &[StyleTag]) -> String {
    styles.iter().map(|s| s.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn gaps_default_to_identifier() {
        let text = "int  x";
        let styles = project(text.len(), &classify(text));
        assert_eq!(style_string(&styles), "AAABBB");
    }

    #[test]
    fn later_tokens_overwrite_earlier() {
        let tokens = [
            Token::new(TokenKind::String, 0, 4),
            Token::new(TokenKind::Comment, 1, 4),
        ];
        assert_eq!(style_string(&project(4, &tokens)), "EGGG");
    }

    #[test]
    fn whitespace_tokens_are_not_stamped() {
        let tokens = [Token::new(TokenKind::Whitespace, 0, 2)];
        assert_eq!(project(2, &tokens), vec![StyleTag::Identifier; 2]);
    }

    #[test]
    fn out_of_range_tokens_are_clipped() {
        let tokens = [Token::new(TokenKind::Number, 1, 10)];
        assert_eq!(style_string(&project(3, &tokens)), "BCC");
    }

    #[test]
    fn empty_text() {
        assert!(project(0, &classify("")).is_empty());
    }
}
