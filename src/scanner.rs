//! Raw-text cursor that feeds the parser one token at a time.
//!
//! The scanner does not classify what it reads. It skips whitespace and
//! both comment forms, then returns the text of the next identifier run,
//! number run, quoted literal, or single character. The parser decides
//! what a token is by looking at its text.

/// Single-lookahead cursor over one source text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            input: text.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor back by `len` bytes.
    ///
    /// Rewinding by the length of the token just read puts the cursor at
    /// that token's first byte; whitespace before it is not restored, and
    /// the next read skips it again.
    pub const fn rewind(&mut self, len: usize) {
        self.pos = self.pos.saturating_sub(len);
    }

    /// Read the next token, or an empty string at end of text.
    pub fn next_token(&mut self) -> &'a str {
        self.skip_trivia();

        if self.pos >= self.input.len() {
            return "";
        }

        let start = self.pos;
        let ch = self.input[start];

        if ch.is_ascii_alphabetic() || ch == b'_' {
            self.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        } else if ch.is_ascii_digit() {
            // Dots are not counted: `1.2.3` is one run.
            self.eat_while(|b| b.is_ascii_digit() || b == b'.');
        } else if ch == b'"' || ch == b'\'' {
            self.read_quoted(ch);
        } else {
            self.pos += self.text[start..].chars().next().map_or(1, char::len_utf8);
        }

        &self.text[start..self.pos]
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn eat_while(&mut self, accept: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if is_space(ch) {
                self.pos += 1;
            } else if ch == b'/' && matches!(self.peek_at(1), Some(b'/' | b'*')) {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        if self.peek_at(1) == Some(b'/') {
            self.pos += 2;
            self.eat_while(|b| b != b'\n');
            self.pos += 1; // newline
        } else {
            self.pos += 2;
            while self.pos + 1 < self.input.len()
                && !(self.input[self.pos] == b'*' && self.input[self.pos + 1] == b'/')
            {
                self.pos += 1;
            }
            self.pos += 2; // closing */
        }
        self.pos = self.pos.min(self.input.len());
    }

    // Escapes are skipped, not decoded; an unclosed literal runs to end
    // of text.
    fn read_quoted(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(ch) = self.peek() {
            if ch == quote {
                break;
            }
            if ch == b'\\' {
                self.pos += 1;
            }
            self.pos += 1;
        }
        self.pos = (self.pos + 1).min(self.input.len());
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_empty()).then_some(token)
    }
}

// Matches C `isspace`: space, \t, \n, \v, \f, \r.
const fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
