//! Hand-written CSS scanner producing `(TokenType, len)` pairs.
//!
//! Implements the tokenization algorithm of CSS Syntax Level 3 over a
//! sentinel-terminated [`Cursor`]. The scanner is lossless: every byte of the
//! source belongs to exactly one token, whitespace and comments included, so
//! the token lengths always sum to the source length.
//!
//! Malformed input never fails. Recovery is encoded in the tag:
//! `BadString` for a string cut by a newline, `BadUrl` for an unquoted
//! `url(` with disallowed content, `Delim` for anything else unrecognized.
//!
//! # Design
//!
//! Main dispatch covers all byte values. Each arm calls a focused method that
//! advances the cursor and returns a [`RawToken`]. Escapes are validated for
//! *shape* only (they never change a token boundary after the fact);
//! decoding them is left to consumers that need token values.

use crate::cursor::{is_newline, is_whitespace, Cursor};
use crate::tag::{RawToken, TokenType};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `TokenType::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: TokenType::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0C => self.whitespace(start),
            b'"' => self.string(start, b'"'),
            b'\'' => self.string(start, b'\''),
            b'#' => self.hash(start),
            b'(' => self.single(start, TokenType::LeftParenthesis),
            b')' => self.single(start, TokenType::RightParenthesis),
            b'[' => self.single(start, TokenType::LeftSquareBracket),
            b']' => self.single(start, TokenType::RightSquareBracket),
            b'{' => self.single(start, TokenType::LeftCurlyBracket),
            b'}' => self.single(start, TokenType::RightCurlyBracket),
            b',' => self.single(start, TokenType::Comma),
            b':' => self.single(start, TokenType::Colon),
            b';' => self.single(start, TokenType::Semicolon),
            b'+' | b'.' => self.sign_or_dot(start),
            b'-' => self.hyphen(start),
            b'/' => self.solidus(start),
            b'<' => self.less_than(start),
            b'@' => self.at(start),
            b'\\' => self.reverse_solidus(start),
            b'0'..=b'9' => self.numeric(start),
            b if is_name_start(b) => self.ident_like(start),
            // Interior nulls, ASCII punctuation and control bytes
            _ => self.delim(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: TokenType) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // === Whitespace & Comments ===

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, TokenType::WhiteSpace)
    }

    fn solidus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'*' {
            self.cursor.advance_n(2); // consume '/*'
            self.cursor.eat_comment_body();
            self.token(start, TokenType::Comment)
        } else {
            self.delim(start)
        }
    }

    // === Punctuation ===

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: TokenType) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// One code point that starts nothing else.
    fn delim(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, TokenType::Delim)
    }

    fn sign_or_dot(&mut self, start: u32) -> RawToken {
        if self.would_start_number() {
            self.numeric(start)
        } else {
            self.delim(start)
        }
    }

    fn hyphen(&mut self, start: u32) -> RawToken {
        if self.would_start_number() {
            self.numeric(start)
        } else if self.cursor.peek() == b'-' && self.cursor.peek2() == b'>' {
            self.cursor.advance_n(3);
            self.token(start, TokenType::Cdc)
        } else if self.would_start_ident(0) {
            self.ident_like(start)
        } else {
            self.delim(start)
        }
    }

    fn less_than(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'!' && self.cursor.peek2() == b'-' && self.cursor.peek3() == b'-'
        {
            self.cursor.advance_n(4);
            self.token(start, TokenType::Cdo)
        } else {
            self.delim(start)
        }
    }

    fn at(&mut self, start: u32) -> RawToken {
        if self.would_start_ident(1) {
            self.cursor.advance(); // consume '@'
            self.eat_name();
            self.token(start, TokenType::AtKeyword)
        } else {
            self.delim(start)
        }
    }

    fn hash(&mut self, start: u32) -> RawToken {
        if is_name_char(self.cursor.peek()) || self.is_valid_escape_at(1) {
            self.cursor.advance(); // consume '#'
            self.eat_name();
            self.token(start, TokenType::Hash)
        } else {
            self.delim(start)
        }
    }

    fn reverse_solidus(&mut self, start: u32) -> RawToken {
        if self.is_valid_escape_at(0) {
            self.ident_like(start)
        } else {
            self.delim(start)
        }
    }

    // === Numeric ===

    /// Number, then `%` or a unit name decides the final type.
    fn numeric(&mut self, start: u32) -> RawToken {
        self.eat_number();
        if self.would_start_ident(0) {
            self.eat_name();
            self.token(start, TokenType::Dimension)
        } else if self.cursor.current() == b'%' {
            self.cursor.advance();
            self.token(start, TokenType::Percentage)
        } else {
            self.token(start, TokenType::Number)
        }
    }

    fn eat_number(&mut self) {
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        // An exponent needs a digit, so `1em` stays a dimension.
        if matches!(self.cursor.current(), b'e' | b'E') {
            let next = self.cursor.peek();
            if next.is_ascii_digit() {
                self.cursor.advance();
            } else if matches!(next, b'+' | b'-') && self.cursor.peek2().is_ascii_digit() {
                self.cursor.advance_n(2);
            } else {
                return;
            }
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
    }

    // === Identifiers, functions and url() ===

    fn ident_like(&mut self, start: u32) -> RawToken {
        self.eat_name();
        if self.cursor.current() != b'(' {
            return self.token(start, TokenType::Ident);
        }

        let is_url = self.cursor.bytes_from(start).eq_ignore_ascii_case(b"url");
        self.cursor.advance(); // consume '('
        if !is_url {
            return self.token(start, TokenType::Function);
        }

        // `url("...")` is an ordinary function holding a string.
        let mut ahead = self.cursor;
        ahead.eat_whitespace();
        if matches!(ahead.current(), b'"' | b'\'') {
            self.token(start, TokenType::Function)
        } else {
            self.url(start)
        }
    }

    /// Unquoted url body, cursor just past `url(`.
    fn url(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        loop {
            if self.cursor.is_eof() {
                return self.token(start, TokenType::Url);
            }
            match self.cursor.current() {
                b')' => {
                    self.cursor.advance();
                    return self.token(start, TokenType::Url);
                }
                b if is_whitespace(b) => {
                    self.cursor.eat_whitespace();
                    if self.cursor.is_eof() {
                        return self.token(start, TokenType::Url);
                    }
                    if self.cursor.current() == b')' {
                        self.cursor.advance();
                        return self.token(start, TokenType::Url);
                    }
                    return self.bad_url(start);
                }
                b'"' | b'\'' | b'(' => return self.bad_url(start),
                b if is_non_printable(b) => return self.bad_url(start),
                b'\\' => {
                    if !self.is_valid_escape_at(0) {
                        return self.bad_url(start);
                    }
                    self.cursor.advance();
                    self.eat_escape();
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Consume the remnants of a bad url: up to and including the next
    /// unescaped `)`, or EOF.
    fn bad_url(&mut self, start: u32) -> RawToken {
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b')' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' if self.is_valid_escape_at(0) => {
                    self.cursor.advance();
                    self.eat_escape();
                }
                _ => self.cursor.advance(),
            }
        }
        self.token(start, TokenType::BadUrl)
    }

    /// Consume name code points and escapes.
    fn eat_name(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_name_char(b) {
                self.cursor.advance();
            } else if b == b'\\' && self.is_valid_escape_at(0) {
                self.cursor.advance(); // consume '\'
                self.eat_escape();
            } else {
                return;
            }
        }
    }

    /// Consume an escape body, cursor just past a `\` known to be valid.
    ///
    /// Up to six hex digits plus one optional whitespace (`\r\n` counts as
    /// one), or any single code point.
    fn eat_escape(&mut self) {
        if self.cursor.current().is_ascii_hexdigit() {
            let mut digits = 0;
            while digits < 6 && self.cursor.current().is_ascii_hexdigit() {
                self.cursor.advance();
                digits += 1;
            }
            match self.cursor.current() {
                b'\r' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
                b if is_whitespace(b) => self.cursor.advance(),
                _ => {}
            }
        } else {
            self.cursor.advance_char();
        }
    }

    // === Strings ===

    fn string(&mut self, start: u32, quote: u8) -> RawToken {
        self.cursor.advance(); // consume opening quote
        loop {
            // SIMD-accelerated skip past ordinary string content
            let b = self.cursor.skip_to_string_delim(quote);
            if self.cursor.is_eof() {
                // EOF inside a string still yields a string token
                return self.token(start, TokenType::String);
            }
            if b == quote {
                self.cursor.advance();
                return self.token(start, TokenType::String);
            }
            if is_newline(b) {
                // The newline is left for the next token
                return self.token(start, TokenType::BadString);
            }
            // Backslash: escaped newline is a line continuation
            self.cursor.advance();
            if self.cursor.is_eof() {
                continue;
            }
            match self.cursor.current() {
                b'\r' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
                b if is_newline(b) => self.cursor.advance(),
                _ => self.eat_escape(),
            }
        }
    }

    // === Lookahead checks (CSS Syntax §4.3.8 - §4.3.10) ===

    /// `\` at offset `n` followed by something other than a newline or EOF.
    #[inline]
    fn is_valid_escape_at(&self, n: u32) -> bool {
        self.cursor.peek_at(n) == b'\\'
            && !self.cursor.is_eof_ahead(n + 1)
            && !is_newline(self.cursor.peek_at(n + 1))
    }

    /// Whether the three code points starting at offset `n` (`n <= 1`) would
    /// start an identifier.
    fn would_start_ident(&self, n: u32) -> bool {
        if self.cursor.is_eof_ahead(n) {
            return false;
        }
        match self.cursor.peek_at(n) {
            b'-' => {
                // Padding bytes are 0, which is neither name-start nor '-'
                let second = self.cursor.peek_at(n + 1);
                is_name_start(second) || second == b'-' || self.is_valid_escape_at(n + 1)
            }
            b'\\' => self.is_valid_escape_at(n),
            b => is_name_start(b),
        }
    }

    /// Whether the cursor sits on the start of a number.
    fn would_start_number(&self) -> bool {
        match self.cursor.current() {
            b'+' | b'-' => {
                let second = self.cursor.peek();
                second.is_ascii_digit() || (second == b'.' && self.cursor.peek2().is_ascii_digit())
            }
            b'.' => self.cursor.peek().is_ascii_digit(),
            b => b.is_ascii_digit(),
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == TokenType::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Byte class bits for the lookup table.
const NAME_START: u8 = 1;
const NAME_CHAR: u8 = 2;

/// 256-byte lookup table for identifier bytes.
///
/// Name-start: letters, `_`, and every non-ASCII byte (UTF-8 lead and
/// continuation bytes alike, so multi-byte code points stay whole).
/// Name-char: name-start plus digits and `-`. The sentinel byte maps to
/// nothing, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static NAME_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        if matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0x80..=0xFF) {
            table[i as usize] = NAME_START | NAME_CHAR;
        } else if matches!(b, b'0'..=b'9' | b'-') {
            table[i as usize] = NAME_CHAR;
        }
        i += 1;
    }
    table
};

/// Returns `true` if `b` can start an identifier.
#[inline]
pub fn is_name_start(b: u8) -> bool {
    NAME_TABLE[b as usize] & NAME_START != 0
}

/// Returns `true` if `b` can continue an identifier.
#[inline]
pub fn is_name_char(b: u8) -> bool {
    NAME_TABLE[b as usize] & NAME_CHAR != 0
}

/// Control bytes that make an unquoted url bad.
#[inline]
fn is_non_printable(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F)
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
