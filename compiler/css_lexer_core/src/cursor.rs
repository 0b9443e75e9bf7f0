//! Byte cursor for the CSS scanner.
//!
//! Reads from a [`SourceBuffer`](crate::SourceBuffer), whose source is
//! followed by zero bytes. Reads up to three bytes past the current position
//! ([`peek3`](Cursor::peek3)) are always in bounds, which is enough for the
//! CSS "starts a number" and "starts an identifier" checks after `-`, `+`,
//! `.`, `@` and `#`.
//!
//! # NUL
//!
//! A zero byte is end of input only when the position is at or past the
//! source length. Below it, U+0000 is content and the scanner turns it
//! into a one-byte `Delim`.

/// Smaller of two optional search hits.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Position in a CSS source plus the zero padding after it.
///
/// Obtained from [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// `buf[source_len..source_len + 4]` is all zeros; the buffer guarantees it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    /// Bytes of real CSS in `buf`.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Cursor at offset 0. `buf` must carry the zero padding.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 3 < buf.len(),
            "buffer lacks zero padding after the source"
        );
        debug_assert!(buf[source_len as usize] == 0, "byte after the source must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at end of input and on a NUL in the
    /// source alike. [`is_eof()`](Self::is_eof) tells them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Next byte.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte after next (`--`, `+.5`).
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Third byte ahead, for "starts an identifier" after `@` or `#`.
    #[inline]
    pub fn peek3(&self) -> u8 {
        self.buf[self.pos as usize + 3]
    }

    /// Returns the byte `n` positions ahead of current (`n <= 3`).
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        debug_assert!(n <= 3, "lookahead of {n} exceeds the padding guarantee");
        self.buf[(self.pos + n) as usize]
    }

    /// Bytes from `start` up to the current position.
    #[inline]
    pub fn bytes_from(&self, start: u32) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds position");
        &self.buf[start as usize..self.pos as usize]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// At or past the end of the CSS text.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Returns `true` if the byte `n` positions ahead lies past the source.
    ///
    /// Distinguishes the sentinel from an interior null when a lookahead
    /// byte reads as `0x00`.
    #[inline]
    pub fn is_eof_ahead(&self, n: u32) -> bool {
        self.pos + n >= self.source_len
    }

    /// Byte offset into the CSS text.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Bytes of CSS text.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Step over bytes matching `pred`.
    ///
    /// `pred(0)` must be `false`, otherwise the loop would run into the
    /// padding. Callers that treat an interior null as content use
    /// [`eat_while_in_source`](Self::eat_while_in_source) instead.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance while inside the source and `pred` returns `true`.
    #[inline]
    pub fn eat_while_in_source(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Encoded length of the UTF-8 sequence led by `byte` (1 for ASCII and
    /// continuation bytes).
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one code point. Stays put at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance past a run of CSS whitespace (space, tab, LF, CR, FF).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Advance to the end of a comment body, past the closing `*/`.
    ///
    /// The cursor must sit just after the opening `/*`. An unterminated
    /// comment runs to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_comment_body(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memmem::find(remaining, b"*/") {
            self.pos += offset as u32 + 2;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Jump through a quoted string body to the first byte that ends or
    /// interrupts it, returning that byte (0 at end of input).
    ///
    /// Stops on the closing `quote`, `\` or any CSS newline: `memchr3` for
    /// the quote, backslash and LF, `memchr2` for CR and FF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let secondary = memchr::memchr2(b'\r', 0x0C, remaining);

        if let Some(off) = earliest_of(primary, secondary) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

/// CSS whitespace: space, tab, and the newlines LF, CR, FF.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// CSS newline: LF, CR, FF.
#[inline]
pub fn is_newline(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | 0x0C)
}
