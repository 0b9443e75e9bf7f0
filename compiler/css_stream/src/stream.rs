//! The navigable token stream.
//!
//! [`TokenStream`] owns its source text and a flat table of
//! [`TokenRecord`]s built eagerly at construction. A single cursor walks
//! the table; everything else (dump, peek, raw extraction) reads it
//! without moving.

use std::fmt;

use css_lexer_core::{RawScanner, SourceBuffer, TokenType, MAX_SOURCE_LEN};
use tracing::{debug, trace};

use crate::balance;
use crate::error::StreamError;
use crate::raw::{RawMode, Stop};
use crate::table::{initial_capacity_for, TokenRecord, TokenTable};

/// One row of [`TokenStream::dump`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DumpedToken<'a> {
    pub index: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub token_type: TokenType,
    /// Exact source text of the token.
    pub chunk: &'a str,
    pub balance: u32,
}

/// Tokenized CSS source with a cursor.
///
/// # Balance
///
/// Every token carries a balance index:
/// - a matched opener (`(`, `[`, `{`, `name(`) and its closer point at each
///   other;
/// - a token inside a matched group points at that group's closer;
/// - all other tokens point at themselves.
///
/// # Cursor
///
/// The cursor caches the current token's index, type and span. Past the
/// last token it sits at end of input: index == [`token_count`], type
/// `EOF`, and an empty span at the end of the source.
///
/// [`token_count`]: Self::token_count
pub struct TokenStream {
    source: String,
    table: TokenTable,
    token_index: usize,
    token_type: TokenType,
    token_start: u32,
    token_end: u32,
    eof: bool,
}

impl TokenStream {
    /// Tokenize `source`.
    ///
    /// # Panics
    ///
    /// Panics if the source exceeds [`MAX_SOURCE_LEN`]; use
    /// [`try_new`](Self::try_new) for untrusted sizes.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        assert!(
            source.len() <= MAX_SOURCE_LEN,
            "source length {} exceeds maximum {MAX_SOURCE_LEN}",
            source.len()
        );
        Self::tokenize(source)
    }

    /// Tokenize `source`, rejecting sources too long for 32-bit offsets.
    pub fn try_new(source: impl Into<String>) -> Result<Self, StreamError> {
        let source = source.into();
        if source.len() > MAX_SOURCE_LEN {
            return Err(StreamError::SourceTooLarge {
                len: source.len(),
                max: MAX_SOURCE_LEN,
            });
        }
        Ok(Self::tokenize(source))
    }

    /// Tokenize the text form of any displayable value.
    pub fn from_display(value: &impl fmt::Display) -> Self {
        Self::new(value.to_string())
    }

    /// Tokenize bytes that must be valid UTF-8.
    pub fn try_from_utf8(bytes: impl Into<Vec<u8>>) -> Result<Self, StreamError> {
        let source = String::from_utf8(bytes.into()).map_err(|e| e.utf8_error())?;
        Self::try_new(source)
    }

    fn tokenize(source: String) -> Self {
        let capacity = initial_capacity_for(source.len());
        let mut table = TokenTable::with_capacity(capacity);

        let buf = SourceBuffer::new(&source);
        let mut scanner = RawScanner::new(buf.cursor());
        let mut offset = 0u32;
        loop {
            let tok = scanner.next_token();
            if tok.tag == TokenType::Eof {
                break;
            }
            table.push(tok.tag, offset, offset + tok.len);
            offset += tok.len;
        }
        debug_assert_eq!(offset as usize, source.len(), "tokens must cover the source");

        balance::link(table.records_mut());
        debug!(
            bytes = source.len(),
            tokens = table.len(),
            capacity = table.capacity(),
            "tokenized"
        );

        let mut stream = TokenStream {
            source,
            table,
            token_index: 0,
            token_type: TokenType::Eof,
            token_start: 0,
            token_end: 0,
            eof: false,
        };
        stream.seek(0);
        stream
    }

    // === Cursor state ===

    /// Index of the current token (== token count at end of input).
    #[inline]
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    /// Type of the current token (`EOF` at end of input).
    #[inline]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Start offset of the current token.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// End offset of the current token.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.token_end
    }

    /// `true` once the cursor has moved past the last token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Source text of the current token (empty at end of input).
    #[inline]
    pub fn token_text(&self) -> &str {
        &self.source[self.token_start as usize..self.token_end as usize]
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.table.len()
    }

    /// Current capacity of the token table.
    #[inline]
    pub fn token_capacity(&self) -> usize {
        self.table.capacity()
    }

    /// The token record at `index`, if there is one.
    #[inline]
    pub fn token_at(&self, index: usize) -> Option<&TokenRecord> {
        self.table.records().get(index)
    }

    /// All token records in order.
    #[inline]
    pub fn records(&self) -> &[TokenRecord] {
        self.table.records()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length <= MAX_SOURCE_LEN, which fits in u32"
    )]
    fn seek(&mut self, index: usize) {
        if let Some(record) = self.table.records().get(index) {
            self.token_index = index;
            self.token_type = record.tag;
            self.token_start = record.start;
            self.token_end = record.end;
            self.eof = false;
        } else {
            let end = self.source.len() as u32;
            self.token_index = self.table.len();
            self.token_type = TokenType::Eof;
            self.token_start = end;
            self.token_end = end;
            self.eof = true;
        }
    }

    // === Navigation ===

    /// Advance one token. A no-op at end of input.
    #[allow(
        clippy::should_implement_trait,
        reason = "cursor step, not an iterator: the stream is not consumed"
    )]
    pub fn next(&mut self) {
        if !self.eof {
            self.seek(self.token_index + 1);
        }
    }

    /// Advance exactly `n` tokens, stopping at end of input.
    pub fn skip(&mut self, n: usize) {
        if n > 0 {
            self.seek(self.token_index.saturating_add(n).min(self.table.len()));
        }
    }

    /// Move the cursor back to the first token.
    pub fn reset(&mut self) {
        self.seek(0);
    }

    /// Skip whitespace tokens.
    pub fn skip_ws(&mut self) {
        while self.token_type == TokenType::WhiteSpace {
            self.next();
        }
    }

    /// Skip whitespace and comment tokens.
    pub fn skip_sc(&mut self) {
        while self.token_type.is_trivia() {
            self.next();
        }
    }

    // === Lookahead ===

    /// The token `k` positions after `index`.
    #[inline]
    pub fn lookahead_from(&self, index: usize, k: usize) -> Option<&TokenRecord> {
        self.table.records().get(index.checked_add(k)?)
    }

    /// The token `k` positions after the cursor (`peek(0)` is the current one).
    #[inline]
    pub fn peek(&self, k: usize) -> Option<&TokenRecord> {
        self.lookahead_from(self.token_index, k)
    }

    /// Type of the token `k` positions ahead, `EOF` past the end.
    #[inline]
    pub fn lookup_type(&self, k: usize) -> TokenType {
        self.peek(k).map_or(TokenType::Eof, |r| r.tag)
    }

    /// Type of the first non-trivia token at or after offset `k`.
    pub fn lookup_non_ws_type(&self, k: usize) -> TokenType {
        let records = self.table.records();
        let from = self.token_index.saturating_add(k).min(records.len());
        records[from..]
            .iter()
            .find(|r| !r.tag.is_trivia())
            .map_or(TokenType::Eof, |r| r.tag)
    }

    /// `true` if the current token is the delimiter `ch`.
    #[inline]
    pub fn is_delim(&self, ch: char) -> bool {
        self.is_delim_at(ch, 0)
    }

    /// `true` if the token `k` ahead is the delimiter `ch`.
    pub fn is_delim_at(&self, ch: char, k: usize) -> bool {
        self.peek(k).is_some_and(|r| {
            r.tag == TokenType::Delim && self.text_of(r).chars().eq(std::iter::once(ch))
        })
    }

    /// `true` if the current token closes the group opened at `index` or one
    /// enclosing it. Always `true` at end of input.
    pub fn is_balance_edge(&self, index: usize) -> bool {
        let Some(record) = self.peek(0) else {
            return true;
        };
        let balance = record.balance as usize;
        record.tag.is_close_bracket() && balance < self.token_index && balance <= index
    }

    // === Text ===

    #[inline]
    fn text_of(&self, record: &TokenRecord) -> &str {
        &self.source[record.start as usize..record.end as usize]
    }

    /// Source text from `start` up to the current token's start.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the current token or not on a character
    /// boundary.
    pub fn substr_to_cursor(&self, start: u32) -> &str {
        &self.source[start as usize..self.token_start as usize]
    }

    /// Every token as `{index, type, chunk, balance}`, without moving the
    /// cursor.
    pub fn dump(&self) -> Vec<DumpedToken<'_>> {
        self.table
            .records()
            .iter()
            .enumerate()
            .map(|(index, r)| DumpedToken {
                index,
                token_type: r.tag,
                chunk: self.text_of(r),
                balance: r.balance,
            })
            .collect()
    }

    // === Raw regions ===

    /// Absolute index where the raw region starting at `start` ends.
    ///
    /// The region ends at the closer of its enclosing group, at end of
    /// input, or where `mode` says so. Nested balanced groups are skipped
    /// whole.
    pub fn raw_end(&self, start: usize, mode: RawMode) -> usize {
        let records = self.table.records();
        let mut cursor = start;
        while cursor < records.len() {
            let record = &records[cursor];
            let edge = record.balance as usize;
            // Closer of a group that opened before the region
            if edge < start {
                break;
            }
            match mode.stop(record.tag, self.text_of(record)) {
                Stop::Before => break,
                Stop::After => {
                    cursor += 1;
                    break;
                }
                Stop::Continue => {}
            }
            // Jump from an opener to its closer
            if records[edge].balance as usize == cursor {
                cursor = edge;
            }
            cursor += 1;
        }
        cursor
    }

    /// Number of tokens from the cursor to the end of the raw region that
    /// starts at `start`.
    ///
    /// `skip(get_raw_length(start, mode))` leaves the cursor on the region
    /// boundary, even when the cursor is already inside the region.
    pub fn get_raw_length(&self, start: usize, mode: RawMode) -> usize {
        let end = self.raw_end(start, mode);
        let len = end.saturating_sub(self.token_index);
        trace!(start, end, cursor = self.token_index, ?mode, len, "raw region");
        len
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("tokens", &self.table.len())
            .field("token_index", &self.token_index)
            .field("token_type", &self.token_type)
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}

impl From<&str> for TokenStream {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for TokenStream {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

/// Invalid UTF-8 sequences become U+FFFD.
impl From<&[u8]> for TokenStream {
    fn from(bytes: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(bytes))
    }
}

/// Invalid UTF-8 sequences become U+FFFD.
impl From<Vec<u8>> for TokenStream {
    fn from(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(source) => Self::new(source),
            Err(e) => Self::new(String::from_utf8_lossy(e.as_bytes())),
        }
    }
}
