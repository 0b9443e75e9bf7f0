//! Owned copy of a stylesheet with zero bytes appended.
//!
//! The first zero after the CSS text marks end of input, so scanner loops
//! stop on it instead of checking the length on every byte.
//! The total buffer size is rounded up to the next 64-byte boundary, and
//! always leaves at least [`LOOKAHEAD`] zero bytes after the sentinel so the
//! three-code-point checks of the CSS tokenizer (`peek()`, `peek2()`,
//! `peek3()`) are safe at any position up to EOF.
//!
//! CSS allows U+0000 in source text (the tokenizer treats it as an ordinary
//! code point), so interior nulls are not an error here. The cursor tells
//! them apart from the sentinel by comparing against the source length.

use crate::Cursor;

/// Buffer sizes are rounded up to a multiple of this.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the sentinel.
const LOOKAHEAD: usize = 4;

/// Largest source (in bytes) the buffer accepts.
///
/// Offsets are `u32` and the buffer needs room for the sentinel and the
/// lookahead padding past the last source byte.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - CACHE_LINE;

/// Stylesheet bytes followed by zero padding; hands out [`Cursor`]s.
///
/// # Layout
///
/// ```text
/// | css text ............ | 0x00 | 0x00 x >= 4 ... |
/// 0                  source_len            multiple of 64
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    /// Bytes of CSS text at the front of `buf`.
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// # Panics
    ///
    /// Panics if `source` is longer than [`MAX_SOURCE_LEN`] bytes. Callers
    /// that accept untrusted sizes check the length first.
    pub fn new(source: &str) -> Self {
        let css = source.as_bytes();
        let source_len = css.len();
        assert!(
            source_len <= MAX_SOURCE_LEN,
            "source of {source_len} bytes exceeds the {MAX_SOURCE_LEN} byte limit"
        );

        // End marker plus lookahead, then up to the next multiple of 64
        let padded_len = (source_len + 1 + LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(css);

        #[allow(
            clippy::cast_possible_truncation,
            reason = "source_len <= MAX_SOURCE_LEN which fits in u32"
        )]
        let source_len = source_len as u32;

        Self { buf, source_len }
    }

    /// The CSS text alone.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The CSS text with its zero tail.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A [`Cursor`] at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// CSS text length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
