//! Flat token table with explicit doubling growth.

use css_lexer_core::TokenType;
use tracing::debug;

/// Records reserved for every input, however short.
pub const MIN_TOKEN_CAPACITY: usize = 16;

/// Average source bytes per token assumed when sizing the table.
pub const BYTES_PER_TOKEN_ESTIMATE: usize = 4;

/// Initial table capacity for a source of `source_len` bytes.
#[inline]
pub const fn initial_capacity_for(source_len: usize) -> usize {
    source_len / BYTES_PER_TOKEN_ESTIMATE + MIN_TOKEN_CAPACITY
}

/// One token: type, source span and balance index.
///
/// `start..end` is a byte range into the stream's source. `balance` is an
/// index into the same table (see [`TokenStream`](crate::TokenStream)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenRecord {
    pub tag: TokenType,
    pub start: u32,
    pub end: u32,
    pub balance: u32,
}

/// tag (1, padded to 4) + start + end + balance => 16 bytes.
const _: () = assert!(std::mem::size_of::<TokenRecord>() == 16);

impl TokenRecord {
    /// Byte length of the token.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// `true` for a zero-length record (never produced by tokenization).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Growable token storage.
///
/// Capacity is fixed up front from the source length and doubled whenever
/// a push finds the table full.
pub(crate) struct TokenTable {
    records: Vec<TokenRecord>,
}

impl TokenTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        TokenTable {
            records: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Append a token, doubling the table first when it is full.
    ///
    /// The balance slot starts as the token's own index.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token count <= source length, which fits in u32"
    )]
    pub(crate) fn push(&mut self, tag: TokenType, start: u32, end: u32) {
        if self.records.len() == self.records.capacity() {
            let old = self.records.capacity();
            self.records.reserve_exact(old);
            debug!(
                from = old,
                to = self.records.capacity(),
                "token table grown"
            );
        }
        let index = self.records.len() as u32;
        self.records.push(TokenRecord {
            tag,
            start,
            end,
            balance: index,
        });
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.records.capacity()
    }

    #[inline]
    pub(crate) fn records(&self) -> &[TokenRecord] {
        &self.records
    }

    #[inline]
    pub(crate) fn records_mut(&mut self) -> &mut [TokenRecord] {
        &mut self.records
    }
}

#[cfg(test)]
mod tests;
