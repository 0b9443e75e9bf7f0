//! Errors reported by the fallible stream constructors.

use thiserror::Error;

/// Failure to build a [`TokenStream`](crate::TokenStream).
///
/// Tokenization itself never fails; only the input can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Byte input that is not valid UTF-8.
    #[error("source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Source too long for 32-bit token offsets.
    #[error("source is {len} bytes, exceeding the {max} byte limit")]
    SourceTooLarge { len: usize, max: usize },
}
