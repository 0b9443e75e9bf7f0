//! Stop conditions for raw (opaque) token regions.

use css_lexer_core::TokenType;

/// Where a raw region ends, besides the closer of its enclosing group.
///
/// Conditions are only checked at the region's own nesting depth; nested
/// balanced groups are skipped whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RawMode {
    /// Run to the enclosing closer or end of input.
    #[default]
    Default,
    /// Stop before a `{`.
    LeftCurlyBracket,
    /// Stop after a `;`, which belongs to the region.
    SemicolonIncluded,
    /// Stop before a `{` or `;` (at-rule preludes).
    LeftCurlyBracketOrSemicolon,
    /// Stop before a `!` delimiter or `;` (declaration values).
    ExclamationMarkOrSemicolon,
}

/// Outcome of checking one token against a [`RawMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    Continue,
    /// The token is outside the region.
    Before,
    /// The token is the region's last.
    After,
}

impl RawMode {
    /// Check a token of type `tag` whose source text is `text`.
    pub(crate) fn stop(self, tag: TokenType, text: &str) -> Stop {
        match (self, tag) {
            (Self::LeftCurlyBracket | Self::LeftCurlyBracketOrSemicolon, TokenType::LeftCurlyBracket)
            | (
                Self::LeftCurlyBracketOrSemicolon | Self::ExclamationMarkOrSemicolon,
                TokenType::Semicolon,
            ) => Stop::Before,
            (Self::ExclamationMarkOrSemicolon, TokenType::Delim) if text == "!" => Stop::Before,
            (Self::SemicolonIncluded, TokenType::Semicolon) => Stop::After,
            _ => Stop::Continue,
        }
    }
}
