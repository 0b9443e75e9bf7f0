//! What a matcher reads from: tokens with text and an optional node.

use std::fmt;

use css_stream::{TokenStream, TokenType};

use crate::node::SyntaxNode;
use crate::number::number_len;

/// One token as a matcher sees it.
#[derive(Clone, Copy)]
pub struct MatchToken<'a> {
    /// Token text.
    pub value: &'a str,
    /// Syntax node the AST layer associated with this position, if any.
    pub node: Option<&'a dyn SyntaxNode>,
    /// Whitespace or a comment sits between this token and the previous one.
    pub spaced: bool,
}

impl<'a> MatchToken<'a> {
    /// A token with text only.
    #[inline]
    pub fn new(value: &'a str) -> Self {
        MatchToken {
            value,
            node: None,
            spaced: false,
        }
    }

    /// A token with an associated syntax node.
    #[inline]
    pub fn with_node(value: &'a str, node: &'a dyn SyntaxNode) -> Self {
        MatchToken {
            value,
            node: Some(node),
            spaced: false,
        }
    }

    /// The same token, marked as following whitespace or a comment.
    #[inline]
    #[must_use]
    pub fn after_trivia(self) -> Self {
        MatchToken {
            spaced: true,
            ..self
        }
    }
}

impl fmt::Debug for MatchToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchToken")
            .field("value", &self.value)
            .field("node", &self.node.map(|n| n.kind()))
            .field("spaced", &self.spaced)
            .finish()
    }
}

/// Cursor contract between a grammar engine and the matchers.
///
/// A matcher reads with [`peek_token`](Self::peek_token) and commits each
/// claimed token with [`consume_token`](Self::consume_token). A matcher that
/// rejects never consumes.
pub trait MatchInput {
    /// The token `offset` positions after the current one (0 = current).
    fn peek_token(&self, offset: usize) -> Option<MatchToken<'_>>;

    /// Commit the current token and move to the next.
    fn consume_token(&mut self);
}

/// [`MatchInput`] over a slice of tokens.
#[derive(Clone, Debug)]
pub struct TokenInput<'t, 'a> {
    tokens: &'t [MatchToken<'a>],
    pos: usize,
}

impl<'t, 'a> TokenInput<'t, 'a> {
    pub fn new(tokens: &'t [MatchToken<'a>]) -> Self {
        TokenInput { tokens, pos: 0 }
    }

    /// Tokens consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Tokens not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'t [MatchToken<'a>] {
        &self.tokens[self.pos..]
    }
}

impl MatchInput for TokenInput<'_, '_> {
    fn peek_token(&self, offset: usize) -> Option<MatchToken<'_>> {
        self.tokens.get(self.pos.checked_add(offset)?).copied()
    }

    fn consume_token(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }
}

/// Reads whole stream tokens; consuming advances the cursor.
impl MatchInput for TokenStream {
    fn peek_token(&self, offset: usize) -> Option<MatchToken<'_>> {
        let record = self.peek(offset)?;
        let text = &self.source()[record.start as usize..record.end as usize];
        let spaced = offset > 0 && self.lookup_type(offset - 1).is_trivia();
        let token = MatchToken::new(text);
        Some(if spaced { token.after_trivia() } else { token })
    }

    fn consume_token(&mut self) {
        self.next();
    }
}

/// Matcher token texts cut from a [`TokenStream`].
///
/// Starts at the stream's cursor and runs to end of input, without moving
/// the cursor. Whitespace and comments are dropped, but the token after
/// them is marked [`spaced`](MatchToken::spaced); numeric tokens with a
/// unit and hashes are split so that unit-set and hex-color matchers see
/// the parts separately:
///
/// | Token | Matcher tokens |
/// |-------|----------------|
/// | `10px` | `10`, `px` |
/// | `50%` | `50`, `%` |
/// | `#fff` | `#`, `fff` |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueTokens<'s> {
    values: Vec<&'s str>,
    /// Parallel to `values`: trivia preceded the token.
    spaced: Vec<bool>,
}

impl<'s> ValueTokens<'s> {
    pub fn from_stream(stream: &'s TokenStream) -> Self {
        let source = stream.source();
        let records = stream.records();
        let from = stream.token_index().min(records.len());

        let mut tokens = ValueTokens {
            values: Vec::with_capacity(records.len() - from),
            spaced: Vec::with_capacity(records.len() - from),
        };
        let mut after_trivia = false;
        for record in &records[from..] {
            let text = &source[record.start as usize..record.end as usize];
            let (head, tail) = match record.tag {
                TokenType::WhiteSpace | TokenType::Comment => {
                    after_trivia = true;
                    continue;
                }
                TokenType::Dimension => text.split_at(number_len(text)),
                TokenType::Percentage => text.split_at(text.len() - 1),
                TokenType::Hash => text.split_at(1),
                _ => (text, ""),
            };
            tokens.push(head, after_trivia);
            if !tail.is_empty() {
                tokens.push(tail, false);
            }
            after_trivia = false;
        }
        tokens
    }

    fn push(&mut self, value: &'s str, spaced: bool) {
        self.values.push(value);
        self.spaced.push(spaced);
    }

    /// Token texts in order.
    #[inline]
    pub fn values(&self) -> &[&'s str] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether trivia preceded each token, parallel to [`values`](Self::values).
    #[inline]
    pub fn spaced(&self) -> &[bool] {
        &self.spaced
    }

    /// The texts as matcher tokens without syntax nodes.
    pub fn match_tokens(&self) -> Vec<MatchToken<'s>> {
        self.values
            .iter()
            .zip(&self.spaced)
            .map(|(&value, &spaced)| {
                let token = MatchToken::new(value);
                if spaced {
                    token.after_trivia()
                } else {
                    token
                }
            })
            .collect()
    }
}
