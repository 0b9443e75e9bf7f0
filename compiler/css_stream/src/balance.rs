//! Bracket balance relation over a token table.
//!
//! Runs once after tokenization with an explicit stack of open groups, so
//! nesting depth never touches the call stack.
//!
//! Resulting `balance` values:
//! - matched opener and closer point at each other;
//! - a token inside a matched group points at the group's closer;
//! - everything else (top-level tokens, unmatched openers, stray closers
//!   and the contents of groups still open at end of input) keeps its own
//!   index.

use css_lexer_core::TokenType;

use crate::table::TokenRecord;

/// An opener waiting for its closer.
struct OpenGroup {
    opener: u32,
    closer: TokenType,
    /// Length of the pending list when the group opened.
    pending_mark: usize,
}

/// Fill in `balance` for every record.
///
/// Every record must already hold its own index as balance (the table
/// does this on push). Each token is resolved at most once, so the pass is
/// linear in the number of tokens.
#[allow(
    clippy::cast_possible_truncation,
    reason = "token count <= source length, which fits in u32"
)]
pub(crate) fn link(records: &mut [TokenRecord]) {
    let mut stack: Vec<OpenGroup> = Vec::new();
    // Tokens inside open groups, innermost group last.
    let mut pending: Vec<u32> = Vec::new();

    for index in 0..records.len() {
        let tag = records[index].tag;
        let index = index as u32;

        // A nested opener is resolved by its own closer, never by the
        // enclosing group's.
        if let Some(closer) = tag.closing_pair() {
            stack.push(OpenGroup {
                opener: index,
                closer,
                pending_mark: pending.len(),
            });
            continue;
        }

        if tag.is_close_bracket() {
            if let Some(group) = stack.pop_if(|group| group.closer == tag) {
                records[group.opener as usize].balance = index;
                records[index as usize].balance = group.opener;
                for member in pending.drain(group.pending_mark..) {
                    records[member as usize].balance = index;
                }
                continue;
            }
            // Stray closer: an ordinary member of the enclosing group
        }

        if !stack.is_empty() {
            pending.push(index);
        }
    }
}

#[cfg(test)]
mod tests;
