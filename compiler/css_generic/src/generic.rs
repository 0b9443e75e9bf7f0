//! Value-type matchers and the production-name table.
//!
//! Every production a grammar engine can name maps to one [`Generic`]
//! strategy. Matching reads through a [`MatchInput`]; a match commits
//! exactly the claimed tokens, a rejection commits nothing.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;

use crate::input::MatchInput;
use crate::node::NodeKind;
use crate::number::{is_number, number_value};
use crate::units::{
    UnitSet, ANGLE, DECIBEL, FLEX, FREQUENCY, LENGTH, PERCENTAGE, RESOLUTION, SEMITONES, TIME,
};

/// A value-type recognition strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generic {
    /// Any numeric literal. Consumes one token.
    Number,
    /// Number in `[0, 1]`.
    NumberZeroOne,
    /// Number `>= 1`.
    NumberOneOrGreater,
    /// Number without a decimal point. Exponent forms such as `10e-2`
    /// still pass.
    Integer,
    /// Integer without a leading `-`.
    PositiveInteger,
    /// Number token then, with nothing between them, a unit token from the
    /// set. Consumes both.
    Dimension(&'static UnitSet),
    /// [`Dimension`](Self::Dimension), or a bare number equal to zero.
    ZeroUnitlessDimension(&'static UnitSet),
    /// `#` directly followed by 3, 4, 6 or 8 hex digits. Never consumes.
    HexColor,
    /// Author-defined identifier, excluding CSS-wide keywords and `default`.
    CustomIdent,
    /// Current syntax node has this kind. Never consumes.
    AstNode(NodeKind),
    /// Current syntax node is an `attr()` function. Never consumes.
    Attr,
    /// Recognized name without an implementation; never matches.
    Unsupported(&'static str),
}

/// Keywords a `<custom-ident>` may not be.
const RESERVED_IDENTS: [&str; 4] = ["unset", "initial", "inherit", "default"];

impl Generic {
    /// Try to match at the input's current position.
    pub fn matches<I: MatchInput + ?Sized>(self, input: &mut I) -> bool {
        let matched = match self {
            Generic::Number => numeric(input, |_| true),
            Generic::NumberZeroOne => numeric(input, |text| {
                number_value(text).is_some_and(|v| (0.0..=1.0).contains(&v))
            }),
            Generic::NumberOneOrGreater => {
                numeric(input, |text| number_value(text).is_some_and(|v| v >= 1.0))
            }
            Generic::Integer => numeric(input, |text| !text.contains('.')),
            Generic::PositiveInteger => {
                numeric(input, |text| !text.contains('.') && !text.starts_with('-'))
            }
            Generic::Dimension(units) => dimension(input, units),
            Generic::ZeroUnitlessDimension(units) => {
                dimension(input, units)
                    || single(input, |text| number_value(text).is_some_and(|v| v == 0.0))
            }
            Generic::HexColor => hex_color(input),
            Generic::CustomIdent => single(input, is_custom_ident),
            Generic::AstNode(kind) => input
                .peek_token(0)
                .and_then(|t| t.node)
                .is_some_and(|node| node.kind() == kind),
            Generic::Attr => input.peek_token(0).and_then(|t| t.node).is_some_and(|node| {
                node.kind() == NodeKind::Function
                    && node.name().is_some_and(|name| name.eq_ignore_ascii_case("attr"))
            }),
            Generic::Unsupported(_) => false,
        };
        trace!(generic = ?self, matched, "value production");
        matched
    }
}

/// Consume the current token if `accept` holds for its text.
fn single<I: MatchInput + ?Sized>(input: &mut I, accept: impl FnOnce(&str) -> bool) -> bool {
    let accepted = input.peek_token(0).is_some_and(|t| accept(t.value));
    if accepted {
        input.consume_token();
    }
    accepted
}

/// `calc()` and its vendor forms. Not evaluated, so never a match.
fn calc_notation<I: MatchInput + ?Sized>(_input: &I) -> bool {
    false
}

/// A numeric literal passing `accept`, one token.
fn numeric<I: MatchInput + ?Sized>(input: &mut I, accept: impl FnOnce(&str) -> bool) -> bool {
    calc_notation(input) || single(input, |text| is_number(text) && accept(text))
}

fn dimension<I: MatchInput + ?Sized>(input: &mut I, units: &UnitSet) -> bool {
    if calc_notation(input) {
        return true;
    }
    let accepted = match (input.peek_token(0), input.peek_token(1)) {
        (Some(number), Some(unit)) => {
            !unit.spaced && is_number(number.value) && units.contains(unit.value)
        }
        _ => false,
    };
    if accepted {
        input.consume_token();
        input.consume_token();
    }
    accepted
}

fn hex_color<I: MatchInput + ?Sized>(input: &I) -> bool {
    let Some(hash) = input.peek_token(0) else {
        return false;
    };
    if hash.value != "#" {
        return false;
    }
    input.peek_token(1).is_some_and(|t| {
        !t.spaced
            && matches!(t.value.len(), 3 | 4 | 6 | 8)
            && t.value.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// `[a-zA-Z_-][a-zA-Z0-9_$-]*`, not a reserved keyword.
fn is_custom_ident(text: &str) -> bool {
    let mut bytes = text.bytes();
    let shape = bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || matches!(b, b'_' | b'-'))
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'-'));
    shape
        && !RESERVED_IDENTS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(text))
}

// === Production table ===

/// Every production name with its strategy.
pub static GENERIC_PRODUCTIONS: [(&str, Generic); 25] = [
    ("angle", Generic::ZeroUnitlessDimension(&ANGLE)),
    ("attr()", Generic::Attr),
    ("custom-ident", Generic::CustomIdent),
    ("decibel", Generic::Dimension(&DECIBEL)),
    ("dimension", Generic::AstNode(NodeKind::Dimension)),
    ("frequency", Generic::Dimension(&FREQUENCY)),
    ("flex", Generic::Dimension(&FLEX)),
    ("hex-color", Generic::HexColor),
    ("id-selector", Generic::AstNode(NodeKind::IdSelector)),
    ("ident", Generic::AstNode(NodeKind::Identifier)),
    ("integer", Generic::Integer),
    ("length", Generic::ZeroUnitlessDimension(&LENGTH)),
    ("number", Generic::Number),
    ("number-zero-one", Generic::NumberZeroOne),
    ("number-one-or-greater", Generic::NumberOneOrGreater),
    ("percentage", Generic::Dimension(&PERCENTAGE)),
    ("positive-integer", Generic::PositiveInteger),
    ("resolution", Generic::Dimension(&RESOLUTION)),
    ("semitones", Generic::Dimension(&SEMITONES)),
    ("string", Generic::AstNode(NodeKind::String)),
    ("time", Generic::Dimension(&TIME)),
    ("unicode-range", Generic::AstNode(NodeKind::UnicodeRange)),
    ("url", Generic::AstNode(NodeKind::Url)),
    // legacy IE
    ("progid", Generic::AstNode(NodeKind::Raw)),
    ("expression", Generic::Unsupported("expression")),
];

static GENERIC_TABLE: OnceLock<FxHashMap<&'static str, Generic>> = OnceLock::new();

fn table() -> &'static FxHashMap<&'static str, Generic> {
    GENERIC_TABLE.get_or_init(|| GENERIC_PRODUCTIONS.iter().copied().collect())
}

/// The strategy for a production name.
#[inline]
pub fn lookup(name: &str) -> Option<Generic> {
    table().get(name).copied()
}

/// A production name with no strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value production `{name}`")]
pub struct UnknownProduction {
    pub name: String,
}

/// Like [`lookup`], for callers that treat an unknown name as an error.
pub fn try_lookup(name: &str) -> Result<Generic, UnknownProduction> {
    lookup(name).ok_or_else(|| UnknownProduction {
        name: name.to_owned(),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
