//! Primitive CSS value-type matchers.
//!
//! A grammar engine looks up a production by name (`"length"`,
//! `"hex-color"`, `"custom-ident"`, …) and runs it against a
//! [`MatchInput`]. Each production either consumes the tokens it claims
//! and reports a match, or consumes nothing.
//!
//! ```
//! use css_generic::{lookup, TokenInput, ValueTokens};
//! use css_stream::TokenStream;
//!
//! let stream = TokenStream::new("10px solid");
//! let values = ValueTokens::from_stream(&stream);
//! let tokens = values.match_tokens();
//! let mut input = TokenInput::new(&tokens);
//!
//! let length = lookup("length").unwrap();
//! assert!(length.matches(&mut input));
//! assert_eq!(input.consumed(), 2);
//! ```

mod generic;
mod input;
mod node;
mod number;
mod units;

pub use generic::{lookup, try_lookup, Generic, UnknownProduction, GENERIC_PRODUCTIONS};
pub use input::{MatchInput, MatchToken, TokenInput, ValueTokens};
pub use node::{NodeKind, SyntaxNode};
pub use number::{is_number, number_len, number_value};
pub use units::{
    UnitSet, ALL_UNIT_SETS, ANGLE, DECIBEL, FLEX, FREQUENCY, LENGTH, PERCENTAGE, RESOLUTION,
    SEMITONES, TIME,
};
