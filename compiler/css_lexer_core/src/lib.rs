//! Low-level CSS tokenizer.
//!
//! Scans CSS source into `(TokenType, len)` pairs following the CSS Syntax
//! Level 3 tokenization rules. The crate has no knowledge of token streams,
//! bracket balance, or value grammars; those live in `css_stream` and
//! `css_generic`.
//!
//! # Usage
//!
//! ```
//! use css_lexer_core::{tokenize, TokenType};
//!
//! let tokens = tokenize("a{color:red}");
//! assert_eq!(tokens[0].tag, TokenType::Ident);
//! assert_eq!(tokens[1].tag, TokenType::LeftCurlyBracket);
//! assert_eq!(tokens.iter().map(|t| t.len).sum::<u32>(), 12);
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::{is_newline, is_whitespace, Cursor};
pub use raw_scanner::{is_name_char, is_name_start, tokenize, RawScanner};
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
pub use tag::{RawToken, TokenType, TOKEN_TYPE_NAMES};
