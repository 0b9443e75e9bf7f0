//! Navigable CSS token stream.
//!
//! Tokenizes CSS source eagerly into a flat table of typed tokens, links
//! brackets into a balance relation, and exposes a cursor with lookahead,
//! skipping, dumping and raw-region extraction for a parser layer.
//!
//! ```
//! use css_stream::{RawMode, TokenStream, TokenType};
//!
//! let mut stream = TokenStream::new("a { color: red }");
//! assert_eq!(stream.token_type(), TokenType::Ident);
//!
//! // Skip the selector prelude up to `{`
//! let len = stream.get_raw_length(0, RawMode::LeftCurlyBracket);
//! stream.skip(len);
//! assert_eq!(stream.token_type(), TokenType::LeftCurlyBracket);
//! ```

mod balance;
mod error;
mod raw;
mod stream;
mod table;

use std::sync::Once;

pub use css_lexer_core::{TokenType, MAX_SOURCE_LEN, TOKEN_TYPE_NAMES};
pub use error::StreamError;
pub use raw::RawMode;
pub use stream::{DumpedToken, TokenStream};
pub use table::{initial_capacity_for, TokenRecord, BYTES_PER_TOKEN_ESTIMATE, MIN_TOKEN_CAPACITY};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set;
/// enable with `RUST_LOG=css_stream=debug` or `RUST_LOG=css_stream=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
