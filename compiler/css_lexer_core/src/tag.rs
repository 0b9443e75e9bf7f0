//! Token type tags and the raw `(tag, len)` token the scanner produces.

/// Token type of a CSS token, with stable numeric tags.
///
/// The numeric values and the names returned by [`name()`](Self::name) are
/// part of the public contract: consumers log and compare against them, so
/// they never change between versions. New types get new numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenType {
    /// End of input. Also the tag of an empty stream.
    #[default]
    Eof = 0,
    Ident = 1,
    /// `name(`, including the opening parenthesis.
    Function = 2,
    AtKeyword = 3,
    Hash = 4,
    String = 5,
    /// String cut short by a raw newline.
    BadString = 6,
    /// Unquoted `url(...)`, including both parentheses.
    Url = 7,
    /// `url(` with disallowed content, through its recovery point.
    BadUrl = 8,
    Delim = 9,
    Number = 10,
    Percentage = 11,
    Dimension = 12,
    WhiteSpace = 13,
    /// `<!--`
    Cdo = 14,
    /// `-->`
    Cdc = 15,
    Colon = 16,
    Semicolon = 17,
    Comma = 18,
    LeftSquareBracket = 19,
    RightSquareBracket = 20,
    LeftParenthesis = 21,
    RightParenthesis = 22,
    LeftCurlyBracket = 23,
    RightCurlyBracket = 24,
    Comment = 25,
}

/// Human-readable names indexed by numeric tag.
pub const TOKEN_TYPE_NAMES: [&str; TokenType::COUNT] = [
    "EOF",
    "Ident",
    "Function",
    "AtKeyword",
    "Hash",
    "String",
    "BadString",
    "Url",
    "BadUrl",
    "Delim",
    "Number",
    "Percentage",
    "Dimension",
    "WhiteSpace",
    "CDO",
    "CDC",
    "Colon",
    "Semicolon",
    "Comma",
    "LeftSquareBracket",
    "RightSquareBracket",
    "LeftParenthesis",
    "RightParenthesis",
    "LeftCurlyBracket",
    "RightCurlyBracket",
    "Comment",
];

impl TokenType {
    /// Number of token types.
    pub const COUNT: usize = 26;

    /// All token types in tag order.
    pub const ALL: [TokenType; Self::COUNT] = [
        Self::Eof,
        Self::Ident,
        Self::Function,
        Self::AtKeyword,
        Self::Hash,
        Self::String,
        Self::BadString,
        Self::Url,
        Self::BadUrl,
        Self::Delim,
        Self::Number,
        Self::Percentage,
        Self::Dimension,
        Self::WhiteSpace,
        Self::Cdo,
        Self::Cdc,
        Self::Colon,
        Self::Semicolon,
        Self::Comma,
        Self::LeftSquareBracket,
        Self::RightSquareBracket,
        Self::LeftParenthesis,
        Self::RightParenthesis,
        Self::LeftCurlyBracket,
        Self::RightCurlyBracket,
        Self::Comment,
    ];

    /// Stable human-readable name of this type.
    #[inline]
    pub const fn name(self) -> &'static str {
        TOKEN_TYPE_NAMES[self as usize]
    }

    /// Numeric tag of this type.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Token type for a numeric tag, if there is one.
    #[inline]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        if (tag as usize) < Self::COUNT {
            Some(Self::ALL[tag as usize])
        } else {
            None
        }
    }

    /// Closing type for an opening bracket (`Function` closes with `)`).
    #[inline]
    pub const fn closing_pair(self) -> Option<Self> {
        match self {
            Self::Function | Self::LeftParenthesis => Some(Self::RightParenthesis),
            Self::LeftSquareBracket => Some(Self::RightSquareBracket),
            Self::LeftCurlyBracket => Some(Self::RightCurlyBracket),
            _ => None,
        }
    }

    /// `true` for `(`, `[`, `{` and function-start tokens.
    #[inline]
    pub const fn is_open_bracket(self) -> bool {
        self.closing_pair().is_some()
    }

    /// `true` for `)`, `]`, `}`.
    #[inline]
    pub const fn is_close_bracket(self) -> bool {
        matches!(
            self,
            Self::RightParenthesis | Self::RightSquareBracket | Self::RightCurlyBracket
        )
    }

    /// `true` for whitespace and comment tokens.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WhiteSpace | Self::Comment)
    }

    /// Fixed source text for single-spelling types.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Cdo => Some("<!--"),
            Self::Cdc => Some("-->"),
            Self::Colon => Some(":"),
            Self::Semicolon => Some(";"),
            Self::Comma => Some(","),
            Self::LeftSquareBracket => Some("["),
            Self::RightSquareBracket => Some("]"),
            Self::LeftParenthesis => Some("("),
            Self::RightParenthesis => Some(")"),
            Self::LeftCurlyBracket => Some("{"),
            Self::RightCurlyBracket => Some("}"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw token: type tag plus byte length.
///
/// The start offset is implicit (the end of the previous token), which
/// keeps the scanner output at 8 bytes per token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: TokenType,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
