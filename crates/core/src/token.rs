// crates/core/src/token.rs
//! トークン分類
//!
//! Lexical categories and the character sets the recognisers are driven by.
//! The sets are plain ASCII; every other character falls through to [`TokenType::Id`].

use core::fmt;
use serde::{Deserialize, Serialize};

/// Lexical category of a token.
///
/// The set is closed: consumers may match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Comment,
    Number,
    Id,
    String,
    Character,
    Mark,
}

impl TokenType {
    pub const ALL: [Self; 6] = [
        Self::Comment,
        Self::Number,
        Self::Id,
        Self::String,
        Self::Character,
        Self::Mark,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "COMMENT",
            Self::Number => "NUMBER",
            Self::Id => "ID",
            Self::String => "STRING",
            Self::Character => "CHARACTER",
            Self::Mark => "MARK",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, trimmed slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    #[must_use]
    pub const fn new(kind: TokenType, text: &'a str) -> Self {
        Self { kind, text }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}

pub const SPACES: &str = " \t\r\n";
pub const NUMBER_CHARS: &str = ".0123456789";
pub const SEPARATORS: &str = "(){}[];:,.?";
pub const OPERATORS: &str = "!#$%&-=^~\\|@`+*/<>";

#[inline]
#[must_use]
pub fn is_space(c: char) -> bool {
    SPACES.contains(c)
}

#[inline]
#[must_use]
pub fn is_number_char(c: char) -> bool {
    NUMBER_CHARS.contains(c)
}

#[inline]
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

#[inline]
#[must_use]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(c)
}

/// Separators and operators together.
#[inline]
#[must_use]
pub fn is_mark(c: char) -> bool {
    is_operator(c) || is_separator(c)
}

/// Characters that may continue an identifier run.
#[inline]
#[must_use]
pub fn is_id_char(c: char) -> bool {
    !is_mark(c) && !is_space(c)
}

/// Trims the way the token boundary is defined: every char up to and
/// including U+0020 is stripped from both ends.
#[inline]
#[must_use]
pub fn trim_token(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
