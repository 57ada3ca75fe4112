// crates/core/src/lexer/mod.rs
//! トークンカウンタ共通トレイト
//!
//! A lexer turns one decoded source text into a token count, reporting each
//! non-empty token through a callback as it goes.
//!
//! # Example
//!
//! ```rust
//! use count_tokens_core::lexer::{CStyleLexer, Lexer};
//! use count_tokens_core::TokenType;
//!
//! let mut lexer = CStyleLexer::default();
//! let mut marks = 0;
//! let total = lexer.count("a += 1;", &mut |kind: TokenType, _text: &str| {
//!     if kind == TokenType::Mark {
//!         marks += 1;
//!     }
//! });
//! assert_eq!(total, 4);
//! assert_eq!(marks, 2);
//! ```

mod c_style;

pub use c_style::CStyleLexer;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::token::{Token, TokenType};

/// Token counting interface shared by every language lexer.
///
/// Instances carry no state between calls; a fresh one is handed out by the
/// registry for every file, so no instance is ever shared across threads.
pub trait Lexer: Send {
    /// Scans `source` and returns the number of completed tokens.
    ///
    /// `on_token` sees every token whose trimmed text is non-empty, in order.
    fn count<'a>(&mut self, source: &'a str, on_token: &mut dyn FnMut(TokenType, &'a str))
    -> usize;

    /// [`Lexer::count`] without a callback.
    fn count_silent(&mut self, source: &str) -> usize {
        self.count(source, &mut |_: TokenType, _: &str| {})
    }
}

impl Lexer for Box<dyn Lexer> {
    fn count<'a>(
        &mut self,
        source: &'a str,
        on_token: &mut dyn FnMut(TokenType, &'a str),
    ) -> usize {
        (**self).count(source, on_token)
    }

    fn count_silent(&mut self, source: &str) -> usize {
        (**self).count_silent(source)
    }
}

/// Collects the reported tokens along with the total count.
pub fn tokenize<'a, L: Lexer + ?Sized>(lexer: &mut L, source: &'a str) -> (Vec<Token<'a>>, usize) {
    let mut tokens = Vec::new();
    let count = lexer.count(source, &mut |kind: TokenType, text: &'a str| {
        tokens.push(Token::new(kind, text));
    });
    (tokens, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanOptions;

    #[test]
    fn test_boxed_lexer_delegates() {
        let mut boxed: Box<dyn Lexer> = Box::new(CStyleLexer::new(ScanOptions::default()));
        assert_eq!(boxed.count_silent("int a = 1;"), 5);
    }

    #[test]
    fn test_tokenize_returns_slices_of_source() {
        let source = "x = y;";
        let (tokens, count) = tokenize(&mut CStyleLexer::default(), source);
        assert_eq!(count, 4);
        for token in &tokens {
            assert!(source.contains(token.text));
        }
    }
}
