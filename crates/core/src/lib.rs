#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod config;
pub mod counter;
pub mod cursor;
pub mod lexer;
pub mod registry;
pub mod stats;
pub mod token;

pub use config::{Boundary, ScanOptions};
pub use counter::count_bytes;
pub use lexer::{CStyleLexer, Lexer};
pub use registry::{LexerFactory, Matcher, NotFound, Registration, Registry};
pub use stats::AnalysisResult;
pub use token::{Token, TokenType};

/// Counts the tokens of a C-family source with default options.
///
/// ```
/// assert_eq!(count_tokens_core::count_tokens("int a = 1;"), 5);
/// ```
#[must_use]
pub fn count_tokens(source: &str) -> usize {
    CStyleLexer::default().count_silent(source)
}
