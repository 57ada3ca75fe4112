// crates/core/src/counter.rs
use encoding_rs::Encoding;

use crate::lexer::Lexer;
use crate::stats::AnalysisResult;
use crate::token::TokenType;

const BINARY_CHECK_LEN: usize = 8 * 1024;

/// Count tokens in a byte slice.
///
/// This is the core entry point for file contents. Binary input (a NUL byte
/// within the first 8 KiB) is flagged and not scanned. Anything else is
/// decoded with `encoding`, replacing malformed sequences with U+FFFD. A
/// leading byte order mark is dropped and, when present, overrides `encoding`.
pub fn count_bytes(
    input: &[u8],
    encoding: &'static Encoding,
    lexer: &mut dyn Lexer,
    on_token: &mut dyn FnMut(TokenType, &str),
) -> AnalysisResult {
    let mut stats = AnalysisResult::new();

    if is_binary(input) {
        stats.is_binary = true;
        return stats;
    }

    let (source, _, _) = encoding.decode(input);
    stats.tokens = lexer.count(&source, &mut |kind, token| on_token(kind, token));
    stats
}

fn is_binary(input: &[u8]) -> bool {
    let len = input.len().min(BINARY_CHECK_LEN);
    input[..len].contains(&0)
}
