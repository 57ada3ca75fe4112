// crates/core/src/cursor.rs
//! Scanning cursor over an immutable source string.
//!
//! The cursor owns the two positions a scan needs: `index`, the next byte to
//! read, and `token_start`, where the token being assembled began. Both are
//! byte offsets on `char` boundaries and always satisfy
//! `token_start <= index <= source.len()`.
//!
//! End of input is reported as `None` from [`Cursor::eat`] and
//! [`Cursor::eat_run`]; recognisers propagate it with `?` and the lexer loop
//! stops there.

use crate::config::Boundary;
use crate::token::{TokenType, is_space, trim_token};

/// Receives every non-empty token as it is completed.
pub type TokenSink<'s, 'a> = dyn FnMut(TokenType, &'a str) + 's;

pub struct Cursor<'a, 's> {
    source: &'a str,
    index: usize,
    token_start: usize,
    count: usize,
    boundary: Boundary,
    on_token: &'s mut TokenSink<'s, 'a>,
}

impl<'a, 's> Cursor<'a, 's> {
    pub fn new(source: &'a str, boundary: Boundary, on_token: &'s mut TokenSink<'s, 'a>) -> Self {
        Self {
            source,
            index: 0,
            token_start: 0,
            count: 0,
            boundary,
            on_token,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    /// Completed recognition attempts so far, including empty ones.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn eat(&mut self) -> Option<char> {
        let c = self.source[self.index..].chars().next()?;
        self.index += c.len_utf8();
        Some(c)
    }

    /// Consumes `text` if it appears at the cursor and fits the boundary rule.
    pub fn eat_literal(&mut self, text: &str) -> bool {
        let end = self.index + text.len();
        let fits = match self.boundary {
            Boundary::Inclusive => end <= self.source.len(),
            Boundary::Exclusive => end < self.source.len(),
        };
        if fits && self.source[self.index..].starts_with(text) {
            self.index = end;
            true
        } else {
            false
        }
    }

    /// Un-consumes the character most recently eaten.
    pub fn back(&mut self) {
        if let Some(c) = self.source[..self.index].chars().next_back() {
            self.index -= c.len_utf8();
        }
    }

    /// Consumes characters while `accept` holds and returns how many were taken.
    ///
    /// Reaching the end of input finishes the run under [`Boundary::Inclusive`]
    /// and yields `None` under [`Boundary::Exclusive`].
    pub fn eat_run(&mut self, mut accept: impl FnMut(char) -> bool) -> Option<usize> {
        let mut taken = 0;
        loop {
            match self.eat() {
                Some(c) if accept(c) => taken += 1,
                Some(_) => {
                    self.back();
                    return Some(taken);
                }
                None => {
                    return match self.boundary {
                        Boundary::Inclusive => Some(taken),
                        Boundary::Exclusive => None,
                    };
                }
            }
        }
    }

    /// Skips spaces, tabs and line breaks, then starts a new token there.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.eat() {
            if !is_space(c) {
                self.back();
                break;
            }
        }
        self.token_start = self.index;
    }

    /// Closes the current token as `kind`.
    ///
    /// The attempt is always counted; the sink only sees non-empty text.
    pub fn done(&mut self, kind: TokenType) -> bool {
        self.count += 1;
        let text = trim_token(&self.source[self.token_start..self.index]);
        if !text.is_empty() {
            (self.on_token)(kind, text);
        }
        self.token_start = self.index;
        true
    }
}
