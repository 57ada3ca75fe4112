// crates/core/src/lexer/c_style.rs
//! # C-Style Lexer
//!
//! Token counter for C-family sources (`//` and `/* */` comments, `"` strings,
//! `'` character literals).
//!
//! Recognisers are tried in a fixed order at each token start:
//!
//! | Order | Recogniser | Emits |
//! |-------|------------|-------|
//! | 1 | `/* ... */`, `// ...` | `COMMENT` |
//! | 2 | run of `.0123456789` | `NUMBER` (a lone `.` is `MARK`) |
//! | 3 | `"..."`, `'...'` | `STRING`, `CHARACTER` |
//! | 4 | separator, or run of operators | `MARK` |
//! | 5 | anything else up to a mark or space | `ID` |
//!
//! Each recogniser returns `Some(true)` when it completed a token,
//! `Some(false)` when the lookahead did not fit (after rewinding it), and
//! `None` once the input is exhausted. Block comments and quoted literals
//! need a terminator: when the input ends first the partial token is dropped
//! and not counted.

use crate::config::ScanOptions;
use crate::cursor::Cursor;
use crate::token::{TokenType, is_id_char, is_mark, is_number_char, is_operator, is_separator};

use super::Lexer;
use alloc::boxed::Box;

/// C系言語トークンカウンタ
#[derive(Debug, Clone, Copy, Default)]
pub struct CStyleLexer {
    options: ScanOptions,
}

impl CStyleLexer {
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Registry factory.
    #[must_use]
    pub fn boxed(options: ScanOptions) -> Box<dyn Lexer> {
        Box::new(Self::new(options))
    }
}

impl Lexer for CStyleLexer {
    fn count<'a>(
        &mut self,
        source: &'a str,
        on_token: &mut dyn FnMut(TokenType, &'a str),
    ) -> usize {
        let mut cursor = Cursor::new(source, self.options.boundary, on_token);
        // `None` only ever means the input ran out.
        let _ = scan(&mut cursor);
        cursor.count()
    }
}

fn scan(c: &mut Cursor<'_, '_>) -> Option<()> {
    loop {
        c.skip_whitespace();
        let matched = comment(c)? || number(c)? || text(c)? || mark(c)? || id(c)?;
        if !matched {
            return Some(());
        }
    }
}

fn comment(c: &mut Cursor<'_, '_>) -> Option<bool> {
    if c.eat_literal("/*") {
        while !c.eat_literal("*/") {
            c.eat()?;
        }
        return Some(c.done(TokenType::Comment));
    }
    if c.eat_literal("//") {
        c.eat_run(|ch| ch != '\n')?;
        return Some(c.done(TokenType::Comment));
    }
    Some(false)
}

fn number(c: &mut Cursor<'_, '_>) -> Option<bool> {
    let first = c.eat()?;
    if !is_number_char(first) {
        c.back();
        return Some(false);
    }
    let rest = c.eat_run(is_number_char)?;
    let kind = if first == '.' && rest == 0 {
        TokenType::Mark
    } else {
        TokenType::Number
    };
    Some(c.done(kind))
}

fn text(c: &mut Cursor<'_, '_>) -> Option<bool> {
    let open = c.eat()?;
    let kind = match open {
        '"' => TokenType::String,
        '\'' => TokenType::Character,
        _ => {
            c.back();
            return Some(false);
        }
    };
    let mut prev = open;
    loop {
        let ch = c.eat()?;
        if ch == open && prev != '\\' {
            break;
        }
        prev = ch;
    }
    Some(c.done(kind))
}

fn mark(c: &mut Cursor<'_, '_>) -> Option<bool> {
    let first = c.eat()?;
    if is_separator(first) {
        return Some(c.done(TokenType::Mark));
    }
    if is_mark(first) {
        c.eat_run(is_operator)?;
        return Some(c.done(TokenType::Mark));
    }
    c.back();
    Some(false)
}

fn id(c: &mut Cursor<'_, '_>) -> Option<bool> {
    let first = c.eat()?;
    if is_mark(first) {
        c.back();
        return Some(false);
    }
    c.eat_run(is_id_char)?;
    Some(c.done(TokenType::Id))
}
