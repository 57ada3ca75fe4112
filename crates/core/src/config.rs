/// How the scanner treats constructs that touch the end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Boundary {
    /// A fixed literal (`*/`, `//`) may end exactly at the end of input, and a
    /// greedy run (identifier, number, operator, line comment) that reaches the
    /// end of input is completed and emitted.
    #[default]
    Inclusive,
    /// Compatibility mode: a literal must be followed by at least one more
    /// character, and any token still being assembled at the end of input is
    /// dropped without being counted.
    Exclusive,
}

/// Options passed to every lexer factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub boundary: Boundary,
}

impl ScanOptions {
    #[must_use]
    pub const fn compatible() -> Self {
        Self {
            boundary: Boundary::Exclusive,
        }
    }
}
