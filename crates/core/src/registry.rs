// crates/core/src/registry.rs
//! 拡張子ディスパッチ
//!
//! Ordered table of `(matcher, factory)` registrations. Lookup walks the table
//! front to back and the first matcher that accepts the lowercased file name
//! wins. The table is filled once at startup and only read afterwards, so a
//! shared `&Registry` can be used from every worker thread.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use thiserror::Error;

use crate::config::ScanOptions;
use crate::lexer::{CStyleLexer, Lexer};

/// Builds a fresh lexer for one scan.
pub type LexerFactory = fn(ScanOptions) -> Box<dyn Lexer>;

/// No registration accepted the file name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no token counter registered for '{file}'")]
pub struct NotFound {
    pub file: String,
}

/// Decides whether a registration handles a file.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-insensitive file name suffixes, e.g. `.java`.
    Suffixes(Vec<String>),
    /// Arbitrary test on the lowercased file name.
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    pub fn suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Suffixes(
            suffixes
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// `lowered` must already be lowercase.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::Suffixes(list) => list.iter().any(|s| lowered.ends_with(s.as_str())),
            Self::Predicate(test) => test(lowered),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub language: &'static str,
    pub matcher: Matcher,
    pub factory: LexerFactory,
}

impl Registration {
    #[must_use]
    pub fn create(&self, options: ScanOptions) -> Box<dyn Lexer> {
        (self.factory)(options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Registration>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry with the bundled lexers.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("java", Matcher::suffixes([".java"]), CStyleLexer::boxed);
        registry
    }

    /// Appends a registration. Earlier entries keep precedence.
    pub fn register(
        &mut self,
        language: &'static str,
        matcher: Matcher,
        factory: LexerFactory,
    ) -> &mut Self {
        self.entries.push(Registration {
            language,
            matcher,
            factory,
        });
        self
    }

    pub fn registrations(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First registration accepting `file_name`.
    ///
    /// # Errors
    /// Returns [`NotFound`] carrying `file_name` when nothing matches.
    pub fn lookup(&self, file_name: &str) -> Result<&Registration, NotFound> {
        let lowered = file_name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.matcher.matches(&lowered))
            .ok_or_else(|| NotFound {
                file: file_name.to_string(),
            })
    }

    /// Factory of the first registration accepting `file_name`.
    ///
    /// # Errors
    /// Returns [`NotFound`] carrying `file_name` when nothing matches.
    pub fn resolve(&self, file_name: &str) -> Result<LexerFactory, NotFound> {
        self.lookup(file_name).map(|entry| entry.factory)
    }

    /// Like [`Registry::lookup`], after rewriting the extension through `map`
    /// (`cs` -> `java` makes `Foo.cs` resolve as `Foo.java`).
    ///
    /// # Errors
    /// Returns [`NotFound`] carrying the original `file_name` when nothing matches.
    pub fn lookup_with_map(
        &self,
        file_name: &str,
        map: &HashMap<String, String>,
    ) -> Result<&Registration, NotFound> {
        let effective = remap_extension(file_name, map);
        self.lookup(&effective).map_err(|_| NotFound {
            file: file_name.to_string(),
        })
    }
}

fn remap_extension<'a>(file_name: &'a str, map: &HashMap<String, String>) -> Cow<'a, str> {
    if map.is_empty() {
        return Cow::Borrowed(file_name);
    }
    let Some((stem, ext)) = file_name.rsplit_once('.') else {
        return Cow::Borrowed(file_name);
    };
    let ext = ext.to_lowercase();
    match map.get(&ext) {
        Some(target) => Cow::Owned(format!("{stem}.{}", target.trim_start_matches('.'))),
        None => Cow::Borrowed(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_header(name: &str) -> bool {
        name.ends_with(".h") || name.ends_with(".hpp")
    }

    #[test]
    fn test_builtin_resolves_java() {
        let registry = Registry::builtin();
        let factory = registry.resolve("src/Main.java").unwrap();
        let mut lexer = factory(ScanOptions::default());
        assert_eq!(lexer.count_silent("int a = 1;"), 5);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = Registry::builtin();
        assert!(registry.resolve("MAIN.JAVA").is_ok());
        assert_eq!(registry.lookup("Main.Java").unwrap().language, "java");
    }

    #[test]
    fn test_not_found_carries_name() {
        let registry = Registry::builtin();
        let err = registry.resolve("notes/README.md").unwrap_err();
        assert_eq!(err.file, "notes/README.md");
        assert_eq!(
            err.to_string(),
            "no token counter registered for 'notes/README.md'"
        );
    }

    #[test]
    fn test_suffix_must_be_at_end() {
        let registry = Registry::builtin();
        assert!(registry.resolve("Main.java.bak").is_err());
        assert!(registry.resolve("java").is_err());
    }

    #[test]
    fn test_register_appends_without_touching_existing() {
        let mut registry = Registry::builtin();
        registry
            .register("c", Matcher::suffixes([".C", ".cpp"]), CStyleLexer::boxed)
            .register("header", Matcher::Predicate(is_header), CStyleLexer::boxed);

        assert_eq!(registry.lookup("a.java").unwrap().language, "java");
        assert_eq!(registry.lookup("a.c").unwrap().language, "c");
        assert_eq!(registry.lookup("A.CPP").unwrap().language, "c");
        assert_eq!(registry.lookup("a.hpp").unwrap().language, "header");
        assert_eq!(registry.registrations().count(), 3);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = Registry::new();
        registry
            .register("first", Matcher::suffixes([".x"]), CStyleLexer::boxed)
            .register("second", Matcher::suffixes([".x"]), CStyleLexer::boxed);
        assert_eq!(registry.lookup("a.x").unwrap().language, "first");
    }

    #[test]
    fn test_empty_registry_finds_nothing() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("a.java").is_err());
    }

    #[test]
    fn test_lookup_with_map_rewrites_extension() {
        let registry = Registry::builtin();
        let mut map = HashMap::new();
        map.insert(String::from("cs"), String::from("java"));

        assert_eq!(
            registry.lookup_with_map("Program.CS", &map).unwrap().language,
            "java"
        );
        assert!(registry.lookup_with_map("Main.java", &map).is_ok());

        let err = registry.lookup_with_map("script.py", &map).unwrap_err();
        assert_eq!(err.file, "script.py");
    }

    #[test]
    fn test_map_target_may_carry_dot() {
        let registry = Registry::builtin();
        let mut map = HashMap::new();
        map.insert(String::from("kt"), String::from(".java"));
        assert!(registry.lookup_with_map("App.kt", &map).is_ok());
    }
}
