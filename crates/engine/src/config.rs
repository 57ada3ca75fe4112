use crate::error::{EngineError, Result};
use crate::options::{OutputFormat, OutputMode, SortKey};
use count_tokens_core::ScanOptions;
use derive_builder::Builder;
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub override_include: Vec<String>,
    #[builder(default)]
    pub override_exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            override_include: vec![],
            override_exclude: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Path suffix allow-list (`.java`, `.d.ts`, `Test.java`; a bare `java`
    /// means `.java`). Empty means every file the registry knows.
    #[builder(default)]
    pub allow_ext: Vec<String>,

    #[builder(default)]
    pub min_size: Option<u64>,
    #[builder(default)]
    pub max_size: Option<u64>,

    #[builder(default)]
    pub map_ext: hashbrown::HashMap<String, String>,
}

impl FilterConfig {
    /// Whether `path` ends with one of the allowed suffixes, ignoring case.
    #[must_use]
    pub fn allows_path(&self, path: &Path) -> bool {
        if self.allow_ext.is_empty() {
            return true;
        }
        let path = path.to_string_lossy().to_lowercase();
        self.allow_ext
            .iter()
            .any(|allowed| path.ends_with(&allowed_suffix(allowed)))
    }

    #[must_use]
    pub fn allows_size(&self, size: u64) -> bool {
        self.min_size.is_none_or(|min| size >= min) && self.max_size.is_none_or(|max| size <= max)
    }
}

fn allowed_suffix(allowed: &str) -> String {
    let allowed = allowed.trim().to_lowercase();
    if allowed.contains('.') {
        allowed
    } else {
        format!(".{allowed}")
    }
}

/// `".Java"` and `"Java"` both become `"Java"`; case is left to the caller.
#[must_use]
pub fn normalize_ext(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,
    #[builder(default)]
    pub scan: ScanOptions,
    /// Source encoding; a byte order mark in the file takes precedence.
    #[builder(default = "encoding_rs::UTF_8")]
    pub encoding: &'static Encoding,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub sort: Vec<(SortKey, bool)>,
    #[builder(default)]
    pub top_n: Option<usize>,
    #[builder(default)]
    pub output_mode: OutputMode,

    /// Keep every reported token on the file's stats.
    #[builder(default)]
    pub capture_tokens: bool,
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            filter: FilterConfig::default(),
            scan: ScanOptions::default(),
            encoding: encoding_rs::UTF_8,
            format: OutputFormat::Table,
            sort: vec![],
            top_n: None,
            output_mode: OutputMode::default(),
            capture_tokens: false,
            strict: false,
        }
    }
}

impl Config {
    /// Rejects settings the walk cannot run with.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] or [`EngineError::InvalidExtMapping`].
    pub fn validate(&self) -> Result<()> {
        if self.walk.threads == 0 {
            return Err(EngineError::Config("thread count must be at least 1".into()));
        }
        if let (Some(min), Some(max)) = (self.filter.min_size, self.filter.max_size)
            && min > max
        {
            return Err(EngineError::Config(format!(
                "min size {min} is larger than max size {max}"
            )));
        }
        for (from, to) in &self.filter.map_ext {
            if normalize_ext(from).is_empty() || normalize_ext(to).is_empty() {
                return Err(EngineError::InvalidExtMapping(format!("{from}={to}")));
            }
        }
        Ok(())
    }
}
