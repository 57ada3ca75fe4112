use crate::error::EngineError;
use count_tokens_core::TokenType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One token as reported by the lexer, kept when token capture is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub kind: TokenType,
    pub text: String,
}

impl TokenRecord {
    pub fn new(kind: TokenType, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileStats {
    pub path: PathBuf,
    pub tokens: usize,
    pub size: u64,
    pub ext: String,
    pub name: String,
    /// Registry entry that scanned the file.
    pub language: String,
    pub is_binary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_log: Option<Vec<TokenRecord>>,
}

impl FileStats {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            tokens: 0,
            size: 0,
            ext,
            name,
            language: String::new(),
            is_binary: false,
            token_log: None,
        }
    }
}

/// Aggregate over the scanned (non-binary) files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub files: usize,
    pub tokens: usize,
}

impl Summary {
    pub fn from_stats<'a>(stats: impl IntoIterator<Item = &'a FileStats>) -> Self {
        stats
            .into_iter()
            .filter(|s| !s.is_binary)
            .fold(Self::default(), |acc, s| Self {
                files: acc.files + 1,
                tokens: acc.tokens + s.tokens,
            })
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<FileStats>,
    /// Files that could not be read.
    pub errors: Vec<(PathBuf, EngineError)>,
    /// Files with no registered lexer.
    pub skipped: Vec<PathBuf>,
}

impl RunResult {
    pub fn summary(&self) -> Summary {
        Summary::from_stats(&self.stats)
    }
}
