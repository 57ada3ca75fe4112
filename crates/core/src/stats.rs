use serde::{Deserialize, Serialize};

/// Pure analysis result, independent of file system metadata.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of completed tokens.
    pub tokens: usize,
    /// Whether the content was detected as binary (and therefore not scanned).
    pub is_binary: bool,
}

impl AnalysisResult {
    /// Creates a new default `AnalysisResult`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
