use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileStats, TokenRecord};
use count_tokens_core::{Registry, count_bytes};
use std::path::PathBuf;

/// Process a single file and return its statistics.
///
/// The lexer is resolved from the file name before anything is read, so files
/// nobody can scan cost no I/O.
///
/// # Errors
/// [`EngineError::UnknownExtension`] when no registration matches the file,
/// [`EngineError::FileRead`] when the contents cannot be read.
pub fn process_file(
    (path, meta): (PathBuf, std::fs::Metadata),
    config: &Config,
    registry: &Registry,
) -> Result<FileStats> {
    let file_name = path.to_string_lossy();
    let entry = registry.lookup_with_map(&file_name, &config.filter.map_ext)?;

    let mut stats = FileStats::new(path.clone());
    stats.size = meta.len();
    stats.language = entry.language.to_string();

    let bytes = std::fs::read(&path).map_err(|source| EngineError::FileRead {
        path: path.clone(),
        source,
    })?;

    let mut lexer = entry.create(config.scan);
    let mut token_log = config.capture_tokens.then(Vec::new);
    let analysis = count_bytes(&bytes, config.encoding, lexer.as_mut(), &mut |kind, text| {
        if let Some(log) = token_log.as_mut() {
            log.push(TokenRecord::new(kind, text));
        }
    });

    stats.tokens = analysis.tokens;
    stats.is_binary = analysis.is_binary;
    stats.token_log = token_log;

    log::debug!("{}: {} tokens", path.display(), stats.tokens);
    Ok(stats)
}
