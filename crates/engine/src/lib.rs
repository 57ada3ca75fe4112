use count_tokens_core::Registry;
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileStats, RunResult};

/// Run the token counting engine.
///
/// Returns a `RunResult` containing the statistics of every scanned file
/// (sorted by path), the files skipped for lack of a lexer, and any errors
/// encountered while reading.
///
/// # Errors
///
/// Returns an error for invalid configuration and walk initialization failures.
/// In strict mode the first read error is returned instead of collected.
/// Files without a registered lexer never fail the run.
pub fn run(config: &Config, registry: &Registry) -> Result<RunResult> {
    config.validate()?;

    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();

    std::thread::spawn(move || {
        if let Err(e) = crate::filesystem::walk_parallel(&walk_cfg, &filter_cfg, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let outcomes: Vec<Outcome> = rx
        .into_iter()
        .par_bridge()
        .map(|item| {
            let path = item.0.clone();
            processor::process_file(item, config, registry).map_err(|e| (path, e))
        })
        .collect();

    // The walker has finished once the channel is drained.
    if let Ok(walk_err) = err_rx.try_recv() {
        return Err(walk_err);
    }

    collect_outcomes(outcomes, config.strict)
}

type Outcome = std::result::Result<FileStats, (PathBuf, EngineError)>;

/// Sorts per-file outcomes into a `RunResult`.
///
/// Unknown extensions always land in `skipped`. Any other failure is returned
/// as-is when `strict`, otherwise it is kept in `errors`.
fn collect_outcomes(outcomes: Vec<Outcome>, strict: bool) -> Result<RunResult> {
    let mut result = RunResult::default();
    for outcome in outcomes {
        match outcome {
            Ok(stats) => result.stats.push(stats),
            Err((path, e)) if e.is_skippable() => {
                log::warn!("{e}");
                result.skipped.push(path);
            }
            Err((_, e)) if strict => return Err(e),
            Err((path, e)) => result.errors.push((path, e)),
        }
    }

    result.stats.sort_by(|a, b| a.path.cmp(&b.path));
    result.skipped.sort();
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(result)
}
