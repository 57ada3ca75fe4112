// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use count_tokens_engine::options::{OutputFormat, OutputMode, SortKey};
use count_tokens_engine::stats::{FileStats, RunResult, Summary};
use std::cmp::Ordering;
use std::io::Write;

/// Write the run's results to `out` in the configured format.
///
/// Binary files are left out of every listing. Sort keys are applied in
/// order, then `top_n` truncates the list. The summary always covers every
/// scanned file, not just the listed ones.
///
/// # Errors
/// Returns an error when writing or serializing fails.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let mut stats: Vec<&FileStats> = result.stats.iter().filter(|s| !s.is_binary).collect();
    sort_stats(&mut stats, &config.sort);
    if let Some(n) = config.top_n {
        stats.truncate(n);
    }
    let summary = result.summary();
    let total_only = config.output_mode == OutputMode::TotalOnly;

    match config.format {
        OutputFormat::Table => write_table(out, &stats, summary, config, total_only),
        OutputFormat::Json if total_only => {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            Ok(())
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            Ok(())
        }
        OutputFormat::Yaml if total_only => {
            write!(out, "{}", serde_yaml::to_string(&summary)?)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(&stats)?)?;
            Ok(())
        }
        OutputFormat::Jsonl => write_jsonl(out, &stats, summary, total_only),
        OutputFormat::Csv => write_sv(out, &stats, result, ",", total_only),
        OutputFormat::Tsv => write_sv(out, &stats, result, "\t", total_only),
    }
}

fn sort_stats(stats: &mut [&FileStats], keys: &[(SortKey, bool)]) {
    if keys.is_empty() {
        return;
    }
    stats.sort_by(|a, b| {
        for (key, desc) in keys {
            let order = match key {
                SortKey::Tokens => a.tokens.cmp(&b.tokens),
                SortKey::Size => a.size.cmp(&b.size),
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Ext => a.ext.cmp(&b.ext),
            };
            if order != Ordering::Equal {
                return if *desc { order.reverse() } else { order };
            }
        }
        Ordering::Equal
    });
}

fn write_table<W: Write>(
    out: &mut W,
    stats: &[&FileStats],
    summary: Summary,
    config: &Config,
    total_only: bool,
) -> Result<()> {
    if !total_only {
        for root in &config.walk.roots {
            writeln!(out, "[target folder] {}", root.display())?;
        }
        let extensions = if config.filter.allow_ext.is_empty() {
            "(all)".to_string()
        } else {
            config.filter.allow_ext.join(" ")
        };
        writeln!(out, "[target extensions] {extensions}")?;

        for s in stats {
            if let Some(log) = &s.token_log {
                for token in log {
                    writeln!(out, "{}: {}", token.kind, token.text)?;
                }
            }
            writeln!(out, "{}: {}", s.path.display(), s.tokens)?;
        }
    }
    writeln!(out, "{} files, {} tokens", summary.files, summary.tokens)?;
    Ok(())
}

fn write_jsonl<W: Write>(
    out: &mut W,
    stats: &[&FileStats],
    summary: Summary,
    total_only: bool,
) -> Result<()> {
    if !total_only {
        for s in stats {
            let mut v = serde_json::to_value(s)?;
            if let Some(obj) = v.as_object_mut() {
                obj.insert("type".to_string(), "file".into());
            }
            writeln!(out, "{v}")?;
        }
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": summary.files,
        "tokens": summary.tokens,
    });
    writeln!(out, "{total_obj}")?;
    Ok(())
}

fn write_sv<W: Write>(
    out: &mut W,
    stats: &[&FileStats],
    result: &RunResult,
    delimiter: &str,
    total_only: bool,
) -> Result<()> {
    writeln!(out, "tokens{delimiter}size{delimiter}path")?;
    if !total_only {
        for s in stats {
            let path = s.path.display().to_string();
            let path = if delimiter == ","
                && (path.contains(',') || path.contains('"') || path.contains('\n'))
            {
                format!("\"{}\"", path.replace('"', "\"\""))
            } else {
                path
            };
            writeln!(out, "{}{delimiter}{}{delimiter}{path}", s.tokens, s.size)?;
        }
    }
    // Totals cover every scanned file, not just the listed ones.
    let summary = result.summary();
    let total_size: u64 = result
        .stats
        .iter()
        .filter(|s| !s.is_binary)
        .map(|s| s.size)
        .sum();
    writeln!(
        out,
        "{}{delimiter}{}{delimiter}TOTAL ({} files)",
        summary.tokens,
        total_size,
        summary.files
    )?;
    Ok(())
}
