// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
use count_tokens_core::{Boundary, ScanOptions};
pub use count_tokens_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
    normalize_ext,
};
use count_tokens_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(&args)?;
        let filter = filter_config_from_args(&args)?;

        let scan = ScanOptions {
            boundary: if args.scan.compat {
                Boundary::Exclusive
            } else {
                Boundary::Inclusive
            },
        };

        let format: engine_options::OutputFormat = args.output.format.into();
        let output_mode = if args.output.total_only {
            engine_options::OutputMode::TotalOnly
        } else {
            engine_options::OutputMode::Full
        };
        let sort: Vec<_> = args
            .output
            .sort
            .map(|spec| spec.0)
            .unwrap_or_default()
            .into_iter()
            .map(|(k, d)| (engine_options::SortKey::from(k), d))
            .collect();

        ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .scan(scan)
            .format(format)
            .sort(sort)
            .top_n(args.output.top)
            .output_mode(output_mode)
            .capture_tokens(args.output.show_tokens)
            .strict(args.behavior.strict)
            .encoding(args.scan.encoding.unwrap_or(encoding_rs::UTF_8))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let scan = &args.scan;

    let walk_threads = scan
        .walk_threads
        .or(scan.jobs)
        .unwrap_or_else(num_cpus::get);

    // Reported paths are absolute, like the folder header.
    let root = std::fs::canonicalize(&args.root).unwrap_or_else(|_| args.root.clone());

    WalkOptionsBuilder::default()
        .roots(vec![root])
        .threads(walk_threads)
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .override_include(scan.override_include.clone())
        .override_exclude(scan.override_exclude.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn filter_config_from_args(args: &Args) -> Result<FilterConfig, AppError> {
    let opts = &args.filter;
    let allow_ext: Vec<String> = args
        .extensions
        .iter()
        .chain(&opts.ext)
        .filter(|e| !normalize_ext(e).is_empty())
        .cloned()
        .collect();
    let map_ext: hashbrown::HashMap<String, String> = opts
        .map_ext
        .iter()
        .map(|(from, to)| (normalize_ext(from).to_ascii_lowercase(), to.clone()))
        .collect();

    FilterConfigBuilder::default()
        .allow_ext(allow_ext)
        .min_size(opts.min_size.map(|s| s.0))
        .max_size(opts.max_size.map(|s| s.0))
        .map_ext(map_ext)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Jsonl
);
map_enum!(
    options::SortKey,
    engine_options::SortKey,
    Tokens,
    Size,
    Name,
    Ext
);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let mut full = vec!["count_tokens"];
        full.extend_from_slice(argv);
        Config::try_from(Args::parse_from(full)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.scan.boundary, Boundary::Inclusive);
        assert!(config.filter.allow_ext.is_empty());
        assert_eq!(config.output_mode, engine_options::OutputMode::Full);
        assert!(!config.capture_tokens);
        assert!(config.walk.threads >= 1);
        assert!(config.walk.roots[0].is_absolute());
    }

    #[test]
    fn test_positional_and_flag_extensions_merge() {
        let config = config(&[".", ".java", "--ext", "cs,kt"]);
        assert_eq!(config.filter.allow_ext, vec![".java", "cs", "kt"]);
    }

    #[test]
    fn test_map_ext_keys_are_normalised() {
        let config = config(&["--map-ext", ".CS=java"]);
        assert_eq!(
            config.filter.map_ext.get("cs").map(String::as_str),
            Some("java")
        );
    }

    #[test]
    fn test_output_flags() {
        let config = config(&[
            "--compat",
            "--show-tokens",
            "--total-only",
            "--sort",
            "name",
            "--top",
            "3",
            "--jobs",
            "2",
        ]);
        assert_eq!(config.scan.boundary, Boundary::Exclusive);
        assert!(config.capture_tokens);
        assert_eq!(config.output_mode, engine_options::OutputMode::TotalOnly);
        assert_eq!(config.sort, vec![(engine_options::SortKey::Name, false)]);
        assert_eq!(config.top_n, Some(3));
        assert_eq!(config.walk.threads, 2);
    }

    #[test]
    fn test_encoding_defaults_to_utf8() {
        assert_eq!(config(&[]).encoding, encoding_rs::UTF_8);
        assert_eq!(
            config(&["--encoding", "Shift_JIS"]).encoding,
            encoding_rs::SHIFT_JIS
        );
    }
}
