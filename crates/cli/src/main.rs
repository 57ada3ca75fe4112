use clap::Parser;
use count_tokens_cli::args::Args;
use count_tokens_cli::config::Config;
use count_tokens_cli::error::{AppError, Result};
use count_tokens_cli::presentation;
use count_tokens_core::Registry;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.behavior.verbose);

    if let Some(jobs) = args.scan.jobs
        && let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
    {
        tracing::warn!("could not size the worker pool: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ AppError::Io(_)) => {
            eprintln!("Output Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let result = count_tokens_engine::run(&config, &Registry::builtin())?;

    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    let mut stdout = std::io::stdout().lock();
    presentation::write_results(&mut stdout, &result, &config)
}

/// `RUST_LOG` wins when set, otherwise warnings only unless `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "count_tokens=debug"
    } else {
        "count_tokens=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
