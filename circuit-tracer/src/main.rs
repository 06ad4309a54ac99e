//! Circuit tracer: find every shortest trace between the two components of
//! a circuit board file and print them.
//!
//! Run: cargo run -- -s -c boards/grid3x3.dat

mod cli;
mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use log::info;

use cli::{CliError, Options, OutputFormat};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = match cli::parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(CliError::Help) => {
            println!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}\n");
            eprintln!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&opts) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(opts: &Options) -> anyhow::Result<()> {
    let board = tracer_core::load(&opts.file)
        .with_context(|| format!("failed to load board {}", opts.file.display()))?;
    info!(
        "loaded {} board, start {} end {}",
        board.bounds(),
        board.start(),
        board.end()
    );

    let (paths, stats) =
        tracer_search::search_with_stats(&board, &opts.config).context("search aborted")?;
    info!(
        "{} shortest trace(s) using a {}",
        paths.len(),
        opts.config.discipline
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opts.format {
        OutputFormat::Console => render::console(&mut out, &paths, opts.color)?,
        OutputFormat::Json => render::json(&mut out, &paths)?,
    }

    if opts.stats {
        eprintln!("{stats}");
    }
    Ok(())
}
