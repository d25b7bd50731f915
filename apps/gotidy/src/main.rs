use anyhow::Result;
use clap::Parser;
use gotidy_imports::{Config, print_failures, print_summary, run_format};
use log::debug;
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() {
    let cfg = Config::parse();

    // -v sets the default filter; an explicit RUST_LOG still wins.
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if cfg.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    });
    builder.parse_default_env();
    builder.init();

    if let Err(err) = run(&cfg) {
        println!("error while formatting: {err:#}");
        std::process::exit(1);
    }
}

fn run(cfg: &Config) -> Result<()> {
    debug!("parsed CLI arguments: {cfg:?}");

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let start = Instant::now();
    let result = run_format(cfg)?;
    let elapsed_ms = start.elapsed().as_millis();

    print_failures(&mut stdout, &result)?;
    print_summary(&mut stdout, &result, elapsed_ms)?;
    stdout.flush()?;

    if !result.failures.is_empty() {
        // Non-zero exit so --keep-going runs still fail CI.
        std::process::exit(1);
    }
    Ok(())
}
