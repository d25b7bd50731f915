use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::types::RunResult;

/// Prints the one-line run summary.
pub fn print_summary(w: &mut impl Write, result: &RunResult, elapsed_ms: u128) -> Result<()> {
    writeln!(
        w,
        "{} Finished in {}ms, formatted {} of {} entries.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        result.files_formatted.to_string().cyan(),
        result.files_seen.to_string().cyan()
    )?;
    Ok(())
}

/// Prints one line per recorded failure (populated under `--keep-going`).
pub fn print_failures(w: &mut impl Write, result: &RunResult) -> Result<()> {
    for failure in &result.failures {
        writeln!(
            w,
            "{} {}: {}",
            "✗".red(),
            failure.path.display().to_string().yellow(),
            failure.reason
        )?;
    }
    Ok(())
}
