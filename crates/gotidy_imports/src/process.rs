use anyhow::{Context, Result};
use gotidy_format::{FormatOptions, format_source};
use log::trace;
use std::fs;
use std::path::Path;

use crate::normalize::strip_import_blanks;

/// Runs a buffer through format / strip blanks / format.
///
/// The first pass sorts and groups the import declaration as it stands, the
/// stripped blanks collapse it into one chunk, and the second pass produces
/// the final grouping. Errors carry the pass they came from.
pub fn format_data(src: &str, opts: &FormatOptions) -> Result<String> {
    let pass1 = format_source("", src, opts).context("format pass 1")?;
    let stripped = strip_import_blanks(&pass1);
    format_source("", &stripped, opts).context("format pass 2")
}

/// Reads, formats and rewrites one file in place.
///
/// Permission bits are captured before formatting and reapplied after the
/// write, so the rewrite never changes file metadata. Nothing is written
/// unless every stage succeeded.
pub fn format_file(path: &Path, opts: &FormatOptions) -> Result<()> {
    trace!("reading {}", path.display());
    let src = fs::read_to_string(path).context("read")?;
    let permissions = fs::metadata(path).context("read")?.permissions();

    let formatted = format_data(&src, opts)?;

    trace!("writing {} ({} bytes)", path.display(), formatted.len());
    fs::write(path, &formatted).context("write")?;
    fs::set_permissions(path, permissions).context("write")?;
    Ok(())
}
