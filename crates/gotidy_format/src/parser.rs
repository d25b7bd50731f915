use anyhow::{Result, anyhow};
use log::trace;

/// One import line inside a grouped declaration.
#[derive(Debug, Clone)]
pub struct ImportSpec {
    /// Alias in front of the path (`x`, `.` or `_`), if any.
    pub alias: Option<String>,
    /// The quoted import path, without quotes.
    pub path: String,
    /// Comment lines immediately above the spec.
    pub comments: Vec<String>,
    /// Line comment after the path, including the `//`.
    pub trailing: Option<String>,
}

/// A parsed `import ( ... )` declaration.
///
/// Chunks are the runs of specs separated by blank lines in the source;
/// formatting sorts within a chunk but never merges chunks.
#[derive(Debug)]
pub struct ImportBlock {
    /// Index of the `import (` line.
    pub opener: usize,
    /// Index of the `)` line.
    pub closer: usize,
    pub chunks: Vec<Vec<ImportSpec>>,
    /// Comment lines left dangling before the closing parenthesis.
    pub trailing_comments: Vec<String>,
    /// Text after `)` on the closer line (`) // note` is legal Go).
    pub closer_comment: Option<String>,
}

fn label(filename: &str) -> String {
    if filename.is_empty() { String::new() } else { format!("{filename}: ") }
}

/// Checks that the first significant line of the buffer is a package clause.
///
/// Blank lines, `//` lines and `/* ... */` runs are skipped; anything else
/// that is not `package <name>` makes the buffer invalid Go source.
pub fn verify_package_clause(filename: &str, lines: &[&str]) -> Result<()> {
    let mut in_block_comment = false;
    'lines: for raw in lines {
        let mut line = raw.trim();
        // Block comments may open and close within one line; peel them off
        // so `/* hdr */ package main` still exposes the clause.
        loop {
            if in_block_comment {
                match line.find("*/") {
                    Some(end) => {
                        in_block_comment = false;
                        line = line[end + 2..].trim_start();
                    }
                    None => continue 'lines,
                }
            } else if line.starts_with("/*") {
                in_block_comment = true;
                line = &line[2..];
            } else {
                break;
            }
        }
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if line.starts_with("package ") {
            return Ok(());
        }
        return Err(anyhow!("{}expected package clause, found {:?}", label(filename), line));
    }
    Err(anyhow!("{}expected package clause", label(filename)))
}

/// Finds and parses the first grouped import declaration.
///
/// Returns `Ok(None)` when the buffer has none (single-form `import "x"`
/// lines do not count). Errors when the declaration is never closed or an
/// import spec line cannot be parsed.
pub fn find_import_block(filename: &str, lines: &[&str]) -> Result<Option<ImportBlock>> {
    let opener = match lines.iter().position(|l| l.trim_end() == "import (") {
        Some(i) => i,
        None => return Ok(None),
    };
    trace!("found import declaration opener at line {}", opener + 1);

    let mut chunks: Vec<Vec<ImportSpec>> = Vec::new();
    let mut current: Vec<ImportSpec> = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut in_block_comment = false;

    for (offset, raw) in lines[opener + 1..].iter().enumerate() {
        let line = raw.trim();

        if in_block_comment {
            pending.push(line.to_string());
            if line.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if line.starts_with(')') {
            if !current.is_empty() {
                chunks.push(current);
            }
            let rest = line[1..].trim();
            return Ok(Some(ImportBlock {
                opener,
                closer: opener + 1 + offset,
                chunks,
                trailing_comments: pending,
                closer_comment: (!rest.is_empty()).then(|| rest.to_string()),
            }));
        }
        if line.is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with("//") {
            pending.push(line.to_string());
            continue;
        }
        if line.starts_with("/*") {
            pending.push(line.to_string());
            if !line.contains("*/") {
                in_block_comment = true;
            }
            continue;
        }
        let mut spec = parse_spec(filename, line)?;
        spec.comments = std::mem::take(&mut pending);
        current.push(spec);
    }

    Err(anyhow!("{}unterminated import declaration", label(filename)))
}

fn parse_spec(filename: &str, line: &str) -> Result<ImportSpec> {
    let malformed = || anyhow!("{}malformed import spec: {:?}", label(filename), line);

    let open = line.find('"').ok_or_else(malformed)?;
    let rest = &line[open + 1..];
    let close = rest.find('"').ok_or_else(malformed)?;
    let path = &rest[..close];
    if path.is_empty() {
        return Err(malformed());
    }

    let alias = line[..open].trim();
    let alias = if alias.is_empty() {
        None
    } else if is_import_alias(alias) {
        Some(alias.to_string())
    } else {
        return Err(malformed());
    };

    let after = rest[close + 1..].trim();
    let trailing = if after.is_empty() {
        None
    } else if after.starts_with("//") {
        Some(after.to_string())
    } else {
        return Err(malformed());
    };

    Ok(ImportSpec { alias, path: path.to_string(), comments: Vec::new(), trailing })
}

fn is_import_alias(s: &str) -> bool {
    if s == "." || s == "_" {
        return true;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
