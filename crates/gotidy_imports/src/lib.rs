//! In-place import tidying for Go source trees.
//!
//! This crate walks a file or directory tree, picks out the Go files worth
//! touching (exclusion prefixes, filename filter, dotfile/extension rules)
//! and rewrites each one through two formatting passes with a blank-line
//! normalization pass in between, so import groups come out deterministic
//! regardless of the whitespace noise in the input.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use gotidy_imports::{Config, run_format};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["gotidy", "--path", "cmd", "--local", "example.com/team"]);
//! let result = run_format(&cfg)?;
//! println!("formatted {} files", result.files_formatted);
//! # Ok(())
//! # }
//! ```

mod config;
mod normalize;
mod process;
mod reporter;
mod selector;
mod types;
mod walk;

// Re-export public API
pub use config::Config;
pub use normalize::strip_import_blanks;
pub use process::{format_data, format_file};
pub use reporter::{print_failures, print_summary};
pub use selector::{Decision, FileSelector};
pub use types::{Failure, RunResult};
pub use walk::run_format;
