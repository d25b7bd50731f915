use anyhow::{Context, Result};
use clap::Parser;
use gotidy_format::FormatOptions;
use regex::Regex;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gotidy")]
#[command(about = "Tidy the import declarations of a tree of Go source files")]
pub struct Config {
    /// Target path, can be a file or a directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Put imports beginning with these prefixes after 3rd-party packages; comma-separated list
    #[arg(long, default_value = "")]
    pub local: String,

    /// Path prefixes which should be excluded from processing; comma-separated list
    #[arg(long, default_value = "")]
    pub exclude: String,

    /// Only file names matching this regular expression are processed
    #[arg(long)]
    pub filter: Option<String>,

    /// Log per-file failures and keep walking instead of aborting on the first one
    #[arg(long)]
    pub keep_going: bool,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Config {
    pub fn local_prefixes(&self) -> Vec<String> {
        split_list(&self.local)
    }

    pub fn exclude_prefixes(&self) -> Vec<String> {
        split_list(&self.exclude)
    }

    /// Compiles the filename filter, if one was given.
    pub fn filter_regex(&self) -> Result<Option<Regex>> {
        match &self.filter {
            Some(pattern) => {
                let re = Regex::new(pattern)
                    .with_context(|| format!("invalid filter pattern {pattern:?}"))?;
                Ok(Some(re))
            }
            None => Ok(None),
        }
    }

    /// Builds the formatter options for this run. Everything except the
    /// local prefixes uses the formatter defaults (tabs, comments kept,
    /// format-only).
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions { local_prefixes: self.local_prefixes(), ..FormatOptions::default() }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list("vendor"), vec!["vendor"]);
        assert_eq!(split_list("vendor, gen ,,third_party"), vec!["vendor", "gen", "third_party"]);
    }

    #[test]
    fn test_filter_regex_compiles() {
        let cfg = Config::parse_from(["gotidy", "--filter", r"_test\.go$"]);
        assert!(cfg.filter_regex().unwrap().is_some());

        let cfg = Config::parse_from(["gotidy"]);
        assert!(cfg.filter_regex().unwrap().is_none());

        let cfg = Config::parse_from(["gotidy", "--filter", "["]);
        assert!(cfg.filter_regex().is_err());
    }

    #[test]
    fn test_format_options_carry_local_prefixes() {
        let cfg = Config::parse_from(["gotidy", "--local", "pkg,example.com/team"]);
        let opts = cfg.format_options();
        assert_eq!(opts.local_prefixes, vec!["pkg", "example.com/team"]);
        assert!(opts.tab_indent);
        assert!(opts.comments);
    }
}
