use anyhow::{Context, Result};
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::process::format_file;
use crate::selector::{Decision, FileSelector};
use crate::types::{Failure, RunResult};

/// Walks the configured root and formats every eligible Go file in place.
///
/// Entries are visited in sorted order, so runs are deterministic. Excluded
/// directories are pruned, not descended into. By default the first per-file
/// error aborts the walk, wrapped with the offending path; with
/// `--keep-going` it is logged, recorded on the result, and the walk moves
/// on. Walk errors themselves (an unreadable directory, say) are always
/// fatal.
pub fn run_format(cfg: &Config) -> Result<RunResult> {
    let selector = FileSelector::new(cfg.exclude_prefixes(), cfg.filter_regex()?);
    let opts = cfg.format_options();
    info!("formatting {} (local prefixes: {:?})", cfg.path.display(), opts.local_prefixes);

    let mut result = RunResult::default();
    let mut it = WalkDir::new(&cfg.path).sort_by_file_name().into_iter();

    while let Some(entry) = it.next() {
        let entry = entry.with_context(|| format!("walk {}", cfg.path.display()))?;
        let path = entry.path();
        result.files_seen += 1;
        debug!("processing path {}", path.display());

        match selector.evaluate(path, entry.file_type().is_dir()) {
            Decision::Skip => {}
            Decision::SkipSubtree => it.skip_current_dir(),
            Decision::Process => match format_file(path, &opts) {
                Ok(()) => result.files_formatted += 1,
                Err(err) if cfg.keep_going => {
                    warn!("{}: {:#}", path.display(), err);
                    result
                        .failures
                        .push(Failure { path: path.to_path_buf(), reason: format!("{err:#}") });
                }
                Err(err) => {
                    return Err(err.context(path.display().to_string()));
                }
            },
        }
    }

    info!(
        "walk complete: formatted {} of {} entries, {} failures",
        result.files_formatted,
        result.files_seen,
        result.failures.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const UNSORTED: &str = "package main\n\nimport (\n\t\"os\"\n\t\"fmt\"\n)\n";
    const SORTED: &str = "package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n";

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config(root: &Path, extra: &[&str]) -> Config {
        let root = root.to_string_lossy().to_string();
        let mut args = vec!["gotidy", "--path", root.as_str()];
        args.extend_from_slice(extra);
        Config::parse_from(args)
    }

    #[test]
    fn test_formats_tree_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_test_file(temp_dir.path(), "a.go", UNSORTED);
        let b = create_test_file(temp_dir.path(), "cmd/b.go", UNSORTED);

        let result = run_format(&config(temp_dir.path(), &[])).unwrap();
        assert_eq!(result.files_formatted, 2);
        assert_eq!(fs::read_to_string(&a).unwrap(), SORTED);
        assert_eq!(fs::read_to_string(&b).unwrap(), SORTED);
    }

    #[test]
    fn test_single_file_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "only.go", UNSORTED);

        let result = run_format(&config(&file, &[])).unwrap();
        assert_eq!(result.files_formatted, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), SORTED);
    }

    #[test]
    fn test_excluded_subtree_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let kept = create_test_file(temp_dir.path(), "main.go", UNSORTED);
        let vendored = create_test_file(temp_dir.path(), "vendor/x.go", UNSORTED);

        let exclude = format!("{}/vendor", temp_dir.path().display());
        let result = run_format(&config(temp_dir.path(), &["--exclude", &exclude])).unwrap();

        assert_eq!(result.files_formatted, 1);
        assert_eq!(fs::read_to_string(&kept).unwrap(), SORTED);
        assert_eq!(fs::read_to_string(&vendored).unwrap(), UNSORTED);
    }

    #[test]
    fn test_filter_limits_to_matching_names() {
        let temp_dir = TempDir::new().unwrap();
        let plain = create_test_file(temp_dir.path(), "a.go", UNSORTED);
        let test_file = create_test_file(temp_dir.path(), "a_test.go", UNSORTED);

        let result =
            run_format(&config(temp_dir.path(), &["--filter", r"_test\.go$"])).unwrap();

        assert_eq!(result.files_formatted, 1);
        assert_eq!(fs::read_to_string(&plain).unwrap(), UNSORTED);
        assert_eq!(fs::read_to_string(&test_file).unwrap(), SORTED);
    }

    #[test]
    fn test_hidden_and_non_go_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let hidden = create_test_file(temp_dir.path(), ".hidden.go", UNSORTED);
        let readme = create_test_file(temp_dir.path(), "readme.md", "# readme\n");

        let result = run_format(&config(temp_dir.path(), &[])).unwrap();
        assert_eq!(result.files_formatted, 0);
        assert_eq!(fs::read_to_string(&hidden).unwrap(), UNSORTED);
        assert_eq!(fs::read_to_string(&readme).unwrap(), "# readme\n");
    }

    #[test]
    fn test_first_error_aborts_and_spares_later_files() {
        let temp_dir = TempDir::new().unwrap();
        // Sorted walk order: bad.go comes before later.go.
        create_test_file(temp_dir.path(), "bad.go", "this is not go\n");
        let later = create_test_file(temp_dir.path(), "later.go", UNSORTED);

        let err = run_format(&config(temp_dir.path(), &[])).unwrap_err();
        assert!(format!("{err:#}").contains("bad.go"));
        assert_eq!(fs::read_to_string(&later).unwrap(), UNSORTED);
    }

    #[test]
    fn test_keep_going_records_failure_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "bad.go", "this is not go\n");
        let later = create_test_file(temp_dir.path(), "later.go", UNSORTED);

        let result = run_format(&config(temp_dir.path(), &["--keep-going"])).unwrap();
        assert_eq!(result.files_formatted, 1);
        assert_eq!(result.failures.len(), 1);
        assert!(result.failures[0].path.ends_with("bad.go"));
        assert_eq!(fs::read_to_string(&later).unwrap(), SORTED);
    }

    #[test]
    fn test_local_prefix_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(
            temp_dir.path(),
            "main.go",
            "package main\n\nimport (\n\t\"fmt\"\n\n\t\"pkg/local\"\n)\n",
        );

        run_format(&config(temp_dir.path(), &["--local", "pkg"])).unwrap();
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "package main\n\nimport (\n\t\"fmt\"\n\n\t\"pkg/local\"\n)\n"
        );
    }
}
