use std::path::PathBuf;

/// Outcome of a full tree walk.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Entries visited by the walk (files and directories).
    pub files_seen: usize,
    /// Files rewritten in place.
    pub files_formatted: usize,
    /// Per-file failures; only populated under `--keep-going`.
    pub failures: Vec<Failure>,
}

#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub reason: String,
}
