use log::debug;
use regex::Regex;
use std::path::Path;

/// What the tree walk should do with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A regular file that should be formatted.
    Process,
    /// Not interesting; descent into directories continues.
    Skip,
    /// An excluded directory; do not descend into it at all.
    SkipSubtree,
}

/// Decides, per filesystem entry, whether it is eligible for processing.
///
/// Pure predicate over the entry's path and kind; the only side effect is a
/// debug trace naming the rule that rejected an entry.
pub struct FileSelector {
    exclude: Vec<String>,
    filter: Option<Regex>,
}

impl FileSelector {
    pub fn new(exclude: Vec<String>, filter: Option<Regex>) -> Self {
        Self { exclude, filter }
    }

    /// Rules in order, first match wins: exclusion prefix, directory,
    /// filename filter, dotfile, `.go` extension.
    pub fn evaluate(&self, path: &Path, is_dir: bool) -> Decision {
        let display = path.to_string_lossy();
        // Prefixes are matched against the path exactly as the walk yields
        // it, minus a leading "./" so that bare prefixes like "vendor" work
        // under the default "." root. For any other root the prefix must
        // include the root path itself.
        let display = display.strip_prefix("./").unwrap_or(&display);

        for prefix in &self.exclude {
            if display.starts_with(prefix.as_str()) {
                debug!("   skipped because matched this excluded path: {prefix}");
                return if is_dir { Decision::SkipSubtree } else { Decision::Skip };
            }
        }
        if is_dir {
            debug!("   skipped because it's a dir");
            return Decision::Skip;
        }

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return Decision::Skip,
        };
        if let Some(filter) = &self.filter
            && !filter.is_match(&name)
        {
            debug!("   skipped because it didn't match this filter: {filter}");
            return Decision::Skip;
        }
        if name.starts_with('.') || !name.ends_with(".go") {
            debug!("   skipped because it's not a go file");
            return Decision::Skip;
        }

        debug!("   formatting");
        Decision::Process
    }
}
