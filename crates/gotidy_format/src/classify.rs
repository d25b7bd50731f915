/// Ordering bucket for an import path. Variants are declared in render
/// order: standard library first, then third-party, then local packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportGroup {
    Std,
    ThirdParty,
    Local,
}

/// Buckets an import path.
///
/// A path is local when it matches one of the configured prefixes on a
/// path-segment boundary. Otherwise the goimports heuristic applies: a first
/// segment containing a dot looks like a domain name, so the path is
/// third-party; everything else is standard library.
pub fn classify(path: &str, local_prefixes: &[String]) -> ImportGroup {
    if local_prefixes.iter().any(|p| matches_prefix(path, p)) {
        return ImportGroup::Local;
    }
    let first = path.split('/').next().unwrap_or(path);
    if first.contains('.') { ImportGroup::ThirdParty } else { ImportGroup::Std }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
