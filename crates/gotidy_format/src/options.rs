/// Options controlling how an import declaration is rendered.
///
/// Mirrors the knobs of classic Go import formatters. The local prefixes are
/// carried here, per call, rather than as process-wide state: two callers
/// with different prefixes never interfere.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Indent width used when `tab_indent` is false.
    pub tab_width: usize,
    /// Indent with a tab instead of spaces.
    pub tab_indent: bool,
    /// Keep comment lines and trailing comments inside the block.
    pub comments: bool,
    /// Only regroup and reorder; never add or remove imports. The engine
    /// has no add/remove capability and refuses to run with this unset.
    pub format_only: bool,
    /// Import paths matching any of these prefixes (on a path-segment
    /// boundary) sort after third-party packages.
    pub local_prefixes: Vec<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_width: 8,
            tab_indent: true,
            comments: true,
            format_only: true,
            local_prefixes: Vec::new(),
        }
    }
}
