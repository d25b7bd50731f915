/// Drops blank lines strictly inside the grouped import declaration.
///
/// The formatter sorts within blank-line-separated chunks and never merges
/// them, so stray blanks left over from a previous grouping freeze the block
/// in its current shape. Stripping them between the two formatting passes
/// collapses the declaration into a single chunk, and the second pass then
/// regroups it deterministically.
///
/// Lines before the `import (` opener and after the `)` closer pass through
/// verbatim, blanks included. A final line without a trailing newline is
/// preserved as-is.
pub fn strip_import_blanks(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut started = false;
    let mut ended = false;

    for line in src.split_inclusive('\n') {
        if started {
            if !ended {
                if line.trim().is_empty() {
                    continue;
                }
                if line.starts_with(')') {
                    ended = true;
                }
            }
        } else if line.starts_with("import (") {
            started = true;
        }
        out.push_str(line);
    }

    out
}
