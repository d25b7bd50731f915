use crate::classify::classify;
use crate::options::FormatOptions;
use crate::parser::{ImportBlock, ImportSpec};

/// Renders a parsed import declaration back to source text.
///
/// Specs are stable-sorted by (group, path, alias) within each chunk; a
/// single blank line separates adjacent groups inside a chunk and adjacent
/// chunks. The rendered text covers the opener line through the closer line,
/// each line newline-terminated.
pub fn render_block(block: &ImportBlock, opts: &FormatOptions) -> String {
    let indent = if opts.tab_indent { "\t".to_string() } else { " ".repeat(opts.tab_width) };

    let mut out = String::from("import (\n");
    let mut first_line = true;

    for chunk in &block.chunks {
        let mut sorted: Vec<&ImportSpec> = chunk.iter().collect();
        sorted.sort_by(|a, b| {
            let ka = (classify(&a.path, &opts.local_prefixes), &a.path, &a.alias);
            let kb = (classify(&b.path, &opts.local_prefixes), &b.path, &b.alias);
            ka.cmp(&kb)
        });

        // last_group starts empty per chunk so a chunk boundary always gets
        // a separating blank line, even between specs of the same group.
        let mut last_group = None;
        for spec in sorted {
            let group = classify(&spec.path, &opts.local_prefixes);
            if !first_line && last_group != Some(group) {
                out.push('\n');
            }
            first_line = false;
            last_group = Some(group);
            push_spec(&mut out, spec, &indent, opts);
        }
    }

    if opts.comments && !block.trailing_comments.is_empty() {
        for comment in &block.trailing_comments {
            out.push_str(&indent);
            out.push_str(comment);
            out.push('\n');
        }
    }

    out.push(')');
    if let Some(rest) = &block.closer_comment {
        // Non-comment text after `)` is kept even when comments are
        // dropped; destroying it would corrupt the file.
        if opts.comments || !(rest.starts_with("//") || rest.starts_with("/*")) {
            out.push(' ');
            out.push_str(rest);
        }
    }
    out.push('\n');
    out
}

fn push_spec(out: &mut String, spec: &ImportSpec, indent: &str, opts: &FormatOptions) {
    if opts.comments {
        for comment in &spec.comments {
            out.push_str(indent);
            out.push_str(comment);
            out.push('\n');
        }
    }
    out.push_str(indent);
    if let Some(alias) = &spec.alias {
        out.push_str(alias);
        out.push(' ');
    }
    out.push('"');
    out.push_str(&spec.path);
    out.push('"');
    if opts.comments
        && let Some(trailing) = &spec.trailing
    {
        out.push(' ');
        out.push_str(trailing);
    }
    out.push('\n');
}
