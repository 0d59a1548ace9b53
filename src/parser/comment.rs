//! Leading comment lookup and delimiter stripping.
//!
//! Comments are `extra` nodes in tree-sitter: they show up as ordinary
//! siblings of the statement or member they annotate, so association is
//! purely positional.

use tree_sitter::Node;

const COMMENT: &str = "comment";

/// Raw comment blocks immediately preceding `node`, earliest first.
///
/// Walks backward over contiguous comment siblings. A comment starting on
/// the row where the previous non-comment sibling ends trails that sibling
/// and stops the walk.
pub fn leading_comments<'s>(node: Node, source: &'s str) -> Vec<&'s str> {
    comment_run(node.prev_sibling(), source)
}

/// Comment blocks after the last child of `root` (end of file), earliest
/// first. Same-line trailing comments of the last statement are excluded.
pub fn dangling_comments<'s>(root: Node, source: &'s str) -> Vec<&'s str> {
    let last = root
        .child_count()
        .checked_sub(1)
        .and_then(|i| root.child(i));
    comment_run(last, source)
}

fn comment_run<'s>(start: Option<Node>, source: &'s str) -> Vec<&'s str> {
    let mut blocks = Vec::new();

    let mut prev = start;
    while let Some(sibling) = prev {
        if sibling.kind() != COMMENT || is_trailing(sibling) {
            break;
        }
        blocks.push(&source[sibling.byte_range()]);
        prev = sibling.prev_sibling();
    }

    // Collected backwards from prev_sibling
    blocks.reverse();
    blocks
}

/// Whether `comment` starts on the row where the nearest preceding
/// non-comment sibling ends.
fn is_trailing(comment: Node) -> bool {
    let mut prev = comment.prev_sibling();
    while let Some(before) = prev {
        if before.kind() != COMMENT {
            return before.kind() != "{"
                && before.end_position().row == comment.start_position().row;
        }
        prev = before.prev_sibling();
    }
    false
}

/// Strip comment delimiters from one raw block and return its text lines.
///
/// `//`, `/*` and `/**` openers (plus one following space) and the `*/`
/// closer are removed. `/**` blocks also lose the per-line ` * ` marker.
/// Blank first/last lines left by delimiter placement are dropped and the
/// common indentation of the remaining lines is removed.
pub fn normalize(raw: &str) -> Vec<String> {
    let doc_block = raw.starts_with("/**");

    let body = if let Some(rest) = raw.strip_prefix("//") {
        rest
    } else {
        let rest = raw.strip_prefix("/*").unwrap_or(raw);
        let rest = rest.strip_suffix("*/").unwrap_or(rest);
        // `/**` opener; for `/**/` nothing is left to strip
        rest.strip_prefix('*').unwrap_or(rest)
    };
    let body = body.strip_prefix(' ').unwrap_or(body);

    let mut lines: Vec<&str> = body
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if doc_block && i > 0 {
                strip_star(line)
            } else {
                line
            }
        })
        .map(str::trim_end)
        .collect();

    if lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }

    unindent(&lines)
}

fn strip_star(line: &str) -> &str {
    match line.trim_start().strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// Remove the minimum indentation shared by all non-blank lines.
fn unindent(lines: &[&str]) -> Vec<String> {
    let min_indent = lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            if indent_width(l) >= min_indent {
                l[min_indent..].to_string()
            } else {
                l.trim_start().to_string()
            }
        })
        .collect()
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}
