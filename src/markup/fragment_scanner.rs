use std::ops::Range;

use super::{MalformedMarkup, MarkupNode, MarkupParser, find_byte_from, find_from, skip_tag};

/// Tags that never carry a closing counterpart.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// The built-in [`MarkupParser`]: a single-pass scanner that splits a
/// fragment into its immediate children without building a tree.
///
/// It understands elements (balanced tag pairs of the same name, self-closing
/// tags and the HTML void tags), text runs and comments. Anything it cannot
/// account for, such as an unclosed element or a stray closing tag, is
/// reported as [`MalformedMarkup`] so the chunker can fall back to opaque
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentScanner;

impl MarkupParser for FragmentScanner {
    fn top_level_nodes(&self, fragment: &str) -> Result<Vec<MarkupNode>, MalformedMarkup> {
        let bytes = fragment.as_bytes();
        let mut nodes = Vec::new();
        let mut text_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'<' {
                i += 1;
                continue;
            }

            if bytes[i..].starts_with(b"<!--") {
                flush_text(fragment, text_start..i, &mut nodes);
                i = end_of_comment(bytes, i)?;
                text_start = i;
            } else if bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic) {
                flush_text(fragment, text_start..i, &mut nodes);
                i = scan_element(fragment, i, &mut nodes)?;
                text_start = i;
            } else if bytes.get(i + 1) == Some(&b'/') {
                return Err(MalformedMarkup {
                    position: i,
                    reason: "closing tag without a matching opening tag",
                });
            } else {
                // a bare `<` is literal text
                i += 1;
            }
        }

        flush_text(fragment, text_start..bytes.len(), &mut nodes);
        Ok(nodes)
    }
}

fn flush_text(fragment: &str, range: Range<usize>, nodes: &mut Vec<MarkupNode>) {
    if !range.is_empty() {
        nodes.push(MarkupNode::text(&fragment[range]));
    }
}

fn end_of_comment(bytes: &[u8], at: usize) -> Result<usize, MalformedMarkup> {
    find_from(bytes, at + 4, b"-->")
        .map(|close| close + 3)
        .ok_or(MalformedMarkup {
            position: at,
            reason: "comment is never closed",
        })
}

/// Consumes one whole element starting at the `<` at `at`, pushes it onto
/// `nodes` and returns the index one past its end.
fn scan_element(
    fragment: &str,
    at: usize,
    nodes: &mut Vec<MarkupNode>,
) -> Result<usize, MalformedMarkup> {
    let bytes = fragment.as_bytes();
    let opening = scan_opening_tag(fragment, at)?;

    if opening.self_closing || VOID_TAGS.contains(&opening.tag.as_str()) {
        nodes.push(MarkupNode::element(
            opening.tag,
            &fragment[at..opening.end],
            "",
        ));
        return Ok(opening.end);
    }

    // Only same-named tags affect the depth: the element's content is opaque
    // to the fragment scanner beyond finding where it ends.
    let mut depth = 1_usize;
    let mut i = opening.end;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        if bytes[i..].starts_with(b"<!--") {
            i = end_of_comment(bytes, i)?;
        } else if bytes.get(i + 1) == Some(&b'/') {
            let close_end = skip_tag(bytes, i).ok_or(MalformedMarkup {
                position: i,
                reason: "closing tag is never terminated",
            })?;
            if closing_tag_name_matches(fragment, i, &opening.tag) {
                depth -= 1;
                if depth == 0 {
                    nodes.push(MarkupNode::element(
                        opening.tag,
                        &fragment[at..close_end],
                        &fragment[opening.end..i],
                    ));
                    return Ok(close_end);
                }
            }
            i = close_end;
        } else if bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic) {
            let nested = scan_opening_tag(fragment, i)?;
            if nested.tag == opening.tag
                && !nested.self_closing
                && !VOID_TAGS.contains(&nested.tag.as_str())
            {
                depth += 1;
            }
            i = nested.end;
        } else {
            i += 1;
        }
    }

    Err(MalformedMarkup {
        position: at,
        reason: "element is never closed",
    })
}

struct OpeningTag {
    /// Lowercased tag name
    tag: String,
    /// Index one past the closing `>`
    end: usize,
    self_closing: bool,
}

/// Parses the opening (or self-closing) tag starting at the `<` at `at`.
/// Attribute values may contain `<` and `>` when quoted.
fn scan_opening_tag(fragment: &str, at: usize) -> Result<OpeningTag, MalformedMarkup> {
    let bytes = fragment.as_bytes();
    let mut i = at + 1;

    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    let tag = fragment[at + 1..i].to_ascii_lowercase();

    let mut last_meaningful = b'<';
    while i < bytes.len() {
        match bytes[i] {
            b'>' => {
                return Ok(OpeningTag {
                    tag,
                    end: i + 1,
                    self_closing: last_meaningful == b'/',
                });
            }
            quote @ (b'"' | b'\'') => {
                i = find_byte_from(bytes, i + 1, quote).ok_or(MalformedMarkup {
                    position: i,
                    reason: "attribute value is never closed",
                })? + 1;
                last_meaningful = quote;
            }
            byte => {
                if !byte.is_ascii_whitespace() {
                    last_meaningful = byte;
                }
                i += 1;
            }
        }
    }

    Err(MalformedMarkup {
        position: at,
        reason: "tag is never terminated",
    })
}

/// Whether the closing tag at `at` (pointing at `</`) names `tag`,
/// case-insensitively.
fn closing_tag_name_matches(fragment: &str, at: usize, tag: &str) -> bool {
    let bytes = fragment.as_bytes();
    let name_start = at + 2;
    let mut i = name_start;

    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }

    fragment[name_start..i].eq_ignore_ascii_case(tag)
        && bytes[i..]
            .iter()
            .find(|byte| !byte.is_ascii_whitespace())
            .copied()
            == Some(b'>')
}
