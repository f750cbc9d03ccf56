use thiserror::Error;

pub mod fragment_scanner;
pub mod node;

pub use fragment_scanner::FragmentScanner;
pub use node::MarkupNode;

/// Error type for fragments that cannot be split into well-formed nodes.
///
/// Parsers report this to the chunker, which recovers by treating the whole
/// fragment as a single opaque text chunk. It is never surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed markup at byte {position}: {reason}")]
pub struct MalformedMarkup {
    /// Byte offset into the fragment where scanning gave up
    pub position: usize,
    /// Human-readable description of what was expected
    pub reason: &'static str,
}

/// Adapter over a concrete markup parser.
///
/// The differencers only ever see [`MarkupNode`]s (and the chunk/token types
/// derived from them), so any parser producing the immediate children of a
/// fragment root can be plugged in.
pub trait MarkupParser {
    /// Splits `fragment` into its immediate child nodes, without recursing
    /// into element content.
    fn top_level_nodes(&self, fragment: &str) -> Result<Vec<MarkupNode>, MalformedMarkup>;
}

/// Escapes `text` for embedding into markup as character data or an
/// attribute value.
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Extracts the visible text of `markup`: tags and comments are stripped and
/// the standard entities are decoded.
///
/// Lenient by construction, so it is total: a `<` that does not open a tag or
/// comment is kept as literal text, as is an `&` that does not start a known
/// entity.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    let bytes = markup.as_bytes();
    let mut text = String::with_capacity(markup.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' {
            if bytes[i..].starts_with(b"<!--") {
                // an unterminated comment swallows the rest of the input
                i = find_from(bytes, i + 4, b"-->").map_or(bytes.len(), |at| at + 3);
                continue;
            }

            if looks_like_tag(bytes, i) {
                i = skip_tag(bytes, i).unwrap_or(bytes.len());
                continue;
            }
        }

        if bytes[i] == b'&' {
            if let Some((decoded, after)) = decode_entity(markup, i) {
                text.push_str(decoded);
                i = after;
                continue;
            }
        }

        let Some(character) = markup[i..].chars().next() else {
            break;
        };
        text.push(character);
        i += character.len_utf8();
    }

    text
}

/// Whether the `<` at `at` is followed by something tag-shaped: an element
/// name, a closing tag, a doctype or a processing instruction.
pub(crate) fn looks_like_tag(bytes: &[u8], at: usize) -> bool {
    bytes
        .get(at + 1)
        .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, b'/' | b'!' | b'?'))
}

/// Returns the index one past the `>` closing the tag starting at `at`,
/// honoring quoted attribute values. `None` if the tag never closes.
pub(crate) fn skip_tag(bytes: &[u8], at: usize) -> Option<usize> {
    let mut i = at + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'>' => return Some(i + 1),
            quote @ (b'"' | b'\'') => {
                i = find_byte_from(bytes, i + 1, quote)? + 1;
            }
            _ => i += 1,
        }
    }

    None
}

pub(crate) fn find_byte_from(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&byte| byte == needle)
        .map(|offset| from + offset)
}

pub(crate) fn find_from(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    let start = from.min(bytes.len());
    bytes[start..]
        .windows(needle.len().max(1))
        .position(|window| window == needle)
        .map(|offset| start + offset)
}

fn decode_entity(markup: &str, at: usize) -> Option<(&'static str, usize)> {
    const ENTITIES: &[(&str, &str)] = &[
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
    ];

    ENTITIES
        .iter()
        .find(|(entity, _)| markup[at..].starts_with(entity))
        .map(|(entity, decoded)| (*decoded, at + entity.len()))
}
