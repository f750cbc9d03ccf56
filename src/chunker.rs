pub mod chunk;

use chunk::Chunk;

use crate::markup::{FragmentScanner, MarkupParser};

/// Splits a markup fragment into the ordered chunks the block differencer
/// aligns: one chunk per immediate child of the fragment root, with
/// whitespace-only text dropped.
///
/// Unparsable markup degrades to a single opaque text chunk, so this never
/// fails.
///
/// ```
/// use redline::chunk_fragment;
///
/// let chunks = chunk_fragment("<h1>Title</h1>\n<p>Body</p>");
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].raw(), "<h1>Title</h1>");
/// assert_eq!(chunks[1].tag(), Some("p"));
/// ```
#[must_use]
pub fn chunk_fragment(fragment: &str) -> Vec<Chunk> {
    chunk_fragment_with_parser(fragment, &FragmentScanner)
}

/// Same as [`chunk_fragment`], but over a caller-provided parser.
#[must_use]
pub fn chunk_fragment_with_parser(fragment: &str, parser: &dyn MarkupParser) -> Vec<Chunk> {
    match parser.top_level_nodes(fragment) {
        Ok(nodes) => nodes.into_iter().filter_map(Chunk::from_node).collect(),
        Err(_) => Chunk::opaque(fragment).into_iter().collect(),
    }
}
