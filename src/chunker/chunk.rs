#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::markup::{MarkupNode, plain_text};

/// Discriminates the two shapes a fragment child can take.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Text,
    Element,
}

/// One structural unit of a markup fragment: either a text run or a whole
/// element, inner markup included.
///
/// Chunks are immutable value objects created once per diff invocation.
/// Equality is defined over `comparison_key` alone: trimmed text for text
/// chunks, tag name plus serialized inner markup for element chunks.
/// Attributes are deliberately left out of the key, so two elements that
/// differ only in attributes compare equal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Eq)]
pub struct Chunk {
    kind: ChunkKind,
    tag: Option<String>,
    raw: String,
    comparison_key: String,
    inner_text: String,
}

impl Chunk {
    /// Creates a text chunk, or `None` when the trimmed content is empty.
    #[must_use]
    pub fn text(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Chunk {
            kind: ChunkKind::Text,
            tag: None,
            raw: trimmed.to_owned(),
            comparison_key: trimmed.to_owned(),
            inner_text: plain_text(trimmed),
        })
    }

    /// Creates an element chunk from its lowercased tag name, full
    /// serialized form and serialized inner markup.
    #[must_use]
    pub fn element(tag: String, raw: &str, inner: &str) -> Self {
        let comparison_key = format!("<{tag}>{inner}");
        let inner_text = plain_text(inner).trim().to_owned();

        Chunk {
            kind: ChunkKind::Element,
            tag: Some(tag),
            raw: raw.to_owned(),
            comparison_key,
            inner_text,
        }
    }

    /// The fallback for unparsable fragments: the whole input as one opaque
    /// text chunk, or `None` when it is blank.
    #[must_use]
    pub fn opaque(fragment: &str) -> Option<Self> {
        Self::text(fragment)
    }

    pub(crate) fn from_node(node: MarkupNode) -> Option<Self> {
        match node {
            MarkupNode::Text { raw } => Self::text(&raw),
            MarkupNode::Element { tag, raw, inner } => Some(Self::element(tag, &raw, &inner)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// The lowercased tag name, present iff the chunk is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The serialized form emitted verbatim when the chunk survives
    /// resolution.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The string chunk equality is defined over.
    #[must_use]
    pub fn comparison_key(&self) -> &str {
        &self.comparison_key
    }

    /// The chunk's visible text, for display in a review UI.
    #[must_use]
    pub fn inner_text(&self) -> &str {
        &self.inner_text
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        self.kind == ChunkKind::Element
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key == other.comparison_key
    }
}
