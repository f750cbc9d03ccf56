/// One immediate child of a fragment root, as reported by a
/// [`MarkupParser`](super::MarkupParser).
///
/// Element nodes are opaque below their own tag pair: `inner` is the
/// serialized markup between the opening and closing tags, not a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text {
        /// The verbatim slice of the fragment, whitespace included
        raw: String,
    },

    Element {
        /// Lowercased tag name
        tag: String,
        /// The whole serialized element, opening and closing tags included
        raw: String,
        /// The serialized markup between the tags; empty for self-closing
        /// and void elements
        inner: String,
    },
}

impl MarkupNode {
    #[must_use]
    pub fn text(raw: &str) -> Self {
        MarkupNode::Text {
            raw: raw.to_owned(),
        }
    }

    #[must_use]
    pub fn element(tag: String, raw: &str, inner: &str) -> Self {
        MarkupNode::Element {
            tag,
            raw: raw.to_owned(),
            inner: inner.to_owned(),
        }
    }

    /// The node's full serialized form.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            MarkupNode::Text { raw } | MarkupNode::Element { raw, .. } => raw,
        }
    }
}
