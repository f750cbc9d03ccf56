use wasm_bindgen::prelude::*;

use crate::ChangeRecord;

/// Flattened wrapper type to expose [`ChangeRecord`] to JS.
///
/// The discriminant travels as a string so the frontend can switch on it
/// without importing generated enum glue.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsChangeRecord {
    id: usize,
    kind: String,
    display: String,
    original_markup: Option<String>,
    updated_markup: Option<String>,
}

#[wasm_bindgen]
impl JsChangeRecord {
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// One of `"unchanged"`, `"added"`, `"removed"` or `"modified"`.
    #[must_use]
    pub fn kind(&self) -> String {
        self.kind.clone()
    }

    /// The denormalized display text for change listings.
    #[must_use]
    pub fn display(&self) -> String {
        self.display.clone()
    }

    /// The record's serialized form on the original side, absent for
    /// additions.
    #[wasm_bindgen(js_name = originalMarkup)]
    #[must_use]
    pub fn original_markup(&self) -> Option<String> {
        self.original_markup.clone()
    }

    /// The record's serialized form on the suggested side, absent for
    /// removals.
    #[wasm_bindgen(js_name = updatedMarkup)]
    #[must_use]
    pub fn updated_markup(&self) -> Option<String> {
        self.updated_markup.clone()
    }
}

impl From<&ChangeRecord> for JsChangeRecord {
    fn from(record: &ChangeRecord) -> Self {
        let (kind, original_markup, updated_markup) = match record {
            ChangeRecord::Unchanged { chunk, .. } => (
                "unchanged",
                Some(chunk.raw().to_owned()),
                Some(chunk.raw().to_owned()),
            ),
            ChangeRecord::Added { chunk, .. } => ("added", None, Some(chunk.raw().to_owned())),
            ChangeRecord::Removed { chunk, .. } => ("removed", Some(chunk.raw().to_owned()), None),
            ChangeRecord::Modified {
                original, updated, ..
            } => (
                "modified",
                Some(original.raw().to_owned()),
                Some(updated.raw().to_owned()),
            ),
        };

        JsChangeRecord {
            id: record.id(),
            kind: kind.to_owned(),
            display: record.display_text().to_owned(),
            original_markup,
            updated_markup,
        }
    }
}
