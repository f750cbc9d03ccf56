//! Expose the `redline` crate's functionality to WebAssembly.
//!
//! The review surface of the editor runs in the browser; these bindings hand
//! it the change sets and merge views computed here, plus per-session
//! decision state it can drive from click handlers.

use wasm_bindgen::prelude::*;

use crate::{
    ChangeRecord, DecisionArena, MergeView, ResolutionPolicy, diff_blocks, diff_tokens,
    resolve_blocks, wasm::types::JsChangeRecord,
};

pub mod types;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around [`diff_blocks`] for one-shot change listings.
#[wasm_bindgen(js_name = diffBlocks)]
#[must_use]
pub fn diff_blocks_js(original: &str, modified: &str) -> Vec<JsChangeRecord> {
    set_panic_hook();

    diff_blocks(original, modified)
        .iter()
        .map(JsChangeRecord::from)
        .collect()
}

/// WASM wrapper around [`diff_tokens`], returning the annotated markup of
/// the merge view for direct rendering.
///
/// # Errors
///
/// Propagates [`DiffError`](crate::DiffError) as a JS exception.
#[wasm_bindgen(js_name = diffTokens)]
pub fn diff_tokens_js(original: &str, modified: &str) -> Result<String, JsError> {
    set_panic_hook();

    Ok(diff_tokens(original, modified)?.annotated_markup())
}

/// A block-level review session: the change set of one suggestion plus the
/// decisions taken on it so far.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct BlockReview {
    records: Vec<ChangeRecord>,
    decisions: DecisionArena,
}

#[wasm_bindgen]
impl BlockReview {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(original: &str, modified: &str) -> Self {
        set_panic_hook();

        BlockReview {
            records: diff_blocks(original, modified),
            decisions: DecisionArena::new(),
        }
    }

    #[must_use]
    pub fn records(&self) -> Vec<JsChangeRecord> {
        self.records.iter().map(JsChangeRecord::from).collect()
    }

    pub fn accept(&mut self, id: usize) {
        self.decisions.accept(id);
    }

    pub fn reject(&mut self, id: usize) {
        self.decisions.reject(id);
    }

    pub fn reset(&mut self, id: usize) {
        self.decisions.reset(id);
    }

    /// Reconstructs the document under the given policy; the session's
    /// decisions are only consulted for `Selective`.
    #[must_use]
    pub fn apply(&self, policy: ResolutionPolicy) -> String {
        resolve_blocks(&self.records, &self.decisions, policy)
    }
}

/// A token-level review session over the inline merge view.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReview {
    view: MergeView,
    decisions: DecisionArena,
}

#[wasm_bindgen]
impl MergeReview {
    /// # Errors
    ///
    /// Propagates [`DiffError`](crate::DiffError) as a JS exception.
    #[wasm_bindgen(constructor)]
    pub fn new(original: &str, modified: &str) -> Result<MergeReview, JsError> {
        set_panic_hook();

        Ok(MergeReview {
            view: diff_tokens(original, modified)?,
            decisions: DecisionArena::new(),
        })
    }

    #[wasm_bindgen(js_name = annotatedMarkup)]
    #[must_use]
    pub fn annotated_markup(&self) -> String {
        self.view.annotated_markup()
    }

    pub fn accept(&mut self, id: usize) {
        self.decisions.accept(id);
    }

    pub fn reject(&mut self, id: usize) {
        self.decisions.reject(id);
    }

    pub fn reset(&mut self, id: usize) {
        self.decisions.reset(id);
    }

    #[must_use]
    pub fn apply(&self, policy: ResolutionPolicy) -> String {
        self.view.resolve(&self.decisions, policy)
    }
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
