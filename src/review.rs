mod change_record;
mod conflict_group;
mod decision;
mod merge_view;
mod resolve;

pub use change_record::ChangeRecord;
pub use conflict_group::ConflictGroup;
pub use decision::{Decision, DecisionArena};
pub use merge_view::{DELETION_CLASS, INSERTION_CLASS, MergeView};
pub use resolve::{ResolutionPolicy, resolve_blocks, resolve_conflicts};

use crate::{
    chunker::chunk_fragment_with_parser,
    diffs::{diff_error::DiffError, myers::myers_diff},
    markup::{FragmentScanner, MarkupParser, plain_text},
    tokenizer::{Tokenizer, word_tokenizer::word_tokenizer},
};

/// Computes the block-level change set between an original fragment and a
/// suggested replacement.
///
/// Both fragments are chunked into their immediate children and aligned
/// structurally; the result covers every chunk of both inputs exactly once,
/// in document order, ready for one-by-one or bulk review.
///
/// ```
/// use redline::{ChangeRecord, diff_blocks};
///
/// let records = diff_blocks("<p>Hello</p>", "<p>Hello</p><p>World</p>");
///
/// assert!(matches!(records[0], ChangeRecord::Unchanged { .. }));
/// assert!(matches!(records[1], ChangeRecord::Added { .. }));
/// ```
#[must_use]
pub fn diff_blocks(original: &str, modified: &str) -> Vec<ChangeRecord> {
    diff_blocks_with_parser(original, modified, &FragmentScanner)
}

/// Same as [`diff_blocks`], but over a caller-provided markup parser.
#[must_use]
pub fn diff_blocks_with_parser(
    original: &str,
    modified: &str,
    parser: &dyn MarkupParser,
) -> Vec<ChangeRecord> {
    let original_chunks = chunk_fragment_with_parser(original, parser);
    let modified_chunks = chunk_fragment_with_parser(modified, parser);

    change_record::records_between(&original_chunks, &modified_chunks)
}

/// Computes the token-level merge view between two document snapshots.
///
/// Both fragments are reduced to their visible text, word-tokenized, and
/// aligned with a shortest edit script; consecutive edits fold into
/// conflicts that can be rendered inline and resolved one click at a time.
///
/// # Errors
///
/// Returns [`DiffError::EditScriptOverrun`] if the underlying sweep fails to
/// align the inputs within its iteration budget, which a correct sweep
/// never does.
pub fn diff_tokens(original: &str, modified: &str) -> Result<MergeView, DiffError> {
    diff_tokens_with_tokenizer(original, modified, &word_tokenizer)
}

/// Same as [`diff_tokens`], but over a caller-provided tokenizer.
///
/// # Errors
///
/// See [`diff_tokens`].
pub fn diff_tokens_with_tokenizer(
    original: &str,
    modified: &str,
    tokenizer: &Tokenizer,
) -> Result<MergeView, DiffError> {
    let original_tokens = tokenizer(&plain_text(original));
    let modified_tokens = tokenizer(&plain_text(modified));

    let operations = myers_diff(&original_tokens, &modified_tokens)?;
    Ok(MergeView::new(conflict_group::group_conflicts(operations)))
}
