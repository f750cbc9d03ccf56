#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{chunker::chunk::Chunk, diffs::lcs::lcs_matches};

/// One block-level change in a reviewable change set.
///
/// Records are produced in document order and cover every chunk of both
/// inputs exactly once. The `id` is dense and unique within one diff result;
/// it is what a [`DecisionArena`](crate::DecisionArena) is indexed by.
/// Records themselves are never mutated by resolution, only their externally
/// held decision state is.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeRecord {
    Unchanged {
        id: usize,
        chunk: Chunk,
    },

    Added {
        id: usize,
        chunk: Chunk,
    },

    Removed {
        id: usize,
        chunk: Chunk,
    },

    /// A removal and an addition of same-tagged elements, folded into one
    /// reviewable replacement
    Modified {
        id: usize,
        original: Chunk,
        updated: Chunk,
    },
}

impl ChangeRecord {
    #[must_use]
    pub fn id(&self) -> usize {
        match self {
            ChangeRecord::Unchanged { id, .. }
            | ChangeRecord::Added { id, .. }
            | ChangeRecord::Removed { id, .. }
            | ChangeRecord::Modified { id, .. } => *id,
        }
    }

    /// The record's visible text, denormalized for list-style review UIs.
    /// Modified records display their updated side.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            ChangeRecord::Unchanged { chunk, .. }
            | ChangeRecord::Added { chunk, .. }
            | ChangeRecord::Removed { chunk, .. } => chunk.inner_text(),
            ChangeRecord::Modified { updated, .. } => updated.inner_text(),
        }
    }

    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, ChangeRecord::Unchanged { .. })
    }
}

/// Aligns two chunk sequences into an ordered change set.
///
/// The LCS matches drive a lockstep walk over both sequences: chunks on a
/// match are emitted as Unchanged, and within each gap the original's
/// leftovers surface as Removed before the modified side's as Added. A
/// grouping pass then folds each Removed that is immediately followed by an
/// Added of the same element tag into one Modified record. The grouping
/// looks exactly one record ahead, nothing further.
pub(crate) fn records_between(original: &[Chunk], modified: &[Chunk]) -> Vec<ChangeRecord> {
    let matches = lcs_matches(original, modified);

    let mut drafts = Vec::with_capacity(original.len() + modified.len());
    let mut original_cursor = 0;
    let mut modified_cursor = 0;

    for &(original_match, modified_match) in &matches {
        while original_cursor < original_match {
            drafts.push(Draft::Removed(original[original_cursor].clone()));
            original_cursor += 1;
        }
        while modified_cursor < modified_match {
            drafts.push(Draft::Added(modified[modified_cursor].clone()));
            modified_cursor += 1;
        }

        drafts.push(Draft::Unchanged(original[original_cursor].clone()));
        original_cursor += 1;
        modified_cursor += 1;
    }

    while original_cursor < original.len() {
        drafts.push(Draft::Removed(original[original_cursor].clone()));
        original_cursor += 1;
    }
    while modified_cursor < modified.len() {
        drafts.push(Draft::Added(modified[modified_cursor].clone()));
        modified_cursor += 1;
    }

    group_modified(drafts)
}

/// An id-less change, the unit the grouping pass works on.
enum Draft {
    Unchanged(Chunk),
    Added(Chunk),
    Removed(Chunk),
}

fn group_modified(drafts: Vec<Draft>) -> Vec<ChangeRecord> {
    let mut records = Vec::with_capacity(drafts.len());
    let mut drafts = drafts.into_iter().peekable();

    while let Some(draft) = drafts.next() {
        let id = records.len();

        records.push(match draft {
            Draft::Removed(original) if pairs_with_next(&original, drafts.peek()) => {
                let Some(Draft::Added(updated)) = drafts.next() else {
                    unreachable!("The peeked draft is an addition");
                };

                ChangeRecord::Modified {
                    id,
                    original,
                    updated,
                }
            }
            Draft::Unchanged(chunk) => ChangeRecord::Unchanged { id, chunk },
            Draft::Added(chunk) => ChangeRecord::Added { id, chunk },
            Draft::Removed(chunk) => ChangeRecord::Removed { id, chunk },
        });
    }

    records
}

fn pairs_with_next(removed: &Chunk, next: Option<&Draft>) -> bool {
    let Some(Draft::Added(added)) = next else {
        return false;
    };

    removed.is_element() && added.is_element() && removed.tag() == added.tag()
}
