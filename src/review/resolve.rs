#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::wasm_bindgen;

use super::{
    change_record::ChangeRecord,
    conflict_group::{ConflictGroup, concatenate},
    decision::{Decision, DecisionArena},
};

/// How a change set is turned back into a document.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Keep every suggested change, ignoring individual decisions
    AcceptAll,
    /// Drop every suggested change, ignoring individual decisions
    RejectAll,
    /// Honor per-change decisions; see the resolve functions for the
    /// defaults applied to undecided changes
    Selective,
}

/// Reconstructs a document from a block-level change set.
///
/// The output is the left-to-right concatenation of each record's surviving
/// serialized form; nothing is re-sorted or re-parsed. Under
/// [`ResolutionPolicy::Selective`] the undecided defaults are asymmetric on
/// purpose: an undecided removal keeps its content (it is not yet removed),
/// an undecided addition stays out of the document, and an undecided
/// modification keeps its original side.
///
/// Total over any record list and any decision arena; decisions for ids
/// that no record carries are simply never consulted.
#[must_use]
pub fn resolve_blocks(
    records: &[ChangeRecord],
    decisions: &DecisionArena,
    policy: ResolutionPolicy,
) -> String {
    let mut document = String::new();

    for record in records {
        match record {
            ChangeRecord::Unchanged { chunk, .. } => document.push_str(chunk.raw()),
            ChangeRecord::Added { id, chunk } => {
                let keep = match policy {
                    ResolutionPolicy::AcceptAll => true,
                    ResolutionPolicy::RejectAll => false,
                    ResolutionPolicy::Selective => decisions.get(*id) == Decision::Accepted,
                };
                if keep {
                    document.push_str(chunk.raw());
                }
            }
            ChangeRecord::Removed { id, chunk } => {
                let keep = match policy {
                    ResolutionPolicy::AcceptAll => false,
                    ResolutionPolicy::RejectAll => true,
                    ResolutionPolicy::Selective => decisions.get(*id) != Decision::Rejected,
                };
                if keep {
                    document.push_str(chunk.raw());
                }
            }
            ChangeRecord::Modified {
                id,
                original,
                updated,
            } => {
                let keep_updated = match policy {
                    ResolutionPolicy::AcceptAll => true,
                    ResolutionPolicy::RejectAll => false,
                    ResolutionPolicy::Selective => decisions.get(*id) == Decision::Accepted,
                };
                document.push_str(if keep_updated {
                    updated.raw()
                } else {
                    original.raw()
                });
            }
        }
    }

    document
}

/// Reconstructs the plain-text token stream from a grouped token diff.
///
/// Equal regions always survive. A conflict with both sides follows the
/// modification rule (the inserted side replaces the deleted one only when
/// accepted); a deletion-only conflict keeps its tokens unless rejected and
/// an insertion-only conflict contributes its tokens only when accepted,
/// mirroring the block-level defaults.
#[must_use]
pub fn resolve_conflicts(
    groups: &[ConflictGroup],
    decisions: &DecisionArena,
    policy: ResolutionPolicy,
) -> String {
    let mut text = String::new();

    for group in groups {
        match group {
            ConflictGroup::Equal(token) => text.push_str(token.text()),
            ConflictGroup::Conflict {
                id,
                deleted,
                inserted,
            } => {
                let kept =
                    resolve_conflict(*id, deleted.is_empty(), inserted.is_empty(), decisions, policy);
                match kept {
                    Side::Deleted => text.push_str(&concatenate(deleted)),
                    Side::Inserted => text.push_str(&concatenate(inserted)),
                    Side::Neither => {}
                }
            }
        }
    }

    text
}

enum Side {
    Deleted,
    Inserted,
    Neither,
}

fn resolve_conflict(
    id: usize,
    deleted_is_empty: bool,
    inserted_is_empty: bool,
    decisions: &DecisionArena,
    policy: ResolutionPolicy,
) -> Side {
    match policy {
        ResolutionPolicy::AcceptAll => Side::Inserted,
        ResolutionPolicy::RejectAll => Side::Deleted,
        ResolutionPolicy::Selective => {
            if deleted_is_empty {
                // a pure insertion: in only when accepted
                if decisions.get(id) == Decision::Accepted {
                    Side::Inserted
                } else {
                    Side::Neither
                }
            } else if inserted_is_empty {
                // a pure deletion: out only when rejected
                if decisions.get(id) == Decision::Rejected {
                    Side::Neither
                } else {
                    Side::Deleted
                }
            } else if decisions.get(id) == Decision::Accepted {
                Side::Inserted
            } else {
                Side::Deleted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{diff_blocks, diff_tokens};

    #[test]
    fn test_selective_defaults_are_asymmetric() {
        // one removal (undecided -> stays) and one addition (undecided -> out)
        let records = diff_blocks("<p>gone</p><p>keep</p>", "<p>keep</p><p>new</p>");
        let resolved = resolve_blocks(&records, &DecisionArena::new(), ResolutionPolicy::Selective);

        assert_eq!(resolved, "<p>gone</p><p>keep</p>");
    }

    #[test]
    fn test_selective_honors_decisions() {
        let records = diff_blocks("<p>gone</p><p>keep</p>", "<p>keep</p><p>new</p>");

        let mut decisions = DecisionArena::new();
        for record in &records {
            match record {
                ChangeRecord::Removed { id, .. } => decisions.reject(*id),
                ChangeRecord::Added { id, .. } => decisions.accept(*id),
                _ => {}
            }
        }

        assert_eq!(
            resolve_blocks(&records, &decisions, ResolutionPolicy::Selective),
            "<p>keep</p><p>new</p>"
        );
    }

    #[test]
    fn test_selective_modified_defaults_to_original() {
        let records = diff_blocks("<h1>Old</h1>", "<h1>New</h1>");

        let undecided = DecisionArena::new();
        assert_eq!(
            resolve_blocks(&records, &undecided, ResolutionPolicy::Selective),
            "<h1>Old</h1>"
        );

        let mut accepted = DecisionArena::new();
        accepted.accept(records[0].id());
        assert_eq!(
            resolve_blocks(&records, &accepted, ResolutionPolicy::Selective),
            "<h1>New</h1>"
        );
    }

    #[test]
    fn test_decisions_for_absent_ids_are_no_ops() {
        let records = diff_blocks("<p>a</p>", "<p>a</p>");

        let mut decisions = DecisionArena::new();
        decisions.reject(99);
        decisions.accept(100);

        assert_eq!(
            resolve_blocks(&records, &decisions, ResolutionPolicy::Selective),
            "<p>a</p>"
        );
    }

    #[test_case(ResolutionPolicy::AcceptAll, "the slow fox" ; "accept all")]
    #[test_case(ResolutionPolicy::RejectAll, "the quick fox" ; "reject all")]
    fn test_conflict_bulk_policies(policy: ResolutionPolicy, expected: &str) {
        let view = diff_tokens("the quick fox", "the slow fox").expect("diff should succeed");
        assert_eq!(
            resolve_conflicts(view.groups(), &DecisionArena::new(), policy),
            expected
        );
    }

    #[test]
    fn test_two_sided_conflict_follows_the_modification_rule() {
        let view = diff_tokens("the quick fox", "the slow fox").expect("diff should succeed");
        let conflict_id = view
            .groups()
            .iter()
            .find_map(ConflictGroup::id)
            .expect("there is one conflict");

        let undecided = DecisionArena::new();
        assert_eq!(
            resolve_conflicts(view.groups(), &undecided, ResolutionPolicy::Selective),
            "the quick fox"
        );

        let mut accepted = DecisionArena::new();
        accepted.accept(conflict_id);
        assert_eq!(
            resolve_conflicts(view.groups(), &accepted, ResolutionPolicy::Selective),
            "the slow fox"
        );
    }

    #[test]
    fn test_undecided_pure_deletion_stays() {
        let view = diff_tokens("the brown fox", "the fox").expect("diff should succeed");

        assert_eq!(
            resolve_conflicts(view.groups(), &DecisionArena::new(), ResolutionPolicy::Selective),
            "the brown fox"
        );
    }

    #[test]
    fn test_undecided_pure_insertion_stays_out() {
        let view = diff_tokens("the fox", "the quick fox").expect("diff should succeed");

        assert_eq!(
            resolve_conflicts(view.groups(), &DecisionArena::new(), ResolutionPolicy::Selective),
            "the fox"
        );
    }
}
