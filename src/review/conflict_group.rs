#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{diffs::raw_operation::RawOperation, tokenizer::token::Token};

/// One element of a grouped token diff: either a single unchanged token or a
/// conflict bundling every deletion and insertion of one maximal non-equal
/// run of the edit script.
///
/// Concatenating the inserted side of every conflict (and all equal tokens)
/// reproduces the modified document's token stream; the deleted side, the
/// original's.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictGroup {
    Equal(Token),

    Conflict {
        /// Dense within one diff result, what a
        /// [`DecisionArena`](crate::DecisionArena) is indexed by
        id: usize,
        /// Deleted tokens in original order; may be empty for pure insertions
        deleted: Vec<Token>,
        /// Inserted tokens in modified order; may be empty for pure deletions
        inserted: Vec<Token>,
    },
}

impl ConflictGroup {
    /// The conflict identifier; `None` for equal regions, which carry no
    /// decision state.
    #[must_use]
    pub fn id(&self) -> Option<usize> {
        match self {
            ConflictGroup::Equal(_) => None,
            ConflictGroup::Conflict { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn deleted_text(&self) -> String {
        match self {
            ConflictGroup::Equal(_) => String::new(),
            ConflictGroup::Conflict { deleted, .. } => concatenate(deleted),
        }
    }

    #[must_use]
    pub fn inserted_text(&self) -> String {
        match self {
            ConflictGroup::Equal(_) => String::new(),
            ConflictGroup::Conflict { inserted, .. } => concatenate(inserted),
        }
    }
}

pub(crate) fn concatenate(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// Folds an edit script into review units: equal operations pass through one
/// token at a time, while each maximal run of non-equal operations collapses
/// into a single conflict accumulating its deletions and insertions,
/// regardless of how they were interleaved inside the run.
pub(crate) fn group_conflicts(operations: Vec<RawOperation<Token>>) -> Vec<ConflictGroup> {
    let mut groups = Vec::with_capacity(operations.len());
    let mut pending_deleted: Vec<Token> = Vec::new();
    let mut pending_inserted: Vec<Token> = Vec::new();
    let mut next_id = 0;

    let mut flush =
        |groups: &mut Vec<ConflictGroup>, deleted: &mut Vec<Token>, inserted: &mut Vec<Token>| {
            if deleted.is_empty() && inserted.is_empty() {
                return;
            }

            groups.push(ConflictGroup::Conflict {
                id: next_id,
                deleted: std::mem::take(deleted),
                inserted: std::mem::take(inserted),
            });
            next_id += 1;
        };

    for operation in operations {
        match operation {
            RawOperation::Equal(token) => {
                flush(&mut groups, &mut pending_deleted, &mut pending_inserted);
                groups.push(ConflictGroup::Equal(token));
            }
            RawOperation::Delete(token) => pending_deleted.push(token),
            RawOperation::Insert(token) => pending_inserted.push(token),
        }
    }

    flush(&mut groups, &mut pending_deleted, &mut pending_inserted);
    groups
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn token(text: &str) -> Token {
        Token::from(text)
    }

    #[test]
    fn test_equal_operations_pass_through_one_by_one() {
        let groups = group_conflicts(vec![
            RawOperation::Equal(token("a")),
            RawOperation::Equal(token(" ")),
            RawOperation::Equal(token("b")),
        ]);

        assert_eq!(
            groups,
            vec![
                ConflictGroup::Equal(token("a")),
                ConflictGroup::Equal(token(" ")),
                ConflictGroup::Equal(token("b")),
            ]
        );
    }

    #[test]
    fn test_interleaved_run_accumulates_into_one_conflict() {
        let groups = group_conflicts(vec![
            RawOperation::Delete(token("x")),
            RawOperation::Insert(token("1")),
            RawOperation::Delete(token("y")),
            RawOperation::Insert(token("2")),
        ]);

        assert_eq!(
            groups,
            vec![ConflictGroup::Conflict {
                id: 0,
                deleted: vec![token("x"), token("y")],
                inserted: vec![token("1"), token("2")],
            }]
        );
    }

    #[test]
    fn test_runs_are_maximal() {
        let groups = group_conflicts(vec![
            RawOperation::Delete(token("x")),
            RawOperation::Equal(token("keep")),
            RawOperation::Insert(token("y")),
        ]);

        assert_eq!(
            groups,
            vec![
                ConflictGroup::Conflict {
                    id: 0,
                    deleted: vec![token("x")],
                    inserted: vec![],
                },
                ConflictGroup::Equal(token("keep")),
                ConflictGroup::Conflict {
                    id: 1,
                    deleted: vec![],
                    inserted: vec![token("y")],
                },
            ]
        );
    }

    #[test]
    fn test_trailing_run_is_flushed() {
        let groups = group_conflicts(vec![
            RawOperation::Equal(token("keep")),
            RawOperation::Delete(token("x")),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].id(), Some(0));
        assert_eq!(groups[1].deleted_text(), "x");
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(group_conflicts(vec![]), vec![]);
    }
}
