#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    conflict_group::ConflictGroup,
    decision::DecisionArena,
    resolve::{ResolutionPolicy, resolve_conflicts},
};
use crate::markup::escape;

/// Class of the span wrapping a conflict's deleted tokens.
pub const DELETION_CLASS: &str = "redline-del";
/// Class of the span wrapping a conflict's inserted tokens.
pub const INSERTION_CLASS: &str = "redline-ins";

/// The grouped token diff of two document snapshots, ready to be rendered
/// as an inline merge view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeView {
    groups: Vec<ConflictGroup>,
}

impl MergeView {
    pub(crate) fn new(groups: Vec<ConflictGroup>) -> Self {
        MergeView { groups }
    }

    #[must_use]
    pub fn groups(&self) -> &[ConflictGroup] {
        &self.groups
    }

    /// Renders the merge view as annotated markup for the editing surface.
    ///
    /// Equal regions become plain escaped text. Each conflict renders its
    /// non-empty sides as inline spans carrying the conflict id and an
    /// action role (`reject` on the deleted side, `accept` on the inserted
    /// side) for the surrounding UI to attach click handlers to.
    ///
    /// ```
    /// use redline::diff_tokens;
    ///
    /// let view = diff_tokens("<p>good morning</p>", "<p>good evening</p>")?;
    /// assert_eq!(
    ///     view.annotated_markup(),
    ///     "good <span class=\"redline-del\" data-conflict-id=\"0\" \
    ///      data-action=\"reject\">morning</span><span class=\"redline-ins\" \
    ///      data-conflict-id=\"0\" data-action=\"accept\">evening</span>"
    /// );
    /// # Ok::<(), redline::DiffError>(())
    /// ```
    #[must_use]
    pub fn annotated_markup(&self) -> String {
        let mut markup = String::new();

        for group in &self.groups {
            match group {
                ConflictGroup::Equal(token) => markup.push_str(&escape(token.text())),
                ConflictGroup::Conflict {
                    id,
                    deleted,
                    inserted,
                } => {
                    if !deleted.is_empty() {
                        markup.push_str(&conflict_span(
                            DELETION_CLASS,
                            *id,
                            "reject",
                            &group.deleted_text(),
                        ));
                    }
                    if !inserted.is_empty() {
                        markup.push_str(&conflict_span(
                            INSERTION_CLASS,
                            *id,
                            "accept",
                            &group.inserted_text(),
                        ));
                    }
                }
            }
        }

        markup
    }

    /// Applies the decisions under the given policy; see
    /// [`resolve_conflicts`].
    #[must_use]
    pub fn resolve(&self, decisions: &DecisionArena, policy: ResolutionPolicy) -> String {
        resolve_conflicts(&self.groups, decisions, policy)
    }
}

fn conflict_span(class: &str, id: usize, action: &str, text: &str) -> String {
    format!(
        "<span class=\"{class}\" data-conflict-id=\"{id}\" data-action=\"{action}\">{}</span>",
        escape(text)
    )
}
