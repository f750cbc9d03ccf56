#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The review state of a single change, held outside the records themselves.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    #[default]
    Undecided,
    Accepted,
    Rejected,
}

/// Decision storage for one merge session, indexed by the dense record or
/// conflict ids of a single diff result.
///
/// The arena starts empty when a session begins and is discarded when the
/// session ends. Ids that no record carries can be accepted or rejected
/// freely: resolution simply never consults them, so such calls are no-ops
/// rather than errors. Accepting a change overrides a prior rejection and
/// vice versa.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecisionArena {
    slots: Vec<Decision>,
}

impl DecisionArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, id: usize) {
        self.set(id, Decision::Accepted);
    }

    pub fn reject(&mut self, id: usize) {
        self.set(id, Decision::Rejected);
    }

    /// Returns the change to the undecided state.
    pub fn reset(&mut self, id: usize) {
        if id < self.slots.len() {
            self.slots[id] = Decision::Undecided;
        }
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Decision {
        self.slots.get(id).copied().unwrap_or_default()
    }

    fn set(&mut self, id: usize, decision: Decision) {
        if id >= self.slots.len() {
            self.slots.resize(id + 1, Decision::Undecided);
        }

        self.slots[id] = decision;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unknown_ids_are_undecided() {
        let arena = DecisionArena::new();
        assert_eq!(arena.get(41), Decision::Undecided);
    }

    #[test]
    fn test_decisions_are_sparse() {
        let mut arena = DecisionArena::new();
        arena.accept(5);

        assert_eq!(arena.get(5), Decision::Accepted);
        assert_eq!(arena.get(4), Decision::Undecided);
        assert_eq!(arena.get(6), Decision::Undecided);
    }

    #[test]
    fn test_later_decisions_win() {
        let mut arena = DecisionArena::new();
        arena.accept(0);
        arena.reject(0);
        assert_eq!(arena.get(0), Decision::Rejected);

        arena.accept(0);
        assert_eq!(arena.get(0), Decision::Accepted);

        arena.reset(0);
        assert_eq!(arena.get(0), Decision::Undecided);
    }

    #[test]
    fn test_reset_of_unknown_id_is_a_no_op() {
        let mut arena = DecisionArena::new();
        arena.reset(12);
        assert_eq!(arena, DecisionArena::new());
    }
}
