use std::fmt::Debug;

/// A single-element edit step produced by the token differencer.
///
/// A full edit script is an ordered sequence of these; consecutive non-equal
/// steps are later folded into conflict groups for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    Insert(T),
    Delete(T),
    Equal(T),
}

impl<T> RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    pub fn token(&self) -> &T {
        match self {
            RawOperation::Insert(token)
            | RawOperation::Delete(token)
            | RawOperation::Equal(token) => token,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, RawOperation::Equal(_))
    }
}
