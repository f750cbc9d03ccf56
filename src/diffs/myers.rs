//! Myers' shortest-edit-script algorithm.
//!
//! * time: `O((N+M)D)`
//! * space: `O((N+M)²)` worst case, for the recorded trace
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! This is the forward, trace-recording form: each sweep extends the
//! furthest-reaching path on every relevant `k`-diagonal, snapshots the
//! endpoints, and stops at the first `d` where the path reaches `(N, M)`.
//! The recorded snapshots are then walked backwards to reconstruct one exact
//! shortest edit script. Ties between predecessors are always resolved
//! towards the deleting path, which pins down a single script out of the
//! possibly many shortest ones.

use std::{
    fmt::Debug,
    ops::{Index, IndexMut},
};

use super::{diff_error::DiffError, raw_operation::RawOperation};

/// Diffs `old` against `new`, returning a minimal edit script: no other
/// sequence of single-element operations with fewer inserts plus deletes
/// turns `old` into `new`.
///
/// The sweep is hard-bounded by `N + M` iterations, the worst possible edit
/// distance. A correct sweep always connects within the bound; if it does
/// not, the function fails fast with [`DiffError::EditScriptOverrun`] rather
/// than spinning.
pub fn myers_diff<T>(old: &[T], new: &[T]) -> Result<Vec<RawOperation<T>>, DiffError>
where
    T: PartialEq + Clone + Debug,
{
    let n = old.len();
    let m = new.len();
    let max_d = n + m;

    let mut v = V::new(max_d);
    let mut trace: Vec<V> = Vec::new();

    let bound = isize::try_from(max_d).unwrap_or(isize::MAX);
    for d in 0..=bound {
        // the endpoints of the (d-1)-paths, needed again during backtrack
        trace.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d || (k != d && v[k - 1] < v[k + 1]) {
                v[k + 1]
            } else {
                v[k - 1] + 1
            };
            let mut y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            // follow the snake: identical elements are free moves
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }

            v[k] = x;

            if x >= n && y >= m {
                return Ok(backtrack(old, new, &trace, d));
            }
        }
    }

    Err(DiffError::EditScriptOverrun {
        edit_distance_bound: max_d,
    })
}

/// Walks the recorded endpoints from `(N, M)` back to `(0, 0)`, emitting the
/// operations in reverse and flipping them at the end.
///
/// The predecessor choice repeats the forward sweep's comparison, so on ties
/// the step is classified as a delete rather than an insert.
fn backtrack<T>(old: &[T], new: &[T], trace: &[V], end_d: isize) -> Vec<RawOperation<T>>
where
    T: PartialEq + Clone + Debug,
{
    let mut operations = Vec::new();
    let mut x = old.len();
    let mut y = new.len();

    for d in (1..=end_d).rev() {
        let v = &trace[usize::try_from(d).unwrap_or(0)];
        let k = isize::try_from(x).unwrap_or(isize::MAX) - isize::try_from(y).unwrap_or(isize::MAX);

        let previous_k = if k == -d || (k != d && v[k - 1] < v[k + 1]) {
            k + 1
        } else {
            k - 1
        };
        let previous_x = v[previous_k];
        let previous_y =
            usize::try_from(isize::try_from(previous_x).unwrap_or(isize::MAX) - previous_k)
                .unwrap_or(0);

        while x > previous_x && y > previous_y {
            operations.push(RawOperation::Equal(old[x - 1].clone()));
            x -= 1;
            y -= 1;
        }

        if x == previous_x {
            operations.push(RawOperation::Insert(new[y - 1].clone()));
            y -= 1;
        } else {
            operations.push(RawOperation::Delete(old[x - 1].clone()));
            x -= 1;
        }

        debug_assert!(
            x == previous_x && y == previous_y,
            "Backtrack must land on the predecessor endpoint"
        );
    }

    // what remains of the 0-path is one pure snake along the main diagonal
    debug_assert_eq!(x, y, "The 0-path can only hold diagonal moves");
    while x > 0 {
        operations.push(RawOperation::Equal(old[x - 1].clone()));
        x -= 1;
    }

    operations.reverse();
    operations
}

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`. In other words, `V` is an array
/// of integers where `V[k]` contains the row index of the endpoint of the
/// furthest reaching path in diagonal `k`.
///
/// We can't use a traditional Vec to represent `V` since we use `k` as an
/// index and it can take on negative values. So instead `V` is represented as
/// a light-weight wrapper around a Vec plus an `offset` which is the maximum
/// value `k` can take on in order to map negative `k`'s back to a value >= 0.
#[derive(Debug, Clone)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        // max_d should fit in isize for the algorithm to work correctly
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        &self.v[idx.min(self.v.len().saturating_sub(1))]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        let len = self.v.len();
        &mut self.v[idx.min(len.saturating_sub(1))]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn diff(old: &[&str], new: &[&str]) -> Vec<RawOperation<String>> {
        let old = old.iter().map(|&s| s.to_owned()).collect::<Vec<_>>();
        let new = new.iter().map(|&s| s.to_owned()).collect::<Vec<_>>();

        myers_diff(&old, &new).expect("diff must stay within its iteration budget")
    }

    fn edit_count(operations: &[RawOperation<String>]) -> usize {
        operations.iter().filter(|op| !op.is_equal()).count()
    }

    /// `N + M - 2·LCS` is the exact shortest-edit-script length, computed
    /// here independently of the Myers machinery.
    fn reference_edit_distance(old: &[&str], new: &[&str]) -> usize {
        let mut table = vec![vec![0_usize; new.len() + 1]; old.len() + 1];
        for i in 1..=old.len() {
            for j in 1..=new.len() {
                table[i][j] = if old[i - 1] == new[j - 1] {
                    table[i - 1][j - 1] + 1
                } else {
                    table[i - 1][j].max(table[i][j - 1])
                };
            }
        }

        old.len() + new.len() - 2 * table[old.len()][new.len()]
    }

    #[test]
    fn test_empty_diff() {
        assert_eq!(diff(&[], &[]), vec![]);
    }

    #[test]
    fn test_identical_content() {
        let operations = diff(&["a", "b", "c"], &["a", "b", "c"]);

        assert_eq!(operations.len(), 3);
        assert!(operations.iter().all(RawOperation::is_equal));
    }

    #[test]
    fn test_insert_only() {
        assert_eq!(
            diff(&[], &["a", "b"]),
            vec![
                RawOperation::Insert("a".to_owned()),
                RawOperation::Insert("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_delete_only() {
        assert_eq!(
            diff(&["a", "b"], &[]),
            vec![
                RawOperation::Delete("a".to_owned()),
                RawOperation::Delete("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_replacement_deletes_before_inserting() {
        assert_eq!(
            diff(&["a"], &["b"]),
            vec![
                RawOperation::Delete("a".to_owned()),
                RawOperation::Insert("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_replacement_in_context() {
        assert_eq!(
            diff(&["a", "b", "d"], &["a", "c", "d"]),
            vec![
                RawOperation::Equal("a".to_owned()),
                RawOperation::Delete("b".to_owned()),
                RawOperation::Insert("c".to_owned()),
                RawOperation::Equal("d".to_owned()),
            ]
        );
    }

    #[test_case(&["a", "b", "c", "d"], &["a", "x", "c", "y"] ; "two replacements")]
    #[test_case(&["the", "quick", "fox"], &["the", "slow", "fox"] ; "replaced middle word")]
    #[test_case(&["x"], &["a", "b", "c", "x"] ; "prefix insertion")]
    #[test_case(&["a", "a", "a", "b"], &["b", "a", "a"] ; "repeated elements")]
    #[test_case(&["q", "w", "e", "r", "t", "y"], &["y", "t", "r", "e", "w", "q"] ; "reversal")]
    #[test_case(&[], &["only", "new"] ; "empty original")]
    fn test_script_is_minimal(old: &[&str], new: &[&str]) {
        let operations = diff(old, new);
        assert_eq!(edit_count(&operations), reference_edit_distance(old, new));
    }

    #[test_case(&["a", "b", "c", "d"], &["a", "x", "c", "y"] ; "two replacements")]
    #[test_case(&["shared", "old", "tail"], &["shared", "new", "tail"] ; "shared ends")]
    #[test_case(&["zero", "overlap"], &["none", "at", "all"] ; "disjoint")]
    fn test_script_replays_both_sides(old: &[&str], new: &[&str]) {
        let operations = diff(old, new);

        let replayed_old = operations
            .iter()
            .filter(|op| !matches!(op, RawOperation::Insert(_)))
            .map(|op| op.token().as_str())
            .collect::<Vec<_>>();
        let replayed_new = operations
            .iter()
            .filter(|op| !matches!(op, RawOperation::Delete(_)))
            .map(|op| op.token().as_str())
            .collect::<Vec<_>>();

        assert_eq!(replayed_old, old);
        assert_eq!(replayed_new, new);
    }
}
