/// Longest-common-subsequence alignment via the classic `(m+1)×(n+1)`
/// dynamic-programming table.
///
/// Returns the matched index pairs `(original, modified)` of one longest
/// common subsequence, strictly increasing in both components. Ties during
/// the backtrack always step the original index first, so of all equally
/// long subsequences the same one is produced on every run, and unmatched
/// original elements surface before unmatched modified ones.
///
/// `O(m·n)` time and space, which is fine here: the inputs are structural
/// chunks, bounded by document structure rather than character count.
pub fn lcs_matches<T>(original: &[T], modified: &[T]) -> Vec<(usize, usize)>
where
    T: PartialEq,
{
    let m = original.len();
    let n = modified.len();

    let mut table = vec![vec![0_usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if original[i - 1] == modified[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut matches = Vec::with_capacity(table[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if original[i - 1] == modified[j - 1] {
            matches.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matches.reverse();
    matches
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_inputs() {
        assert_eq!(lcs_matches::<char>(&[], &[]), vec![]);
        assert_eq!(lcs_matches(&['a'], &[]), vec![]);
        assert_eq!(lcs_matches(&[], &['a']), vec![]);
    }

    #[test]
    fn test_identical_sequences() {
        let items = ['a', 'b', 'c'];
        assert_eq!(lcs_matches(&items, &items), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_disjoint_sequences() {
        assert_eq!(lcs_matches(&['a', 'b'], &['x', 'y']), vec![]);
    }

    #[test]
    fn test_interleaved_subsequence() {
        // LCS of "abcd" and "axcy" is "ac"
        let matches = lcs_matches(&['a', 'b', 'c', 'd'], &['a', 'x', 'c', 'y']);
        assert_eq!(matches, vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn test_matches_are_monotonic() {
        let original = ['a', 'b', 'a', 'b', 'a'];
        let modified = ['b', 'a', 'b', 'a', 'b'];
        let matches = lcs_matches(&original, &modified);

        for window in matches.windows(2) {
            assert!(window[0].0 < window[1].0);
            assert!(window[0].1 < window[1].1);
        }
        assert_eq!(matches.len(), 4);
    }

    #[test]
    fn test_tie_break_is_stable() {
        // "ab" vs "ba" has two one-element common subsequences; stepping the
        // original side first treats the original's trailing "b" as removed
        // and matches "a"
        assert_eq!(lcs_matches(&['a', 'b'], &['b', 'a']), vec![(0, 1)]);
    }
}
