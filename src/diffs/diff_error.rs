use thiserror::Error;

/// Error type for diff computation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The Myers sweep ran through its whole iteration budget without the
    /// forward path reaching the end of both sequences. The budget equals
    /// the worst possible edit distance, so a correct sweep always connects
    /// within it; hitting this means the invariants were broken, and failing
    /// is preferable to looping.
    #[error(
        "edit script search exhausted its budget of {edit_distance_bound} iterations without \
         aligning both inputs"
    )]
    EditScriptOverrun {
        /// The `N + M` hard bound that was exceeded
        edit_distance_bound: usize,
    },
}
