pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced at the loading boundary.
///
/// Infeasible puzzles are not errors: an unsolvable grid comes back from
/// the solver as an absent assignment, never through this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid structure is empty")]
    EmptyGrid,

    #[error("grid row {row} has width {found}, expected {expected}")]
    RaggedGrid {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("grid contains no slot of length 2 or more")]
    NoSlots,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode solution: {0}")]
    Encode(#[from] serde_json::Error),
}
