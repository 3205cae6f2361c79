//! Error type shared by matrix validation and tour construction.

use thiserror::Error as ThisError;

/// Errors produced while validating a distance matrix or building a tour.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The matrix has no vertices.
    #[error("distance matrix is empty")]
    EmptyMatrix,
    /// A row's length does not match the number of rows.
    #[error("distance matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Entries found in the row.
        found: usize,
    },
    /// Flat row-major data does not hold `size * size` entries.
    #[error("distance matrix data has {found} entries, expected {expected}")]
    DimensionMismatch {
        /// `size * size`.
        expected: usize,
        /// Actual data length.
        found: usize,
    },
    /// An edge weight is negative.
    #[error("negative edge weight {weight} from {from} to {to}")]
    NegativeWeight {
        /// Source vertex.
        from: usize,
        /// Target vertex.
        to: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// A matrix of this many vertices cannot be allocated.
    #[error("distance matrix of size {size} is too large")]
    TooLarge {
        /// Requested number of vertices.
        size: usize,
    },
    /// A vertex index is outside `0..size`.
    #[error("vertex {vertex} is out of range for a matrix of size {size}")]
    VertexOutOfRange {
        /// The offending index.
        vertex: usize,
        /// Number of vertices.
        size: usize,
    },
    /// No unvisited vertex was left while the tour was still incomplete.
    ///
    /// Unreachable for a validated matrix; seeing it means construction is broken.
    #[error("internal error: no unvisited vertex from {current} at step {step}")]
    NoUnvisitedVertex {
        /// Construction step (1-based).
        step: usize,
        /// Vertex the search started from.
        current: usize,
    },
    /// The tour length does not fit into `u64`.
    #[error("tour length overflows u64")]
    WeightOverflow,
    /// The dedicated worker pool could not be created.
    #[error("thread pool: {0}")]
    ThreadPool(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` for errors caused by the caller's input rather than a bug.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyMatrix
                | Self::NotSquare { .. }
                | Self::DimensionMismatch { .. }
                | Self::NegativeWeight { .. }
                | Self::TooLarge { .. }
                | Self::VertexOutOfRange { .. }
        )
    }
}
