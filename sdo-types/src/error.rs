//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdoTypesError {
    /// Array length is not a multiple of the declared column stride.
    #[error("array of length {len} cannot be split into columns of width {stride}")]
    DimensionMismatch {
        /// Length of the backing array.
        len: usize,
        /// Declared stride.
        stride: usize,
    },

    /// Column offset does not fit into the stride.
    #[error("column offset {offset} is outside of stride {stride}")]
    InvalidOffset {
        /// Requested offset.
        offset: usize,
        /// Declared stride.
        stride: usize,
    },

    /// Index outside of the accessible range.
    #[error("index {index} is out of bounds for size {size}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of accessible items.
        size: usize,
    },

    /// Bulk column data does not match the shape of the target sequence.
    #[error("expected {expected} columns of length {len}, got {actual}")]
    ColumnShape {
        /// Number of columns the sequence expects.
        expected: usize,
        /// Number of columns supplied.
        actual: usize,
        /// Expected column length.
        len: usize,
    },
}
