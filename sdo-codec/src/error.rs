//! Error type of the codec.

use sdo_types::SdoTypesError;
use thiserror::Error;

/// Errors of the codec.
#[derive(Debug, Error)]
pub enum SdoError {
    /// Starting offset does not point at a coordinate of the ordinate array.
    #[error("triplet {triplet}: starting offset {offset} is outside of ordinates of length {len}")]
    StartingOffset {
        /// Zero-based triplet index.
        triplet: usize,
        /// Offending 1-based starting offset.
        offset: i32,
        /// Length of the ordinate array.
        len: usize,
    },

    /// Element type not allowed at this position of the element info.
    #[error("triplet {triplet}: element type {etype} is not one of {expected:?}")]
    UnexpectedEtype {
        /// Zero-based triplet index.
        triplet: usize,
        /// Offending element type.
        etype: i32,
        /// Element types allowed at this position.
        expected: &'static [i32],
    },

    /// Ordinate array cannot be split into coordinates.
    #[error("ordinate array of length {len} is not a multiple of dimension {dimension}")]
    OrdinateLength {
        /// Length of the ordinate array.
        len: usize,
        /// Dimension of the geometry.
        dimension: usize,
    },

    /// Measure position is outside of the coordinate.
    #[error("measure position {l} is greater than dimension {d}")]
    MeasurePosition {
        /// Dimension.
        d: i32,
        /// Measure position.
        l: i32,
    },

    /// Geometry type that cannot be decoded at all.
    #[error("invalid geometry type {0}")]
    InvalidGType(i32),

    /// Element info that does not describe a valid geometry.
    #[error("triplet {triplet}: {reason}")]
    Malformed {
        /// Zero-based triplet index.
        triplet: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Valid element that has no counterpart in the geometry model.
    #[error("triplet {triplet}: element type {etype} with interpretation {interpretation} is not representable")]
    Unrepresentable {
        /// Zero-based triplet index.
        triplet: usize,
        /// Element type.
        etype: i32,
        /// Interpretation.
        interpretation: i32,
    },

    /// Geometry that cannot be expressed as an SDO tuple.
    #[error("cannot encode geometry: {0}")]
    Unencodable(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Error of coordinate sequence handling.
    #[error(transparent)]
    Types(#[from] SdoTypesError),
}
