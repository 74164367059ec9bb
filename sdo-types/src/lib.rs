//! Geometry model for the SDO codec.
//!
//! The crate contains the geometry tree the codec decodes into and encodes from
//! ([`geometry`]), coordinate sequences that carry extra per-coordinate attributes such as
//! linear referencing measures ([`sequence`]), zero-copy column views over flat ordinate arrays
//! ([`ordinates`]) and ring utilities ([`sequences`], [`cartesian`]).

pub mod cartesian;
pub mod error;
pub mod geometry;
pub mod ordinates;
pub mod sequence;
pub mod sequences;

pub use error::SdoTypesError;
pub use geometry::*;
pub use ordinates::{AttributeList, OrdinateList};
pub use sequence::{
    CoordinateAccess, CoordinateSequenceFactory, PackedCoordinates, PackedCoordinatesFactory,
    PointFactory,
};
