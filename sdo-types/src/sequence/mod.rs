//! Coordinate sequences carrying extra per-coordinate attributes.

use crate::cartesian::Point2;
use crate::error::SdoTypesError;

mod packed;
mod points;

pub use packed::{PackedCoordinates, PackedCoordinatesFactory};
pub use points::PointFactory;

/// Random access to a sequence of coordinates.
///
/// A coordinate consists of [`dimension`](CoordinateAccess::dimension) spatial ordinates
/// (`x`, `y` and optionally `z`) followed by [`attribute_count`](CoordinateAccess::attribute_count)
/// non-spatial values such as linear referencing measures. `NaN` marks an absent value.
///
/// Plain sequences only need to implement [`len`](CoordinateAccess::len),
/// [`ordinate`](CoordinateAccess::ordinate) and [`set_ordinate`](CoordinateAccess::set_ordinate).
/// The remaining methods then treat the sequence as 2d or 3d without attributes.
pub trait CoordinateAccess {
    /// Number of coordinates.
    fn len(&self) -> usize;

    /// Returns true if there are no coordinates.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns spatial ordinate `ordinate` of coordinate `index`, or `NaN` if it is not stored.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    fn ordinate(&self, index: usize, ordinate: usize) -> f64;

    /// Sets spatial ordinate `ordinate` of coordinate `index`. Ordinates beyond the ones the
    /// sequence can store are ignored.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    fn set_ordinate(&mut self, index: usize, ordinate: usize, value: f64);

    /// Number of spatial ordinates per coordinate.
    ///
    /// Unless overridden, the sequence is 3d if its first coordinate has a `z` value.
    fn dimension(&self) -> usize {
        if !self.is_empty() && !self.ordinate(0, 2).is_nan() {
            3
        } else {
            2
        }
    }

    /// Number of non-spatial values per coordinate.
    fn attribute_count(&self) -> usize {
        0
    }

    /// Returns attribute `attribute` of coordinate `index`, or `NaN` if it is not stored.
    fn attribute(&self, _index: usize, _attribute: usize) -> f64 {
        f64::NAN
    }

    /// Sets attribute `attribute` of coordinate `index`.
    fn set_attribute(
        &mut self,
        index: usize,
        attribute: usize,
        _value: f64,
    ) -> Result<(), SdoTypesError> {
        if index >= self.len() {
            return Err(SdoTypesError::OutOfBounds {
                index,
                size: self.len(),
            });
        }

        Err(SdoTypesError::OutOfBounds {
            index: attribute,
            size: self.attribute_count(),
        })
    }

    /// `x` and `y` of coordinate `index`.
    fn point2(&self, index: usize) -> Point2 {
        Point2::new(self.ordinate(index, 0), self.ordinate(index, 1))
    }

    /// Exports the spatial ordinates as one column per dimension.
    fn to_ordinate_arrays(&self) -> Vec<Vec<f64>> {
        (0..self.dimension())
            .map(|o| (0..self.len()).map(|i| self.ordinate(i, o)).collect())
            .collect()
    }

    /// Exports the attributes as one column per attribute.
    fn to_attribute_arrays(&self) -> Vec<Vec<f64>> {
        (0..self.attribute_count())
            .map(|a| (0..self.len()).map(|i| self.attribute(i, a)).collect())
            .collect()
    }

    /// Replaces all values of the sequence with the given columns.
    ///
    /// Every column must contain exactly [`len`](CoordinateAccess::len) values. Ordinate columns
    /// beyond what the sequence can store are ignored, attribute columns it cannot store are an
    /// error.
    fn set_coordinate_arrays(
        &mut self,
        ordinates: &[Vec<f64>],
        attributes: &[Vec<f64>],
    ) -> Result<(), SdoTypesError> {
        check_columns(self.len(), ordinates.len(), ordinates)?;
        check_columns(self.len(), attributes.len(), attributes)?;

        for (o, column) in ordinates.iter().enumerate() {
            for (i, value) in column.iter().enumerate() {
                self.set_ordinate(i, o, *value);
            }
        }

        for (a, column) in attributes.iter().enumerate() {
            for (i, value) in column.iter().enumerate() {
                self.set_attribute(i, a, *value)?;
            }
        }

        Ok(())
    }
}

pub(crate) fn check_columns(
    len: usize,
    expected: usize,
    columns: &[Vec<f64>],
) -> Result<(), SdoTypesError> {
    if columns.len() != expected || columns.iter().any(|c| c.len() != len) {
        return Err(SdoTypesError::ColumnShape {
            expected,
            actual: columns.len(),
            len,
        });
    }

    Ok(())
}

/// Creates coordinate sequences of a given shape.
///
/// Factories are read-only configuration. A factory that reports a fixed
/// [`dimension`](CoordinateSequenceFactory::dimension) or
/// [`attribute_count`](CoordinateSequenceFactory::attribute_count) always produces sequences of
/// that shape regardless of what is requested.
pub trait CoordinateSequenceFactory {
    /// Sequence type produced by the factory.
    type Sequence: CoordinateAccess + Clone;

    /// Creates a sequence of `len` coordinates with every value absent (`NaN`).
    fn create(&self, len: usize, dimension: usize, attribute_count: usize) -> Self::Sequence;

    /// Dimension of the created sequences, if fixed.
    fn dimension(&self) -> Option<usize> {
        None
    }

    /// Attribute count of the created sequences, if fixed.
    fn attribute_count(&self) -> Option<usize> {
        None
    }
}
