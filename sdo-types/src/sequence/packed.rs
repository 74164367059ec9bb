use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use super::{check_columns, CoordinateAccess, CoordinateSequenceFactory};
use crate::error::SdoTypesError;

/// Coordinate sequence stored as one flat array of interleaved values.
///
/// Each coordinate occupies `dimension + attribute_count` consecutive slots: spatial ordinates
/// first, then attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedCoordinates {
    dimension: usize,
    attribute_count: usize,
    values: Vec<f64>,
}

impl PackedCoordinates {
    /// Creates a sequence of `len` coordinates with all values absent.
    pub fn new(len: usize, dimension: usize, attribute_count: usize) -> Self {
        Self {
            dimension,
            attribute_count,
            values: vec![f64::NAN; len * (dimension + attribute_count)],
        }
    }

    /// Wraps interleaved values.
    pub fn from_values(
        values: Vec<f64>,
        dimension: usize,
        attribute_count: usize,
    ) -> Result<Self, SdoTypesError> {
        let stride = dimension + attribute_count;
        if stride == 0 || values.len() % stride != 0 {
            return Err(SdoTypesError::DimensionMismatch {
                len: values.len(),
                stride,
            });
        }

        Ok(Self {
            dimension,
            attribute_count,
            values,
        })
    }

    /// Creates a 2d sequence from `(x, y)` pairs.
    pub fn xy(points: &[(f64, f64)]) -> Self {
        Self {
            dimension: 2,
            attribute_count: 0,
            values: points.iter().flat_map(|&(x, y)| [x, y]).collect(),
        }
    }

    /// Creates a 3d sequence from `(x, y, z)` triples.
    pub fn xyz(points: &[(f64, f64, f64)]) -> Self {
        Self {
            dimension: 3,
            attribute_count: 0,
            values: points.iter().flat_map(|&(x, y, z)| [x, y, z]).collect(),
        }
    }

    /// Creates a 2d sequence with one measure from `(x, y, m)` triples.
    pub fn xym(points: &[(f64, f64, f64)]) -> Self {
        Self {
            dimension: 2,
            attribute_count: 1,
            values: points.iter().flat_map(|&(x, y, m)| [x, y, m]).collect(),
        }
    }

    /// Interleaved values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn stride(&self) -> usize {
        self.dimension + self.attribute_count
    }
}

impl CoordinateAccess for PackedCoordinates {
    fn len(&self) -> usize {
        match self.stride() {
            0 => 0,
            stride => self.values.len() / stride,
        }
    }

    fn ordinate(&self, index: usize, ordinate: usize) -> f64 {
        assert!(index < self.len(), "coordinate index out of bounds");
        if ordinate < self.dimension {
            self.values[index * self.stride() + ordinate]
        } else {
            f64::NAN
        }
    }

    fn set_ordinate(&mut self, index: usize, ordinate: usize, value: f64) {
        assert!(index < self.len(), "coordinate index out of bounds");
        if ordinate < self.dimension {
            let stride = self.stride();
            self.values[index * stride + ordinate] = value;
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    fn attribute(&self, index: usize, attribute: usize) -> f64 {
        if index < self.len() && attribute < self.attribute_count {
            self.values[index * self.stride() + self.dimension + attribute]
        } else {
            f64::NAN
        }
    }

    fn set_attribute(
        &mut self,
        index: usize,
        attribute: usize,
        value: f64,
    ) -> Result<(), SdoTypesError> {
        if index >= self.len() {
            return Err(SdoTypesError::OutOfBounds {
                index,
                size: self.len(),
            });
        }
        if attribute >= self.attribute_count {
            return Err(SdoTypesError::OutOfBounds {
                index: attribute,
                size: self.attribute_count,
            });
        }

        let stride = self.stride();
        self.values[index * stride + self.dimension + attribute] = value;
        Ok(())
    }

    fn set_coordinate_arrays(
        &mut self,
        ordinates: &[Vec<f64>],
        attributes: &[Vec<f64>],
    ) -> Result<(), SdoTypesError> {
        let len = self.len();
        check_columns(len, self.dimension, ordinates)?;
        check_columns(len, self.attribute_count, attributes)?;

        let stride = self.stride();
        for (column_index, column) in ordinates.iter().chain(attributes).enumerate() {
            for (i, value) in column.iter().enumerate() {
                self.values[i * stride + column_index] = *value;
            }
        }

        Ok(())
    }
}

fn same_value(a: f64, b: f64, epsilon: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.abs_diff_eq(&b, epsilon)
}

/// Two absent values are considered equal.
impl PartialEq for PackedCoordinates {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.attribute_count == other.attribute_count
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| same_value(*a, *b, 0.0))
    }
}

impl AbsDiffEq for PackedCoordinates {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimension == other.dimension
            && self.attribute_count == other.attribute_count
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| same_value(*a, *b, epsilon))
    }
}

/// Factory for [`PackedCoordinates`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedCoordinatesFactory {
    dimension: Option<usize>,
    attribute_count: Option<usize>,
}

impl PackedCoordinatesFactory {
    /// Factory producing sequences of whatever shape is requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory always producing sequences with the given shape.
    pub fn fixed(dimension: usize, attribute_count: usize) -> Self {
        Self {
            dimension: Some(dimension),
            attribute_count: Some(attribute_count),
        }
    }
}

impl CoordinateSequenceFactory for PackedCoordinatesFactory {
    type Sequence = PackedCoordinates;

    fn create(&self, len: usize, dimension: usize, attribute_count: usize) -> Self::Sequence {
        PackedCoordinates::new(
            len,
            self.dimension.unwrap_or(dimension),
            self.attribute_count.unwrap_or(attribute_count),
        )
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn attribute_count(&self) -> Option<usize> {
        self.attribute_count
    }
}
