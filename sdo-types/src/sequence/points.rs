use nalgebra::Point3;

use super::{CoordinateAccess, CoordinateSequenceFactory};

/// Plain sequence of 3d points. `z` is `NaN` for 2d coordinates.
///
/// Uses the default dimension and attribute handling of [`CoordinateAccess`].
impl CoordinateAccess for Vec<Point3<f64>> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn ordinate(&self, index: usize, ordinate: usize) -> f64 {
        match ordinate {
            0..=2 => self[index][ordinate],
            _ => f64::NAN,
        }
    }

    fn set_ordinate(&mut self, index: usize, ordinate: usize, value: f64) {
        if ordinate <= 2 {
            self[index][ordinate] = value;
        }
    }
}

/// Factory for `Vec<Point3<f64>>` sequences. Attributes are not stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointFactory;

impl CoordinateSequenceFactory for PointFactory {
    type Sequence = Vec<Point3<f64>>;

    fn create(&self, len: usize, _dimension: usize, _attribute_count: usize) -> Self::Sequence {
        vec![Point3::new(f64::NAN, f64::NAN, f64::NAN); len]
    }

    fn attribute_count(&self) -> Option<usize> {
        Some(0)
    }
}
