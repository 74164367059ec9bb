use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// Triplets with non-comparable coordinates (`NaN`) are reported as collinear.
    pub fn triplet<Num: num_traits::Num + Copy + PartialOrd + nalgebra::Scalar>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        match (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y()) {
            v if v > Num::zero() => Self::Clockwise,
            v if v < Num::zero() => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }
}

/// Winding direction of a closed ring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise. Rings with zero area are clockwise as well.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}

impl Winding {
    /// Winding of a ring with the given signed area.
    pub fn from_area(area: f64) -> Self {
        if area > 0.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Signed area of the ring through the given points, positive for counterclockwise rings.
///
/// The ring is closed implicitly, so the last point may or may not repeat the first one.
pub fn area_signed<P: CartesianPoint2d<Num = f64>>(points: impl IntoIterator<Item = P>) -> f64 {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };

    let mut aggr = f64::zero();
    let mut prev_x = first.x();
    let mut prev_y = first.y();
    for p in iter {
        aggr += prev_x * p.y() - p.x() * prev_y;
        prev_x = p.x();
        prev_y = p.y();
    }
    aggr += prev_x * first.y() - first.x() * prev_y;

    aggr / 2.0
}
