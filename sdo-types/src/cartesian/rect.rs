use nalgebra::Scalar;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Point2};

/// Axis-aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum x
    pub x_min: N,
    /// Minimum y
    pub y_min: N,
    /// Maximum x
    pub x_max: N,
    /// Maximum y
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar> Rect<N> {
    /// Creates a new rectangle. Coordinates are not reordered.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Rectangle spanned by two opposite corners given in any order.
    pub fn from_corners(
        a: &impl CartesianPoint2d<Num = N>,
        b: &impl CartesianPoint2d<Num = N>,
    ) -> Self {
        let (x_min, x_max) = if a.x() <= b.x() {
            (a.x(), b.x())
        } else {
            (b.x(), a.x())
        };
        let (y_min, y_max) = if a.y() <= b.y() {
            (a.y(), b.y())
        } else {
            (b.y(), a.y())
        };
        Self::new(x_min, y_min, x_max, y_max)
    }

    /// Merges two rectangles into one containing both of them.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Bounding rectangle of the points. `None` if the iterator is empty.
    pub fn from_points<P: CartesianPoint2d<Num = N>>(
        mut points: impl Iterator<Item = P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::new(first.x(), first.y(), first.x(), first.y());

        for p in points {
            if rect.x_min > p.x() {
                rect.x_min = p.x();
            }
            if rect.y_min > p.y() {
                rect.y_min = p.y();
            }
            if rect.x_max < p.x() {
                rect.x_max = p.x();
            }
            if rect.y_max < p.y() {
                rect.y_max = p.y();
            }
        }

        Some(rect)
    }

    /// Recognizes a closed 5-point ring tracing an axis-aligned box.
    ///
    /// The ring must repeat its first point at the end. Both traversal orders are accepted:
    /// horizontal edge first or vertical edge first.
    pub fn from_ring(ring: &[impl CartesianPoint2d<Num = N>]) -> Option<Self> {
        let [p1, p2, p3, p4, p5] = ring else {
            return None;
        };

        if !p1.equal(p5) {
            return None;
        }

        let horizontal_first =
            p1.x() == p4.x() && p1.y() == p2.y() && p3.x() == p2.x() && p3.y() == p4.y();
        let vertical_first =
            p1.x() == p2.x() && p1.y() == p4.y() && p3.x() == p4.x() && p3.y() == p2.y();

        if vertical_first || horizontal_first {
            Some(Self::from_corners(p1, p3))
        } else {
            None
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_min)
    }

    /// Maximum corner.
    pub fn max(&self) -> Point2<N> {
        Point2::new(self.x_max, self.y_max)
    }

    /// Closed counterclockwise ring starting at the minimum corner.
    pub fn into_ring(self) -> [Point2<N>; 5] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
            Point2::new(self.x_min, self.y_min),
        ]
    }
}
