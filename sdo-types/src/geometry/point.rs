use crate::cartesian::{Point2, Rect};
use crate::sequence::{CoordinateAccess, PackedCoordinates};

/// Single point, stored as a sequence of one coordinate so that `z` and attributes are kept.
///
/// An empty sequence makes an empty point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<S = PackedCoordinates> {
    /// Coordinate of the point.
    pub coords: S,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

impl<S: CoordinateAccess> Point<S> {
    /// Creates a new point.
    pub fn new(coords: S, srid: Option<i32>) -> Self {
        Self { coords, srid }
    }

    /// Returns true if the point has no coordinate.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// `x` and `y` of the point.
    pub fn point2(&self) -> Option<Point2> {
        (!self.is_empty()).then(|| self.coords.point2(0))
    }

    /// Bounding rectangle.
    pub fn envelope(&self) -> Option<Rect> {
        self.point2().map(|p| Rect::from_corners(&p, &p))
    }
}

impl Point<PackedCoordinates> {
    /// 2d point.
    pub fn xy(x: f64, y: f64, srid: Option<i32>) -> Self {
        Self::new(PackedCoordinates::xy(&[(x, y)]), srid)
    }

    /// 3d point.
    pub fn xyz(x: f64, y: f64, z: f64, srid: Option<i32>) -> Self {
        Self::new(PackedCoordinates::xyz(&[(x, y, z)]), srid)
    }
}
