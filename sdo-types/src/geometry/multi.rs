use crate::cartesian::Rect;
use crate::geometry::{Curve, Geometry, Point, Polygon};
use crate::sequence::{CoordinateAccess, PackedCoordinates};

/// Collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint<S = PackedCoordinates> {
    /// Member points.
    pub points: Vec<Point<S>>,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

/// Collection of curves.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString<S = PackedCoordinates> {
    /// Member curves.
    pub lines: Vec<Curve<S>>,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

/// Collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon<S = PackedCoordinates> {
    /// Member polygons.
    pub polygons: Vec<Polygon<S>>,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

/// Heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection<S = PackedCoordinates> {
    /// Members.
    pub geometries: Vec<Geometry<S>>,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

impl<S: CoordinateAccess> MultiPoint<S> {
    /// Creates a new multipoint.
    pub fn new(points: Vec<Point<S>>, srid: Option<i32>) -> Self {
        Self { points, srid }
    }

    /// Bounding rectangle of the members.
    pub fn envelope(&self) -> Option<Rect> {
        merge(self.points.iter().map(Point::envelope))
    }
}

impl<S: CoordinateAccess> MultiLineString<S> {
    /// Creates a new multilinestring.
    pub fn new(lines: Vec<Curve<S>>, srid: Option<i32>) -> Self {
        Self { lines, srid }
    }

    /// Bounding rectangle of the members.
    pub fn envelope(&self) -> Option<Rect> {
        merge(self.lines.iter().map(Curve::envelope))
    }
}

impl<S: CoordinateAccess> MultiPolygon<S> {
    /// Creates a new multipolygon.
    pub fn new(polygons: Vec<Polygon<S>>, srid: Option<i32>) -> Self {
        Self { polygons, srid }
    }

    /// Bounding rectangle of the members.
    pub fn envelope(&self) -> Option<Rect> {
        merge(self.polygons.iter().map(Polygon::envelope))
    }
}

impl<S: CoordinateAccess> GeometryCollection<S> {
    /// Creates a new collection.
    pub fn new(geometries: Vec<Geometry<S>>, srid: Option<i32>) -> Self {
        Self { geometries, srid }
    }

    /// Bounding rectangle of the members.
    pub fn envelope(&self) -> Option<Rect> {
        merge(self.geometries.iter().map(Geometry::envelope))
    }
}

fn merge(rects: impl Iterator<Item = Option<Rect>>) -> Option<Rect> {
    rects.flatten().reduce(|a, b| a.merge(b))
}
