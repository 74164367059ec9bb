//! Geometry tree produced and consumed by the codec.
//!
//! Every node is generic over the coordinate sequence type and carries its own spatial reference
//! identifier.

mod curve;
mod multi;
mod point;
mod polygon;

pub use curve::{CircularString, CompoundCurve, Curve, LineString, DEFAULT_ARC_SEGMENTS};
pub use multi::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;

use serde::{Deserialize, Serialize};

use crate::cartesian::Rect;
use crate::sequence::{CoordinateAccess, PackedCoordinates};

/// Kind of a geometry node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// [`Point`]
    Point,
    /// [`LineString`]
    LineString,
    /// [`CircularString`]
    CircularString,
    /// [`CompoundCurve`]
    CompoundCurve,
    /// [`Polygon`]
    Polygon,
    /// [`MultiPoint`]
    MultiPoint,
    /// [`MultiLineString`]
    MultiLineString,
    /// [`MultiPolygon`]
    MultiPolygon,
    /// [`GeometryCollection`]
    GeometryCollection,
}

/// Any geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<S = PackedCoordinates> {
    /// Point
    Point(Point<S>),
    /// Line with straight segments
    LineString(LineString<S>),
    /// Line with circular arcs
    CircularString(CircularString<S>),
    /// Chain of lines and arcs
    CompoundCurve(CompoundCurve<S>),
    /// Polygon
    Polygon(Polygon<S>),
    /// Multipoint
    MultiPoint(MultiPoint<S>),
    /// Multiline
    MultiLineString(MultiLineString<S>),
    /// Multipolygon
    MultiPolygon(MultiPolygon<S>),
    /// Collection
    GeometryCollection(GeometryCollection<S>),
}

impl<S: CoordinateAccess> Geometry<S> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::CircularString(_) => GeometryKind::CircularString,
            Geometry::CompoundCurve(_) => GeometryKind::CompoundCurve,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Spatial reference identifier.
    pub fn srid(&self) -> Option<i32> {
        match self {
            Geometry::Point(v) => v.srid,
            Geometry::LineString(v) => v.srid,
            Geometry::CircularString(v) => v.srid,
            Geometry::CompoundCurve(v) => v.srid,
            Geometry::Polygon(v) => v.srid,
            Geometry::MultiPoint(v) => v.srid,
            Geometry::MultiLineString(v) => v.srid,
            Geometry::MultiPolygon(v) => v.srid,
            Geometry::GeometryCollection(v) => v.srid,
        }
    }

    /// Returns true if the geometry has no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(v) => v.is_empty(),
            Geometry::MultiPoint(v) => v.points.iter().all(Point::is_empty),
            Geometry::MultiLineString(v) => v.lines.iter().all(Curve::is_empty),
            Geometry::Polygon(v) => v.is_empty(),
            Geometry::MultiPolygon(v) => v.polygons.iter().all(Polygon::is_empty),
            Geometry::GeometryCollection(v) => v.geometries.iter().all(Geometry::is_empty),
            Geometry::LineString(v) => v.is_empty(),
            Geometry::CircularString(v) => v.is_empty(),
            Geometry::CompoundCurve(v) => v.is_empty(),
        }
    }

    /// Largest dimension and attribute count of the coordinates of the geometry.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Geometry::Point(v) => (v.coords.dimension(), v.coords.attribute_count()),
            Geometry::LineString(v) => v.shape(),
            Geometry::CircularString(v) => v.shape(),
            Geometry::CompoundCurve(v) => v.shape(),
            Geometry::Polygon(v) => v.shape(),
            Geometry::MultiPoint(v) => max_shape(
                v.points
                    .iter()
                    .map(|p| (p.coords.dimension(), p.coords.attribute_count())),
            ),
            Geometry::MultiLineString(v) => max_shape(v.lines.iter().map(Curve::shape)),
            Geometry::MultiPolygon(v) => max_shape(v.polygons.iter().map(Polygon::shape)),
            Geometry::GeometryCollection(v) => {
                max_shape(v.geometries.iter().map(Geometry::shape))
            }
        }
    }

    /// Bounding rectangle. Arcs are approximated.
    pub fn envelope(&self) -> Option<Rect> {
        match self {
            Geometry::Point(v) => v.envelope(),
            Geometry::Polygon(v) => v.envelope(),
            Geometry::MultiPoint(v) => v.envelope(),
            Geometry::MultiLineString(v) => v.envelope(),
            Geometry::MultiPolygon(v) => v.envelope(),
            Geometry::GeometryCollection(v) => v.envelope(),
            Geometry::LineString(v) => Rect::from_points(v.points2().into_iter()),
            Geometry::CircularString(v) => Rect::from_points(v.linearize().into_iter()),
            Geometry::CompoundCurve(v) => Rect::from_points(v.points2().into_iter()),
        }
    }
}

pub(crate) fn max_shape(shapes: impl Iterator<Item = (usize, usize)>) -> (usize, usize) {
    shapes.fold((0, 0), |acc, s| (acc.0.max(s.0), acc.1.max(s.1)))
}

impl<S> From<Curve<S>> for Geometry<S> {
    fn from(value: Curve<S>) -> Self {
        match value {
            Curve::Line(v) => Geometry::LineString(v),
            Curve::Circular(v) => Geometry::CircularString(v),
            Curve::Compound(v) => Geometry::CompoundCurve(v),
        }
    }
}

impl<S> From<LineString<S>> for Geometry<S> {
    fn from(value: LineString<S>) -> Self {
        Self::LineString(value)
    }
}

impl<S> From<CircularString<S>> for Geometry<S> {
    fn from(value: CircularString<S>) -> Self {
        Self::CircularString(value)
    }
}

impl<S> From<CompoundCurve<S>> for Geometry<S> {
    fn from(value: CompoundCurve<S>) -> Self {
        Self::CompoundCurve(value)
    }
}

impl<S> From<Point<S>> for Geometry<S> {
    fn from(value: Point<S>) -> Self {
        Self::Point(value)
    }
}

impl<S> From<Polygon<S>> for Geometry<S> {
    fn from(value: Polygon<S>) -> Self {
        Self::Polygon(value)
    }
}

impl<S> From<MultiPoint<S>> for Geometry<S> {
    fn from(value: MultiPoint<S>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<S> From<MultiLineString<S>> for Geometry<S> {
    fn from(value: MultiLineString<S>) -> Self {
        Self::MultiLineString(value)
    }
}

impl<S> From<MultiPolygon<S>> for Geometry<S> {
    fn from(value: MultiPolygon<S>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<S> From<GeometryCollection<S>> for Geometry<S> {
    fn from(value: GeometryCollection<S>) -> Self {
        Self::GeometryCollection(value)
    }
}
