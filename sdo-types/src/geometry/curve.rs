use crate::cartesian::{area_signed, CircularArc, Point2, Rect, Winding};
use crate::error::SdoTypesError;
use crate::geometry::max_shape;
use crate::sequence::{CoordinateAccess, PackedCoordinates};
use crate::sequences;

/// Number of straight segments used to approximate an arc unless configured otherwise.
pub const DEFAULT_ARC_SEGMENTS: usize = 32;

/// Chain of straight segments. Used both for open lines and for polygon rings.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<S = PackedCoordinates> {
    /// Vertices.
    pub coords: S,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

impl<S: CoordinateAccess> LineString<S> {
    /// Creates a new line.
    pub fn new(coords: S, srid: Option<i32>) -> Self {
        Self { coords, srid }
    }

    /// Returns true if the line has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Dimension and attribute count of the coordinates.
    pub fn shape(&self) -> (usize, usize) {
        (self.coords.dimension(), self.coords.attribute_count())
    }

    /// Vertices projected to `x` and `y`.
    pub fn points2(&self) -> Vec<Point2> {
        sequences::points2(&self.coords)
    }
}

/// Chain of circular arcs.
///
/// Every arc is defined by three consecutive points, and consecutive arcs share an endpoint, so
/// a valid string has an odd number of points, at least three.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularString<S = PackedCoordinates> {
    /// Control points.
    pub coords: S,
    /// Number of straight segments per arc when the string is linearized.
    pub arc_segments: usize,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

impl<S: CoordinateAccess> CircularString<S> {
    /// Creates a new circular string.
    pub fn new(coords: S, arc_segments: usize, srid: Option<i32>) -> Self {
        Self {
            coords,
            arc_segments,
            srid,
        }
    }

    /// Returns true if the string has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Dimension and attribute count of the coordinates.
    pub fn shape(&self) -> (usize, usize) {
        (self.coords.dimension(), self.coords.attribute_count())
    }

    /// Arcs of the string. A trailing incomplete arc is ignored.
    pub fn arcs(&self) -> impl Iterator<Item = CircularArc> + '_ {
        (0..self.coords.len().saturating_sub(2))
            .step_by(2)
            .map(|i| {
                CircularArc::new(
                    self.coords.point2(i),
                    self.coords.point2(i + 1),
                    self.coords.point2(i + 2),
                )
            })
    }

    /// Straight line approximation of the string.
    pub fn linearize(&self) -> Vec<Point2> {
        let mut points: Vec<Point2> = vec![];
        for arc in self.arcs() {
            let skip = usize::from(!points.is_empty());
            points.extend(arc.linearize(self.arc_segments).into_iter().skip(skip));
        }

        points
    }
}

/// Chain of lines and circular strings, each component starting where the previous one ends.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCurve<S = PackedCoordinates> {
    /// Components in order.
    pub components: Vec<Curve<S>>,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

impl<S: CoordinateAccess> CompoundCurve<S> {
    /// Creates a new compound curve.
    pub fn new(components: Vec<Curve<S>>, srid: Option<i32>) -> Self {
        Self { components, srid }
    }

    /// Returns true if no component has coordinates.
    pub fn is_empty(&self) -> bool {
        self.components.iter().all(Curve::is_empty)
    }

    /// Largest dimension and attribute count of the components.
    pub fn shape(&self) -> (usize, usize) {
        max_shape(self.components.iter().map(Curve::shape))
    }

    /// Straight line approximation of the chain, joints listed once.
    pub fn points2(&self) -> Vec<Point2> {
        let mut points: Vec<Point2> = vec![];
        for component in &self.components {
            let component_points = component.points2();
            let skip = usize::from(points.last() == component_points.first());
            points.extend(component_points.into_iter().skip(skip));
        }
        points
    }
}

/// Any one-dimensional geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve<S = PackedCoordinates> {
    /// Straight segments.
    Line(LineString<S>),
    /// Circular arcs.
    Circular(CircularString<S>),
    /// Chained components.
    Compound(CompoundCurve<S>),
}

impl<S: CoordinateAccess> Curve<S> {
    /// Spatial reference identifier.
    pub fn srid(&self) -> Option<i32> {
        match self {
            Curve::Line(v) => v.srid,
            Curve::Circular(v) => v.srid,
            Curve::Compound(v) => v.srid,
        }
    }

    /// Returns true if the curve has no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Curve::Line(v) => v.is_empty(),
            Curve::Circular(v) => v.is_empty(),
            Curve::Compound(v) => v.is_empty(),
        }
    }

    /// Largest dimension and attribute count of the coordinates of the curve.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Curve::Line(v) => v.shape(),
            Curve::Circular(v) => v.shape(),
            Curve::Compound(v) => v.shape(),
        }
    }

    /// Straight line approximation of the curve. Arcs are linearized.
    pub fn points2(&self) -> Vec<Point2> {
        match self {
            Curve::Line(v) => v.points2(),
            Curve::Circular(v) => v.linearize(),
            Curve::Compound(v) => v.points2(),
        }
    }

    /// Returns true if the curve ends where it starts.
    pub fn is_closed(&self) -> bool {
        let points = self.points2();
        !points.is_empty() && points.first() == points.last()
    }

    /// Winding of the ring formed by the curve.
    pub fn winding(&self) -> Winding {
        Winding::from_area(area_signed(self.points2()))
    }

    /// Bounding rectangle of the linearized curve.
    pub fn envelope(&self) -> Option<Rect> {
        Rect::from_points(self.points2().into_iter())
    }

    /// The same curve traversed in the opposite direction.
    pub fn reversed(&self) -> Result<Self, SdoTypesError>
    where
        S: Clone,
    {
        Ok(match self {
            Curve::Line(v) => Curve::Line(LineString {
                coords: sequences::reverse(&v.coords)?,
                srid: v.srid,
            }),
            Curve::Circular(v) => Curve::Circular(CircularString {
                coords: sequences::reverse(&v.coords)?,
                arc_segments: v.arc_segments,
                srid: v.srid,
            }),
            Curve::Compound(v) => Curve::Compound(CompoundCurve {
                components: v
                    .components
                    .iter()
                    .rev()
                    .map(Curve::reversed)
                    .collect::<Result<_, _>>()?,
                srid: v.srid,
            }),
        })
    }

    /// Returns the curve with the requested winding, reversing it if needed.
    pub fn with_winding(&self, winding: Winding) -> Result<Self, SdoTypesError>
    where
        S: Clone,
    {
        if self.winding() == winding {
            Ok(self.clone())
        } else {
            self.reversed()
        }
    }
}

impl<S> From<LineString<S>> for Curve<S> {
    fn from(value: LineString<S>) -> Self {
        Self::Line(value)
    }
}

impl<S> From<CircularString<S>> for Curve<S> {
    fn from(value: CircularString<S>) -> Self {
        Self::Circular(value)
    }
}

impl<S> From<CompoundCurve<S>> for Curve<S> {
    fn from(value: CompoundCurve<S>) -> Self {
        Self::Compound(value)
    }
}
