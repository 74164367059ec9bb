use crate::cartesian::{Rect, Winding};
use crate::error::SdoTypesError;
use crate::geometry::{max_shape, Curve};
use crate::sequence::{CoordinateAccess, PackedCoordinates};

/// Polygon with one exterior ring and any number of holes.
///
/// Rings may be straight, circular or compound. Their orientation is not normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<S = PackedCoordinates> {
    /// Exterior ring.
    pub exterior: Curve<S>,
    /// Interior rings (holes).
    pub interiors: Vec<Curve<S>>,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
}

impl<S: CoordinateAccess> Polygon<S> {
    /// Creates a new polygon.
    pub fn new(exterior: Curve<S>, interiors: Vec<Curve<S>>, srid: Option<i32>) -> Self {
        Self {
            exterior,
            interiors,
            srid,
        }
    }

    /// Returns true if the exterior ring has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &Curve<S>> {
        std::iter::once(&self.exterior).chain(&self.interiors)
    }

    /// Largest dimension and attribute count of the coordinates of the polygon.
    pub fn shape(&self) -> (usize, usize) {
        max_shape(self.rings().map(Curve::shape))
    }

    /// Bounding rectangle of the exterior ring.
    pub fn envelope(&self) -> Option<Rect> {
        self.exterior.envelope()
    }

    /// Returns a polygon with a counterclockwise exterior ring and clockwise holes.
    pub fn normalized(&self) -> Result<Self, SdoTypesError>
    where
        S: Clone,
    {
        Ok(Self {
            exterior: self.exterior.with_winding(Winding::CounterClockwise)?,
            interiors: self
                .interiors
                .iter()
                .map(|ring| ring.with_winding(Winding::Clockwise))
                .collect::<Result<_, _>>()?,
            srid: self.srid,
        })
    }
}
