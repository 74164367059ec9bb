//! ELEM_INFO triplets: `(STARTING_OFFSET, ETYPE, INTERPRETATION)`.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use sdo_types::OrdinateList;
use serde::{Deserialize, Serialize};

use crate::error::SdoError;

/// Element type of a triplet.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum ElementType {
    /// User defined element
    Custom = 0,
    /// Point or point cluster
    Point = 1,
    /// Line string
    Line = 2,
    /// Polygon ring of unspecified role
    Polygon = 3,
    /// Compound line string, interpretation is the number of components
    Compound = 4,
    /// Compound polygon ring of unspecified role
    CompoundPolygon = 5,
    /// Exterior polygon ring
    PolygonExterior = 1003,
    /// Interior polygon ring
    PolygonInterior = 2003,
    /// Exterior compound polygon ring
    CompoundPolygonExterior = 1005,
    /// Interior compound polygon ring
    CompoundPolygonInterior = 2005,
    /// Exterior ring of a face
    FaceExterior = 1006,
    /// Interior ring of a face
    FaceInterior = 1007,
}

impl ElementType {
    /// Tags that can start a polygon.
    pub const EXTERIOR_RINGS: &'static [i32] = &[3, 1003, 5, 1005, 1006];
    /// Tags that always describe a hole.
    pub const INTERIOR_RINGS: &'static [i32] = &[2003, 2005, 1007];
    /// Tags of line elements.
    pub const LINES: &'static [i32] = &[2, 4];

    /// Returns true for polygon ring tags.
    pub fn is_ring(self) -> bool {
        !matches!(
            self,
            ElementType::Custom | ElementType::Point | ElementType::Line | ElementType::Compound
        )
    }

    /// Returns true for tags that are holes regardless of orientation.
    pub fn is_interior(self) -> bool {
        matches!(
            self,
            ElementType::PolygonInterior
                | ElementType::CompoundPolygonInterior
                | ElementType::FaceInterior
        )
    }

    /// Returns true for ring tags that do not say whether the ring is a hole.
    pub fn is_ambiguous_ring(self) -> bool {
        matches!(self, ElementType::Polygon | ElementType::PolygonExterior)
    }

    /// Returns true for elements whose interpretation is a number of sub-elements.
    pub fn is_compound(self) -> bool {
        matches!(
            self,
            ElementType::Compound
                | ElementType::CompoundPolygon
                | ElementType::CompoundPolygonExterior
                | ElementType::CompoundPolygonInterior
        )
    }
}

/// Interpretation of a simple element.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum Interpretation {
    /// Straight segments
    Straight = 1,
    /// Circular arcs, three points per arc with shared endpoints
    Arcs = 2,
    /// Axis-aligned rectangle given by its minimum and maximum corner
    Rectangle = 3,
    /// Circle given by three points on its circumference
    Circle = 4,
}

/// One element info triplet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    /// 1-based index of the first ordinate of the element.
    pub starting_offset: i32,
    /// Element type tag.
    pub etype: i32,
    /// Interpretation or number of sub-elements.
    pub interpretation: i32,
}

/// Read-only view over an element info array.
///
/// Accessors return `None` past the last triplet, which callers use to detect the end of the list.
#[derive(Debug, Clone, Copy)]
pub struct ElemInfo<'a> {
    offsets: OrdinateList<'a, i32>,
    etypes: OrdinateList<'a, i32>,
    interpretations: OrdinateList<'a, i32>,
}

impl<'a> ElemInfo<'a> {
    /// Wraps an element info array. Its length must be a multiple of 3.
    pub fn new(values: &'a [i32]) -> Result<Self, SdoError> {
        if values.len() % 3 != 0 {
            return Err(SdoError::Malformed {
                triplet: values.len() / 3,
                reason: format!(
                    "element info length {} is not a multiple of 3",
                    values.len()
                ),
            });
        }

        Ok(Self {
            offsets: OrdinateList::new(values, 0, 3)?,
            etypes: OrdinateList::new(values, 1, 3)?,
            interpretations: OrdinateList::new(values, 2, 3)?,
        })
    }

    /// Number of triplets.
    pub fn len(&self) -> usize {
        self.offsets.size()
    }

    /// Returns true if there are no triplets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Starting offset of triplet `triplet`.
    pub fn starting_offset(&self, triplet: usize) -> Option<i32> {
        self.offsets.get(triplet).ok()
    }

    /// Element type of triplet `triplet`.
    pub fn etype(&self, triplet: usize) -> Option<i32> {
        self.etypes.get(triplet).ok()
    }

    /// Interpretation of triplet `triplet`.
    pub fn interpretation(&self, triplet: usize) -> Option<i32> {
        self.interpretations.get(triplet).ok()
    }

    /// Triplet `triplet`.
    pub fn triplet(&self, triplet: usize) -> Option<Triplet> {
        Some(Triplet {
            starting_offset: self.starting_offset(triplet)?,
            etype: self.etype(triplet)?,
            interpretation: self.interpretation(triplet)?,
        })
    }

    /// Iterates over all triplets.
    pub fn iter(&self) -> impl Iterator<Item = Triplet> + '_ {
        (0..self.len()).filter_map(|i| self.triplet(i))
    }
}

/// Accumulates triplets while the ordinates of a geometry are written.
///
/// Tracks the 1-based offset of the next ordinate so that every pushed element starts where the
/// previous one ended.
#[derive(Debug, Clone)]
pub struct ElemInfoBuilder {
    values: Vec<i32>,
    offset: usize,
    dimension: usize,
}

impl ElemInfoBuilder {
    /// Creates an empty builder for coordinates of `dimension` slots.
    pub fn new(dimension: usize) -> Self {
        Self {
            values: vec![],
            offset: 1,
            dimension,
        }
    }

    /// 1-based offset of the next ordinate.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of triplets pushed so far.
    pub fn len(&self) -> usize {
        self.values.len() / 3
    }

    /// Returns true if nothing was pushed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds a simple element of `point_count` coordinates.
    pub fn push(&mut self, etype: ElementType, interpretation: i32, point_count: usize) {
        self.push_component(etype, interpretation, point_count, false);
    }

    /// Adds the header of a compound element. The header has no coordinates of its own.
    pub fn push_header(&mut self, etype: ElementType, component_count: usize) {
        self.record(self.offset, etype, component_count as i32);
    }

    /// Adds a component of a compound element.
    ///
    /// If `shares_start` is set, the first coordinate of the component is the last coordinate
    /// written before, so the component starts one coordinate back and adds one coordinate less.
    pub fn push_component(
        &mut self,
        etype: ElementType,
        interpretation: i32,
        point_count: usize,
        shares_start: bool,
    ) {
        let (start, written) = if shares_start && self.offset > self.dimension {
            (self.offset - self.dimension, point_count.saturating_sub(1))
        } else {
            (self.offset, point_count)
        };

        self.record(start, etype, interpretation);
        self.offset += written * self.dimension;
    }

    fn record(&mut self, offset: usize, etype: ElementType, interpretation: i32) {
        self.values
            .extend([offset as i32, etype.into(), interpretation]);
    }

    /// Returns the accumulated element info array.
    pub fn finish(self) -> Vec<i32> {
        self.values
    }
}
