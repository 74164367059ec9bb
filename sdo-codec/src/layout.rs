//! Placement of ordinates and measures inside a coordinate of the ordinate array.

use serde::{Deserialize, Serialize};

use crate::error::SdoError;

/// Meaning of one slot of a coordinate in the ordinate array.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Spatial ordinate with the given index (`0` for `x`).
    Ordinate(usize),
    /// Attribute with the given index. The measure is always attribute `0`.
    Attribute(usize),
}

/// Placement of spatial ordinates and attributes inside a coordinate of `D` slots.
///
/// Without a measure every slot is spatial, so a 4D coordinate with `L = 0` keeps its fourth value
/// as an ordinate. With a measure at 1-based position `L` that slot holds attribute `0` and all
/// other slots are spatial.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrdinateLayout {
    d: usize,
    l: usize,
}

impl OrdinateLayout {
    /// Layout with `d` slots and the measure at position `l` (`0` for none).
    pub fn new(d: usize, l: usize) -> Self {
        Self { d, l }
    }

    /// Layout for coordinates with the given number of spatial ordinates and attributes.
    ///
    /// A single attribute is stored as the measure in the last slot. Four spatial ordinates take all
    /// slots of an unmeasured coordinate.
    pub fn for_shape(dimension: usize, attribute_count: usize) -> Result<Self, SdoError> {
        let dimension = dimension.max(2);
        let d = dimension + attribute_count;
        if attribute_count > 1 || d > 4 {
            return Err(SdoError::Unencodable(format!(
                "coordinates with {dimension} ordinates and {attribute_count} attributes do not fit into 4 slots with at most one measure"
            )));
        }

        let l = if attribute_count == 1 { d } else { 0 };
        Ok(Self { d, l })
    }

    /// Number of slots per coordinate.
    pub fn stride(&self) -> usize {
        self.d
    }

    /// Measure position, `0` if there is none.
    pub fn measure_position(&self) -> usize {
        self.l
    }

    /// Number of spatial ordinates.
    pub fn spatial(&self) -> usize {
        if self.l == 0 {
            self.d
        } else {
            self.d - 1
        }
    }

    /// Number of attributes.
    pub fn attributes(&self) -> usize {
        self.d - self.spatial()
    }

    /// Meaning of slot `slot`.
    pub fn slot(&self, slot: usize) -> Slot {
        match self.l {
            0 => Slot::Ordinate(slot),
            l if slot + 1 == l => Slot::Attribute(0),
            l if slot + 1 < l => Slot::Ordinate(slot),
            _ => Slot::Ordinate(slot - 1),
        }
    }

    /// Meanings of all slots in order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.d).map(|s| self.slot(s))
    }
}
