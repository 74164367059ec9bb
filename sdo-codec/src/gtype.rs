//! Packing of dimension, measure position and geometry type into a single GTYPE integer.
//!
//! `GTYPE = D * 1000 + L * 100 + TT`. The free functions here are total and do no validation,
//! [`GType::parse`] does.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::SdoError;
use crate::layout::OrdinateLayout;

/// Packs dimension, measure position and geometry type.
pub fn pack(d: i32, l: i32, tt: i32) -> i32 {
    d * 1000 + l * 100 + tt
}

/// Number of ordinates per coordinate.
pub fn d(gtype: i32) -> i32 {
    gtype / 1000
}

/// 1-based position of the measure ordinate, `0` if there is none.
pub fn l(gtype: i32) -> i32 {
    (gtype - d(gtype) * 1000) / 100
}

/// Geometry type tag.
pub fn tt(gtype: i32) -> i32 {
    gtype - d(gtype) * 1000 - l(gtype) * 100
}

/// Geometry type part of a GTYPE.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum GeometryTag {
    /// Geometry type is not known
    Unknown = 0,
    /// Single point
    Point = 1,
    /// Line or curve
    Line = 2,
    /// Polygon or surface
    Polygon = 3,
    /// Heterogeneous collection
    Collection = 4,
    /// Multipoint
    MultiPoint = 5,
    /// Multiline or multicurve
    MultiLine = 6,
    /// Multipolygon or multisurface
    MultiPolygon = 7,
    /// Solid
    Solid = 8,
    /// Multisolid
    MultiSolid = 9,
}

/// Validated GTYPE.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GType {
    d: i32,
    l: i32,
    tag: GeometryTag,
}

impl GType {
    /// Creates a GTYPE from its parts.
    pub fn new(d: i32, l: i32, tag: GeometryTag) -> Result<Self, SdoError> {
        Self::parse(pack(d, l, tag.into()))
    }

    /// Splits and validates a packed GTYPE.
    pub fn parse(gtype: i32) -> Result<Self, SdoError> {
        let (d, l, tt) = (d(gtype), l(gtype), tt(gtype));
        if !(2..=4).contains(&d) {
            return Err(SdoError::InvalidGType(gtype));
        }
        if l > d {
            return Err(SdoError::MeasurePosition { d, l });
        }
        if l != 0 && l < 3 {
            return Err(SdoError::InvalidGType(gtype));
        }

        let tag = GeometryTag::try_from_primitive(tt).map_err(|_| SdoError::InvalidGType(gtype))?;
        Ok(Self { d, l, tag })
    }

    /// Number of ordinates per coordinate.
    pub fn d(&self) -> i32 {
        self.d
    }

    /// Measure position, `0` if there is none.
    pub fn l(&self) -> i32 {
        self.l
    }

    /// Geometry type.
    pub fn tag(&self) -> GeometryTag {
        self.tag
    }

    /// Packed value.
    pub fn value(&self) -> i32 {
        pack(self.d, self.l, self.tag.into())
    }

    /// Placement of spatial ordinates and attributes inside a coordinate.
    pub fn layout(&self) -> OrdinateLayout {
        OrdinateLayout::new(self.d as usize, self.l as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn algebra() {
        for d_value in 2..=4 {
            for l_value in [0, 3, 4] {
                for tt_value in 0..=9 {
                    let gtype = pack(d_value, l_value, tt_value);
                    assert_eq!(d(gtype), d_value);
                    assert_eq!(l(gtype), l_value);
                    assert_eq!(tt(gtype), tt_value);
                }
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(pack(2, 0, 3), 2003);
        assert_eq!(pack(3, 3, 2), 3302);
        assert_eq!(tt(4407), 7);
        assert_eq!(l(4407), 4);
    }

    #[test]
    fn parse() {
        let gtype = GType::parse(3302).unwrap();
        assert_eq!(gtype.d(), 3);
        assert_eq!(gtype.l(), 3);
        assert_eq!(gtype.tag(), GeometryTag::Line);
        assert_eq!(gtype.value(), 3302);

        assert_eq!(
            GType::new(2, 0, GeometryTag::MultiPolygon).unwrap().value(),
            2007
        );
    }

    #[test]
    fn parse_rejects_invalid() {
        assert_matches!(GType::parse(1001), Err(SdoError::InvalidGType(1001)));
        assert_matches!(GType::parse(5001), Err(SdoError::InvalidGType(5001)));
        assert_matches!(
            GType::parse(2301),
            Err(SdoError::MeasurePosition { d: 2, l: 3 })
        );
        assert_matches!(
            GType::parse(3401),
            Err(SdoError::MeasurePosition { d: 3, l: 4 })
        );
        assert_matches!(GType::parse(3201), Err(SdoError::InvalidGType(3201)));
        assert_matches!(GType::parse(2010), Err(SdoError::InvalidGType(2010)));
        assert_matches!(GType::parse(-2001), Err(SdoError::InvalidGType(_)));
    }
}
