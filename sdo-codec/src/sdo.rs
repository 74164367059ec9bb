use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::elem_info::ElemInfo;
use crate::error::SdoError;
use crate::gtype::GType;

/// Geometry in the SDO tuple form: GTYPE, SRID, optional POINT, ELEM_INFO and ORDINATES.
///
/// `NaN` in `point` or `ordinates` stands for an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdoGeometry {
    /// Packed dimension, measure position and geometry type.
    pub gtype: i32,
    /// Spatial reference identifier.
    pub srid: Option<i32>,
    /// Single point shortcut.
    pub point: Option<[f64; 3]>,
    /// Element info triplets, flattened.
    pub elem_info: Vec<i32>,
    /// Ordinates of all coordinates, flattened.
    pub ordinates: Vec<f64>,
}

impl SdoGeometry {
    /// Validated GTYPE.
    pub fn gtype(&self) -> Result<GType, SdoError> {
        GType::parse(self.gtype)
    }

    /// View over the element info triplets.
    pub fn elem_info(&self) -> Result<ElemInfo<'_>, SdoError> {
        ElemInfo::new(&self.elem_info)
    }
}

fn write_number(f: &mut Formatter<'_>, value: f64) -> std::fmt::Result {
    if value.is_nan() {
        write!(f, "NULL")
    } else {
        write!(f, "{value}")
    }
}

fn write_list<T>(
    f: &mut Formatter<'_>,
    values: &[T],
    mut write: impl FnMut(&mut Formatter<'_>, &T) -> std::fmt::Result,
) -> std::fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write(f, value)?;
    }
    Ok(())
}

/// Renders the geometry as an Oracle `SDO_GEOMETRY` constructor, for debugging.
impl Display for SdoGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MDSYS.SDO_GEOMETRY({},", self.gtype)?;
        match self.srid {
            Some(srid) => write!(f, "{srid},")?,
            None => write!(f, "NULL,")?,
        }

        match self.point {
            Some(point) => {
                write!(f, "MDSYS.SDO_POINT_TYPE(")?;
                write_list(f, &point, |f, v| write_number(f, *v))?;
                write!(f, "),")?;
            }
            None => write!(f, "NULL,")?,
        }

        if self.elem_info.is_empty() {
            write!(f, "NULL,")?;
        } else {
            write!(f, "MDSYS.SDO_ELEM_INFO_ARRAY(")?;
            write_list(f, &self.elem_info, |f, v| write!(f, "{v}"))?;
            write!(f, "),")?;
        }

        if self.ordinates.is_empty() {
            write!(f, "NULL)")
        } else {
            write!(f, "MDSYS.SDO_ORDINATE_ARRAY(")?;
            write_list(f, &self.ordinates, |f, v| write_number(f, *v))?;
            write!(f, "))")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_text() {
        let sdo = SdoGeometry {
            gtype: 2003,
            srid: Some(4326),
            point: None,
            elem_info: vec![1, 1003, 3],
            ordinates: vec![0.0, 0.0, 4.5, f64::NAN],
        };
        assert_eq!(
            sdo.to_string(),
            "MDSYS.SDO_GEOMETRY(2003,4326,NULL,MDSYS.SDO_ELEM_INFO_ARRAY(1,1003,3),MDSYS.SDO_ORDINATE_ARRAY(0,0,4.5,NULL))"
        );

        let point = SdoGeometry {
            gtype: 2001,
            srid: None,
            point: Some([1.0, 2.0, f64::NAN]),
            ..Default::default()
        };
        assert_eq!(
            point.to_string(),
            "MDSYS.SDO_GEOMETRY(2001,NULL,MDSYS.SDO_POINT_TYPE(1,2,NULL),NULL,NULL)"
        );
    }

    #[test]
    fn accessors() {
        let sdo = SdoGeometry {
            gtype: 3302,
            elem_info: vec![1, 2, 1],
            ..Default::default()
        };
        assert_eq!(sdo.gtype().unwrap().l(), 3);
        assert_eq!(sdo.elem_info().unwrap().etype(0), Some(2));
    }
}
