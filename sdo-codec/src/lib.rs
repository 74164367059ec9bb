//! Encoder and decoder for geometries in the Oracle `SDO_GEOMETRY` tuple form.
//!
//! A tuple ([`SdoGeometry`]) consists of a packed GTYPE ([`gtype`]), an SRID, an optional single
//! point, an element info array of `(offset, etype, interpretation)` triplets ([`elem_info`]) and a
//! flat ordinate array. [`SdoDecoder`] turns tuples into [`sdo_types::Geometry`] trees and
//! [`SdoEncoder`] does the reverse.
//!
//! ```
//! use sdo_codec::{SdoDecoder, SdoEncoder, SdoGeometry};
//! use sdo_types::Geometry;
//!
//! let tuple = SdoGeometry {
//!     gtype: 2003,
//!     srid: Some(4326),
//!     point: None,
//!     elem_info: vec![1, 1003, 3],
//!     ordinates: vec![0.0, 0.0, 2.0, 1.0],
//! };
//!
//! let geometry = SdoDecoder::default().decode(&tuple).unwrap().unwrap();
//! assert!(matches!(geometry, Geometry::Polygon(_)));
//!
//! let encoded = SdoEncoder::new().encode(&geometry).unwrap();
//! assert_eq!(encoded, tuple);
//! ```

pub mod config;
pub mod decode;
pub mod elem_info;
pub mod encode;
pub mod error;
pub mod gtype;
pub mod layout;
mod sdo;

pub use config::{CodecConfig, RectanglePolicy};
pub use decode::SdoDecoder;
pub use elem_info::{ElemInfo, ElemInfoBuilder, ElementType, Interpretation, Triplet};
pub use encode::SdoEncoder;
pub use error::SdoError;
pub use gtype::{GType, GeometryTag};
pub use layout::{OrdinateLayout, Slot};
pub use sdo::SdoGeometry;
