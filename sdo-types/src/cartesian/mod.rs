//! Types and functions on geometries in cartesian coordinates.

mod arc;
mod orient;
mod point;
mod rect;

pub use arc::CircularArc;
pub use orient::{area_signed, Orientation, Winding};
pub use point::{CartesianPoint2d, Point2};
pub use rect::Rect;
