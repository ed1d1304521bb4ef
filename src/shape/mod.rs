//! Shapes supported by roi2d.

pub use self::convex_polygon::{ConvexPolygon, InvalidPolygonError};
pub use self::rect::Rect;

mod convex_polygon;
mod rect;
