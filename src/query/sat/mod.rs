//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! The Separating Axis Theorem states that two convex shapes do **not**
//! intersect if and only if there exists an axis onto which their projections
//! do not overlap. For convex polygons it is sufficient to test the edge
//! normals of both shapes, so the search space is finite:
//!
//! 1. **Select candidate axes**: the edge normals of the polygon, and the two
//!    distinct edge normals of the rectangle.
//! 2. **Project both shapes onto each axis**: compute the `[min, max]`
//!    interval of the vertices' dot products along the axis.
//! 3. **Check for a gap**: disjoint intervals on any axis prove the shapes
//!    are separated; overlap on every axis proves they intersect.
//!
//! This crate works in integer coordinates, so the candidate axes are kept
//! non-normalized: projection values are scaled by the corresponding edge
//! length, which leaves their ordering intact while avoiding any rounding.

pub use self::sat_polygon_rect::*;

mod sat_polygon_rect;
