use crate::math::{Int, Point};

/// Indicates that a vertex sequence cannot describe a region of interest.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidPolygonError {
    /// A convex polygon must have at least three vertices.
    #[error("a region of interest needs at least 3 vertices, got {0}.")]
    TooFewVertices(usize),
}

/// A 2D convex polygon with integer coordinates, used as a region of interest.
///
/// The polygon is an ordered sequence of at least three vertices. Winding
/// order (clockwise or counter-clockwise) does not matter: every query in
/// this crate computes both projection extrema per axis and is therefore
/// winding-agnostic.
///
/// Convexity of the input polyline is not checked.
///
/// # Example
///
/// ```rust
/// use roi2d::shape::ConvexPolygon;
/// use nalgebra::Point2;
///
/// let roi = ConvexPolygon::from_convex_polyline(vec![
///     Point2::new(200, 0),
///     Point2::new(200, 200),
///     Point2::new(0, 200),
/// ])
/// .unwrap();
/// assert_eq!(roi.points().len(), 3);
///
/// // Fewer than three vertices is an error, not an empty region.
/// assert!(ConvexPolygon::from_convex_polyline(vec![Point2::new(0, 0)]).is_err());
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexPolygon {
    points: Vec<Point<Int>>,
}

impl ConvexPolygon {
    /// Creates a new 2D convex polygon from a set of points assumed to
    /// describe a convex polyline.
    ///
    /// Returns `InvalidPolygonError` if fewer than three points are given.
    pub fn from_convex_polyline(
        points: Vec<Point<Int>>,
    ) -> Result<Self, InvalidPolygonError> {
        if points.len() < 3 {
            let err = InvalidPolygonError::TooFewVertices(points.len());
            log::error!("{}", err);
            return Err(err);
        }

        Ok(ConvexPolygon { points })
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Int>] {
        &self.points
    }
}
