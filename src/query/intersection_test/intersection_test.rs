use crate::shape::{ConvexPolygon, Rect};

/// Tests whether a region of interest and a detection box are intersecting.
///
/// Returns `true` if the shapes overlap or touch: a rectangle sharing a
/// single edge or vertex with the region's boundary is classified as
/// intersecting. The result does not depend on the winding order of the
/// region's vertices.
///
/// # Example
///
/// ```rust
/// use roi2d::query;
/// use roi2d::shape::{ConvexPolygon, Rect};
/// use nalgebra::Point2;
///
/// let roi = ConvexPolygon::from_convex_polyline(vec![
///     Point2::new(200, 0),
///     Point2::new(200, 200),
///     Point2::new(0, 200),
/// ])
/// .unwrap();
///
/// // Straddles the region's hypotenuse.
/// assert!(query::intersection_test(&roi, &Rect::new(180, 100, 50, 50)));
/// // On the near side of the hypotenuse, no contact.
/// assert!(!query::intersection_test(&roi, &Rect::new(50, 50, 40, 40)));
/// ```
#[inline]
pub fn intersection_test(region: &ConvexPolygon, rect: &Rect) -> bool {
    super::intersection_test_polygon_rect::intersection_test_polygon_rect(region, rect)
}
