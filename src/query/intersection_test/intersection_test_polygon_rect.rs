use crate::query::sat;
use crate::shape::{ConvexPolygon, Rect};

/// Intersection test between a convex polygon and an axis-aligned rectangle.
///
/// Boundary contact counts as intersecting.
pub fn intersection_test_polygon_rect(polygon: &ConvexPolygon, rect: &Rect) -> bool {
    // The polygon is contained in its AABB, so a disjoint AABB pair is a
    // cheap proof of non-intersection. The comparison is inclusive: touching
    // AABBs fall through to the axis tests.
    if !polygon.local_aabb().intersects(&rect.local_aabb()) {
        return false;
    }

    sat::polygon_rect_find_separating_axis(polygon, rect).is_none()
}
