use crate::math::{Int, Vector};
use crate::shape::{ConvexPolygon, Rect};
use crate::utils;

/// Searches for an axis separating a convex polygon from a rectangle.
///
/// The candidate axes are the edge normals of the polygon followed by the
/// normals of the rectangle's first two edges. Opposite edges of a rectangle
/// are anti-parallel and project onto the same axis, so these two normals
/// cover all four rectangle edges; for a polygon with `n` vertices the loop
/// runs `n + 2` iterations in total.
///
/// Returns the first separating axis found, or `None` if every candidate
/// shows overlapping projection intervals, which for convex shapes proves an
/// intersection. The returned axis is not normalized.
///
/// The separation condition uses strict comparisons: projection intervals
/// that merely touch at an endpoint still count as overlapping, so shapes in
/// boundary contact are never reported as separated.
pub fn polygon_rect_find_separating_axis(
    polygon: &ConvexPolygon,
    rect: &Rect,
) -> Option<Vector<Int>> {
    let vertices = polygon.points();
    let corners = rect.corners();
    let nedges = vertices.len();

    for i in 0..nedges + 2 {
        let (p0, p1) = if i < nedges {
            (&vertices[i], &vertices[(i + 1) % nedges])
        } else {
            (&corners[i - nedges], &corners[i - nedges + 1])
        };

        let axis = utils::edge_normal([p0, p1]);

        let (poly_min, poly_max) = utils::point_cloud_projection_interval(&axis, vertices);
        let (rect_min, rect_max) = utils::point_cloud_projection_interval(&axis, &corners);

        if rect_min > poly_max || rect_max < poly_min {
            return Some(axis);
        }
    }

    None
}
