use crate::math::{Int, Point, Vector};

/// Computes the interval covered by the projections of a point cloud onto `axis`.
///
/// Each projection is the dot product of `axis` with the point's position
/// vector. Since the axis is not normalized, the returned `(min, max)` values
/// are scaled by the axis length: they are only meaningful when compared
/// against an interval computed along the same axis.
pub fn point_cloud_projection_interval(
    axis: &Vector<Int>,
    points: &[Point<Int>],
) -> (Int, Int) {
    let mut min = Int::MAX;
    let mut max = Int::MIN;

    for pt in points {
        let proj = axis.dot(&pt.coords);
        min = min.min(proj);
        max = max.max(proj);
    }

    (min, max)
}

#[cfg(test)]
mod test {
    use super::point_cloud_projection_interval;
    use crate::math::{Point, Vector};

    #[test]
    fn projection_interval_tracks_both_extrema() {
        let points = [Point::new(0, 0), Point::new(2, 1), Point::new(-3, 4)];

        // Along +x the extrema are -3 and 2; along -x they swap and negate.
        assert_eq!(
            point_cloud_projection_interval(&Vector::new(1, 0), &points),
            (-3, 2)
        );
        assert_eq!(
            point_cloud_projection_interval(&Vector::new(-1, 0), &points),
            (-2, 3)
        );
    }

    #[test]
    fn projection_can_be_negative() {
        // The interval must be seeded from the scalar extremes, not zero.
        let points = [Point::new(-10, 0), Point::new(-4, 0)];
        assert_eq!(
            point_cloud_projection_interval(&Vector::new(1, 0), &points),
            (-10, -4)
        );
    }
}
