use crate::bounding_volume::Aabb;
use crate::math::{Int, Point};

/// Computes the AABB of a set of points.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Int>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud AABB construction: the input iterator should yield at least one point.",
    );
    let mut min: Point<Int> = *p0;
    let mut max: Point<Int> = *p0;

    for pt in it {
        min = min.inf(pt);
        max = max.sup(pt);
    }

    Aabb::new(min, max)
}
