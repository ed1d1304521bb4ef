//! Axis Aligned Bounding Box.

use crate::math::{Int, Point, Vector};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and
/// maximum corners. Because its edges are parallel to the coordinate axes,
/// overlap tests reduce to a few integer comparisons, which is what makes it
/// useful as a pre-filter before the exact separating-axis test.
///
/// # Example
///
/// ```rust
/// use roi2d::bounding_volume::Aabb;
/// use nalgebra::Point2;
///
/// let aabb = Aabb::from_points(&[
///     Point2::new(1, 2),
///     Point2::new(-1, 4),
///     Point2::new(0, 0),
/// ]);
///
/// assert_eq!(aabb.mins, Point2::new(-1, 0));
/// assert_eq!(aabb.maxs, Point2::new(1, 4));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Int>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Int>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// `mins` must be componentwise smaller than or equal to `maxs`. This is
    /// not checked.
    #[inline]
    pub fn new(mins: Point<Int>, maxs: Point<Int>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` and `maxs` swapped to the scalar
    /// extremes.
    ///
    /// This is a convenient initial value for accumulating the bounds of a
    /// point cloud: merging any point into it makes it valid.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::new(Bounded::max_value(), Bounded::max_value()),
            Point::new(Bounded::min_value(), Bounded::min_value()),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Int>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Int> {
        self.maxs - self.mins
    }

    /// Tests whether this AABB and `other` overlap.
    ///
    /// The comparison is inclusive: two AABBs that merely touch along an
    /// edge or at a corner are considered overlapping.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Tests whether this AABB fully contains `other`.
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Tests whether the given point is inside this AABB, boundary included.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Int>) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }
}
