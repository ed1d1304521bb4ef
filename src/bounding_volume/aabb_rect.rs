use crate::bounding_volume::Aabb;
use crate::math::Point;
use crate::shape::Rect;

impl Rect {
    /// Computes the local-space [`Aabb`] of this rectangle.
    ///
    /// This is the rectangle itself, `[left, left + width] × [top, top + height]`.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(
            Point::new(self.left, self.top),
            Point::new(self.left + self.width, self.top + self.height),
        )
    }
}
