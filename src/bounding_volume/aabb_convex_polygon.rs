use crate::bounding_volume::Aabb;
use crate::shape::ConvexPolygon;

impl ConvexPolygon {
    /// Computes the local-space [`Aabb`] of this convex polygon.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        super::details::local_point_cloud_aabb(self.points())
    }
}
