//! Bounding volumes.

#[doc(inline)]
pub use self::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_convex_polygon;
mod aabb_rect;
mod aabb_utils;

/// Bounding-volume computations on point clouds.
pub mod details {
    pub use super::aabb_utils::local_point_cloud_aabb;
}
