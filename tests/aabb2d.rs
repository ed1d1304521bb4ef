extern crate nalgebra as na;

use na::{Point2, Vector2};
use roi2d::bounding_volume::Aabb;

#[test]
fn aabb_from_points_tracks_extrema() {
    let aabb = Aabb::from_points(&[
        Point2::new(3, -1),
        Point2::new(-7, 12),
        Point2::new(0, 0),
        Point2::new(3, 12),
    ]);

    assert_eq!(aabb.mins, Point2::new(-7, -1));
    assert_eq!(aabb.maxs, Point2::new(3, 12));
    assert_eq!(aabb.extents(), Vector2::new(10, 13));
}

#[test]
fn aabb_intersects_is_inclusive() {
    let aabb1 = Aabb::new(Point2::new(0, 0), Point2::new(10, 10));
    let edge_touch = Aabb::new(Point2::new(10, 2), Point2::new(20, 8));
    let corner_touch = Aabb::new(Point2::new(10, 10), Point2::new(20, 20));
    let disjoint_x = Aabb::new(Point2::new(11, 0), Point2::new(20, 10));
    let disjoint_y = Aabb::new(Point2::new(0, -20), Point2::new(10, -1));

    assert!(aabb1.intersects(&edge_touch));
    assert!(edge_touch.intersects(&aabb1));
    assert!(aabb1.intersects(&corner_touch));
    assert!(!aabb1.intersects(&disjoint_x));
    assert!(!aabb1.intersects(&disjoint_y));
}

#[test]
fn aabb_containment() {
    let outer = Aabb::new(Point2::new(-5, -5), Point2::new(5, 5));
    let inner = Aabb::new(Point2::new(-1, -1), Point2::new(1, 1));
    let straddling = Aabb::new(Point2::new(0, 0), Point2::new(9, 2));

    assert!(outer.contains(&inner));
    assert!(outer.contains(&outer));
    assert!(!outer.contains(&straddling));
    assert!(!inner.contains(&outer));
}

#[test]
fn aabb_contains_local_point_includes_boundary() {
    let aabb = Aabb::new(Point2::new(0, 0), Point2::new(10, 10));

    assert!(aabb.contains_local_point(&Point2::new(5, 5)));
    assert!(aabb.contains_local_point(&Point2::new(0, 10)));
    assert!(aabb.contains_local_point(&Point2::new(10, 0)));
    assert!(!aabb.contains_local_point(&Point2::new(11, 5)));
    assert!(!aabb.contains_local_point(&Point2::new(5, -1)));
}
