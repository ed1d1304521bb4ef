extern crate nalgebra as na;

use na::Point2;
use roi2d::query;
use roi2d::shape::{ConvexPolygon, Rect};

fn main() {
    // A triangular monitoring region in pixel coordinates.
    let roi = ConvexPolygon::from_convex_polyline(vec![
        Point2::new(200, 0),
        Point2::new(200, 200),
        Point2::new(0, 200),
    ])
    .expect("Invalid region of interest.");

    let boxes = [
        // Touches the hypotenuse at a single corner.
        Rect::new(0, 0, 100, 100),
        // Entirely on the near side of the hypotenuse.
        Rect::new(50, 50, 40, 40),
        // Disjoint bounding boxes along the x axis.
        Rect::new(201, 101, 50, 50),
        // Straddles the hypotenuse.
        Rect::new(180, 100, 50, 50),
    ];

    for (i, rect) in boxes.iter().enumerate() {
        let status = if query::intersection_test(&roi, rect) {
            "intersects the region"
        } else {
            "is outside the region"
        };
        println!("detection box {} {}", i + 1, status);
    }
}
