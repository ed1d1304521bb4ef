//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_polygon_rect::intersection_test_polygon_rect;

mod intersection_test;
mod intersection_test_polygon_rect;
