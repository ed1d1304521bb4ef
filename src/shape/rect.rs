use crate::math::{Int, Point};

/// An axis-aligned rectangle, typically a detection box from a vision pipeline.
///
/// The rectangle is described the way detection boxes usually are: by its
/// top-left corner and its extents. Coordinates follow the image convention
/// (`y` grows downward), although nothing in this crate depends on it.
///
/// `width` and `height` are expected to be non-negative. This is not checked;
/// a zero-extent rectangle is a valid degenerate input (a segment or a single
/// point) and is handled by the normal query path.
///
/// # Example
///
/// ```rust
/// use roi2d::shape::Rect;
/// use nalgebra::Point2;
///
/// let rect = Rect::new(10, 20, 30, 40);
/// assert_eq!(rect.corners()[0], Point2::new(10, 20));
/// assert_eq!(rect.corners()[2], Point2::new(40, 60));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(C)]
pub struct Rect {
    /// The `x` coordinate of the left edge.
    pub left: Int,
    /// The `y` coordinate of the top edge.
    pub top: Int,
    /// The extent along the `x` axis. Expected non-negative.
    pub width: Int,
    /// The extent along the `y` axis. Expected non-negative.
    pub height: Int,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and its extents.
    #[inline]
    pub fn new(left: Int, top: Int, width: Int, height: Int) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The four corners of this rectangle.
    ///
    /// The corners are returned in a fixed winding order: top-left,
    /// top-right, bottom-right, bottom-left. Consecutive corners form the
    /// rectangle's edges, `corners[3]` closing back to `corners[0]`.
    #[inline]
    pub fn corners(&self) -> [Point<Int>; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.left + self.width, self.top),
            Point::new(self.left + self.width, self.top + self.height),
            Point::new(self.left, self.top + self.height),
        ]
    }
}
