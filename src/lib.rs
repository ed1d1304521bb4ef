/*!
roi2d
========

**roi2d** is a 2-dimensional geometric library for classifying axis-aligned
detection boxes against a convex region of interest, written with the rust
programming language.

All coordinates are integers, so every query is exact: there is no rounding
and no epsilon tuning. The one constraint this
puts on the caller is that dot products of the form `coordinate × coordinate`
must not overflow the scalar type [`math::Int`] (selected by the `i32`/`i64`
cargo features, `i64` by default). For pixel-space inputs this is never a
concern in practice.

The main entry point is [`query::intersection_test`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod int {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "i64")]
    pub use i64 as Int;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "i32")]
    pub use i32 as Int;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::int::*;
    pub use na::{Point2, Vector2};

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}
