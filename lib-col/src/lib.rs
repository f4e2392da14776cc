//! Box math for a tile platformer.
//! The coordinate system is as follows:
//! * `X` points right
//! * `Y` points down
//!
//! All boxes are axis-aligned and measured in pixels.

mod aabb;
mod ground;

pub use aabb::*;
pub use ground::*;
