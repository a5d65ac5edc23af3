//! Core/common math for working with angles, indexes and 2D space.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{Vector2, vec2};
