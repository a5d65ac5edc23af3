//! Procedural closed Catmull-Rom curve generation.
//!
//! The pipeline runs leaves first:
//!
//! 1. [angles] generates a fan of angles with fixed anchors and no cardinal directions,
//! 2. [placement] turns each angle into a control point on one of two bound circles,
//! 3. [spline] tessellates the control point ring into colored vertices,
//! 4. [animation] owns the buffers and decides when to regenerate and how much of the curve is
//!    revealed.
#[macro_use]
mod macros;

pub mod angles;
pub mod animation;
pub mod config;
pub mod core;
pub mod placement;
pub mod spline;

pub use crate::angles::{RandomSource, SeededSource};
pub use crate::animation::{AnimationClock, CurveAnimation, FrameUpdate};
pub use crate::config::LoopConfig;
pub use crate::placement::PlacementPolicy;
pub use crate::spline::{Color, Quadrant, Vertex};
