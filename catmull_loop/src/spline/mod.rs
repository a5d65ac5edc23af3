//! Catmull-Rom basis and tessellation of the closed control point ring into colored vertices.
pub mod basis;
mod tessellate;

pub use tessellate::*;
