//! Compiled-in tunables of the animation and the [LoopConfig] struct gathering them.
use crate::{
    core::{
        math::{Vector2, vec2},
        traits::Real,
    },
    placement::PlacementPolicy,
};

/// Side length of the square canvas in logical units.
pub const WINDOW_SIZE: f64 = 800.0;
/// Distance from the canvas border to the inner bound circle.
pub const INNER_BORDER_OFFSET: f64 = 200.0;
/// Distance from the canvas border to the outer bound circle.
pub const OUTER_BORDER_OFFSET: f64 = 150.0;
pub const MAX_ANGLES: usize = 12;
pub const MAX_POINTS: usize = MAX_ANGLES;
/// Capacity reserved up front for the tessellated vertex buffer.
pub const MAX_VERTICES: usize = 8000;
/// Reveal speed of the progressive draw.
pub const VERTICES_PER_SECOND: f64 = 250.0;
/// Samples taken per spline segment (one segment per control point).
pub const VERTICES_PER_CURVE: usize = 100;
/// Seconds of reveal time before the control points are regenerated.
pub const TIME_TO_CHANGE_ANGLES: f64 = 5.0;
pub const ANGLE_MIN_BASE: u32 = 10;
pub const ANGLE_MAX_BASE: u32 = 35;
/// Maximum number of draws spent trying to avoid a cardinal angle.
pub const MAX_LOOP_ITERATION: u32 = 100;
/// Amount both angle window bounds move after each random (non anchor) angle.
pub const ANGLE_WINDOW_STEP: u32 = 45;
/// Anchor angle at index `i` is `ANCHOR_STEP * i`.
pub const ANCHOR_STEP: u32 = 30;

/// All tunables of one curve animation.
///
/// `Default` reproduces the compiled-in constants above, the only value normally changed is
/// `placement`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    pub window_size: f64,
    pub inner_border_offset: f64,
    pub outer_border_offset: f64,
    pub max_angles: usize,
    pub max_vertices: usize,
    pub vertices_per_second: f64,
    pub vertices_per_curve: usize,
    pub seconds_between_regeneration: f64,
    pub angle_min_base: u32,
    pub angle_max_base: u32,
    pub placement: PlacementPolicy,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            inner_border_offset: INNER_BORDER_OFFSET,
            outer_border_offset: OUTER_BORDER_OFFSET,
            max_angles: MAX_ANGLES,
            max_vertices: MAX_VERTICES,
            vertices_per_second: VERTICES_PER_SECOND,
            vertices_per_curve: VERTICES_PER_CURVE,
            seconds_between_regeneration: TIME_TO_CHANGE_ANGLES,
            angle_min_base: ANGLE_MIN_BASE,
            angle_max_base: ANGLE_MAX_BASE,
            placement: PlacementPolicy::default(),
        }
    }
}

impl LoopConfig {
    /// Default configuration with the given point placement policy.
    pub fn with_placement(placement: PlacementPolicy) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    /// Center of the canvas, all points and bound circles are placed around it.
    pub fn center<T: Real>(&self) -> Vector2<T> {
        let half = T::from_f64(self.window_size) * T::half();
        vec2(half, half)
    }

    /// Radius of the inner bound circle.
    pub fn inner_radius<T: Real>(&self) -> T {
        T::from_f64(self.window_size / 2.0 - self.inner_border_offset)
    }

    /// Radius of the outer bound circle.
    pub fn outer_radius<T: Real>(&self) -> T {
        T::from_f64(self.window_size / 2.0 - self.outer_border_offset)
    }

    /// Number of vertices produced by one tessellation pass.
    pub fn vertex_count(&self) -> usize {
        self.max_angles * self.vertices_per_curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn default_derived_values() {
        let config = LoopConfig::default();
        assert!(config.center::<f64>().fuzzy_eq(vec2(400.0, 400.0)));
        assert!(config.inner_radius::<f64>().fuzzy_eq(200.0));
        assert!(config.outer_radius::<f64>().fuzzy_eq(250.0));
        assert_eq!(config.vertex_count(), 1200);
        assert!(config.vertex_count() <= config.max_vertices);
        assert_eq!(config.placement, PlacementPolicy::Random);
    }

    #[test]
    fn with_placement_keeps_constants() {
        let config = LoopConfig::with_placement(PlacementPolicy::Alternate);
        assert_eq!(config.placement, PlacementPolicy::Alternate);
        assert_eq!(config.max_angles, MAX_POINTS);
        assert_eq!(config.vertices_per_curve, VERTICES_PER_CURVE);
    }
}
