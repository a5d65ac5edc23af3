//! Animation clock and the state owned by the frame loop.
use crate::{
    angles::{RandomSource, generate_angles_into},
    config::LoopConfig,
    core::{math::Vector2, traits::Real},
    placement::place_points_into,
    spline::{Vertex, tessellate_into},
};

/// Elapsed time plus the reveal timer driving regeneration and the progressive draw.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock<T = f64> {
    elapsed: T,
    reveal: T,
    regeneration_interval: T,
}

impl<T> AnimationClock<T>
where
    T: Real,
{
    pub fn new(regeneration_interval: T) -> Self {
        Self {
            elapsed: T::zero(),
            reveal: T::zero(),
            regeneration_interval,
        }
    }

    /// Total time advanced so far, never reset.
    pub fn elapsed(&self) -> T {
        self.elapsed
    }

    /// Time since the last regeneration.
    pub fn reveal(&self) -> T {
        self.reveal
    }

    /// Advance both timers by `dt` seconds.
    ///
    /// Returns `true` when the reveal timer went past the regeneration interval, the reveal
    /// timer is reset to zero in that case.
    pub fn advance(&mut self, dt: T) -> bool {
        debug_assert!(dt >= T::zero(), "frame delta must not be negative");
        self.elapsed = self.elapsed + dt;
        self.reveal = self.reveal + dt;
        if self.reveal > self.regeneration_interval {
            self.reveal = T::zero();
            return true;
        }

        false
    }

    /// Number of vertices revealed at `vertices_per_second`, never more than `total`.
    pub fn revealed_count(&self, total: usize, vertices_per_second: T) -> usize {
        let revealed = (self.reveal * vertices_per_second).floor();
        revealed.to_usize().map_or(0, |count| count.min(total))
    }
}

/// Result of one [CurveAnimation::update].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUpdate {
    /// Angles and control points were regenerated this frame.
    pub regenerated: bool,
    /// Length of the vertex prefix to draw.
    pub revealed: usize,
}

/// Everything the frame loop mutates: clock, random source and the angle, control point and
/// vertex buffers.
#[derive(Debug, Clone)]
pub struct CurveAnimation<T, S> {
    config: LoopConfig,
    base_seed: u64,
    clock: AnimationClock<T>,
    source: S,
    angles: Vec<u32>,
    points: Vec<Vector2<T>>,
    vertices: Vec<Vertex<T>>,
    revealed: usize,
}

impl<T, S> CurveAnimation<T, S>
where
    T: Real,
    S: RandomSource,
{
    /// Create the animation, generating and tessellating the first curve.
    ///
    /// The first curve is drawn from `source` as given. Later regenerations reseed it with its
    /// initial seed plus the elapsed milliseconds, so one seed always replays the same animation
    /// for the same frame deltas.
    pub fn new(config: LoopConfig, source: S) -> Self {
        debug_assert!(
            config.vertex_count() <= config.max_vertices,
            "vertex count {} exceeds capacity {}",
            config.vertex_count(),
            config.max_vertices
        );

        let mut animation = Self {
            config,
            base_seed: source.seed(),
            clock: AnimationClock::new(T::from_f64(config.seconds_between_regeneration)),
            source,
            angles: Vec::with_capacity(config.max_angles),
            points: Vec::with_capacity(config.max_angles),
            vertices: Vec::with_capacity(config.max_vertices),
            revealed: 0,
        };
        animation.generate();
        animation.retessellate();
        animation
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Regenerates the control points when the reveal timer runs out, the curve is tessellated
    /// again every call.
    pub fn update(&mut self, dt: T) -> FrameUpdate {
        let regenerated = self.clock.advance(dt);
        if regenerated {
            let seed = self.regeneration_seed();
            self.source.reseed(seed);
            self.generate();
        }

        self.retessellate();
        self.revealed = self.clock.revealed_count(
            self.vertices.len(),
            T::from_f64(self.config.vertices_per_second),
        );

        FrameUpdate {
            regenerated,
            revealed: self.revealed,
        }
    }

    /// Seed of the regeneration happening now: initial seed plus elapsed milliseconds.
    pub fn regeneration_seed(&self) -> u64 {
        let elapsed_millis = (self.clock.elapsed() * T::from_f64(1000.0))
            .to_u64()
            .unwrap_or_default();
        self.base_seed.wrapping_add(elapsed_millis)
    }

    /// Draw new angles then control points from the current stream of `source`.
    fn generate(&mut self) {
        generate_angles_into(
            &mut self.angles,
            self.config.max_angles,
            self.config.angle_min_base,
            self.config.angle_max_base,
            &mut self.source,
        );
        let (inner, outer, center) = (self.inner_radius(), self.outer_radius(), self.center());
        place_points_into(
            &mut self.points,
            &self.angles,
            inner,
            outer,
            center,
            self.config.placement,
            &mut self.source,
        );
    }

    fn retessellate(&mut self) {
        let center = self.center();
        tessellate_into(
            &mut self.vertices,
            &self.points,
            self.config.vertices_per_curve,
            center,
        );
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Seed of the source given at construction.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn clock(&self) -> &AnimationClock<T> {
        &self.clock
    }

    /// Current angles (degrees), index aligned with [CurveAnimation::control_points].
    pub fn angles(&self) -> &[u32] {
        &self.angles
    }

    pub fn control_points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// The whole tessellated curve.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Prefix of the curve revealed by the last [CurveAnimation::update].
    pub fn revealed_vertices(&self) -> &[Vertex<T>] {
        &self.vertices[..self.revealed]
    }

    pub fn center(&self) -> Vector2<T> {
        self.config.center()
    }

    pub fn inner_radius(&self) -> T {
        self.config.inner_radius()
    }

    pub fn outer_radius(&self) -> T {
        self.config.outer_radius()
    }
}
