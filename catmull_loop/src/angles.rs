//! Angle generation: a fan of random angles interleaved with fixed anchor angles.
//!
//! Every third index holds an anchor angle (`30 * i`), the others are drawn uniformly from a
//! window that slides forward by [ANGLE_WINDOW_STEP] degrees after each drawn angle. Drawn angles
//! avoid cardinal directions (multiples of 90) with a bounded number of redraws.
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{ANCHOR_STEP, ANGLE_WINDOW_STEP, MAX_LOOP_ITERATION},
    core::math::is_cardinal_angle,
};

/// Source of randomness for angle generation and point placement.
pub trait RandomSource {
    /// Seed of the current stream.
    fn seed(&self) -> u64;

    /// Start a new stream from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Rewind the stream back to the beginning of the current seed.
    fn restart(&mut self);

    /// Uniformly distributed integer angle in `[min, max]` (inclusive).
    fn angle_between(&mut self, min: u32, max: u32) -> u32;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;
}

/// [RandomSource] backed by a seeded [StdRng].
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn angle_between(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.r#gen()
    }
}

/// Returns `true` if `index` holds a fixed anchor angle.
#[inline]
pub fn is_anchor_index(index: usize) -> bool {
    index % 3 == 0
}

/// Anchor angle (degrees) at `index`.
#[inline]
pub fn anchor_angle(index: usize) -> u32 {
    ANCHOR_STEP * index as u32
}

/// Generate `count` angles (degrees) starting from the `[min_angle, max_angle]` window.
///
/// See [generate_angles_into] for the rules and panics.
///
/// # Examples
///
/// ```
/// # use catmull_loop::angles::*;
/// let mut source = SeededSource::new(7);
/// let angles = generate_angles(12, 10, 35, &mut source);
/// assert_eq!(angles.len(), 12);
/// assert_eq!(angles[3], 90);
/// assert!((10..=35).contains(&angles[1]));
/// ```
pub fn generate_angles<S>(count: usize, min_angle: u32, max_angle: u32, source: &mut S) -> Vec<u32>
where
    S: RandomSource,
{
    let mut angles = Vec::with_capacity(count);
    generate_angles_into(&mut angles, count, min_angle, max_angle, source);
    angles
}

/// Clear `angles` and fill it with `count` generated angles (degrees).
///
/// * Index `i` with `i % 3 == 0` gets the anchor angle `30 * i`, the window and the cardinal
///   exclusion do not apply (so anchors 0, 90, 180, 270 are cardinal).
/// * Every other index restarts `source` and draws from `[min_angle, max_angle]`, redrawing while
///   the candidate is a multiple of 90 for at most [MAX_LOOP_ITERATION] draws in total. When the
///   cap is reached the last candidate is kept even though it is cardinal.
/// * After each drawn index both window bounds move forward by [ANGLE_WINDOW_STEP].
///
/// # Panics
///
/// Panics if `min_angle > max_angle` (the window would be empty).
pub fn generate_angles_into<S>(
    angles: &mut Vec<u32>,
    count: usize,
    mut min_angle: u32,
    mut max_angle: u32,
    source: &mut S,
) where
    S: RandomSource,
{
    debug_assert!(
        min_angle <= max_angle,
        "empty angle window [{min_angle}, {max_angle}]"
    );
    angles.clear();
    for i in 0..count {
        if is_anchor_index(i) {
            angles.push(anchor_angle(i));
            continue;
        }

        source.restart();
        angles.push(draw_non_cardinal(min_angle, max_angle, source));

        min_angle += ANGLE_WINDOW_STEP;
        max_angle += ANGLE_WINDOW_STEP;
    }
}

fn draw_non_cardinal<S>(min_angle: u32, max_angle: u32, source: &mut S) -> u32
where
    S: RandomSource,
{
    let mut angle = source.angle_between(min_angle, max_angle);
    let mut draws = 1;
    while is_cardinal_angle(angle) && draws < MAX_LOOP_ITERATION {
        angle = source.angle_between(min_angle, max_angle);
        draws += 1;
    }

    if is_cardinal_angle(angle) {
        log::debug!(
            "keeping cardinal angle {angle} after {draws} draws in [{min_angle}, {max_angle}]"
        );
    }

    angle
}
