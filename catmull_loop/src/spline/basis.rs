//! Catmull-Rom blending functions.
//!
//! Blending four consecutive control points `p1, p2, p3, p4` with these weights interpolates the
//! curve between `p2` (at `t = 0`) and `p3` (at `t = 1`).
use crate::core::{math::Vector2, traits::Real};

/// Weight of the point before the segment start: `-0.5t + t^2 - 0.5t^3`.
#[inline]
pub fn b0<T: Real>(t: T) -> T {
    let t2 = t * t;
    -T::half() * t + t2 - T::half() * t2 * t
}

/// Weight of the segment start: `1 - 2.5t^2 + 1.5t^3`.
#[inline]
pub fn b1<T: Real>(t: T) -> T {
    let t2 = t * t;
    T::one() - T::from_f64(2.5) * t2 + T::from_f64(1.5) * t2 * t
}

/// Weight of the segment end: `0.5t + 2t^2 - 1.5t^3`.
#[inline]
pub fn b2<T: Real>(t: T) -> T {
    let t2 = t * t;
    T::half() * t + T::two() * t2 - T::from_f64(1.5) * t2 * t
}

/// Weight of the point after the segment end: `-0.5t^2 + 0.5t^3`.
#[inline]
pub fn b3<T: Real>(t: T) -> T {
    let t2 = t * t;
    -T::half() * t2 + T::half() * t2 * t
}

/// All four weights at `t`.
#[inline]
pub fn weights<T: Real>(t: T) -> [T; 4] {
    [b0(t), b1(t), b2(t), b3(t)]
}

/// Blend four consecutive control points at `t`.
///
/// # Examples
///
/// ```
/// # use catmull_loop::core::math::vec2;
/// # use catmull_loop::spline::basis::blend;
/// let window = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0), vec2(3.0, 0.0)];
/// assert!(blend(0.0, &window).fuzzy_eq(vec2(1.0, 0.0)));
/// assert!(blend(0.5, &window).fuzzy_eq(vec2(1.5, 0.0)));
/// assert!(blend(1.0, &window).fuzzy_eq(vec2(2.0, 0.0)));
/// ```
pub fn blend<T: Real>(t: T, window: &[Vector2<T>; 4]) -> Vector2<T> {
    let w = weights(t);
    window[0].scale(w[0]) + window[1].scale(w[1]) + window[2].scale(w[2]) + window[3].scale(w[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn weights_sum_to_one() {
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            let sum: f64 = weights(t).iter().sum();
            assert!(sum.fuzzy_eq(1.0), "t = {t}, sum = {sum}");
        }
    }

    #[test]
    fn endpoint_weights() {
        let start = weights(0.0f64);
        assert!(start[0].fuzzy_eq(0.0));
        assert!(start[1].fuzzy_eq(1.0));
        assert!(start[2].fuzzy_eq(0.0));
        assert!(start[3].fuzzy_eq(0.0));

        let end = weights(1.0f64);
        assert!(end[0].fuzzy_eq(0.0));
        assert!(end[1].fuzzy_eq(0.0));
        assert!(end[2].fuzzy_eq(1.0));
        assert!(end[3].fuzzy_eq(0.0));
    }

    #[test]
    fn midpoint_weights() {
        let w = weights(0.5f64);
        assert!(w[0].fuzzy_eq(-0.0625));
        assert!(w[1].fuzzy_eq(0.5625));
        assert!(w[2].fuzzy_eq(0.5625));
        assert!(w[3].fuzzy_eq(-0.0625));
    }
}
