use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) usable for curve coordinates and
/// timers.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    /// Convert an `f64` literal (constants, basis coefficients) into this type.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn half() -> Self {
        Self::from_f64(0.5)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
