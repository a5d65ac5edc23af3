//! Control point placement on two concentric bound circles.
use crate::{
    angles::RandomSource,
    core::{math::Vector2, traits::Real},
};

/// Chooses which bound circle each control point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Even indexes on the inner circle, odd indexes on the outer circle.
    Alternate,
    /// Independent coin flip per point.
    #[default]
    Random,
}

impl PlacementPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            PlacementPolicy::Alternate => "alternate",
            PlacementPolicy::Random => "random",
        }
    }

    /// Returns `true` if the point at `index` goes on the inner circle.
    pub fn is_on_inner_circle<S>(&self, index: usize, source: &mut S) -> bool
    where
        S: RandomSource,
    {
        match self {
            PlacementPolicy::Alternate => index % 2 == 0,
            PlacementPolicy::Random => source.coin_flip(),
        }
    }
}

/// Place one control point per angle (degrees) around `center`, see [place_points_into].
pub fn place_points<T, S>(
    angles: &[u32],
    inner_radius: T,
    outer_radius: T,
    center: Vector2<T>,
    policy: PlacementPolicy,
    source: &mut S,
) -> Vec<Vector2<T>>
where
    T: Real,
    S: RandomSource,
{
    let mut points = Vec::with_capacity(angles.len());
    place_points_into(
        &mut points,
        angles,
        inner_radius,
        outer_radius,
        center,
        policy,
        source,
    );
    points
}

/// Clear `points` and fill it with one point per angle (degrees), index aligned with `angles`.
///
/// Each point is `center + radius * (cos a, sin a)` where the radius is `inner_radius` or
/// `outer_radius` as chosen by `policy`.
pub fn place_points_into<T, S>(
    points: &mut Vec<Vector2<T>>,
    angles: &[u32],
    inner_radius: T,
    outer_radius: T,
    center: Vector2<T>,
    policy: PlacementPolicy,
    source: &mut S,
) where
    T: Real,
    S: RandomSource,
{
    points.clear();
    for (i, &degrees) in angles.iter().enumerate() {
        let radius = if policy.is_on_inner_circle(i, source) {
            inner_radius
        } else {
            outer_radius
        };

        let angle = T::from_f64(f64::from(degrees)).to_radians();
        points.push(Vector2::from_polar(center, radius, angle));
    }
}
