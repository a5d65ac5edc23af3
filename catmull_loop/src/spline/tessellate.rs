use super::basis;
use crate::core::{
    math::{Vector2, wrapping_index},
    traits::Real,
};

/// 8 bit per channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}

/// Canvas quadrant relative to the center, canvas y axis points down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    BottomRight,
    BottomLeft,
    TopLeft,
    /// Also holds every coordinate lying exactly on one of the center lines.
    TopRight,
}

impl Quadrant {
    /// Quadrant of `coord` relative to `center` using strict comparisons.
    pub fn of<T: Real>(coord: Vector2<T>, center: Vector2<T>) -> Self {
        if coord.x > center.x && coord.y > center.y {
            Quadrant::BottomRight
        } else if coord.x < center.x && coord.y > center.y {
            Quadrant::BottomLeft
        } else if coord.x < center.x && coord.y < center.y {
            Quadrant::TopLeft
        } else {
            Quadrant::TopRight
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Quadrant::BottomRight => Color::YELLOW,
            Quadrant::BottomLeft => Color::CYAN,
            Quadrant::TopLeft => Color::MAGENTA,
            Quadrant::TopRight => Color::BLUE,
        }
    }
}

/// Curve sample with its quadrant color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<T = f64> {
    pub pos: Vector2<T>,
    pub color: Color,
}

impl<T> Vertex<T>
where
    T: Real,
{
    /// Vertex at `pos` colored by its quadrant around `center`.
    pub fn new(pos: Vector2<T>, center: Vector2<T>) -> Self {
        Vertex {
            pos,
            color: Quadrant::of(pos, center).color(),
        }
    }
}

/// Tessellate the closed Catmull-Rom curve through `points`, see [tessellate_into].
pub fn tessellate<T>(
    points: &[Vector2<T>],
    samples_per_segment: usize,
    center: Vector2<T>,
) -> Vec<Vertex<T>>
where
    T: Real,
{
    let mut vertices = Vec::with_capacity(points.len() * samples_per_segment);
    tessellate_into(&mut vertices, points, samples_per_segment, center);
    vertices
}

/// Clear `vertices` and fill it with the closed curve through `points` treated as a ring.
///
/// One segment per control point: the segment for index `i` in `[3, N + 3)` blends
/// `points[(i - 3) % N] ..= points[i % N]` at `t = k / samples_per_segment` for every `k` in
/// `[0, samples_per_segment)`. The output always holds `N * samples_per_segment` vertices, the
/// last segment ends where the first one starts so the loop is closed.
pub fn tessellate_into<T>(
    vertices: &mut Vec<Vertex<T>>,
    points: &[Vector2<T>],
    samples_per_segment: usize,
    center: Vector2<T>,
) where
    T: Real,
{
    vertices.clear();
    let n = points.len();
    if n == 0 {
        return;
    }

    let step = T::one() / T::from_f64(samples_per_segment as f64);
    for i in 3..n + 3 {
        let window = [
            points[wrapping_index(i - 3, n)],
            points[wrapping_index(i - 2, n)],
            points[wrapping_index(i - 1, n)],
            points[wrapping_index(i, n)],
        ];

        for k in 0..samples_per_segment {
            let t = T::from_f64(k as f64) * step;
            vertices.push(Vertex::new(basis::blend(t, &window), center));
        }
    }
}
