use catmull_loop::{CurveAnimation, RandomSource, Vertex, core::math::Vector2};
use egui::{Painter, Pos2, Rect, Stroke, pos2};

use crate::palette::Palette;

/// Bound circle outline width (in pixels).
pub const CIRCLE_STROKE_WIDTH: f32 = 1.0;
/// Curve line width (in pixels).
pub const CURVE_STROKE_WIDTH: f32 = 1.0;
/// Control point marker radius (in pixels).
pub const POINT_MARKER_RADIUS: f32 = 2.0;

/// Maps canvas coordinates (square of `canvas_size`, y pointing down) into a screen rectangle,
/// uniformly scaled and centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    pub fn fit(canvas_size: f32, rect: Rect) -> Self {
        let scale = rect.width().min(rect.height()) / canvas_size;
        let half = canvas_size * scale / 2.0;
        let origin = rect.center() - egui::vec2(half, half);
        Self { origin, scale }
    }

    pub fn to_screen(&self, v: Vector2<f32>) -> Pos2 {
        pos2(self.origin.x + v.x * self.scale, self.origin.y + v.y * self.scale)
    }

    pub fn length(&self, canvas_length: f32) -> f32 {
        canvas_length * self.scale
    }
}

/// Render context, created once and handed the painter of every frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Panel frame clearing the canvas to the background color.
    pub fn panel_frame(&self) -> egui::Frame {
        egui::Frame::NONE.fill(self.palette.background)
    }

    /// Paint one frame of `animation` into `rect`.
    pub fn paint<S>(&self, painter: &Painter, rect: Rect, animation: &CurveAnimation<f32, S>)
    where
        S: RandomSource,
    {
        let transform = CanvasTransform::fit(animation.config().window_size as f32, rect);

        self.draw_bound_circles(
            painter,
            &transform,
            animation.center(),
            animation.inner_radius(),
            animation.outer_radius(),
        );
        self.draw_curve(painter, &transform, animation.revealed_vertices());
        self.draw_points(painter, &transform, animation.control_points());
    }

    fn draw_bound_circles(
        &self,
        painter: &Painter,
        transform: &CanvasTransform,
        center: Vector2<f32>,
        inner_radius: f32,
        outer_radius: f32,
    ) {
        let center = transform.to_screen(center);
        painter.circle_stroke(
            center,
            transform.length(inner_radius),
            Stroke::new(CIRCLE_STROKE_WIDTH, self.palette.inner_circle),
        );
        painter.circle_stroke(
            center,
            transform.length(outer_radius),
            Stroke::new(CIRCLE_STROKE_WIDTH, self.palette.outer_circle),
        );
    }

    /// Connect consecutive vertices, each line takes the color of its end vertex.
    fn draw_curve(&self, painter: &Painter, transform: &CanvasTransform, vertices: &[Vertex<f32>]) {
        for pair in vertices.windows(2) {
            let from = transform.to_screen(pair[0].pos);
            let to = transform.to_screen(pair[1].pos);
            let color = self.palette.vertex_color(pair[1].color);
            painter.line_segment([from, to], Stroke::new(CURVE_STROKE_WIDTH, color));
        }
    }

    fn draw_points(&self, painter: &Painter, transform: &CanvasTransform, points: &[Vector2<f32>]) {
        for p in points {
            painter.circle_filled(
                transform.to_screen(*p),
                POINT_MARKER_RADIUS,
                self.palette.point_marker,
            );
        }
    }
}
