use catmull_loop::Color;
use egui::Color32;

/// Fixed color palette of the canvas.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Canvas clear color
    pub background: Color32,
    /// Outline of the inner bound circle
    pub inner_circle: Color32,
    /// Outline of the outer bound circle
    pub outer_circle: Color32,
    /// Control point markers
    pub point_marker: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            inner_circle: Color32::from_rgba_unmultiplied(0, 255, 0, 100), // Translucent green
            outer_circle: Color32::from_rgba_unmultiplied(255, 0, 0, 100), // Translucent red
            point_marker: Color32::RED,
        }
    }
}

impl Palette {
    /// Convert a curve vertex color into an egui color.
    pub fn vertex_color(&self, color: Color) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}
