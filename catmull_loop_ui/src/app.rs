use catmull_loop::{CurveAnimation, LoopConfig, RandomSource, SeededSource};
use eframe::egui;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{palette::Palette, render::Renderer};

/// Window app driving one [CurveAnimation] per frame.
pub struct CurveLoopApp {
    animation: CurveAnimation<f32, SeededSource>,
    renderer: Renderer,
    last_frame_time: Option<f64>,
}

impl CurveLoopApp {
    pub fn new(config: LoopConfig) -> Self {
        let source = SeededSource::new(wall_clock_seed());
        log::info!(
            "starting curve loop: seed {}, {} points placed {}, {} vertices",
            source.seed(),
            config.max_angles,
            config.placement.label(),
            config.vertex_count()
        );

        let animation = CurveAnimation::new(config, source);
        log::debug!("initial angles {:?}", animation.angles());

        Self {
            animation,
            renderer: Renderer::new(Palette::default()),
            last_frame_time: None,
        }
    }

    /// Seconds since the previous frame, zero on the first one.
    fn frame_delta(&mut self, now: f64) -> f32 {
        let dt = self.last_frame_time.map_or(0.0, |last| (now - last).max(0.0));
        self.last_frame_time = Some(now);
        dt as f32
    }
}

impl eframe::App for CurveLoopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let dt = self.frame_delta(now);

        let update = self.animation.update(dt);
        if update.regenerated {
            log::debug!(
                "regenerated control points at {:.2}s with seed {}: angles {:?}",
                self.animation.clock().elapsed(),
                self.animation.regeneration_seed(),
                self.animation.angles()
            );
        }

        egui::CentralPanel::default()
            .frame(self.renderer.panel_frame())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                self.renderer
                    .paint(&painter, response.rect, &self.animation);
            });

        ctx.request_repaint();
    }
}

/// Current Unix time in whole seconds, `0` if the system clock is before the epoch.
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
