#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod palette;
mod render;

use catmull_loop::{LoopConfig, PlacementPolicy, config::WINDOW_SIZE};

use crate::app::CurveLoopApp;

fn main() -> eframe::Result<()> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let config = LoopConfig::with_placement(PlacementPolicy::Random);
    let size = WINDOW_SIZE as f32;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Catmull-Rom Loop")
            .with_inner_size([size, size])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "catmull_loop",
        native_options,
        Box::new(move |_cc| Ok(Box::new(CurveLoopApp::new(config)))),
    )
}
