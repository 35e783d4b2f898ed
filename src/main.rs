#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use raster_paint::{CanvasConfig, PaintApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = CanvasConfig::load_or_default(config_path.as_deref());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Drawing Canvas")
            .with_inner_size([config.width as f32 + 240.0, config.height as f32 + 60.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Drawing Canvas",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )
}
