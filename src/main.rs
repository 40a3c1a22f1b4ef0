mod app;
mod color;
mod state;
mod ui;

use app::IrisDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(IrisDashApp::default()))),
    )
}
