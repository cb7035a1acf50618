mod app;
mod color;
mod data;
mod state;
mod theme;
mod ui;

use app::PenguinDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let dataset = match data::loader::load_builtin() {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load built-in dataset: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} penguins", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Dash – Palmer Penguins",
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx, &theme::load_default());
            Ok(Box::new(PenguinDashApp::new(dataset)))
        }),
    )
}
