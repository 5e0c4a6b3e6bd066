mod app;
mod color;
mod data;
mod scene;
mod state;
mod ui;

use std::path::Path;

use app::CrashmapApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded at startup when present, matching the path the accident
/// export pipeline writes to.
const DEFAULT_DATA_PATH: &str = "data/withCoordinates.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Crashmap – Accident Density Viewer",
        options,
        Box::new(|_cc| {
            let mut state = AppState::default();
            let data_path = Path::new(DEFAULT_DATA_PATH);
            if data_path.exists() {
                state.load_path(data_path);
            }
            Ok(Box::new(CrashmapApp { state }))
        }),
    )
}
