#![warn(clippy::all, rust_2018_idioms)]

use drawboard::config::{APP_TITLE, INITIAL_WINDOW_SIZE};
use drawboard::DrawBoardApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(INITIAL_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(DrawBoardApp::new(cc)))),
    )
}
