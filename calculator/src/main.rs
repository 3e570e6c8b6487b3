//! Calculator - a desktop calculator with a tutorial page and two themes
//!
//! Keypad, keyboard shortcuts, light/dark styling.

mod app;
mod config;
mod display;
mod eval;
mod keypad;
mod page;

use app::CalculatorView;
use config::WindowConfig;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    calccore::logging::init();

    let config = WindowConfig::default();
    let options = NativeOptions {
        viewport: config.viewport(),
        ..Default::default()
    };

    let title = config.title.clone();
    tracing::info!(title = %title, "starting calculator");

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(CalculatorView::new(&config))),
    )
}
