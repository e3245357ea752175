// main.rs - Opens the Game of Life window and runs it until closed

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life::config::LifeConfig;
use life::error::LifeError;
use life::grid::BOARD_DIMENSION;
use life::ui::LifeApp;

fn main() -> Result<(), LifeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = LifeConfig::default();
    config.validate()?;

    let side = config.window_side();
    let title = config.title;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side, side]),
        ..Default::default()
    };

    info!(
        board = BOARD_DIMENSION,
        pixel_size = config.pixel_size,
        cycle_time = config.cycle_time_normal,
        "starting game of life"
    );

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(config))),
    )
    .map_err(|e| {
        error!(error = %e, "window host failed");
        LifeError::from(e)
    })
}
