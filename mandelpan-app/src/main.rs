mod app;
mod app_dir;
mod preferences;

use eframe::egui;
use tracing::info;

use mandelpan_render::Explorer;

use crate::app::MandelpanApp;
use crate::preferences::AppPreferences;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting mandelpan");

    let prefs = AppPreferences::load();
    let explorer = Explorer::new(&prefs.engine)?;
    info!(
        workers = explorer.workers(),
        iteration_cap = prefs.engine.iteration_cap,
        "Engine ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("mandelpan")
            .with_inner_size([prefs.window_width, prefs.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "mandelpan",
        options,
        Box::new(move |_cc| Ok(Box::new(MandelpanApp::new(explorer)))),
    )?;
    Ok(())
}
