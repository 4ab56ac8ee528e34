//! AutoGallery -- before/after showcase of finished bodywork.
//!
//! Thin binary entry point. All logic lives in the `autogallery-core`
//! and `autogallery-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use autogallery_core::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("AutoGallery starting");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid configuration: {e} -- using defaults");
            AppConfig::default()
        }
    };

    let icon = autogallery_gui::icon::generate_icon(64);
    let inner_size = [config.window_width, config.window_height];

    // Load the catalogue *before* opening the window so the first rendered
    // frame already shows the gallery.
    let state = autogallery_gui::AutoGalleryState::build(config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("AutoGallery -- Our Work")
            .with_inner_size(inner_size)
            .with_min_inner_size([480.0, 360.0])
            .with_icon(icon)
            .with_transparent(true),
        ..Default::default()
    };

    eframe::run_native(
        "AutoGallery",
        options,
        Box::new(|cc| {
            Ok(Box::new(autogallery_gui::AutoGalleryApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
