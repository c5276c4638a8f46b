// Egg Timer Application
// Main entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use egg_timer::services::settings::SettingsService;
use egg_timer::ui_egui::{EggTimerApp, APP_TITLE};

fn main() -> eframe::Result<()> {
    // Initialize logging, defaulting to info when RUST_LOG is unset
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Egg Timer");

    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.load_or_default();
    log::info!("Loaded settings from {}", settings_service.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([300.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(EggTimerApp::new(cc, settings)))),
    )
}
