pub mod config;
pub mod controller;
pub mod mapping;
pub mod status;
pub mod ui;

use crate::config::AppConfig;
use crate::controller::ControllerHandle;
use crate::ui::RayControllerUI;
use color_eyre::{eyre::eyre, Result};
use eframe::egui;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let config = setup()?;

    // Controller initialisieren
    info!("Initializing controller with configured settings");
    let controller_handle = ControllerHandle::spawn_gilrs(Some(config.controller_settings()))
        .map_err(|e| eyre!("Failed to spawn controller: {}", e))?;

    // UI starten
    info!("Starting dashboard UI");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_title(config.ui.window_title.clone())
        .with_inner_size([1100.0, 720.0])
        .with_fullscreen(config.ui.fullscreen);

    let state_receiver = controller_handle.subscribe();
    let command_sender = controller_handle.command_sender();
    let title = config.ui.window_title.clone();
    let frame_interval = Duration::from_millis(config.poll.frame_interval_ms);

    let ui_result = eframe::run_native(
        &config.ui.window_title,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(RayControllerUI::new(
                cc,
                state_receiver,
                command_sender,
                title,
                frame_interval,
            )))
        }),
    );

    // Frame-Loop beim Schließen des Fensters beenden
    controller_handle
        .shutdown()
        .await
        .map_err(|e| eyre!("Failed to stop controller: {}", e))?;

    ui_result.map_err(|e| eyre!("Dashboard terminated with error: {}", e))
}

fn setup() -> Result<AppConfig> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    setup_logging_env(config.log.max_level());

    if let Some(e) = config_error {
        warn!("Unable to load config, using defaults: {}", e);
    }
    Ok(config)
}

fn setup_logging_env(level: Level) {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
