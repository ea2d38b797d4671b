//! Movie Reservations - a desktop form for registering movie-ticket reservations.
//!
//! The user picks a category and a movie, enters a name and a DUI, and adds the
//! reservation to the table. Reservations live in memory for the session only.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;

use anyhow::Context;
use app::App;
use config::AppConfig;
use eframe::NativeOptions;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = AppConfig::builtin().context("failed to load the built-in configuration")?;
    info!(title = %config.window_title, "starting");

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(|cc| create_app(cc, config)),
    )
    .map_err(|e| anyhow::anyhow!("window event loop failed: {e}"))
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: AppConfig,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(App::new(cc, config)?))
}
