//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::ui::main_window::MainWindow;
use anyhow::Context;
use eframe::egui;
use tracing::info;

/// Main application state.
pub struct App {
    main_window: MainWindow,
}

impl App {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::builtin()
            .map_err(|e| anyhow::anyhow!("failed to load the movie catalog: {e}"))?
            .clone();
        info!(categories = catalog.categories().count(), "movie catalog loaded");

        let main_window =
            MainWindow::new(config, catalog).context("failed to build the reservation form")?;

        Ok(Self { main_window })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_window.render(ctx);
    }
}
