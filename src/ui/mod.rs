//! egui presentation layer.

pub mod main_window;
pub mod theme;
