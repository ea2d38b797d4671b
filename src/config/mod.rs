//! Application configuration.
//!
//! The configuration is compiled into the binary from `assets/config.json`;
//! nothing is read from disk or the environment at runtime.

use crate::core::error::MaskError;
use crate::core::input::{IdMask, DEFAULT_PROMPT, DUI_MASK};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_CONFIG_JSON: &str = include_str!("../../assets/config.json");

/// Number of columns in the reservations table.
pub const COLUMN_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid national ID mask: {0}")]
    Mask(#[from] MaskError),

    #[error("expected 4 table columns, found {0}")]
    ColumnCount(usize),

    #[error("column '{0}' must have a positive width")]
    ColumnWidth(String),
}

/// Header and fixed pixel width of one table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub header: String,
    pub width: f32,
}

impl ColumnConfig {
    fn new(header: &str, width: f32) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

/// Texts of the success and failure notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub success_title: String,
    pub success_text: String,
    pub failure_title: String,
    pub failure_text: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success_title: "Éxito".to_string(),
            success_text: "Reserva agregada correctamente!".to_string(),
            failure_title: "Error".to_string(),
            failure_text: "Por favor, complete todos los campos correctamente.".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub id_mask: String,
    pub prompt_char: char,
    pub columns: Vec<ColumnConfig>,
    pub messages: Messages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Reservas de Cine".to_string(),
            inner_size: [640.0, 560.0],
            min_inner_size: [560.0, 480.0],
            id_mask: DUI_MASK.to_string(),
            prompt_char: DEFAULT_PROMPT,
            columns: vec![
                ColumnConfig::new("Nombre", 120.0),
                ColumnConfig::new("DUI", 100.0),
                ColumnConfig::new("Categoría", 100.0),
                ColumnConfig::new("Película", 150.0),
            ],
            messages: Messages::default(),
        }
    }
}

impl AppConfig {
    /// The configuration shipped with the application.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CONFIG_JSON)
    }

    /// Parse and check a configuration. Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.columns.len() != COLUMN_COUNT {
            return Err(ConfigError::ColumnCount(self.columns.len()));
        }
        if let Some(column) = self.columns.iter().find(|c| c.width <= 0.0) {
            return Err(ConfigError::ColumnWidth(column.header.clone()));
        }
        self.id_mask()?;
        Ok(())
    }

    /// Compile the configured national ID mask.
    pub fn id_mask(&self) -> Result<IdMask, ConfigError> {
        Ok(IdMask::parse(&self.id_mask, self.prompt_char)?)
    }
}
