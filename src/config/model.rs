//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
}

/// UI formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Seed data settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Optional TOML file holding the initial lead collection. When unset,
    /// the built-in sample pipeline is used.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

/// Stage-transition activity log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_activity_dir")]
    pub log_dir: String,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_activity_dir(),
        }
    }
}

fn default_date_format() -> String {
    "%b %-d".to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_activity_dir() -> String {
    "~/.local/share/leadflow/activity".to_string()
}
