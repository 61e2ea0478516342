//! plot-config: persisted plot panel configuration, display helpers, and validation.

pub mod display;
pub mod i18n;
pub mod migrate;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use display::{is_reference_line_plot_path_type, plot_path_display_name, presence};
pub use i18n::{Catalog, Translate};
pub use migrate::{StoredPlotConfig, migrate_plot_config};
pub use schema::*;
pub use validate::{ValidationError, validate_plot_config};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_json(content: &str) -> ConfigResult<PlotConfig> {
    let stored: StoredPlotConfig = serde_json::from_str(content)?;
    finish_load(stored)
}

pub fn parse_yaml(content: &str) -> ConfigResult<PlotConfig> {
    let stored: StoredPlotConfig = serde_yaml::from_str(content)?;
    finish_load(stored)
}

fn finish_load(stored: StoredPlotConfig) -> ConfigResult<PlotConfig> {
    let config = migrate_plot_config(stored);
    validate_plot_config(&config)?;
    Ok(config)
}

pub fn load_json(path: &Path) -> ConfigResult<PlotConfig> {
    tracing::debug!(path = %path.display(), "loading plot config");
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &Path, config: &PlotConfig) -> ConfigResult<()> {
    validate_plot_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved plot config");
    Ok(())
}

pub fn load_yaml(path: &Path) -> ConfigResult<PlotConfig> {
    tracing::debug!(path = %path.display(), "loading plot config");
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &Path, config: &PlotConfig) -> ConfigResult<()> {
    validate_plot_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved plot config");
    Ok(())
}

/// Load by file extension: `.json`, or `.yaml`/`.yml`.
pub fn load(path: &Path) -> ConfigResult<PlotConfig> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        Some("yaml" | "yml") => load_yaml(path),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
