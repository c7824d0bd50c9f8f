//! # Configuration
//!
//! Loaded once at startup, read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FERRETERIA_*`, e.g. `FERRETERIA_NAME_WIDTH=30`)
//! 2. TOML file passed with `--config <path>` (optional)
//! 3. Defaults (this file)
//!
//! ## Example File
//! ```toml
//! store_name = "Ferretería El Tornillo"
//! log_level = "info"
//! name_width = 30
//! ```

use std::path::Path;

use ferreteria_core::TableLayout;
use serde::Deserialize;

/// Default menu title.
pub const DEFAULT_STORE_NAME: &str = "Sistema de Gestión para Ferretería";

/// Environment variable prefix.
const ENV_PREFIX: &str = "FERRETERIA";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Title shown above the menu.
    pub store_name: String,

    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,

    /// Catalog column widths
    pub code_width: usize,
    pub name_width: usize,
    pub category_width: usize,
    pub price_width: usize,
    pub stock_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let layout = TableLayout::default();
        AppConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            log_level: "warn".to_string(),
            code_width: layout.code_width,
            name_width: layout.name_width,
            category_width: layout.category_width,
            price_width: layout.price_width,
            stock_width: layout.stock_width,
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, an optional TOML file and the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let mut builder = config::Config::builder()
            .set_default("store_name", defaults.store_name)?
            .set_default("log_level", defaults.log_level)?
            .set_default("code_width", defaults.code_width as i64)?
            .set_default("name_width", defaults.name_width as i64)?
            .set_default("category_width", defaults.category_width as i64)?
            .set_default("price_width", defaults.price_width as i64)?
            .set_default("stock_width", defaults.stock_width as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: AppConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the report cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let widths = [
            ("code_width", self.code_width),
            ("name_width", self.name_width),
            ("category_width", self.category_width),
            ("price_width", self.price_width),
            ("stock_width", self.stock_width),
        ];

        if let Some((key, _)) = widths.iter().find(|(_, width)| *width == 0) {
            return Err(ConfigError::InvalidValue(format!("{key} must be greater than 0")));
        }

        Ok(())
    }

    /// Catalog layout built from the configured widths.
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            code_width: self.code_width,
            name_width: self.name_width,
            category_width: self.category_width,
            price_width: self.price_width,
            stock_width: self.stock_width,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_report_layout() {
        let config = AppConfig::default();
        assert_eq!(config.layout(), TableLayout::default());
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = AppConfig {
            name_width: 0,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("name_width"));
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "ferreteria-config-test-{}.toml",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "store_name = \"Ferretería El Tornillo\"").unwrap();
            writeln!(file, "category_width = 12").unwrap();
        }

        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.store_name, "Ferretería El Tornillo");
        assert_eq!(config.category_width, 12);
        assert_eq!(config.name_width, 25);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/ferreteria.toml");
        assert!(AppConfig::load(Some(path)).is_err());
    }
}
