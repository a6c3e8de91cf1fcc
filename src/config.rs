//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Load the built-in seed items on startup
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with the shared configuration file
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix CATALOG)
            .add_source(
                Environment::with_prefix("CATALOG")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override log level from LOG_LEVEL env var if present
            .set_override_option("logging.level", env::var("LOG_LEVEL").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from one explicit file; missing keys keep their defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.catalog.seed);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[catalog]\nseed = false\n\n[logging]\nformat = \"json\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(!config.catalog.seed);
        assert_eq!(config.logging.format, "json");
        // untouched keys keep their defaults
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load_from(Path::new("/nonexistent/catalog.toml")).is_err());
    }
}
