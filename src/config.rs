use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_PROGRESS_INTERVAL;
use crate::models::DEFAULT_MAX_RESULTS;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// Result cap used when the user gives none or an invalid one
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,
    /// Combinations between progress log lines
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_max_results() -> usize { DEFAULT_MAX_RESULTS }
fn default_progress_interval() -> usize { DEFAULT_PROGRESS_INTERVAL }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

fn environment() -> Environment {
    // e.g., NUMEROLOGY__SEARCH__PROGRESS_INTERVAL -> search.progress_interval
    Environment::with_prefix("NUMEROLOGY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with NUMEROLOGY__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::io::Write;

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.default_max_results, 10);
        assert_eq!(search.progress_interval, 1000);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "pretty");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("[search]\ndefault_max_results = 25\n", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.search.default_max_results, 25);
        assert_eq!(settings.search.progress_interval, 1000);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_from_custom_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[search]\nprogress_interval = 250\n\n[logging]\nformat = \"compact\"").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();

        assert_eq!(settings.search.progress_interval, 250);
        assert_eq!(settings.search.default_max_results, 10);
        assert_eq!(settings.logging.format, "compact");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load_from(dir.path().join("absent.toml")).is_err());
    }
}
