use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
}

/// Knobs for the ranking pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Matches returned when the caller does not ask for a specific count.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Hard cap on requested result counts.
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EMBER_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EMBER_MATCHING__DEFAULT_LIMIT -> matching.default_limit
            .add_source(
                Environment::with_prefix("EMBER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EMBER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching_settings() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_limit, 20);
        assert_eq!(matching.max_limit, 100);
    }

    #[test]
    fn test_settings_deserialize_with_partial_toml() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[matching]\ndefault_limit = 8\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.default_limit, 8);
        assert_eq!(settings.matching.max_limit, 100);
    }

    #[test]
    fn test_settings_deserialize_empty_source() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.default_limit, 20);
    }
}
