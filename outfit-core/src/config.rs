use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::model::{DEFAULT_LOCATION, normalize_location};

/// Endpoints and options for the Open-Meteo lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenMeteoConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub language: String,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_url: "https://geocoding-api.open-meteo.com".to_string(),
            forecast_url: "https://api.open-meteo.com".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location used when none is given, e.g. "London".
    pub default_location: Option<String>,

    /// Upper bound for the whole weather lookup, applied by the caller. `0` disables it.
    pub timeout_secs: u64,

    /// Example TOML:
    /// [open_meteo]
    /// language = "de"
    pub open_meteo: OpenMeteoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_location: None, timeout_secs: 10, open_meteo: OpenMeteoConfig::default() }
    }
}

impl Config {
    /// Configured default location, or the built-in one.
    pub fn default_location(&self) -> &str {
        self.default_location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
    }

    /// Use `raw` if it has content, otherwise the default location.
    pub fn location_or_default(&self, raw: Option<&str>) -> String {
        normalize_location(raw.unwrap_or_default(), self.default_location())
    }

    pub fn set_default_location(&mut self, location: &str) {
        let trimmed = location.trim();
        self.default_location = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "outfit-advisor", "outfit-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_falls_back_to_built_in() {
        let cfg = Config::default();
        assert_eq!(cfg.default_location(), DEFAULT_LOCATION);
        assert_eq!(cfg.location_or_default(None), DEFAULT_LOCATION);
        assert_eq!(cfg.location_or_default(Some("  ")), DEFAULT_LOCATION);
    }

    #[test]
    fn configured_default_location_is_used_for_blank_input() {
        let mut cfg = Config::default();
        cfg.set_default_location(" Lisbon ");

        assert_eq!(cfg.default_location(), "Lisbon");
        assert_eq!(cfg.location_or_default(Some("")), "Lisbon");
        assert_eq!(cfg.location_or_default(Some("Porto")), "Porto");
    }

    #[test]
    fn non_blank_location_is_passed_through_untrimmed() {
        let cfg = Config::default();
        assert_eq!(cfg.location_or_default(Some("  Zzyzxville ")), "  Zzyzxville ");
    }

    #[test]
    fn clearing_default_location() {
        let mut cfg = Config::default();
        cfg.set_default_location("Lisbon");
        cfg.set_default_location("   ");

        assert_eq!(cfg.default_location, None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml(
            r#"
            default_location = "Kyoto"

            [open_meteo]
            language = "ja"
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.default_location(), "Kyoto");
        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.open_meteo.language, "ja");
        assert_eq!(cfg.open_meteo.forecast_url, OpenMeteoConfig::default().forecast_url);
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.set_default_location("Oslo");
        cfg.timeout_secs = 3;

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn zero_timeout_disables_it() {
        let mut cfg = Config::default();
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(10)));

        cfg.timeout_secs = 0;
        assert_eq!(cfg.timeout(), None);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = Config::from_toml("timeout_secs = \"soon\"").unwrap_err();
        assert!(err.to_string().contains("Invalid configuration TOML"));
    }
}
