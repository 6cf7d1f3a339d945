use anyhow::{Context, Result};
use duration_picker::PickerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::RunArgs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Value the host form starts with, and returns to on reset
    pub initial_minutes: u32,
    pub hours_label: String,
    pub minutes_label: String,
    /// End a keyboard hold after this many ms without key events, for
    /// terminals that never report key releases. 0 disables.
    pub key_release_timeout_ms: u64,
    /// Defaults to `picker.log` next to the config file
    pub log_file: Option<PathBuf>,
    pub picker: PickerConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            initial_minutes: 0,
            hours_label: "HR(S)".to_string(),
            minutes_label: "MIN(S)".to_string(),
            key_release_timeout_ms: 600,
            log_file: None,
            picker: PickerConfig::default(),
        }
    }
}

impl TuiConfig {
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("duration-picker"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("picker.log")),
        }
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Command line flags win over file values.
    pub fn apply_overrides(&mut self, args: &RunArgs) {
        if let Some(minutes) = args.minutes {
            self.initial_minutes = minutes;
        }
        if let Some(max_days) = args.max_days {
            self.picker.max_days = max_days;
        }
        if let Some(max_hours) = args.max_hours {
            self.picker.max_hours = max_hours;
        }
        if let Some(label) = &args.days_label {
            self.picker.days_label = label.clone();
        }
    }

    pub fn key_release_timeout(&self) -> Option<Duration> {
        (self.key_release_timeout_ms > 0).then(|| Duration::from_millis(self.key_release_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = TuiConfig::default();
        config.initial_minutes = 95;
        config.picker.max_days = 30;
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "initial_minutes = 60\n\n[picker]\nmax_hours = 8\nrepeat_interval = 100\n",
        )
        .unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.initial_minutes, 60);
        assert_eq!(config.picker.max_hours, 8);
        assert_eq!(config.picker.max_days, 365);
        assert_eq!(config.picker.repeat_interval, Duration::from_millis(100));
        assert_eq!(config.hours_label, "HR(S)");
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "initial_minutes = \"lots\"").unwrap();

        let err = TuiConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let mut config = TuiConfig::default();
        config.apply_overrides(&RunArgs {
            minutes: Some(45),
            max_days: Some(10),
            max_hours: None,
            days_label: Some("D".to_string()),
            json: false,
        });
        assert_eq!(config.initial_minutes, 45);
        assert_eq!(config.picker.max_days, 10);
        assert_eq!(config.picker.max_hours, 24);
        assert_eq!(config.picker.days_label, "D");
    }

    #[test]
    fn zero_timeout_disables_key_release_emulation() {
        let mut config = TuiConfig::default();
        assert_eq!(config.key_release_timeout(), Some(Duration::from_millis(600)));
        config.key_release_timeout_ms = 0;
        assert_eq!(config.key_release_timeout(), None);
    }
}
