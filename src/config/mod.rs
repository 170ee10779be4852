//! Configuration file support for gridpaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/gridpaint/config.toml`. Settings include image size limits,
//! the initial pixel color, prompt preferences, and command names.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod commands;
pub mod types;

// Re-export commonly used types at module level
pub use commands::{Command, CommandsConfig};
pub use types::{CanvasConfig, ReplConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound accepted for `canvas.max_width` and `canvas.max_height`.
pub const MAX_CANVAS_DIMENSION: u32 = 4096;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// max_width = 250
/// max_height = 250
/// initial_color = 0
///
/// [repl]
/// prompt = ">>> "
///
/// [commands]
/// fill = ["F", "fill"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Image size limits and initial color
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Prompt preferences
    #[serde(default)]
    pub repl: ReplConfig,

    /// Names each command can be invoked under
    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.max_width`: 1 - 4096
    /// - `canvas.max_height`: 1 - 4096
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_DIMENSION).contains(&self.canvas.max_width) {
            log::warn!(
                "Invalid max_width {}, clamping to 1-{} range",
                self.canvas.max_width,
                MAX_CANVAS_DIMENSION
            );
            self.canvas.max_width = self.canvas.max_width.clamp(1, MAX_CANVAS_DIMENSION);
        }

        if !(1..=MAX_CANVAS_DIMENSION).contains(&self.canvas.max_height) {
            log::warn!(
                "Invalid max_height {}, clamping to 1-{} range",
                self.canvas.max_height,
                MAX_CANVAS_DIMENSION
            );
            self.canvas.max_height = self.canvas.max_height.clamp(1, MAX_CANVAS_DIMENSION);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/gridpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("gridpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes the documented example config to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.max_width, 250);
        assert_eq!(config.canvas.max_height, 250);
        assert_eq!(config.canvas.initial_color, 0);
        assert_eq!(config.repl.prompt, ">>> ");
        assert!(config.repl.show_prompt);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.commands.build_command_map().is_ok());
        assert_eq!(config.canvas.max_width, 250);
    }

    #[test]
    fn out_of_range_limits_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            max_width = 0
            max_height = 100000
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.canvas.max_width, 1);
        assert_eq!(config.canvas.max_height, MAX_CANVAS_DIMENSION);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[canvas]\nmax_width = 9000\ninitial_color = 3\n[repl]\nshow_prompt = false\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.max_width, MAX_CANVAS_DIMENSION);
        assert_eq!(config.canvas.initial_color, 3);
        assert!(!config.repl.show_prompt);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\nmax_width = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn save_round_trips_through_load() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.canvas.max_height = 40;
        config.commands.fill = vec!["bucket".to_string()];
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.max_height, 40);
        assert_eq!(loaded.commands.fill, vec!["bucket".to_string()]);
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("canvas").is_some());
        assert!(properties.get("repl").is_some());
        assert!(properties.get("commands").is_some());
    }
}
