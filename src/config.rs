use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::exposure::{ColorFilter, ExposureSettings};

/// Top-level configuration for the simulator.
///
/// Controls the capture settings the simulator starts from and how readouts
/// are printed.
///
/// # Loading
///
/// ```rust,no_run
/// use shutter_sim::config::Config;
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.startup.iso = 800.0;
/// config.output.json = true;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Capture settings applied when the simulator starts.
    pub startup: StartupSettings,
    /// Output behavior.
    pub output: OutputConfig,
}

/// Capture settings the simulator starts from.
///
/// These seed the model at startup only; `reset` always returns to the
/// built-in defaults, not to these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupSettings {
    pub iso: f64,
    pub aperture: f64,
    pub shutter_speed: f64,
    pub focal_length: f64,
    pub filter: ColorFilter,
}

/// Output and behavior configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// If `true`, print readouts as JSON instead of plain text.
    pub json: bool,
}

impl StartupSettings {
    /// Convert to the model's settings record (validated by the model on entry).
    pub fn to_settings(&self) -> ExposureSettings {
        ExposureSettings {
            iso: self.iso,
            aperture: self.aperture,
            shutter_speed: self.shutter_speed,
            focal_length: self.focal_length,
            filter: self.filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let defaults = ExposureSettings::default();
        Self {
            startup: StartupSettings {
                iso: defaults.iso,
                aperture: defaults.aperture,
                shutter_speed: defaults.shutter_speed,
                focal_length: defaults.focal_length,
                filter: defaults.filter,
            },
            output: OutputConfig { json: false },
        }
    }
}

impl Config {
    /// Resolve the config file path — same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }
}
