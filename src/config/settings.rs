use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const SETTINGS_DIR: &str = "hyprmotion";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),
}

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the `hyprmotion` binary, read from `settings.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hyprland config read when no file is given on the command line
    pub hyprland_config: PathBuf,
    pub output: OutputFormat,
    /// Skip malformed declarations instead of failing the whole parse
    pub lenient: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hyprland_config: default_hyprland_config(),
            output: OutputFormat::default(),
            lenient: false,
        }
    }
}

impl Settings {
    /// Location of the settings file under the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Load from an explicit path, or from the default location if none is
    /// given. Only the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) if !path.exists() => Err(SettingsError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("No settings file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }
}

fn default_hyprland_config() -> PathBuf {
    let config_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("hypr").join("hyprland.conf")
}
