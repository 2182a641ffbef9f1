use crate::core::derive::DEFAULT_BANNER;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "TOOLKIT_MANAGER_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding both documents, relative to the working directory
    pub dir: PathBuf,
    pub tools_file: String,
    pub icons_file: String,
    pub default_banner: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            tools_file: "tools_data.json".to_string(),
            icons_file: "tools_icons.json".to_string(),
            default_banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    /// Load `config_path`; a missing file yields the defaults and is not created.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(config_path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.data.dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory cannot be empty".to_string()));
        }

        for (label, name) in [
            ("Tools file", &self.data.tools_file),
            ("Icons file", &self.data.icons_file),
        ] {
            if name.trim().is_empty() {
                return Err(AppError::Config(format!("{} name cannot be empty", label)));
            }
            if name.contains(['/', '\\']) {
                return Err(AppError::Config(format!(
                    "{} name '{}' must be a plain file name inside the data directory",
                    label, name
                )));
            }
        }

        if self.data.tools_file == self.data.icons_file {
            return Err(AppError::Config(
                "Tools file and icons file must be different files".to_string(),
            ));
        }

        if self.data.default_banner.trim().is_empty() {
            return Err(AppError::Config("Default banner cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn tools_path(&self) -> PathBuf {
        self.data.dir.join(&self.data.tools_file)
    }

    pub fn icons_path(&self) -> PathBuf {
        self.data.dir.join(&self.data.icons_file)
    }

    pub fn config_file_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("toolkit-manager")
            .join("config.toml")
    }
}
