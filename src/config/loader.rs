//! Configuration File Loading
//!
//! Handles loading and saving configuration files from the standard
//! locations, with TOML as the primary format, JSON as a fallback, and
//! graceful fallback to defaults when no file exists.

use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// File stem searched for in the config directory.
const CONFIG_FILE_STEM: &str = "config";

/// Options controlling how configuration is loaded
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with the standard search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<Config> {
        Self::load_with_options(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(options: LoadOptions) -> Result<Config> {
        let mut loader = Self::new();

        if let Some((path, config)) = loader.find_and_load_config()? {
            debug!("Configuration loaded from {}", path.display());
            loader.current_path = Some(path);

            if options.validate {
                config.validate()?;
            }
            return Ok(config);
        }

        if options.create_default {
            let config = Config::default();
            if options.validate {
                config.validate()?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load configuration from an explicit path (TOML or JSON)
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(path, &content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the current path or the default location
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .current_path
            .clone()
            .unwrap_or_else(Self::get_default_config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_content =
            toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?;

        fs::write(&path, toml_content).map_err(|e| Error::ConfigSaveFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(path)
    }

    /// Path of the loaded configuration file, if any
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for path in &self.search_paths {
            if !path.exists() {
                continue;
            }
            let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let config = Self::parse(path, &content)?;
            return Ok(Some((path.clone(), config)));
        }
        Ok(None)
    }

    fn parse(path: &Path, content: &str) -> Result<Config> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::from_str(content).map_err(|e| Error::ConfigParseFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })
            }
            Some("json") => {
                serde_json::from_str(content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
            _ => Err(Error::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("folioterm");
            paths.push(app_dir.join(format!("{CONFIG_FILE_STEM}.toml")));
            paths.push(app_dir.join(format!("{CONFIG_FILE_STEM}.json")));
        }
        paths.push(PathBuf::from("folioterm.toml"));
        paths
    }

    fn get_default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folioterm")
            .join(format!("{CONFIG_FILE_STEM}.toml"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
