// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedScan";

/// Camera index used when the config and CLI are both silent.
pub const DEFAULT_CAMERA_INDEX: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Index of the camera device to open for the live feed.
    #[serde(default)]
    pub camera_index: Option<u32>,
    /// Whether the viewfinder mirrors the camera horizontally,
    /// matching the webcam-preview convention.
    #[serde(default)]
    pub mirror_preview: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            camera_index: Some(DEFAULT_CAMERA_INDEX),
            mirror_preview: Some(true),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|err| crate::error::Error::Config(err.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
