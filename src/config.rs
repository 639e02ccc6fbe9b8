// src/config.rs

//! Configuration for the demo driver.
//!
//! Every struct deserializes with `#[serde(default)]`, so a configuration
//! file only needs to name the settings it changes. The file is JSON and is
//! located through the `CANVAS_NATIVE_CONFIG` environment variable; without
//! it the defaults apply.
//!
//! Contract values of the library (the shared-memory retry bound, the
//! Wayland pool slack) are constants, not settings.

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CANVAS_NATIVE_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which window system to drive.
    pub backend: BackendChoice,
    pub window: WindowConfig,
    pub keyboard: KeyboardConfig,
}

/// Backend selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendChoice {
    /// Wayland if `WAYLAND_DISPLAY` is set, else X11 if `DISPLAY` is set,
    /// else headless.
    #[default]
    Auto,
    X11,
    Wayland,
    Headless,
}

impl BackendChoice {
    /// Replaces `Auto` with a concrete choice based on the environment.
    pub fn resolve(self) -> Self {
        match self {
            BackendChoice::Auto => {
                if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                    BackendChoice::Wayland
                } else if std::env::var_os("DISPLAY").is_some() {
                    BackendChoice::X11
                } else {
                    BackendChoice::Headless
                }
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Size to resize the surface to after the first frames, if any.
    pub resize_to: Option<(u32, u32)>,
    /// Frames to present at each size before moving on.
    pub frames: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "canvas".to_string(),
            width: 640,
            height: 480,
            resize_to: Some((800, 600)),
            frames: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Log every resolved key press at `info`.
    pub log_keys: bool,
}

impl Config {
    /// Loads from the file named by [`CONFIG_ENV_VAR`], falling back to the
    /// defaults (with a warning) if the file cannot be read or parsed.
    pub fn load() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)).unwrap_or_else(|e| {
                warn!("Ignoring configuration {:?}: {:#}", path, e);
                Config::default()
            }),
            None => {
                info!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_json(&text)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_fill_missing_fields_with_defaults() {
        let config = Config::from_json(r#"{ "window": { "width": 320 } }"#).unwrap();
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.backend, BackendChoice::Auto);
        assert!(!config.keyboard.log_keys);
    }

    #[test]
    fn it_should_parse_backend_names_in_lowercase() {
        let config =
            Config::from_json(r#"{ "backend": "headless", "window": { "resize_to": null } }"#)
                .unwrap();
        assert_eq!(config.backend, BackendChoice::Headless);
        assert_eq!(config.window.resize_to, None);
        assert_eq!(BackendChoice::X11.resolve(), BackendChoice::X11);
    }

    #[test]
    fn it_should_reject_malformed_json() {
        assert!(Config::from_json("{ backend: ").is_err());
        assert!(Config::load_from(Path::new("/nonexistent/canvas.json")).is_err());
    }
}
