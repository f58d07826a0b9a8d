// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{ViewMode, ViewOptions, WeekStart};

/// The name of the application.
pub const APP_NAME: &str = "meetcal";

/// Configuration of the calendar views.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// The first day of a displayed week.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Hide Saturdays and Sundays in week and month views.
    #[serde(default = "default_workdays_only")]
    pub workdays_only: bool,

    /// The view shown when none is given.
    #[serde(default)]
    pub default_view: ViewMode,

    /// Path to a JSON export of calendar events.
    #[serde(default)]
    pub events_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            workdays_only: default_workdays_only(),
            default_view: ViewMode::default(),
            events_path: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.events_path {
            let expanded = expand_path(path)
                .map_err(|e| format!("Failed to expand events path: {e}"))?;
            self.events_path = Some(expanded);
        }
        Ok(())
    }

    /// The view options described by this configuration.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            week_start: self.week_start,
            workdays_only: self.workdays_only,
        }
    }
}

const fn default_workdays_only() -> bool {
    true
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
