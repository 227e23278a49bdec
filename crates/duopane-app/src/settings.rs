// Settings: split container defaults stored in the platform config dir,
// e.g. ~/.config/duopane/settings.json on Linux.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use duopane_core::Color;
use duopane_layout::{ControllerConfig, DEFAULT_RATIO};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuopaneSettings {
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub separator: SeparatorSettings,
    #[serde(default = "default_initial_ratio")]
    pub initial_ratio: f64,
}

fn default_initial_ratio() -> f64 {
    DEFAULT_RATIO
}

impl Default for DuopaneSettings {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            separator: SeparatorSettings::default(),
            initial_ratio: default_initial_ratio(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Arrangement flip duration in milliseconds.
    #[serde(default = "default_invert_ms")]
    pub invert_duration_ms: u64,
    /// Divider grab/settle duration in milliseconds.
    #[serde(default = "default_drag_ms")]
    pub drag_duration_ms: u64,
}

fn default_invert_ms() -> u64 {
    250
}

fn default_drag_ms() -> u64 {
    150
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            invert_duration_ms: default_invert_ms(),
            drag_duration_ms: default_drag_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorSettings {
    /// RGBA, 0.0..=1.0.
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    #[serde(default = "default_selected_color")]
    pub selected_color: [f32; 4],
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,
}

fn default_color() -> [f32; 4] {
    to_rgba(Color::SEPARATOR)
}

fn default_selected_color() -> [f32; 4] {
    to_rgba(Color::SEPARATOR_SELECTED)
}

fn default_display_scale() -> f64 {
    2.0
}

impl Default for SeparatorSettings {
    fn default() -> Self {
        Self {
            color: default_color(),
            selected_color: default_selected_color(),
            display_scale: default_display_scale(),
        }
    }
}

fn to_rgba(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

fn from_rgba([r, g, b, a]: [f32; 4]) -> Color {
    Color::new(r, g, b, a)
}

impl DuopaneSettings {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            invert_animation_duration: Duration::from_millis(self.animation.invert_duration_ms),
            drag_animation_duration: Duration::from_millis(self.animation.drag_duration_ms),
            display_scale: self.separator.display_scale,
            separator_color: from_rgba(self.separator.color),
            separator_selected_color: from_rgba(self.separator.selected_color),
            initial_ratio: self.initial_ratio,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("duopane").join("settings.json"))
}

pub fn load_settings() -> DuopaneSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => DuopaneSettings::default(),
    }
}

/// Read settings from `path`. A missing file means defaults; a malformed one
/// is reported and also falls back to defaults.
pub fn load_settings_from(path: &Path) -> DuopaneSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                DuopaneSettings::default()
            }
        },
        Err(_) => DuopaneSettings::default(),
    }
}

pub fn save_settings(settings: &DuopaneSettings) {
    let path = match settings_path() {
        Some(p) => p,
        None => {
            log::warn!("Cannot determine settings path");
            return;
        }
    };

    match save_settings_to(settings, &path) {
        Ok(()) => log::info!("Wrote {}", path.display()),
        Err(e) => log::error!("Failed to write {}: {}", path.display(), e),
    }
}

pub fn save_settings_to(settings: &DuopaneSettings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}
