// User configuration loaded from ~/.config/modedeck/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::theme::THEME_DARK;

/// Application configuration, deserialized from `~/.config/modedeck/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Ticks per second; each tick is one carousel animation frame (default: 30).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// UI color theme: "dark" or "light".
    #[serde(default = "default_theme")]
    pub theme: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// File path or http(s) URL of the catalog JSON.
    #[serde(default = "default_catalog_source")]
    pub source: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselConfig {
    /// Columns per tick while the pointer sits in a hot zone.
    #[serde(default = "default_hover_speed")]
    pub hover_speed: f64,
    /// Scroll distance per column of drag.
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: f64,
    /// Fraction of the strip width on each side that triggers auto-scroll.
    #[serde(default = "default_hot_zone")]
    pub hot_zone: f64,
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    #[serde(default = "default_card_gap")]
    pub card_gap: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Level for this app's own log lines: error, warn, info, debug or trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file to write instead of `<data_dir>/modedeck/modedeck.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Highest tick rate honoured; anything above runs at this rate.
pub const MAX_FRAME_RATE: f64 = 240.0;

fn default_frame_rate() -> f64 {
    30.0
}

fn default_theme() -> String {
    THEME_DARK.to_string()
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_catalog_source() -> String {
    "data.json".to_string()
}

fn default_hover_speed() -> f64 {
    0.5
}

fn default_drag_multiplier() -> f64 {
    1.5
}

fn default_hot_zone() -> f64 {
    0.2
}

fn default_card_width() -> u16 {
    24
}

fn default_card_gap() -> u16 {
    2
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            theme: default_theme(),
        }
    }
}

impl GeneralConfig {
    /// Time between ticks. The rate is clamped to `1..=MAX_FRAME_RATE`;
    /// a non-finite or non-positive rate falls back to the default.
    pub fn tick_period(&self) -> Duration {
        let rate = if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            self.frame_rate.clamp(1.0, MAX_FRAME_RATE)
        } else {
            default_frame_rate()
        };
        Duration::from_secs_f64(1.0 / rate)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            hover_speed: default_hover_speed(),
            drag_multiplier: default_drag_multiplier(),
            hot_zone: default_hot_zone(),
            card_width: default_card_width(),
            card_gap: default_card_gap(),
        }
    }
}

impl CarouselConfig {
    /// Horizontal distance from one card's left edge to the next.
    pub fn card_pitch(&self) -> u16 {
        self.card_width.max(1).saturating_add(self.card_gap)
    }
}

impl Config {
    /// Read config from the default location, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("modedeck")
            .join("config.toml")
    }
}
