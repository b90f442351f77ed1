use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_poll_throttle_micros")]
    pub poll_throttle_micros: u64,
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f32,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_poll_throttle_micros() -> u64 {
    global_constants::DEFAULT_POLL_THROTTLE_MICROS
}

fn default_overlay_opacity() -> f32 {
    global_constants::DEFAULT_OVERLAY_OPACITY
}

fn default_history_limit() -> usize {
    global_constants::DEFAULT_HISTORY_LIMIT
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            poll_throttle_micros: default_poll_throttle_micros(),
            overlay_opacity: default_overlay_opacity(),
            history_limit: default_history_limit(),
        }
    }
}

impl UserSettings {
    /// Reads settings from the user config directory. Nothing is ever
    /// written back.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, using defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;
        let settings = settings.sanitized();

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} poll throttle: {}us, overlay opacity: {}, history limit: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.poll_throttle_micros,
            settings.overlay_opacity,
            settings.history_limit
        );

        Ok(settings)
    }

    pub fn poll_throttle(&self) -> Duration {
        Duration::from_micros(self.poll_throttle_micros)
    }

    fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            log::warn!(
                "{} overlay_opacity {} out of range, using default",
                global_constants::LOG_TAG_SETTINGS,
                self.overlay_opacity
            );
            self.overlay_opacity = default_overlay_opacity();
        }
        if self.history_limit == 0 {
            log::warn!(
                "{} history_limit must be positive, using default",
                global_constants::LOG_TAG_SETTINGS
            );
            self.history_limit = default_history_limit();
        }
        self
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
