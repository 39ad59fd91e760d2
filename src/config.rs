use std::path::Path;

use crate::error::ConfigError;

/// Game pacing settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds the computer "thinks" before its already-computed move is
    /// applied to the board.
    pub ai_thinking_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ai_thinking_secs: 4.0,
        }
    }
}

/// Terminal frontend settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { tick_ms: 100 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.ai_thinking_secs < 0.0 {
            return Err(ConfigError::Validation(
                "game.ai_thinking_secs must be >= 0".into(),
            ));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        if self.ui.tick_ms > 1000 {
            return Err(ConfigError::Validation(
                "ui.tick_ms must be <= 1000".into(),
            ));
        }
        Ok(())
    }
}
