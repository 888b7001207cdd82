use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GramabotError, Result};
use crate::language::Language;

/// Top-level configuration for GramaBot.
///
/// Loaded from `~/.gramabot/config.toml` by default. Every section is
/// optional; missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GramabotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl GramabotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GramabotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| GramabotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat assistant accepts messages.
    pub enabled: bool,
    /// Language of new sessions. Unrecognized names mean English.
    pub default_language: String,
    /// Artificial pause before a reply is shown, in milliseconds.
    pub reply_delay_ms: u64,
    /// Maximum message length in characters.
    pub max_message_length: usize,
    /// Idle minutes after which a session is discarded.
    pub session_timeout_minutes: u32,
    /// Fixed seed for template selection. Random per process when unset.
    pub seed: Option<u64>,
}

impl ChatConfig {
    /// The configured default language, English if unrecognized.
    pub fn default_language(&self) -> Language {
        Language::from_name_or_default(&self.default_language)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_language: Language::English.name().to_string(),
            reply_delay_ms: 2000,
            max_message_length: 2000,
            session_timeout_minutes: 30,
            seed: None,
        }
    }
}

/// Response catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog replacing the built-in one.
    pub path: Option<String>,
}

/// Speech output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Hand every reply to the speech sink.
    pub speak_replies: bool,
}
