//! Agent configuration loading from file and environment variables.

use frontdesk_model::ModelConfig;
use frontdesk_room::LiveKitConfig;
use frontdesk_types::SpeakerVoice;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Top-level agent configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Media room settings.
    #[serde(default)]
    pub livekit: LiveKitConfig,

    /// Realtime model settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Speech synthesis and playback settings.
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Speech synthesis settings.
#[derive(Clone, Deserialize)]
pub struct SpeechConfig {
    /// Azure Speech resource region, e.g. "eastus".
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub api_key: String,
    /// Full synthesis endpoint override. Wins over `region` when set.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Speaking voice and audio output format.
    #[serde(default)]
    pub voice: SpeakerVoice,
    /// Local audio player used when room delivery fails.
    #[serde(default = "default_player_binary")]
    pub player_binary: String,
}

fn default_player_binary() -> String {
    "aplay".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            region: String::new(),
            api_key: String::new(),
            endpoint: None,
            voice: SpeakerVoice::default(),
            player_binary: default_player_binary(),
        }
    }
}

impl fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("region", &self.region)
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("voice", &self.voice)
            .field("player_binary", &self.player_binary)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "frontdesk_agent=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `FRONTDESK_LIVEKIT_URL` overrides `livekit.url`
/// - `FRONTDESK_LIVEKIT_API_KEY` overrides `livekit.api_key`
/// - `FRONTDESK_LIVEKIT_API_SECRET` overrides `livekit.api_secret`
/// - `FRONTDESK_MODEL_API_KEY` overrides `model.api_key`
/// - `FRONTDESK_SPEECH_REGION` overrides `speech.region`
/// - `FRONTDESK_SPEECH_API_KEY` overrides `speech.api_key`
/// - `FRONTDESK_LOG_LEVEL` overrides `logging.level`
/// - `FRONTDESK_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(url) = std::env::var("FRONTDESK_LIVEKIT_URL") {
        config.livekit.url = url;
    }
    if let Ok(key) = std::env::var("FRONTDESK_LIVEKIT_API_KEY") {
        config.livekit.api_key = key;
    }
    if let Ok(secret) = std::env::var("FRONTDESK_LIVEKIT_API_SECRET") {
        config.livekit.api_secret = secret;
    }
    if let Ok(key) = std::env::var("FRONTDESK_MODEL_API_KEY") {
        config.model.api_key = key;
    }
    if let Ok(region) = std::env::var("FRONTDESK_SPEECH_REGION") {
        config.speech.region = region;
    }
    if let Ok(key) = std::env::var("FRONTDESK_SPEECH_API_KEY") {
        config.speech.api_key = key;
    }
    if let Ok(level) = std::env::var("FRONTDESK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("FRONTDESK_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}
