use serde::{Deserialize, Serialize};
use std::fmt;

fn default_url() -> String {
    "wss://api.openai.com/v1/realtime".to_string()
}

fn default_model() -> String {
    "gpt-4o-realtime-preview".to_string()
}

fn default_voice() -> String {
    "sage".to_string()
}

fn default_temperature() -> f64 {
    0.8
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// WebSocket endpoint of the realtime API.
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Model identifier, appended to the connection URL as a query parameter.
    #[serde(default = "default_model")]
    pub model: String,
    /// Voice identity requested in the session configuration.
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Server-side voice activity detection tuning.
    #[serde(default)]
    pub vad: VadConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: String::new(),
            model: default_model(),
            voice: default_voice(),
            temperature: default_temperature(),
            vad: VadConfig::default(),
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("voice", &self.voice)
            .field("temperature", &self.temperature)
            .field("vad", &self.vad)
            .finish()
    }
}

fn default_vad_threshold() -> f64 {
    0.6
}

fn default_prefix_padding_ms() -> u32 {
    200
}

fn default_silence_duration_ms() -> u32 {
    500
}

/// Server VAD parameters sent with `session.update`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VadConfig {
    /// Activation threshold; higher values need louder speech.
    #[serde(default = "default_vad_threshold")]
    pub threshold: f64,
    /// Audio (in ms) kept from before the detected speech start.
    #[serde(default = "default_prefix_padding_ms")]
    pub prefix_padding_ms: u32,
    /// Trailing silence (in ms) that ends an utterance.
    #[serde(default = "default_silence_duration_ms")]
    pub silence_duration_ms: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            threshold: default_vad_threshold(),
            prefix_padding_ms: default_prefix_padding_ms(),
            silence_duration_ms: default_silence_duration_ms(),
        }
    }
}
