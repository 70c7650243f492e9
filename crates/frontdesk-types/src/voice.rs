//! Speaker voice settings.
//!
//! Defines which synthesis voice speaks the replies and how the audio is
//! encoded. Values land in the synthesis document's `voice` and `prosody`
//! elements and in the engine's output-format request header.

use serde::{Deserialize, Serialize};

/// Voice and prosody settings for reply synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerVoice {
    /// Synthesis voice name.
    #[serde(default = "default_voice_name")]
    pub name: String,
    /// Audio output format identifier, as the engine's request header expects.
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Speaking rate multiplier.
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Pitch shift in the engine's native unit (0 is unchanged).
    #[serde(default)]
    pub pitch: i32,
}

fn default_voice_name() -> String {
    "en-US-JennyNeural".to_string()
}

fn default_output_format() -> String {
    "riff-16khz-16bit-mono-pcm".to_string()
}

fn default_rate() -> f32 {
    0.9
}

impl Default for SpeakerVoice {
    fn default() -> Self {
        Self {
            name: default_voice_name(),
            output_format: default_output_format(),
            rate: default_rate(),
            pitch: 0,
        }
    }
}
