//! Shared types and constants for the front-desk voice assistant.
//!
//! This crate provides the foundational types used across all front-desk
//! crates: the closed set of emotion labels, chat history entries for the
//! conversational model, and the fixed style profile that maps markup tags
//! to synthesis styles.
//!
//! No crate in the workspace depends on anything *except* `frontdesk-types`
//! for cross-cutting type definitions. This keeps the dependency graph clean
//! and prevents circular dependencies.

use serde::{Deserialize, Serialize};

/// The closed set of emotion labels understood by the assistant.
///
/// Labels serve three roles: callers can request one by voice (every label
/// except `Default`), the classifier outputs one per reply, and the markup
/// assembler resolves one to a synthesis style. The set is a superset of the
/// styles the speech engine supports on purpose; labels without a dedicated
/// style fall back to the default style at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Angry,
    Sad,
    Cheerful,
    Excited,
    Empathetic,
    Friendly,
    Shouting,
    Terrified,
    Unfriendly,
    Newscast,
    Narration,
    Poetry,
    Curious,
    Confused,
    Joyful,
    Delightful,
    /// Neutral delivery; the session starts here and unknown input maps here.
    Default,
}

impl EmotionLabel {
    /// Every label, in declaration order.
    pub const ALL: [EmotionLabel; 17] = [
        Self::Angry,
        Self::Sad,
        Self::Cheerful,
        Self::Excited,
        Self::Empathetic,
        Self::Friendly,
        Self::Shouting,
        Self::Terrified,
        Self::Unfriendly,
        Self::Newscast,
        Self::Narration,
        Self::Poetry,
        Self::Curious,
        Self::Confused,
        Self::Joyful,
        Self::Delightful,
        Self::Default,
    ];

    /// Returns the canonical lowercase name for this label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Angry => "angry",
            Self::Sad => "sad",
            Self::Cheerful => "cheerful",
            Self::Excited => "excited",
            Self::Empathetic => "empathetic",
            Self::Friendly => "friendly",
            Self::Shouting => "shouting",
            Self::Terrified => "terrified",
            Self::Unfriendly => "unfriendly",
            Self::Newscast => "newscast",
            Self::Narration => "narration",
            Self::Poetry => "poetry",
            Self::Curious => "curious",
            Self::Confused => "confused",
            Self::Joyful => "joyful",
            Self::Delightful => "delightful",
            Self::Default => "default",
        }
    }

    /// True for every label a caller may request by voice.
    ///
    /// `Default` is the resting state, not a requestable tone.
    pub fn requestable(self) -> bool {
        self != Self::Default
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmotionLabel {
    type Err = ParseEmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "angry" => Ok(Self::Angry),
            "sad" => Ok(Self::Sad),
            "cheerful" => Ok(Self::Cheerful),
            "excited" => Ok(Self::Excited),
            "empathetic" => Ok(Self::Empathetic),
            "friendly" => Ok(Self::Friendly),
            "shouting" => Ok(Self::Shouting),
            "terrified" => Ok(Self::Terrified),
            "unfriendly" => Ok(Self::Unfriendly),
            "newscast" => Ok(Self::Newscast),
            "narration" => Ok(Self::Narration),
            "poetry" => Ok(Self::Poetry),
            "curious" => Ok(Self::Curious),
            "confused" => Ok(Self::Confused),
            "joyful" => Ok(Self::Joyful),
            "delightful" => Ok(Self::Delightful),
            "default" => Ok(Self::Default),
            _ => Err(ParseEmotionError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown emotion label string.
#[derive(Debug, Clone)]
pub struct ParseEmotionError(pub String);

impl std::fmt::Display for ParseEmotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown emotion label: {}", self.0)
    }
}

impl std::error::Error for ParseEmotionError {}

/// Who authored a conversation history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Out-of-band steering text (prompts, triggers).
    System,
    /// The caller.
    User,
    /// The model's own replies.
    Assistant,
}

impl ChatRole {
    /// Returns the wire-format role string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry in the conversational model's ordered history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Author of the entry.
    pub role: ChatRole,
    /// Entry text.
    pub content: String,
}

impl ChatEntry {
    /// Builds an entry from a role and any string-ish content.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

mod style;
pub mod voice;

pub use style::{SpeechStyle, StyleProfile};
pub use voice::SpeakerVoice;
