//! Emotion detection for the front-desk assistant.
//!
//! Two deterministic components live here:
//!
//! - [`detect_request`]: spots an explicit tone-change request in a caller
//!   utterance ("can you speak in a cheerful tone?") and returns the
//!   requested label.
//! - [`classify`]: assigns an emotion label to arbitrary text, first by
//!   whole-word keyword counts, then by sentiment polarity. Total over all
//!   inputs; unknown text classifies as [`EmotionLabel::Default`].
//!
//! Both are pure functions over their input text. Callers decide what to do
//! with the label; nothing here touches the session or the speech engine.
//!
//! [`EmotionLabel::Default`]: frontdesk_types::EmotionLabel::Default

mod classify;
mod intent;

pub use classify::classify;
pub use intent::detect_request;
