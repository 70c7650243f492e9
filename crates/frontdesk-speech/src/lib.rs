//! Speech output for the front-desk assistant.
//!
//! Takes emotion-tagged reply text the rest of the pipeline produced and
//! turns it into sound: the markup assembler splits the text into styled
//! segments and renders the synthesis document, the engine posts it to the
//! cloud synthesizer, and the player sink covers local playback when room
//! delivery is unavailable.

pub mod engine;
pub mod error;
pub mod markup;
pub mod sink;

pub use engine::SpeechEngine;
pub use error::SpeechError;
pub use markup::{assemble, StyledDocument, StyledSegment};
pub use sink::PlayerSink;
