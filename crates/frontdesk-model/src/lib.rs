//! Realtime conversational model session.
//!
//! Connects to a hosted speech-to-speech model over WebSocket, keeps the
//! conversation history, and surfaces turn events to the agent loop. Replies
//! are consumed as text; styled synthesis happens downstream in
//! `frontdesk-speech`.

mod client;
mod config;
mod error;

pub use client::{RealtimeModel, SessionEvent};
pub use config::{ModelConfig, VadConfig};
pub use error::ModelError;
