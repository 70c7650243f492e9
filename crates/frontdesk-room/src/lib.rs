//! Room transport for the front-desk assistant.
//!
//! Connects the assistant to its LiveKit room from the server side: ensures
//! the room exists, mints join tokens for callers, waits for a caller to
//! arrive, and publishes reply payloads on the room's data side channel.
//!
//! Media capture and playback stay on the callers' clients; the assistant
//! itself never holds an RTC connection.

pub mod config;
pub mod error;
pub mod service;

pub use config::LiveKitConfig;
pub use error::RoomError;
pub use service::RoomService;
