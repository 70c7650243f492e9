use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("websocket error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("handshake error: {0}")]
    Handshake(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("session closed")]
    SessionClosed,
}
