use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("synthesis canceled: {0}")]
    SynthesisCanceled(String),

    #[error("playback error: {0}")]
    Playback(String),
}
