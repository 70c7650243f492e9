use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    #[error("access token error: {0}")]
    AccessToken(#[from] livekit_api::access_token::AccessTokenError),

    #[error("room service error: {0}")]
    RoomService(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
