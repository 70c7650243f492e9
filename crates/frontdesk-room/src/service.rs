use crate::config::LiveKitConfig;
use crate::error::RoomError;
use livekit_api::access_token::{AccessToken, VideoGrants};
use livekit_api::services::room::{CreateRoomOptions, RoomClient, SendDataOptions};
use livekit_protocol::data_packet::Kind as DataPacketKind;
use livekit_protocol::{ParticipantInfo, Room};
use std::fmt;
use std::time::Duration;

/// Interval between participant-list polls while waiting for a caller.
const PARTICIPANT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Server-side handle on the front-desk room.
///
/// Wraps the room service API for the one room this assistant staffs: room
/// creation, caller join tokens, waiting for a caller to arrive, and the
/// data side channel replies are published on.
pub struct RoomService {
    config: LiveKitConfig,
    room_client: RoomClient,
}

impl fmt::Debug for RoomService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomService")
            .field("config", &self.config)
            .finish()
    }
}

impl RoomService {
    pub fn new(config: LiveKitConfig) -> Self {
        let room_client =
            RoomClient::with_api_key(&config.url, &config.api_key, &config.api_secret);
        Self {
            config,
            room_client,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.config.url.is_empty()
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Name of the room this service is bound to.
    pub fn room_name(&self) -> &str {
        &self.config.room
    }

    /// Creates the front-desk room if it does not already exist.
    pub async fn ensure_room(&self) -> Result<Room, RoomError> {
        let options = CreateRoomOptions::default();

        self.room_client
            .create_room(&self.config.room, options)
            .await
            .map_err(|e| RoomError::RoomService(e.to_string()))
    }

    /// Mints a join token for a caller.
    pub fn mint_join_token(
        &self,
        participant_identity: &str,
        participant_name: &str,
    ) -> Result<String, RoomError> {
        let token = AccessToken::with_api_key(&self.config.api_key, &self.config.api_secret)
            .with_identity(participant_identity)
            .with_name(participant_name)
            .with_grants(VideoGrants {
                room_join: true,
                room: self.config.room.clone(),
                can_publish: true,
                can_subscribe: true,
                can_publish_data: true,
                ..Default::default()
            })
            .with_ttl(Duration::from_secs(self.config.token_ttl_seconds));

        token.to_jwt().map_err(RoomError::AccessToken)
    }

    /// Suspends until a participant is present in the room, then returns
    /// that participant.
    ///
    /// Polls the room service; a missing room or an unreachable server reads
    /// as "nobody here yet" and the wait continues. The call does not time
    /// out on its own.
    pub async fn wait_for_participant(&self) -> Result<ParticipantInfo, RoomError> {
        if !self.is_enabled() {
            return Err(RoomError::Config(
                "LiveKit URL is not configured".to_string(),
            ));
        }

        loop {
            match self.room_client.list_participants(&self.config.room).await {
                Ok(participants) => {
                    if let Some(participant) = participants.into_iter().next() {
                        return Ok(participant);
                    }
                }
                Err(e) => {
                    tracing::debug!(room = %self.config.room, error = %e, "participant poll failed");
                }
            }
            tokio::time::sleep(PARTICIPANT_POLL_INTERVAL).await;
        }
    }

    /// Publishes a payload on the room's data side channel.
    ///
    /// Fire-and-forget from the caller's point of view: delivery to any
    /// particular participant is not guaranteed.
    pub async fn publish_data(&self, payload: Vec<u8>, topic: &str) -> Result<(), RoomError> {
        let options = SendDataOptions {
            kind: DataPacketKind::Reliable,
            topic: Some(topic.to_string()),
            ..Default::default()
        };

        self.room_client
            .send_data(&self.config.room, payload, options)
            .await
            .map_err(|e| RoomError::RoomService(e.to_string()))
    }

    /// Returns the number of participants currently in the room.
    /// Returns 0 if the room does not exist.
    pub async fn participant_count(&self) -> Result<u32, RoomError> {
        match self.room_client.list_participants(&self.config.room).await {
            Ok(participants) => Ok(participants.len() as u32),
            Err(_) => Ok(0), // Room doesn't exist yet
        }
    }
}
