use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use frontdesk_types::{ChatEntry, ChatRole};

use crate::config::ModelConfig;
use crate::error::ModelError;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, WsMessage>;
type WsSource = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Session-level events surfaced to the agent loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The service acknowledged the session configuration.
    Ready,
    /// A caller utterance finished transcribing.
    UserSpeechCommitted { text: String },
    /// A completed assistant reply.
    Reply { text: String },
    /// The model finished its current turn.
    TurnComplete,
    /// The service reported an error.
    Error { message: String },
}

/// Requests travelling from the agent to the writer task.
enum OutboundMessage {
    Item { role: ChatRole, content: String },
    GenerateReply,
    Instructions(String),
    Close,
}

/// One decoded server frame.
#[derive(Debug, Clone, PartialEq)]
enum ServerEvent {
    SessionReady,
    UserTranscript(String),
    ReplyDelta(String),
    ReplyDone,
    ReplyCancelled,
    ServiceError(String),
    Ignored(String),
}

/// Client for one realtime model session.
///
/// The conversation history lives here and every entry is mirrored to the
/// service, so the local transcript and the remote context stay in step.
/// Replies come back as text; synthesis happens elsewhere.
pub struct RealtimeModel {
    outbound_tx: mpsc::Sender<OutboundMessage>,
    event_rx: Mutex<mpsc::Receiver<SessionEvent>>,
    reply_rx: Mutex<mpsc::Receiver<String>>,
    history: Arc<RwLock<Vec<ChatEntry>>>,
}

impl RealtimeModel {
    /// Connects to the realtime endpoint, sends the initial session
    /// configuration, and spawns the socket pump tasks.
    pub async fn connect(config: &ModelConfig, instructions: &str) -> Result<Self, ModelError> {
        let url = format!("{}?model={}", config.url, config.model);
        tracing::info!(url = %config.url, model = %config.model, "connecting realtime model session");

        let mut request = url.into_client_request()?;
        request.headers_mut().insert(
            "Authorization",
            format!("Bearer {}", config.api_key)
                .parse()
                .map_err(|_| ModelError::Handshake("API key is not a valid header value".to_string()))?,
        );
        request.headers_mut().insert(
            "OpenAI-Beta",
            "realtime=v1"
                .parse()
                .map_err(|_| ModelError::Handshake("invalid OpenAI-Beta header".to_string()))?,
        );

        let (ws_stream, _response) = tokio_tungstenite::connect_async(request).await?;
        let (mut ws_sink, ws_source) = ws_stream.split();

        let update = build_session_update(config, instructions);
        ws_sink
            .send(WsMessage::Text(serde_json::to_string(&update)?.into()))
            .await?;

        let (outbound_tx, outbound_rx) = mpsc::channel::<OutboundMessage>(64);
        let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(256);
        let (reply_tx, reply_rx) = mpsc::channel::<String>(8);
        let history = Arc::new(RwLock::new(Vec::new()));

        tokio::spawn(Self::outbound_loop(outbound_rx, ws_sink));
        tokio::spawn(Self::inbound_loop(
            ws_source,
            event_tx,
            reply_tx,
            Arc::clone(&history),
        ));

        Ok(Self {
            outbound_tx,
            event_rx: Mutex::new(event_rx),
            reply_rx: Mutex::new(reply_rx),
            history,
        })
    }

    /// Next session event, or `None` once the connection is gone.
    pub async fn next_event(&self) -> Option<SessionEvent> {
        self.event_rx.lock().await.recv().await
    }

    /// Records an entry locally and mirrors it to the service. Does not
    /// trigger a reply.
    pub async fn append(
        &self,
        role: ChatRole,
        content: impl Into<String>,
    ) -> Result<(), ModelError> {
        let content = content.into();
        self.history
            .write()
            .await
            .push(ChatEntry::new(role, content.clone()));
        self.outbound_tx
            .send(OutboundMessage::Item { role, content })
            .await
            .map_err(|_| ModelError::SessionClosed)
    }

    /// Asks the model for its next turn and waits for the complete reply
    /// text. The reply is appended to the history before this returns.
    pub async fn generate_reply(&self) -> Result<String, ModelError> {
        self.outbound_tx
            .send(OutboundMessage::GenerateReply)
            .await
            .map_err(|_| ModelError::SessionClosed)?;
        self.reply_rx
            .lock()
            .await
            .recv()
            .await
            .ok_or(ModelError::SessionClosed)
    }

    /// Replaces the session instructions mid-call.
    pub async fn set_instructions(&self, text: impl Into<String>) -> Result<(), ModelError> {
        self.outbound_tx
            .send(OutboundMessage::Instructions(text.into()))
            .await
            .map_err(|_| ModelError::SessionClosed)
    }

    /// Snapshot of the conversation so far, oldest first.
    pub async fn history(&self) -> Vec<ChatEntry> {
        self.history.read().await.clone()
    }

    /// Sends a close frame and stops the writer task.
    pub async fn close(&self) {
        let _ = self.outbound_tx.send(OutboundMessage::Close).await;
    }

    async fn outbound_loop(mut outbound_rx: mpsc::Receiver<OutboundMessage>, mut ws_sink: WsSink) {
        while let Some(message) = outbound_rx.recv().await {
            let frame = match message {
                OutboundMessage::Item { role, content } => {
                    // The wire format wants `text` for assistant items and
                    // `input_text` for user and system items.
                    let content_type = match role {
                        ChatRole::Assistant => "text",
                        ChatRole::System | ChatRole::User => "input_text",
                    };
                    json!({
                        "type": "conversation.item.create",
                        "item": {
                            "type": "message",
                            "role": role.as_str(),
                            "content": [{ "type": content_type, "text": content }],
                        },
                    })
                }
                OutboundMessage::GenerateReply => json!({ "type": "response.create" }),
                OutboundMessage::Instructions(text) => json!({
                    "type": "session.update",
                    "session": { "instructions": text },
                }),
                OutboundMessage::Close => {
                    let _ = ws_sink.send(WsMessage::Close(None)).await;
                    break;
                }
            };
            match serde_json::to_string(&frame) {
                Ok(text) => {
                    if ws_sink.send(WsMessage::Text(text.into())).await.is_err() {
                        tracing::warn!("websocket send failed, closing outbound loop");
                        break;
                    }
                }
                Err(err) => tracing::warn!(error = %err, "failed to encode outbound frame"),
            }
        }
    }

    async fn inbound_loop(
        mut ws_source: WsSource,
        event_tx: mpsc::Sender<SessionEvent>,
        reply_tx: mpsc::Sender<String>,
        history: Arc<RwLock<Vec<ChatEntry>>>,
    ) {
        // Reply text accumulates across deltas until response.done.
        let mut pending_reply = String::new();

        while let Some(frame) = ws_source.next().await {
            let text = match frame {
                Ok(WsMessage::Text(text)) => text,
                Ok(WsMessage::Close(frame)) => {
                    tracing::info!(close_frame = ?frame, "realtime session closed by peer");
                    break;
                }
                Ok(
                    WsMessage::Ping(_)
                    | WsMessage::Pong(_)
                    | WsMessage::Binary(_)
                    | WsMessage::Frame(_),
                ) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "websocket receive error");
                    let _ = event_tx
                        .send(SessionEvent::Error {
                            message: err.to_string(),
                        })
                        .await;
                    break;
                }
            };

            let event = match parse_server_event(text.as_str()) {
                ServerEvent::SessionReady => Some(SessionEvent::Ready),
                ServerEvent::UserTranscript(text) => {
                    Some(SessionEvent::UserSpeechCommitted { text })
                }
                ServerEvent::ReplyDelta(delta) => {
                    pending_reply.push_str(&delta);
                    None
                }
                ServerEvent::ReplyDone => {
                    let text = std::mem::take(&mut pending_reply);
                    history
                        .write()
                        .await
                        .push(ChatEntry::new(ChatRole::Assistant, text.clone()));
                    if reply_tx.send(text.clone()).await.is_err() {
                        tracing::debug!("reply receiver dropped");
                    }
                    let _ = event_tx.send(SessionEvent::Reply { text }).await;
                    Some(SessionEvent::TurnComplete)
                }
                ServerEvent::ReplyCancelled => {
                    tracing::info!(
                        discarded_bytes = pending_reply.len(),
                        "reply cancelled mid-stream"
                    );
                    pending_reply.clear();
                    None
                }
                ServerEvent::ServiceError(message) => {
                    tracing::error!(%message, "realtime service error");
                    Some(SessionEvent::Error { message })
                }
                ServerEvent::Ignored(event_type) => {
                    tracing::debug!(event = %event_type, "unhandled server event");
                    None
                }
            };

            if let Some(event) = event {
                if event_tx.send(event).await.is_err() {
                    tracing::debug!("event receiver dropped, closing inbound loop");
                    return;
                }
            }
        }
    }
}

/// Initial `session.update` frame carrying the full session configuration.
///
/// Replies are requested as text because the assistant speaks through its
/// own styled synthesis pipeline, not through model audio. Caller speech is
/// still transcribed server-side so utterances arrive as committed text.
fn build_session_update(config: &ModelConfig, instructions: &str) -> serde_json::Value {
    json!({
        "type": "session.update",
        "session": {
            "modalities": ["text"],
            "instructions": instructions,
            "voice": config.voice,
            "temperature": config.temperature,
            "input_audio_format": "pcm16",
            "input_audio_transcription": { "model": "whisper-1" },
            "turn_detection": {
                "type": "server_vad",
                "threshold": config.vad.threshold,
                "prefix_padding_ms": config.vad.prefix_padding_ms,
                "silence_duration_ms": config.vad.silence_duration_ms,
                "create_response": false,
            },
        },
    })
}

fn parse_server_event(raw: &str) -> ServerEvent {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "unparseable server frame");
            return ServerEvent::Ignored("unparseable".to_string());
        }
    };
    let event_type = value.get("type").and_then(|v| v.as_str()).unwrap_or("");

    match event_type {
        "session.created" | "session.updated" => ServerEvent::SessionReady,
        "conversation.item.input_audio_transcription.completed" => {
            let text = value
                .get("transcript")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .trim()
                .to_string();
            ServerEvent::UserTranscript(text)
        }
        "response.text.delta" | "response.audio_transcript.delta" => {
            let delta = value.get("delta").and_then(|v| v.as_str()).unwrap_or("");
            ServerEvent::ReplyDelta(delta.to_string())
        }
        "response.done" => ServerEvent::ReplyDone,
        "response.cancelled" => ServerEvent::ReplyCancelled,
        "error" => {
            let message = value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string();
            ServerEvent::ServiceError(message)
        }
        other => ServerEvent::Ignored(other.to_string()),
    }
}
