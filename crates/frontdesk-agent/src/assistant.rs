//! Call handling: emotion requests, reply styling, and audio delivery.

use std::sync::Arc;
use std::time::Duration;

use frontdesk_emotion::{classify, detect_request};
use frontdesk_model::{RealtimeModel, SessionEvent};
use frontdesk_room::RoomService;
use frontdesk_speech::{assemble, PlayerSink, SpeechEngine, StyledDocument};
use frontdesk_types::{ChatRole, EmotionLabel, SpeakerVoice, StyleProfile};
use tokio::sync::Mutex;

use crate::prompts::{emotion_instruction, INSTRUCTIONS, WELCOME_TRIGGER};

/// Data topic under which rendered reply audio is published to the room.
pub const AUDIO_TOPIC: &str = "frontdesk.audio";

/// Delay between triggering the welcome and swapping in the full
/// instructions.
const WELCOME_SETTLE: Duration = Duration::from_millis(500);

/// Per-call state.
#[derive(Debug, Default)]
struct CallSession {
    /// Emotion the caller asked for. Styles every reply until changed.
    current_emotion: Option<EmotionLabel>,
    welcome_delivered: bool,
}

/// The front desk assistant for one call.
///
/// Owns the model session and the synthesis pipeline. Each reply is styled,
/// rendered, and delivered on its own task so the event loop keeps draining
/// while audio goes out.
pub struct Assistant {
    model: RealtimeModel,
    engine: SpeechEngine,
    sink: PlayerSink,
    room: Arc<RoomService>,
    voice: SpeakerVoice,
    styles: StyleProfile,
    session: Mutex<CallSession>,
}

impl Assistant {
    pub fn new(
        model: RealtimeModel,
        engine: SpeechEngine,
        sink: PlayerSink,
        room: Arc<RoomService>,
        voice: SpeakerVoice,
    ) -> Self {
        Self {
            model,
            engine,
            sink,
            room,
            voice,
            styles: StyleProfile::default(),
            session: Mutex::new(CallSession::default()),
        }
    }

    /// Next event from the model session, or `None` once it is gone.
    pub async fn next_event(&self) -> Option<SessionEvent> {
        self.model.next_event().await
    }

    pub async fn handle_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::Ready => tracing::debug!("model session configured"),
            SessionEvent::UserSpeechCommitted { text } => self.handle_utterance(&text).await,
            // Reply text is consumed through generate_reply().
            SessionEvent::Reply { .. } => {}
            SessionEvent::TurnComplete => tracing::debug!("model turn complete"),
            SessionEvent::Error { message } => tracing::error!(%message, "model session error"),
        }
    }

    /// Triggers the scripted greeting, then swaps to the full instructions.
    /// Safe to call more than once; only the first call does anything.
    pub async fn deliver_welcome(&self) {
        {
            let mut session = self.session.lock().await;
            if session.welcome_delivered {
                return;
            }
            session.welcome_delivered = true;
        }

        if let Err(err) = self.model.append(ChatRole::System, WELCOME_TRIGGER).await {
            tracing::warn!(error = %err, "failed to queue the welcome trigger");
        }
        match self.model.generate_reply().await {
            Ok(reply) if !reply.trim().is_empty() => {
                let label = classify(&reply);
                self.speak(&reply, label);
            }
            Ok(_) => tracing::warn!("model answered the welcome trigger with an empty reply"),
            Err(err) => tracing::error!(error = %err, "welcome generation failed"),
        }

        tokio::time::sleep(WELCOME_SETTLE).await;
        if let Err(err) = self.model.set_instructions(INSTRUCTIONS).await {
            tracing::warn!(error = %err, "failed to swap in the full instructions");
        }
    }

    /// Handles one committed caller utterance.
    ///
    /// An emotion request short-circuits to a spoken acknowledgment; anything
    /// else goes through the model for a styled reply.
    pub async fn handle_utterance(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        tracing::info!(chars = text.len(), "caller utterance committed");

        if let Some(label) = detect_request(text) {
            tracing::info!(emotion = %label, "caller requested an emotion");
            self.session.lock().await.current_emotion = Some(label);

            let acknowledgment = acknowledgment(label);
            if let Err(err) = self
                .model
                .append(ChatRole::Assistant, acknowledgment.clone())
                .await
            {
                tracing::warn!(error = %err, "failed to record the acknowledgment");
            }
            if let Err(err) = self.model.set_instructions(emotion_instruction(label)).await {
                tracing::warn!(error = %err, "failed to update the model instructions");
            }
            self.speak(&acknowledgment, label);
            return;
        }

        if let Err(err) = self.model.append(ChatRole::User, text).await {
            tracing::warn!(error = %err, "failed to record the caller entry");
            return;
        }
        let reply = match self.model.generate_reply().await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, "reply generation failed");
                return;
            }
        };
        if reply.trim().is_empty() {
            tracing::warn!("model returned an empty reply");
            return;
        }
        tracing::info!(chars = reply.len(), "model reply ready");

        let forced = self.session.lock().await.current_emotion;
        let label = forced.unwrap_or_else(|| classify(&reply));
        self.speak(&reply, label);
    }

    /// Styles, renders, and delivers one reply on its own task.
    fn speak(&self, text: &str, label: EmotionLabel) {
        let tagged = wrap_reply(text, label);
        let document = assemble(&tagged, &self.voice, &self.styles);
        tokio::spawn(render_and_deliver(
            self.engine.clone(),
            self.sink.clone(),
            Arc::clone(&self.room),
            document,
        ));
    }

    /// Closes the model session.
    pub async fn close(&self) {
        self.model.close().await;
    }
}

fn wrap_reply(text: &str, label: EmotionLabel) -> String {
    format!("[{label}]{text}[/{label}]")
}

fn acknowledgment(label: EmotionLabel) -> String {
    format!("I'll now speak in a {label} tone.")
}

async fn render_and_deliver(
    engine: SpeechEngine,
    sink: PlayerSink,
    room: Arc<RoomService>,
    document: StyledDocument,
) {
    let audio = match engine.render(&document).await {
        Ok(audio) => audio,
        Err(err) => {
            tracing::error!(error = %err, "speech synthesis failed");
            return;
        }
    };
    tracing::debug!(bytes = audio.len(), "synthesis complete");
    deliver(&room, &sink, &audio).await;
}

/// Tries each delivery path in order and stops at the first success.
async fn deliver(room: &RoomService, sink: &PlayerSink, audio: &[u8]) {
    if room.is_enabled() {
        match room.publish_data(audio.to_vec(), AUDIO_TOPIC).await {
            Ok(()) => return,
            Err(err) => {
                tracing::warn!(error = %err, "room publish failed, trying local playback")
            }
        }
    }
    match sink.play(audio).await {
        Ok(()) => {}
        Err(err) => tracing::error!(error = %err, "all delivery paths failed"),
    }
}
