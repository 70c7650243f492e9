//! Front desk agent binary, the voice assistant staffing the estate agency
//! welcome room.
//!
//! Connects to the media room, waits for a caller, then runs the
//! conversation loop with structured logging and graceful shutdown on
//! SIGTERM/SIGINT.

mod assistant;
mod config;
mod prompts;

use std::sync::Arc;

use frontdesk_model::RealtimeModel;
use frontdesk_room::RoomService;
use frontdesk_speech::{PlayerSink, SpeechEngine};
use tracing_subscriber::EnvFilter;

use assistant::Assistant;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("FRONTDESK_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

#[tokio::main]
async fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("config.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration, the agent cannot start without valid config");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    let room = Arc::new(RoomService::new(config.livekit.clone()));
    if !room.is_enabled() {
        tracing::error!(
            "LiveKit is not configured; set livekit.url, livekit.api_key and livekit.api_secret"
        );
        std::process::exit(1);
    }
    if config.speech.api_key.is_empty() {
        tracing::warn!("speech.api_key is empty, synthesis will fail until it is set");
    }

    room.ensure_room()
        .await
        .expect("failed to reach the room service, check livekit settings in config");
    tracing::info!(room = room.room_name(), url = room.url(), "waiting for a caller");

    let participant = room
        .wait_for_participant()
        .await
        .expect("participant wait failed");
    tracing::info!(identity = %participant.identity, "caller joined");

    let instructions = format!("{} {}", prompts::SYSTEM_PROMPT, prompts::WELCOME_MESSAGE);
    let model = RealtimeModel::connect(&config.model, &instructions)
        .await
        .expect("failed to connect the realtime model, check model settings in config");
    tracing::info!("model session established");

    let engine = match &config.speech.endpoint {
        Some(endpoint) => SpeechEngine::with_endpoint(endpoint, &config.speech.api_key),
        None => SpeechEngine::new(&config.speech.region, &config.speech.api_key),
    };
    let sink = PlayerSink::new(&config.speech.player_binary);

    let assistant = Assistant::new(
        model,
        engine,
        sink,
        Arc::clone(&room),
        config.speech.voice.clone(),
    );

    assistant.deliver_welcome().await;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            event = assistant.next_event() => match event {
                Some(event) => assistant.handle_event(event).await,
                None => {
                    tracing::info!("model session ended");
                    break;
                }
            },
            () = &mut shutdown => {
                assistant.close().await;
                break;
            }
        }
    }

    tracing::info!("front desk agent shut down");
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
