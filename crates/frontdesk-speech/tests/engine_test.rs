use frontdesk_speech::{assemble, SpeechEngine, SpeechError};
use frontdesk_types::{SpeakerVoice, StyleProfile};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_document() -> frontdesk_speech::StyledDocument {
    assemble(
        "[EXCITED]Great news about the flat![/EXCITED]",
        &SpeakerVoice::default(),
        &StyleProfile::default(),
    )
}

#[tokio::test]
async fn render_posts_markup_and_returns_audio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cognitiveservices/v1"))
        .and(header("Ocp-Apim-Subscription-Key", "test-key"))
        .and(header("Content-Type", "application/ssml+xml"))
        .and(header("X-Microsoft-OutputFormat", "riff-16khz-16bit-mono-pcm"))
        .and(body_string_contains("mstts:express-as"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"RIFF-audio".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = SpeechEngine::with_endpoint(
        format!("{}/cognitiveservices/v1", server.uri()),
        "test-key",
    );

    let audio = engine.render(&sample_document()).await.unwrap();
    assert_eq!(audio, b"RIFF-audio");
}

#[tokio::test]
async fn render_failure_carries_the_service_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid SSML"))
        .mount(&server)
        .await;

    let engine = SpeechEngine::with_endpoint(format!("{}/cognitiveservices/v1", server.uri()), "k");

    let result = engine.render(&sample_document()).await;
    match result {
        Err(SpeechError::SynthesisCanceled(reason)) => {
            assert!(reason.contains("400"), "got: {}", reason);
            assert!(reason.contains("Invalid SSML"), "got: {}", reason);
        }
        _ => panic!("Expected SynthesisCanceled error, got {:?}", result),
    }
}

#[tokio::test]
async fn render_reports_transport_failures() {
    // Nothing listens on port 1.
    let engine = SpeechEngine::with_endpoint("http://127.0.0.1:1/cognitiveservices/v1", "k");

    let result = engine.render(&sample_document()).await;
    assert!(matches!(result, Err(SpeechError::Transport(_))));
}

#[tokio::test]
async fn debug_output_redacts_the_api_key() {
    let engine = SpeechEngine::new("westeurope", "very-secret");
    let debug = format!("{:?}", engine);
    assert!(!debug.contains("very-secret"));
    assert!(debug.contains("[REDACTED]"));
}
