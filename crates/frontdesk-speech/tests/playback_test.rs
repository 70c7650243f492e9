#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use frontdesk_speech::{PlayerSink, SpeechError};

fn write_script(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[tokio::test]
async fn play_pipes_audio_to_the_player() {
    let dir = tempfile::tempdir().unwrap();
    let captured = dir.path().join("captured.bin");
    let script = dir.path().join("player.sh");
    write_script(
        &script,
        &format!("#!/bin/sh\ncat > '{}'\n", captured.display()),
    );

    let sink = PlayerSink::new(&script);
    sink.play(b"fake-pcm-bytes").await.unwrap();

    let piped = std::fs::read(&captured).unwrap();
    assert_eq!(piped, b"fake-pcm-bytes");
}

#[tokio::test]
async fn missing_player_binary_is_an_ordinary_error() {
    let sink = PlayerSink::new("/nonexistent/frontdesk-player");

    let result = sink.play(b"audio").await;
    match result {
        Err(SpeechError::Playback(msg)) => {
            assert!(msg.contains("failed to spawn"), "got: {}", msg)
        }
        _ => panic!("Expected Playback error, got {:?}", result),
    }
}

#[tokio::test]
async fn failing_player_surfaces_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("player.sh");
    write_script(&script, "#!/bin/sh\ncat > /dev/null\necho boom >&2\nexit 3\n");

    let sink = PlayerSink::new(&script);
    let result = sink.play(b"audio").await;
    match result {
        Err(SpeechError::Playback(msg)) => assert!(msg.contains("boom"), "got: {}", msg),
        _ => panic!("Expected Playback error, got {:?}", result),
    }
}
