//! Local audio playback through an external player process.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::SpeechError;

/// Plays rendered audio by piping it to a player binary's stdin.
///
/// The player is typically `aplay`; anything that reads a WAV stream from
/// stdin works. A machine without the binary is a normal deployment
/// (headless hosts have no speakers), so a failed spawn is an ordinary
/// error for the caller to log, not something to escalate.
#[derive(Debug, Clone)]
pub struct PlayerSink {
    binary: PathBuf,
}

impl PlayerSink {
    /// Creates a sink that pipes audio to the given player binary.
    pub fn new(binary: impl AsRef<Path>) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    /// Plays an audio buffer to completion.
    ///
    /// Waits for the player process to exit; playback runs in real time and
    /// is not subject to a deadline.
    pub async fn play(&self, audio: &[u8]) -> Result<(), SpeechError> {
        let mut command = Command::new(&self.binary);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| {
            SpeechError::Playback(format!(
                "failed to spawn player {}: {}",
                self.binary.display(),
                e
            ))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| SpeechError::Playback("failed to open player stdin".to_string()))?;
        let audio_owned = audio.to_vec();

        // Spawn a task to write to stdin to avoid deadlock if the player's
        // input buffer fills up before it starts draining.
        let write_task = tokio::spawn(async move { stdin.write_all(&audio_owned).await });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SpeechError::Playback(format!("failed to wait for player: {}", e)))?;

        match write_task.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                return Err(SpeechError::Playback(format!(
                    "failed to write to player stdin: {}",
                    e
                )))
            }
            Err(e) => return Err(SpeechError::Playback(format!("stdin task failed: {}", e))),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Playback(format!("player failed: {}", stderr)));
        }

        Ok(())
    }
}
