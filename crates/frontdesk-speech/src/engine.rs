//! Cloud speech synthesis over REST.

use std::fmt;

use crate::error::SpeechError;
use crate::markup::StyledDocument;

/// Renders styled documents to audio through a cloud synthesis endpoint.
///
/// The engine posts the document markup and receives encoded audio back.
/// Rejections carry the service's reason text so a canceled synthesis can be
/// diagnosed from the logs.
#[derive(Clone)]
pub struct SpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SpeechEngine {
    /// Creates an engine for the given service region.
    pub fn new(region: &str, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(
            format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1"),
            api_key,
        )
    }

    /// Creates an engine against an explicit endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Renders a styled document to encoded audio bytes.
    ///
    /// The output encoding follows the document's voice settings. A
    /// non-success response is reported as a canceled synthesis with the
    /// service's reason text attached.
    pub async fn render(&self, document: &StyledDocument) -> Result<Vec<u8>, SpeechError> {
        let markup = document.to_markup();
        tracing::debug!(bytes = markup.len(), "submitting synthesis request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &document.voice().output_format)
            .header("User-Agent", "frontdesk-agent")
            .body(markup)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(SpeechError::SynthesisCanceled(format!(
                "{}: {}",
                status, reason
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl fmt::Debug for SpeechEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechEngine")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
