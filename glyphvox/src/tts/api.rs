use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TtsConfig;
use crate::error::{GlyphvoxError, Result};

use super::SpeechRequest;

/// Pitch is always neutral.
const PITCH: f64 = 0.0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
    speaking_rate: f64,
    pitch: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: Option<String>,
}

/// Client for the Google Cloud Text-to-Speech `text:synthesize` endpoint.
#[derive(Clone, Debug)]
pub struct GoogleTtsClient {
    client: Client,
    api_key: String,
    base_url: String,
    language_code: String,
    audio_encoding: String,
}

impl GoogleTtsClient {
    pub fn new(config: &TtsConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GlyphvoxError::Tts("API key required for text-to-speech".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GlyphvoxError::Tts(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language_code: config.language_code.clone(),
            audio_encoding: config.audio_encoding.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn build_request<'a>(&'a self, request: &'a SpeechRequest) -> SynthesizeRequest<'a> {
        SynthesizeRequest {
            input: SynthesisInput {
                text: &request.text,
            },
            voice: VoiceSelection {
                language_code: &self.language_code,
                name: &request.voice,
            },
            audio_config: AudioConfig {
                audio_encoding: &self.audio_encoding,
                speaking_rate: request.speaking_rate,
                pitch: PITCH,
            },
        }
    }

    /// Sends one synthesis request and returns the base64 audio payload.
    ///
    /// Single attempt, no retry.
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<String> {
        let url = format!("{}/v1/text:synthesize", self.base_url);
        let body = self.build_request(request);

        debug!(
            voice = %request.voice,
            speaking_rate = request.speaking_rate,
            chars = request.text.chars().count(),
            "Sending synthesis request to {}",
            url
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            // The request URL carries the credential.
            .map_err(|e| GlyphvoxError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            warn!(status = %status, body = %body, "Text-to-speech API error");
            return Err(GlyphvoxError::TtsUpstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SynthesizeResponse = response.json().await.map_err(|e| {
            GlyphvoxError::Tts(format!(
                "Failed to parse synthesis response: {}",
                e.without_url()
            ))
        })?;

        match parsed.audio_content {
            Some(audio) if !audio.is_empty() => Ok(audio),
            _ => Err(GlyphvoxError::Tts(
                "Synthesis response contained no audio".to_string(),
            )),
        }
    }
}
