use tracing::{info, warn};

use crate::config::TtsConfig;
use crate::error::{GlyphvoxError, Result};

use super::api::GoogleTtsClient;
use super::{SpeechOutcome, SpeechRequest};

/// Speaking rate used when the caller does not send one.
pub const DEFAULT_SPEAKING_RATE: f64 = 1.0;

#[derive(Clone)]
enum TtsBackend {
    Api { client: GoogleTtsClient },
    Unavailable { reason: String },
}

#[derive(Clone)]
pub struct TtsProvider {
    backend: TtsBackend,
    config: TtsConfig,
}

impl TtsProvider {
    pub fn new(config: &TtsConfig) -> Self {
        let backend = match GoogleTtsClient::new(config) {
            Ok(client) => {
                info!(base_url = %client.base_url(), "Text-to-speech API backend initialized");
                TtsBackend::Api { client }
            }
            Err(e) => {
                let reason = format!("Text-to-speech backend unavailable: {e}");
                warn!("{}", reason);
                TtsBackend::Unavailable { reason }
            }
        };

        Self {
            backend,
            config: config.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, TtsBackend::Unavailable { .. })
    }

    pub fn default_voice(&self) -> &str {
        &self.config.default_voice
    }

    /// Fills in the default voice and speaking rate. A blank voice counts as
    /// absent.
    pub fn resolve(&self, text: &str, voice: Option<&str>, speed: Option<f64>) -> SpeechRequest {
        let voice = voice
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(self.config.default_voice.as_str());

        SpeechRequest {
            text: text.to_string(),
            voice: voice.to_string(),
            speaking_rate: speed.unwrap_or(DEFAULT_SPEAKING_RATE),
        }
    }

    pub async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechOutcome> {
        let client = match &self.backend {
            TtsBackend::Api { client } => client,
            TtsBackend::Unavailable { reason } => {
                return Err(GlyphvoxError::TtsUnavailable(reason.clone()))
            }
        };

        let audio = client.synthesize(&request).await?;
        let length = audio.len();

        Ok(SpeechOutcome {
            audio,
            voice: request.voice,
            length,
        })
    }
}
