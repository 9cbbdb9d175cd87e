use serde::Deserialize;
use std::env;

pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_OCR_LANGUAGES: &str = "tur+eng";
pub const DEFAULT_TTS_BASE_URL: &str = "https://texttospeech.googleapis.com";
pub const DEFAULT_TTS_VOICE: &str = "tr-TR-Wavenet-A";
pub const DEFAULT_TTS_LANGUAGE_CODE: &str = "tr-TR";
pub const DEFAULT_TTS_AUDIO_ENCODING: &str = "MP3";

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads a string variable, treating an empty value as unset.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for request bodies, enforced before JSON parsing.
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language string, `+` separated (default language first).
    pub languages: String,
    /// Directory containing `*.traineddata`; `None` lets Tesseract pick its default.
    pub data_path: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_voice: String,
    pub language_code: String,
    pub audio_encoding: String,
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_OCR_LANGUAGES.to_string(),
            data_path: None,
            timeout_secs: 120,
        }
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_TTS_BASE_URL.to_string(),
            default_voice: DEFAULT_TTS_VOICE.to_string(),
            language_code: DEFAULT_TTS_LANGUAGE_CODE.to_string(),
            audio_encoding: DEFAULT_TTS_AUDIO_ENCODING.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PORT", 3000),
                body_limit_bytes: parse_env_or("BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT_BYTES),
            },
            ocr: OcrConfig {
                languages: env_non_empty("OCR_LANGUAGES")
                    .unwrap_or_else(|| DEFAULT_OCR_LANGUAGES.to_string()),
                data_path: env_non_empty("OCR_DATA_PATH"),
                timeout_secs: parse_env_or("OCR_TIMEOUT", 120),
            },
            tts: TtsConfig {
                api_key: env_non_empty("TTS_API_KEY")
                    .or_else(|| env_non_empty("GOOGLE_TTS_API_KEY")),
                base_url: env_non_empty("TTS_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_TTS_BASE_URL.to_string()),
                default_voice: env_non_empty("TTS_DEFAULT_VOICE")
                    .unwrap_or_else(|| DEFAULT_TTS_VOICE.to_string()),
                language_code: env_non_empty("TTS_LANGUAGE_CODE")
                    .unwrap_or_else(|| DEFAULT_TTS_LANGUAGE_CODE.to_string()),
                audio_encoding: env_non_empty("TTS_AUDIO_ENCODING")
                    .unwrap_or_else(|| DEFAULT_TTS_AUDIO_ENCODING.to_string()),
                timeout_secs: parse_env_or("TTS_TIMEOUT", 30),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
