// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::body::Body;
use axum::http::Request;
use axum::Router;

use glyphvox::api::{create_router, AppState};
use glyphvox::config::{Config, OcrConfig, ServerConfig, TtsConfig};
use glyphvox::error::{GlyphvoxError, Result};
use glyphvox::ocr::{
    OcrEventSink, OcrProvider, Recognition, RecognitionEngine, RecognitionEvent,
    RecognitionStatus, RecognitionWorker,
};
use glyphvox::tts::TtsProvider;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Scripted stand-in for Tesseract.
///
/// Returns `text` for any image whose first byte is not `0xFF`; images
/// starting with `0xFF` make the worker fail like an unreadable image.
pub struct ScriptedEngine {
    pub text: String,
    pub confidence: f32,
    pub created: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new(text: &str, confidence: f32) -> Self {
        Self {
            text: text.to_string(),
            confidence,
            created: AtomicUsize::new(0),
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

struct ScriptedWorker {
    text: String,
    confidence: f32,
}

impl RecognitionEngine for ScriptedEngine {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn create_worker(&self, _config: &OcrConfig) -> Result<Box<dyn RecognitionWorker>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedWorker {
            text: self.text.clone(),
            confidence: self.confidence,
        }))
    }
}

impl RecognitionWorker for ScriptedWorker {
    fn recognize(&mut self, image: &[u8]) -> Result<Recognition> {
        if image.first() == Some(&0xFF) {
            return Err(GlyphvoxError::Ocr(
                "Failed to set image: Pix read failed".to_string(),
            ));
        }
        Ok(Recognition {
            text: self.text.clone(),
            confidence: self.confidence,
        })
    }
}

/// Event sink that keeps every status it sees.
#[derive(Default)]
pub struct RecordingSink {
    statuses: Mutex<Vec<RecognitionStatus>>,
}

impl RecordingSink {
    pub fn statuses(&self) -> Vec<RecognitionStatus> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn count(&self, status: RecognitionStatus) -> usize {
        self.statuses().iter().filter(|s| **s == status).count()
    }
}

impl OcrEventSink for RecordingSink {
    fn on_event(&self, event: &RecognitionEvent) {
        self.statuses.lock().unwrap().push(event.status);
    }
}

pub fn test_config(tts_base_url: Option<String>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            body_limit_bytes: 10 * 1024 * 1024,
        },
        ocr: OcrConfig {
            timeout_secs: 10,
            ..OcrConfig::default()
        },
        tts: TtsConfig {
            api_key: tts_base_url.as_ref().map(|_| "test-key".to_string()),
            base_url: tts_base_url.unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
            timeout_secs: 5,
            ..TtsConfig::default()
        },
    }
}

pub struct TestApp {
    pub router: Router,
    pub ocr: OcrProvider,
    pub engine: Arc<ScriptedEngine>,
    pub sink: Arc<RecordingSink>,
}

/// Builds the full router around a scripted OCR engine and, when given, a
/// TTS endpoint (usually a wiremock server).
pub fn test_app(engine: ScriptedEngine, tts_base_url: Option<String>) -> TestApp {
    init_test_logger();

    let config = test_config(tts_base_url);
    let engine = Arc::new(engine);
    let sink = Arc::new(RecordingSink::default());
    let ocr = OcrProvider::with_engine(&config.ocr, engine.clone(), sink.clone());
    let tts = TtsProvider::new(&config.tts);
    let router = create_router(AppState::new(config, ocr.clone(), tts));

    TestApp {
        router,
        ocr,
        engine,
        sink,
    }
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
