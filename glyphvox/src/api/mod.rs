pub mod dto;
mod extractors;
pub mod handlers;
mod openapi;
pub mod response;
mod routes;
mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::{Config, OcrConfig, ServerConfig, TtsConfig};
    use crate::error::Result;
    use crate::ocr::{
        OcrProvider, Recognition, RecognitionEngine, RecognitionWorker, TracingEventSink,
    };
    use crate::tts::TtsProvider;

    struct EchoLengthEngine;
    struct EchoLengthWorker;

    impl RecognitionEngine for EchoLengthEngine {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn create_worker(&self, _config: &OcrConfig) -> Result<Box<dyn RecognitionWorker>> {
            Ok(Box::new(EchoLengthWorker))
        }
    }

    impl RecognitionWorker for EchoLengthWorker {
        fn recognize(&mut self, image: &[u8]) -> Result<Recognition> {
            Ok(Recognition {
                text: format!("  {} bytes\n", image.len()),
                confidence: 75.0,
            })
        }
    }

    fn test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                body_limit_bytes: 1024,
            },
            ocr: OcrConfig::default(),
            tts: TtsConfig::default(),
        };
        let ocr = OcrProvider::with_engine(
            &config.ocr,
            Arc::new(EchoLengthEngine),
            Arc::new(TracingEventSink),
        );
        let tts = TtsProvider::new(&config.tts);
        AppState::new(config, ocr, tts)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_static_payload() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "OK");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn ocr_without_image_is_bad_request() {
        let app = create_router(test_state());

        let response = app.oneshot(post_json("/ocr", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No image provided");
        assert!(json.get("success").is_none());
    }

    #[tokio::test]
    async fn ocr_with_image_succeeds() {
        let state = test_state();
        let ocr = state.ocr.clone();
        let app = create_router(state);

        // "aGVsbG8=" is "hello"
        let response = app
            .oneshot(post_json("/ocr", r#"{"image":"aGVsbG8="}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({
                "success": true,
                "text": "5 bytes",
                "confidence": 75.0,
                "length": 7
            })
        );
        assert_eq!(ocr.active_workers(), 0);
    }

    #[tokio::test]
    async fn ocr_with_bad_base64_is_processing_failure() {
        let app = create_router(test_state());

        let response = app
            .oneshot(post_json("/ocr", r#"{"image":"***"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Failed to process image");
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid base64 image data"));
    }

    #[tokio::test]
    async fn tts_without_text_is_bad_request() {
        let app = create_router(test_state());

        let response = app
            .oneshot(post_json("/tts", r#"{"text":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No text provided");
    }

    #[tokio::test]
    async fn tts_without_credential_is_generic_failure() {
        let app = create_router(test_state());

        let response = app
            .oneshot(post_json("/tts", r#"{"text":"Merhaba"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({
                "success": false,
                "error": "Text-to-speech request failed",
                "message": "Failed to synthesize speech"
            })
        );
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let app = create_router(test_state());
        let image = "A".repeat(2048);

        let response = app
            .oneshot(post_json("/ocr", &format!(r#"{{"image":"{image}"}}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn openapi_json_is_served() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(version.starts_with('3'));
        assert!(json["paths"].get("/ocr").is_some());
        assert!(json["paths"].get("/tts").is_some());
    }

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/ocr")
                    .header("origin", "http://example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
