use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use glyphvox::api::{create_router, AppState};
use glyphvox::config::Config;
use glyphvox::ocr::OcrProvider;
use glyphvox::tts::TtsProvider;

#[derive(Parser)]
#[command(name = "glyphvox")]
#[command(about = "HTTP backend for Tesseract OCR and cloud text-to-speech")]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "glyphvox=info,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let fmt_layer = if json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!(
        "Initializing OCR provider (languages: {})...",
        config.ocr.languages
    );
    let ocr = OcrProvider::new(&config.ocr);
    if let Err(e) = ocr.probe().await {
        tracing::warn!(
            "OCR engine check failed: {} - /ocr requests will fail until Tesseract and its language data are installed",
            e
        );
    }

    tracing::info!("Initializing text-to-speech provider...");
    let tts = TtsProvider::new(&config.tts);
    if !tts.is_available() {
        tracing::warn!("TTS_API_KEY is not set - /tts requests will fail");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, ocr, tts);
    let app = create_router(state);

    tracing::info!("OCR backend starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/", addr);
    tracing::info!("  OCR endpoint: http://{}/ocr", addr);
    tracing::info!("  TTS endpoint: http://{}/tts", addr);
    tracing::info!("  API docs:     http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests...");
}
