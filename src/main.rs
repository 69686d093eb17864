use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use emotive_tts::controllers::tts::TtsController;
use emotive_tts::domain::tts::TtsService;
use emotive_tts::infrastructure::config::{Config, LogFormat};
use emotive_tts::infrastructure::http::start_http_server;
use emotive_tts::infrastructure::repositories::{GoogleTtsRepository, OpenAiTtsRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Emotive TTS on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider repositories (each owns its credential)
    tracing::info!(
        endpoint = %config.google_tts.endpoint,
        timeout_secs = config.google_tts.timeout_secs,
        "Initializing Google Cloud TTS repository"
    );
    let google_repo = GoogleTtsRepository::from_config(&config.google_tts)
        .context("Google Cloud TTS is not usable")?;

    tracing::info!(
        custom_api_base = config.openai_tts.api_base.is_some(),
        "Initializing OpenAI TTS repository"
    );
    let openai_repo = OpenAiTtsRepository::from_config(&config.openai_tts)
        .context("OpenAI TTS is not usable")?;

    // 2. Instantiate services
    let tts_service = Arc::new(TtsService::new(Arc::new(google_repo), Arc::new(openai_repo)));

    // 3. Instantiate controllers
    let tts_controller = Arc::new(TtsController::new(tts_service));

    start_http_server(Arc::new(config), tts_controller)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "emotive_tts=debug,tower_http=debug"
    } else {
        "emotive_tts=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
