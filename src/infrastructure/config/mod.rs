use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_GOOGLE_TTS_ENDPOINT: &str = "https://texttospeech.googleapis.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub google_tts: GoogleTtsConfig,
    pub openai_tts: OpenAiTtsConfig,
}

/// Google Cloud Text-to-Speech credentials and transport settings
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTtsConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// OpenAI TTS credentials
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiTtsConfig {
    pub api_key: Option<String>,
    /// Overrides the OpenAI API base URL (proxies, compatible gateways)
    pub api_base: Option<String>,
    pub timeout_secs: u64,
}

impl GoogleTtsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl OpenAiTtsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let timeout_secs: u64 = env::var("TTS_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?;

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            google_tts: GoogleTtsConfig {
                api_key: non_empty_var("GOOGLE_TTS_API_KEY"),
                endpoint: env::var("GOOGLE_TTS_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_GOOGLE_TTS_ENDPOINT.to_string()),
                timeout_secs,
            },
            openai_tts: OpenAiTtsConfig {
                api_key: non_empty_var("OPENAI_API_KEY"),
                api_base: non_empty_var("OPENAI_API_BASE"),
                timeout_secs,
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Credentials are resolved here but validated by the adapters that own them
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
