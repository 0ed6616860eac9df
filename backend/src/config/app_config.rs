use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gateway settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` leaves the gateway running; every AI call then reports a
    /// missing credential.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub chat_model: String,
    pub image_model: String,
    pub hq_image_model: String,
    pub thinking_budget: u32,
    pub upload_max_bytes: u64,
    pub upload_mime_prefix: String,
    pub chat_history_limit: usize,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let text = |key: &str, default: &str| {
            non_empty(lookup(key)).unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            gemini_api_key: non_empty(lookup("GEMINI_API_KEY")),
            gemini_base_url: text("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            chat_model: text("CHAT_MODEL", "gemini-3-pro-preview"),
            image_model: text("IMAGE_MODEL", "gemini-2.5-flash-image"),
            hq_image_model: text("HQ_IMAGE_MODEL", "gemini-3-pro-image-preview"),
            thinking_budget: parsed(&lookup, "THINKING_BUDGET", 32_768)?,
            upload_max_bytes: parsed(&lookup, "UPLOAD_MAX_BYTES", 5 * 1024 * 1024)?,
            upload_mime_prefix: text("UPLOAD_MIME_PREFIX", "image/"),
            chat_history_limit: parsed(&lookup, "CHAT_HISTORY_LIMIT", 20)?,
            bind_addr: parsed(&lookup, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)))?,
            static_dir: PathBuf::from(text("STATIC_DIR", "../frontend/dist")),
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
        })
    }

    pub fn credential_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
