//! Calls from the browser to the AI gateway.
//!
//! Every call is a single request/response exchange. Nothing is retried here;
//! the panels turn failures into a banner or a fallback message.

use std::fmt;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::upload::DataUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Model, text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    Banner,
    Hq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [Self::OneK, Self::TwoK, Self::FourK];

    pub fn label(self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    history: &'a [ChatTurn],
    message: &'a str,
}

#[derive(Serialize)]
struct RefineRequest<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    mode: ImageMode,
    size: ImageSize,
}

#[derive(Serialize)]
struct InlineImage<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct EditRequest<'a> {
    prompt: &'a str,
    image: InlineImage<'a>,
}

#[derive(Deserialize)]
struct TextResponse {
    text: String,
}

#[derive(Deserialize)]
struct ImageResponse {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    credential_configured: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    MissingCredential,
    NoImage,
    Failed(String),
}

impl AiError {
    /// Maps the gateway's `kind` field; unknown kinds are generic failures.
    pub fn from_gateway(kind: &str, message: String) -> Self {
        match kind {
            "missing_credential" => Self::MissingCredential,
            "no_image" => Self::NoImage,
            _ => Self::Failed(message),
        }
    }
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => write!(
                f,
                "API Key Problem: Der KI-Zugang ist nicht eingerichtet oder ungültig."
            ),
            Self::NoImage => write!(
                f,
                "Das Modell hat kein Bild zurückgegeben. Bitte versuchen Sie es erneut mit einem anderen Prompt."
            ),
            Self::Failed(message) => write!(f, "Fehler bei der KI-Anfrage: {}.", message),
        }
    }
}

impl From<gloo_net::Error> for AiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Failed(err.to_string())
    }
}

fn url(path: &str) -> String {
    format!("{}{}", config::get_backend_url(), path)
}

async fn read<R: DeserializeOwned>(response: Response) -> Result<R, AiError> {
    if response.ok() {
        return Ok(response.json::<R>().await?);
    }
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(err) => Err(AiError::from_gateway(&err.kind, err.error)),
        Err(_) => Err(AiError::Failed(format!("HTTP {}", status))),
    }
}

async fn post<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, AiError> {
    let response = Request::post(&url(path)).json(body)?.send().await?;
    read(response).await
}

pub async fn ai_status() -> Result<bool, AiError> {
    let response = Request::get(&url("/api/ai/status")).send().await?;
    let status: StatusResponse = read(response).await?;
    Ok(status.credential_configured)
}

/// `history` is everything shown before `message`, oldest first.
pub async fn send_chat(history: &[ChatTurn], message: &str) -> Result<String, AiError> {
    let response: TextResponse = post("/api/ai/chat", &ChatRequest { history, message }).await?;
    Ok(response.text)
}

pub async fn refine_prompt(draft: &str) -> Result<String, AiError> {
    let response: TextResponse = post("/api/ai/refine", &RefineRequest { prompt: draft }).await?;
    Ok(response.text)
}

pub async fn generate_image(prompt: &str, mode: ImageMode, size: ImageSize) -> Result<DataUrl, AiError> {
    let response: ImageResponse =
        post("/api/ai/image/generate", &GenerateRequest { prompt, mode, size }).await?;
    Ok(DataUrl::new(response.mime_type, response.data))
}

pub async fn edit_image(prompt: &str, source: &DataUrl) -> Result<DataUrl, AiError> {
    let request = EditRequest {
        prompt,
        image: InlineImage {
            mime_type: &source.mime_type,
            data: &source.data,
        },
    };
    let response: ImageResponse = post("/api/ai/image/edit", &request).await?;
    Ok(DataUrl::new(response.mime_type, response.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_kinds_map_to_typed_errors() {
        assert_eq!(
            AiError::from_gateway("missing_credential", "x".into()),
            AiError::MissingCredential
        );
        assert_eq!(AiError::from_gateway("no_image", "x".into()), AiError::NoImage);
        assert_eq!(
            AiError::from_gateway("failed", "upstream 500".into()),
            AiError::Failed("upstream 500".into())
        );
        assert_eq!(
            AiError::from_gateway("", "boom".into()),
            AiError::Failed("boom".into())
        );
    }

    #[test]
    fn request_bodies_match_the_gateway() {
        let history = [ChatTurn::user("Hallo"), ChatTurn::model("Hi!")];
        let body = serde_json::to_value(ChatRequest { history: &history, message: "CMv2?" }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "history": [
                    {"role": "user", "text": "Hallo"},
                    {"role": "model", "text": "Hi!"}
                ],
                "message": "CMv2?"
            })
        );

        let body = serde_json::to_value(GenerateRequest {
            prompt: "dark banner",
            mode: ImageMode::Hq,
            size: ImageSize::FourK,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"prompt": "dark banner", "mode": "hq", "size": "4K"})
        );
    }
}
