use serde::{Deserialize, Serialize};

use crate::api::gemini_dtos::{Content, InlineData, Part};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl From<ChatTurn> for Content {
    fn from(turn: ChatTurn) -> Self {
        let parts = vec![Part::text(turn.text)];
        match turn.role {
            ChatRole::User => Content::user(parts),
            ChatRole::Model => Content::model(parts),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    #[default]
    Banner,
    Hq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
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
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub mode: ImageMode,
    #[serde(default)]
    pub size: ImageSize,
}

#[derive(Debug, Deserialize)]
pub struct UploadedImage {
    pub mime_type: String,
    pub data: String,
}

impl From<UploadedImage> for InlineData {
    fn from(image: UploadedImage) -> Self {
        InlineData {
            mime_type: image.mime_type,
            data: image.data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub prompt: String,
    pub image: UploadedImage,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub mime_type: String,
    pub data: String,
}

impl From<InlineData> for ImageResponse {
    fn from(image: InlineData) -> Self {
        Self {
            mime_type: image.mime_type,
            data: image.data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub credential_configured: bool,
}
