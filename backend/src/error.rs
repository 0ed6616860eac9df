use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("AI credential is missing or was rejected")]
    MissingCredential,

    #[error("model returned no image")]
    NoImage,

    #[error("{0}")]
    BadRequest(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("request to AI vendor failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::NoImage => "no_image",
            Self::BadRequest(_) => "bad_request",
            Self::Upstream(_) | Self::Http(_) => "failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            Self::NoImage => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), "AI gateway error: {}", self);
        } else {
            tracing::warn!(kind = self.kind(), "AI gateway rejected request: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: GatewayError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn renders_status_and_kind() {
        let (status, body) = render(GatewayError::MissingCredential).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["kind"], "missing_credential");

        let (status, body) = render(GatewayError::BadRequest("prompt is empty".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "bad_request");
        assert_eq!(body["error"], "prompt is empty");

        let (status, body) = render(GatewayError::NoImage).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "no_image");

        let (status, body) = render(GatewayError::Upstream("500 INTERNAL".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["kind"], "failed");
    }
}
