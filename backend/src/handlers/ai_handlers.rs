use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::gemini_dtos::{Content, InlineData};
use crate::error::GatewayError;
use crate::handlers::ai_dtos::{
    ChatRequest, ChatRole, ChatTurn, EditRequest, GenerateRequest, ImageMode, ImageResponse,
    RefineRequest, StatusResponse, TextResponse,
};
use crate::utils::upload::validate_inline_image;
use crate::AppState;

pub const CHAT_SYSTEM_INSTRUCTION: &str = "Du bist ein hilfreicher KI-Assistent für 'ConsentWerft'. \
Du hilfst Nutzern bei Fragen zu Datenschutz, Cookie-Bannern, Google Consent Mode v2 und Server-Side Tracking. \
Deine Antworten sind präzise, freundlich und deutsch. \
Du bist ein Experte, aber gibst keine Rechtsberatung (weise darauf hin). \
Formatiere Antworten gut lesbar.";

/// Room for the prompt and the JSON envelope around the image.
const EDIT_BODY_HEADROOM: usize = 64 * 1024;

/// Request body ceiling for an edit upload of at most `max_image_bytes`,
/// which travels base64-encoded and so grows by a third.
pub fn edit_body_limit(max_image_bytes: u64) -> usize {
    let max_image_bytes = usize::try_from(max_image_bytes).unwrap_or(usize::MAX / 2);
    max_image_bytes.saturating_add(2) / 3 * 4 + EDIT_BODY_HEADROOM
}

pub fn banner_prompt(style: &str) -> String {
    format!(
        "Design a modern, GDPR-compliant cookie consent banner UI. Style: {}. High quality, UI design mockup.",
        style
    )
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, GatewayError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(trimmed)
}

/// Keeps the newest `limit` turns and drops leading model turns, since the
/// vendor expects a conversation to open with the user.
pub fn bounded_history(history: Vec<ChatTurn>, limit: usize) -> Vec<Content> {
    let skip = history.len().saturating_sub(limit);
    history
        .into_iter()
        .skip(skip)
        .filter(|turn| !turn.text.trim().is_empty())
        .skip_while(|turn| turn.role == ChatRole::Model)
        .map(Content::from)
        .collect()
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        credential_configured: state.config.credential_configured(),
    })
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<TextResponse>, GatewayError> {
    let message = required(&request.message, "message")?.to_string();
    let history = bounded_history(request.history, state.config.chat_history_limit);

    tracing::info!("Chat request with {} prior turns", history.len());
    let text = state
        .gemini
        .chat(history, &message, CHAT_SYSTEM_INSTRUCTION)
        .await?;
    Ok(Json(TextResponse { text }))
}

pub async fn refine(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<TextResponse>, GatewayError> {
    let draft = required(&request.prompt, "prompt")?;
    let text = state.gemini.refine(draft).await?;
    Ok(Json(TextResponse { text }))
}

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ImageResponse>, GatewayError> {
    let prompt = required(&request.prompt, "prompt")?;

    let image = match request.mode {
        ImageMode::Banner => state.gemini.generate_image(&banner_prompt(prompt), None).await?,
        ImageMode::Hq => {
            tracing::info!("HQ generation at {}", request.size.as_str());
            state
                .gemini
                .generate_image(prompt, Some(request.size.as_str()))
                .await?
        }
    };
    Ok(Json(image.into()))
}

pub async fn edit_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EditRequest>,
) -> Result<Json<ImageResponse>, GatewayError> {
    let prompt = required(&request.prompt, "prompt")?.to_string();
    let image: InlineData = request.image.into();
    validate_inline_image(
        &image,
        &state.config.upload_mime_prefix,
        state.config.upload_max_bytes,
    )?;

    let edited = state.gemini.edit_image(&prompt, image).await?;
    Ok(Json(edited.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::gemini::tests::{fake_vendor, image_reply, test_config, Seen};
    use crate::api::gemini::GeminiClient;
    use crate::config::app_config::AppConfig;

    fn router(config: AppConfig) -> axum::Router {
        let gemini = GeminiClient::new(&config).unwrap();
        crate::app(Arc::new(AppState { config, gemini }))
    }

    async fn vendor_router(reply: Value) -> (axum::Router, Seen) {
        let (base, seen) = fake_vendor(200, reply).await;
        (router(test_config(&base, Some("key"))), seen)
    }

    async fn call(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn turn(role: ChatRole, text: &str) -> ChatTurn {
        ChatTurn {
            role,
            text: text.to_string(),
        }
    }

    #[test]
    fn history_is_bounded_and_opens_with_user() {
        let history = vec![
            turn(ChatRole::User, "1"),
            turn(ChatRole::Model, "2"),
            turn(ChatRole::User, "3"),
            turn(ChatRole::Model, "4"),
            turn(ChatRole::User, "5"),
        ];
        let bounded = bounded_history(history, 4);
        assert_eq!(bounded.len(), 3);
        assert_eq!(bounded[0].role.as_deref(), Some("user"));
        assert_eq!(bounded[0].parts[0].text.as_deref(), Some("3"));
    }

    #[test]
    fn edit_limit_covers_encoded_upload() {
        let max = 5 * 1024 * 1024;
        let encoded = STANDARD.encode(vec![0u8; max]).len();
        assert!(edit_body_limit(max as u64) >= encoded + 1024);
    }

    #[test]
    fn banner_template_wraps_style() {
        assert_eq!(
            banner_prompt("dark mode"),
            "Design a modern, GDPR-compliant cookie consent banner UI. Style: dark mode. High quality, UI design mockup."
        );
    }

    #[tokio::test]
    async fn health_and_status() {
        let app = router(test_config("http://127.0.0.1:9", None));
        let response = app
            .clone()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, body) = call(app, "GET", "/api/ai/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"credential_configured": false}));
    }

    #[tokio::test]
    async fn missing_key_surfaces_as_missing_credential() {
        let app = router(test_config("http://127.0.0.1:9", None));
        let (status, body) = call(app, "POST", "/api/ai/refine", Some(json!({"prompt": "lila"}))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["kind"], "missing_credential");
    }

    #[tokio::test]
    async fn blank_input_is_rejected_before_the_vendor() {
        let (app, seen) = vendor_router(image_reply()).await;
        let (status, body) = call(
            app,
            "POST",
            "/api/ai/chat",
            Some(json!({"history": [], "message": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "bad_request");
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn chat_round_trip() {
        let (app, seen) = vendor_router(json!({
            "candidates": [{"content": {"parts": [{"text": "Gern erkläre ich das."}]}}]
        }))
        .await;
        let (status, body) = call(
            app,
            "POST",
            "/api/ai/chat",
            Some(json!({
                "history": [{"role": "user", "text": "Hallo"}, {"role": "model", "text": "Hi"}],
                "message": "Was ist TTDSG?"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "Gern erkläre ich das.");

        let seen = seen.lock().unwrap();
        let sent = &seen[0].2;
        assert_eq!(sent["contents"].as_array().unwrap().len(), 3);
        assert!(sent["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("ConsentWerft"));
    }

    #[tokio::test]
    async fn banner_generation_uses_template_and_default_model() {
        let (app, seen) = vendor_router(image_reply()).await;
        let (status, body) = call(
            app,
            "POST",
            "/api/ai/image/generate",
            Some(json!({"prompt": "violet glass", "mode": "banner", "size": "1K"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"mime_type": "image/png", "data": "iVBOR"}));

        let seen = seen.lock().unwrap();
        assert!(seen[0].0.ends_with("gemini-2.5-flash-image:generateContent"));
        assert_eq!(
            seen[0].2["contents"][0]["parts"][0]["text"],
            banner_prompt("violet glass")
        );
    }

    #[tokio::test]
    async fn no_image_answer_is_422() {
        let (app, _) = vendor_router(json!({
            "candidates": [{"content": {"parts": [{"text": "Sorry."}]}}]
        }))
        .await;
        let (status, body) = call(
            app,
            "POST",
            "/api/ai/image/generate",
            Some(json!({"prompt": "x", "mode": "hq", "size": "2K"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "no_image");
    }

    #[tokio::test]
    async fn edit_accepts_uploads_up_to_the_configured_ceiling() {
        let (app, seen) = vendor_router(image_reply()).await;
        let max = 5 * 1024 * 1024;

        let (status, body) = call(
            app.clone(),
            "POST",
            "/api/ai/image/edit",
            Some(json!({
                "prompt": "retro",
                "image": {"mime_type": "image/png", "data": STANDARD.encode(vec![1u8; max])}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mime_type"], "image/png");
        assert_eq!(seen.lock().unwrap().len(), 1);

        // one byte over reaches the validator instead of the body limit
        let (status, body) = call(
            app,
            "POST",
            "/api/ai/image/edit",
            Some(json!({
                "prompt": "retro",
                "image": {"mime_type": "image/png", "data": STANDARD.encode(vec![1u8; max + 1])}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "bad_request");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edit_revalidates_the_upload() {
        let (base, seen) = fake_vendor(200, image_reply()).await;
        let mut config = test_config(&base, Some("key"));
        config.upload_max_bytes = 8;
        let app = router(config);

        let (status, _) = call(
            app.clone(),
            "POST",
            "/api/ai/image/edit",
            Some(json!({
                "prompt": "retro",
                "image": {"mime_type": "image/png", "data": STANDARD.encode([1u8; 9])}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(
            app.clone(),
            "POST",
            "/api/ai/image/edit",
            Some(json!({
                "prompt": "retro",
                "image": {"mime_type": "text/plain", "data": STANDARD.encode([1u8; 4])}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(seen.lock().unwrap().is_empty());

        let (status, body) = call(
            app,
            "POST",
            "/api/ai/image/edit",
            Some(json!({
                "prompt": "retro",
                "image": {"mime_type": "image/png", "data": STANDARD.encode([1u8; 8])}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mime_type"], "image/png");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
