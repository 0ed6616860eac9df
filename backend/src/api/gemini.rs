use std::time::Duration;

use reqwest::StatusCode;

use crate::api::gemini_dtos::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part, ThinkingConfig,
};
use crate::config::app_config::AppConfig;
use crate::error::GatewayError;

/// A hung vendor call turns into a failure instead of an endless spinner.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const REFINE_INSTRUCTION: &str = "You are an expert design consultant and prompt engineer. \
Your task is to analyze the user's request and create a highly detailed, professional image generation prompt.

Focus on:
1. Lighting and atmosphere
2. Composition and camera angle
3. Style (e.g. minimalist UI, glassmorphism, cyberpunk, photorealistic)
4. Color palette details";

/// Marker the vendor puts into errors for unknown or revoked keys.
const ENTITY_NOT_FOUND: &str = "Requested entity was not found";

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    chat_model: String,
    image_model: String,
    hq_image_model: String,
    thinking_budget: u32,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: config.gemini_base_url.clone(),
            api_key: config.gemini_api_key.clone(),
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
            hq_image_model: config.hq_image_model.clone(),
            thinking_budget: config.thinking_budget,
        })
    }

    fn thinking(&self) -> Option<GenerationConfig> {
        Some(GenerationConfig {
            thinking_config: Some(ThinkingConfig {
                thinking_budget: self.thinking_budget,
            }),
            image_config: None,
        })
    }

    /// `history` holds earlier turns, oldest first; `message` is appended as
    /// the final user turn.
    pub async fn chat(
        &self,
        history: Vec<Content>,
        message: &str,
        system_instruction: &str,
    ) -> Result<String, GatewayError> {
        let mut contents = history;
        contents.push(Content::user(vec![Part::text(message)]));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part::text(system_instruction)],
            }),
            generation_config: self.thinking(),
        };

        let response = self.generate(&self.chat_model, &request).await?;
        response
            .text()
            .ok_or_else(|| GatewayError::Upstream("model returned no text".to_string()))
    }

    pub async fn refine(&self, draft: &str) -> Result<String, GatewayError> {
        let prompt = format!(
            "{}\n\nUser Request: \"{}\"\n\nOutput ONLY the optimized prompt text, nothing else.",
            REFINE_INSTRUCTION, draft
        );
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            system_instruction: None,
            generation_config: self.thinking(),
        };

        let response = self.generate(&self.chat_model, &request).await?;
        response
            .text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| GatewayError::Upstream("model returned no text".to_string()))
    }

    /// `hq_size` switches to the HQ model with a square canvas of that tier
    /// ("1K", "2K" or "4K"); `None` uses the standard image model.
    pub async fn generate_image(
        &self,
        prompt: &str,
        hq_size: Option<&str>,
    ) -> Result<InlineData, GatewayError> {
        let (model, generation_config) = match hq_size {
            Some(size) => (
                &self.hq_image_model,
                Some(GenerationConfig {
                    thinking_config: None,
                    image_config: Some(ImageConfig {
                        aspect_ratio: "1:1".to_string(),
                        image_size: size.to_string(),
                    }),
                }),
            ),
            None => (&self.image_model, None),
        };

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            system_instruction: None,
            generation_config,
        };
        let response = self.generate(model, &request).await?;
        response.first_image().cloned().ok_or(GatewayError::NoImage)
    }

    pub async fn edit_image(&self, prompt: &str, image: InlineData) -> Result<InlineData, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::inline(image.mime_type, image.data),
                Part::text(prompt),
            ])],
            system_instruction: None,
            generation_config: None,
        };
        let response = self.generate(&self.image_model, &request).await?;
        response.first_image().cloned().ok_or(GatewayError::NoImage)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingCredential)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        tracing::debug!("Calling {} ({} content turns)", model, request.contents.len());
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<GenerateContentResponse>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status, &body))
    }
}

fn classify_failure(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| {
            if parsed.error.status.is_empty() {
                parsed.error.message
            } else {
                format!("{}: {}", parsed.error.status, parsed.error.message)
            }
        })
        .unwrap_or_else(|_| body.chars().take(200).collect());

    let rejected_key = matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    ) || message.contains(ENTITY_NOT_FOUND);

    if rejected_key {
        tracing::warn!("Vendor rejected the credential ({}): {}", status, message);
        GatewayError::MissingCredential
    } else {
        GatewayError::Upstream(format!("{} {}", status.as_u16(), message))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{DefaultBodyLimit, State},
        http::HeaderMap,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    /// What the fake vendor saw: path, api key header and JSON body.
    pub(crate) type Seen = Arc<Mutex<Vec<(String, Option<String>, Value)>>>;

    /// Serves `reply` for every `generateContent` call on a random local port.
    pub(crate) async fn fake_vendor(status: u16, reply: Value) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let reply = Arc::new((StatusCode::from_u16(status).unwrap(), reply));

        let app = Router::new()
            .route(
                "/v1beta/models/{call}",
                post(
                    |State((seen, reply)): State<(Seen, Arc<(StatusCode, Value)>)>,
                     uri: axum::http::Uri,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        let key = headers
                            .get("x-goog-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        seen.lock().unwrap().push((uri.path().to_string(), key, body));
                        (reply.0, Json(reply.1.clone()))
                    },
                ),
            )
            .layer(DefaultBodyLimit::disable())
            .with_state((seen.clone(), reply));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v1beta", addr), seen)
    }

    pub(crate) fn test_config(base_url: &str, key: Option<&str>) -> AppConfig {
        let mut config = AppConfig::from_lookup(|_| None).unwrap();
        config.gemini_base_url = base_url.to_string();
        config.gemini_api_key = key.map(str::to_string);
        config
    }

    pub(crate) fn image_reply() -> Value {
        json!({
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "iVBOR"}}]}
            }]
        })
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_vendor() {
        let (base, seen) = fake_vendor(200, image_reply()).await;
        let client = GeminiClient::new(&test_config(&base, None)).unwrap();

        let err = client.generate_image("banner", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn chat_sends_history_system_instruction_and_thinking_budget() {
        let (base, seen) = fake_vendor(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": "Consent Mode v2 ist..."}]}}]}),
        )
        .await;
        let client = GeminiClient::new(&test_config(&base, Some("secret"))).unwrap();

        let history = vec![
            Content::user(vec![Part::text("Hallo")]),
            Content::model(vec![Part::text("Hi!")]),
        ];
        let text = client.chat(history, "Was ist CMv2?", "Sei hilfreich.").await.unwrap();
        assert_eq!(text, "Consent Mode v2 ist...");

        let seen = seen.lock().unwrap();
        let (path, key, body) = &seen[0];
        assert_eq!(path, "/v1beta/models/gemini-3-pro-preview:generateContent");
        assert_eq!(key.as_deref(), Some("secret"));
        assert_eq!(body["contents"].as_array().unwrap().len(), 3);
        assert_eq!(body["contents"][2]["parts"][0]["text"], "Was ist CMv2?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Sei hilfreich.");
        assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 32768);
    }

    #[tokio::test]
    async fn refine_trims_and_embeds_the_draft() {
        let (base, seen) = fake_vendor(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": "  A violet glass banner.\n"}]}}]}),
        )
        .await;
        let client = GeminiClient::new(&test_config(&base, Some("k"))).unwrap();

        let refined = client.refine("lila banner").await.unwrap();
        assert_eq!(refined, "A violet glass banner.");

        let seen = seen.lock().unwrap();
        let prompt = seen[0].2["contents"][0]["parts"][0]["text"].as_str().unwrap().to_string();
        assert!(prompt.contains("User Request: \"lila banner\""));
        assert!(prompt.contains("Output ONLY the optimized prompt text"));
    }

    #[tokio::test]
    async fn hq_generation_uses_hq_model_and_square_canvas() {
        let (base, seen) = fake_vendor(200, image_reply()).await;
        let client = GeminiClient::new(&test_config(&base, Some("k"))).unwrap();

        let image = client.generate_image("office", Some("4K")).await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBOR");

        let seen = seen.lock().unwrap();
        let (path, _, body) = &seen[0];
        assert_eq!(path, "/v1beta/models/gemini-3-pro-image-preview:generateContent");
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        assert_eq!(body["generationConfig"]["imageConfig"]["imageSize"], "4K");
    }

    #[tokio::test]
    async fn edit_sends_image_before_prompt() {
        let (base, seen) = fake_vendor(200, image_reply()).await;
        let client = GeminiClient::new(&test_config(&base, Some("k"))).unwrap();

        let source = InlineData {
            mime_type: "image/jpeg".to_string(),
            data: "/9j/".to_string(),
        };
        client.edit_image("make it pink", source).await.unwrap();

        let seen = seen.lock().unwrap();
        let (path, _, body) = &seen[0];
        assert_eq!(path, "/v1beta/models/gemini-2.5-flash-image:generateContent");
        assert_eq!(body["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(body["contents"][0]["parts"][1]["text"], "make it pink");
        assert!(body.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn text_only_answer_is_no_image() {
        let (base, _) = fake_vendor(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": "I cannot draw that."}]}}]}),
        )
        .await;
        let client = GeminiClient::new(&test_config(&base, Some("k"))).unwrap();

        let err = client.generate_image("banner", None).await.unwrap_err();
        assert!(matches!(err, GatewayError::NoImage));
    }

    #[tokio::test]
    async fn rejected_key_maps_to_missing_credential() {
        let (base, _) = fake_vendor(
            404,
            json!({"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}}),
        )
        .await;
        let client = GeminiClient::new(&test_config(&base, Some("stale"))).unwrap();

        let err = client.refine("x").await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));
    }

    #[test]
    fn failure_classification() {
        assert!(matches!(
            classify_failure(StatusCode::FORBIDDEN, ""),
            GatewayError::MissingCredential
        ));
        assert!(matches!(
            classify_failure(
                StatusCode::BAD_REQUEST,
                r#"{"error": {"code": 400, "message": "Requested entity was not found.", "status": "INVALID_ARGUMENT"}}"#
            ),
            GatewayError::MissingCredential
        ));

        match classify_failure(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#,
        ) {
            GatewayError::Upstream(message) => {
                assert_eq!(message, "429 RESOURCE_EXHAUSTED: Quota exceeded")
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
