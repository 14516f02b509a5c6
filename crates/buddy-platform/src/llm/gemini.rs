//! Google Gemini adapter.
//!
//! Speaks the `generateContent` REST endpoint for both text and image models.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use buddy_core::ports::*;
use buddy_types::{
    BuddyError, Result,
    config::AiConfig,
};

/// Provider that speaks the Gemini `generateContent` protocol.
pub struct GeminiProvider {
    config: AiConfig,
}

impl GeminiProvider {
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            model
        )
    }

    async fn post(&self, model: &str, body: &GeminiRequest) -> Result<GeminiResponse> {
        if !self.config.has_credential() {
            return Err(BuddyError::MissingCredential);
        }

        let response = Request::post(&self.endpoint(model))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.config.api_key.trim())
            .json(body)
            .map_err(|e| BuddyError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| BuddyError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(BuddyError::Http { status, body });
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| BuddyError::MalformedResponse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl GenerativePort for GeminiProvider {
    async fn generate_text(&self, req: TextRequest) -> Result<String> {
        let body = build_text_request(&req);
        let response = self.post(&req.model, &body).await?;
        Ok(response_text(&response))
    }

    async fn generate_image(&self, req: ImageRequest) -> Result<Option<GeneratedImage>> {
        let body = build_image_request(&req);
        let response = self.post(&req.model, &body).await?;
        Ok(response_image(response))
    }

    fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ─── Request building ────────────────────────────────────────

pub(crate) fn build_text_request(req: &TextRequest) -> GeminiRequest {
    let generation_config = if req.temperature.is_some() || req.max_output_tokens.is_some() {
        Some(GeminiGenerationConfig {
            temperature: req.temperature,
            max_output_tokens: req.max_output_tokens,
            image_config: None,
        })
    } else {
        None
    };

    GeminiRequest {
        contents: req
            .turns
            .iter()
            .map(|t| GeminiContent {
                role: Some(t.role.clone()),
                parts: vec![GeminiPart::Text { text: t.text.clone() }],
            })
            .collect(),
        system_instruction: req.system_instruction.as_ref().map(|text| GeminiContent {
            role: None,
            parts: vec![GeminiPart::Text { text: text.clone() }],
        }),
        generation_config,
    }
}

pub(crate) fn build_image_request(req: &ImageRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart::Text { text: req.prompt.clone() }],
        }],
        system_instruction: None,
        generation_config: Some(GeminiGenerationConfig {
            temperature: None,
            max_output_tokens: None,
            image_config: Some(GeminiImageConfig {
                aspect_ratio: req.aspect_ratio.clone(),
            }),
        }),
    }
}

// ─── Response parsing ────────────────────────────────────────

/// Text of the first candidate, all text parts joined
pub(crate) fn response_text(response: &GeminiResponse) -> String {
    response
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .filter_map(|p| match p {
                    GeminiPart::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// First inline image of the first candidate
pub(crate) fn response_image(response: GeminiResponse) -> Option<GeneratedImage> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .find_map(|p| match p {
            GeminiPart::InlineData { inline_data } => Some(GeneratedImage {
                mime_type: inline_data.mime_type,
                data: inline_data.data,
            }),
            _ => None,
        })
}

// ─── API request/response types ──────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    /// Anything else the service sends back (thought signatures, etc.)
    Other(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiInlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<GeminiImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiImageConfig {
    pub aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiCandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiCandidateContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}
