//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `buddy-core` (pure Rust).
//! Implementations live in `buddy-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use buddy_types::Result;
use serde::{Deserialize, Serialize};

// ─── Generative AI Port ──────────────────────────────────────

/// One turn of replayed conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// "user" or "model"
    pub role: String,
    pub text: String,
}

impl Turn {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            text: text.into(),
        }
    }
}

/// Request for a text completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub turns: Vec<Turn>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

/// Request for a single generated image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    /// e.g. "1:1"
    pub aspect_ratio: String,
}

/// Inline image payload returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub mime_type: String,
    /// base64-encoded bytes
    pub data: String,
}

impl GeneratedImage {
    pub fn data_uri(&self) -> String {
        let mime = if self.mime_type.is_empty() {
            "image/png"
        } else {
            self.mime_type.as_str()
        };
        format!("data:{};base64,{}", mime, self.data)
    }
}

#[async_trait(?Send)]
pub trait GenerativePort {
    /// Single-shot text generation. Returns the concatenated text parts.
    async fn generate_text(&self, req: TextRequest) -> Result<String>;

    /// Single-shot image generation. `Ok(None)` when the response holds no image.
    async fn generate_image(&self, req: ImageRequest) -> Result<Option<GeneratedImage>>;

    /// Whether an API credential is configured
    fn has_credential(&self) -> bool;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}
