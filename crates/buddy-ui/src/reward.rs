//! Reward sticker decoding.
//!
//! The collaborator hands back the sticker as a `data:` URI. egui loads
//! images from bytes, so the payload is decoded once per session and kept
//! in [`crate::state::UiState`].

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use buddy_types::{BuddyError, Result};

/// Decoded sticker ready for `egui::Image::from_bytes`
#[derive(Debug, Clone, PartialEq)]
pub struct RewardImage {
    /// `bytes://` URI; the extension tells the image loader the format
    pub uri: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl RewardImage {
    pub fn from_data_uri(data_uri: &str, epoch: u64) -> Result<Self> {
        let (mime, bytes) = decode_data_uri(data_uri)?;
        Ok(Self {
            uri: format!("bytes://reward-{}.{}", epoch, extension_for(&mime)),
            mime,
            bytes: bytes.into(),
        })
    }

    pub fn image(&self) -> egui::Image<'static> {
        egui::Image::from_bytes(self.uri.clone(), egui::load::Bytes::Shared(self.bytes.clone()))
    }
}

/// Split `data:<mime>;base64,<payload>` into its mime type and raw bytes.
pub fn decode_data_uri(data_uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| BuddyError::MalformedResponse("not a data URI".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| BuddyError::MalformedResponse("data URI has no payload".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| BuddyError::MalformedResponse("data URI is not base64".to_string()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| BuddyError::MalformedResponse(format!("bad base64: {}", e)))?;
    if bytes.is_empty() {
        return Err(BuddyError::MalformedResponse("empty image".to_string()));
    }

    let mime = if mime.is_empty() { "image/png" } else { mime };
    Ok((mime.to_string(), bytes))
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}
