use serde::{Deserialize, Serialize};

pub const DEFAULT_SPRINT_SECS: u32 = 25 * 60;
pub const DEFAULT_MATCH_DELAY_MS: u32 = 3_500;
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuddyConfig {
    pub ai: AiConfig,
    pub sprint: SprintConfig,
}

impl BuddyConfig {
    /// Defaults with the AI credential picked up from the build environment
    pub fn from_build_env() -> Self {
        Self {
            ai: AiConfig::from_build_env(),
            sprint: SprintConfig::default(),
        }
    }
}

/// Generative-AI service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub api_key: String,
    pub api_base: Option<String>,
    /// Model used for chat replies and the sprint summary
    pub chat_model: String,
    /// Model used for the reward sticker
    pub image_model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: None,
            chat_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            temperature: 0.7,
            max_output_tokens: 150,
        }
    }
}

impl AiConfig {
    /// The browser bundle has no process environment, so the key is baked in
    /// at build time. `GEMINI_API_KEY` wins over the generic `API_KEY`.
    pub fn from_build_env() -> Self {
        let api_key = option_env!("GEMINI_API_KEY")
            .or(option_env!("API_KEY"))
            .unwrap_or_default()
            .to_string();
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
    }
}

/// Timing of the session flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintConfig {
    pub duration_secs: u32,
    /// How long the matching screen spins before a buddy appears
    pub match_delay_ms: u32,
    /// Number of recent messages replayed to the model
    pub history_window: usize,
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_SPRINT_SECS,
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl SprintConfig {
    pub fn duration_minutes(&self) -> u32 {
        self.duration_secs / 60
    }
}
