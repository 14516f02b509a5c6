use serde::{Deserialize, Serialize};

/// Phase of the session state machine.
/// Ordering follows the forward progression of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Landing,
    Matching,
    Planning,
    Sprinting,
    Completed,
}

impl Stage {
    /// Tag used in prompts and logs
    pub fn tag(&self) -> &'static str {
        match self {
            Stage::Landing => "LANDING",
            Stage::Matching => "MATCHING",
            Stage::Planning => "PLANNING",
            Stage::Sprinting => "SPRINTING",
            Stage::Completed => "COMPLETED",
        }
    }

    /// Whether the buddy is present and chat is open
    pub fn has_chat(&self) -> bool {
        matches!(self, Stage::Planning | Stage::Sprinting | Stage::Completed)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
