use serde::{Deserialize, Serialize};

pub const BUDDY_NAMES: &[&str] = &["Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley"];

pub const BUDDY_PERSONALITIES: &[&str] = &[
    "Strict but fair. Keeps you on track.",
    "Encouraging and cheerful. Loves progress.",
    "Stoic and focused. Minimal distractions.",
    "Scientific and precise. Obsessed with efficiency.",
];

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";
const AVATAR_BACKGROUND: &str = "b6e3f4";

/// The companion persona paired with the user for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buddy {
    pub id: String,
    pub name: String,
    pub personality: String,
    pub avatar_url: String,
}

impl Buddy {
    pub fn new(name: impl Into<String>, personality: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            avatar_url: avatar_url(&name),
            name,
            personality: personality.into(),
        }
    }

    /// Opening line posted when the buddy joins the session
    pub fn greeting(&self) -> String {
        format!(
            "Hey! I'm {}. Ready to get stuff done? What are we working on?",
            self.name
        )
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Deterministic avatar image URL for a buddy name
pub fn avatar_url(name: &str) -> String {
    format!(
        "{}?seed={}&backgroundColor={}",
        AVATAR_BASE_URL, name, AVATAR_BACKGROUND
    )
}
