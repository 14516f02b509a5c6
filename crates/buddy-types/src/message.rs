use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Buddy,
    System,
}

impl Sender {
    /// Role tag used when replaying history to the model.
    /// Everything that is not the user is the model's side of the conversation.
    pub fn history_role(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Buddy | Sender::System => "model",
        }
    }
}

/// A single entry in the session transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Unix time in milliseconds
    pub timestamp: i64,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn buddy(text: impl Into<String>) -> Self {
        Self::new(Sender::Buddy, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, text)
    }
}
