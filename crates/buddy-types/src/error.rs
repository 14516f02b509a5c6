use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BuddyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("API credential missing")]
    MissingCredential,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timer already running")]
    TimerRunning,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Browser API error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for BuddyError {
    fn from(e: serde_json::Error) -> Self {
        BuddyError::Serialization(e.to_string())
    }
}
