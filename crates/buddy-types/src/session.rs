use serde::{Deserialize, Serialize};
use crate::buddy::Buddy;
use crate::message::Message;
use crate::stage::Stage;

/// Immutable view of the session handed to the presentation layer
/// after every handled input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub epoch: u64,
    pub stage: Stage,
    pub buddy: Option<Buddy>,
    pub task: String,
    pub messages: Vec<Message>,
    pub time_remaining: u32,
    pub sprint_duration: u32,
    pub timer_running: bool,
    /// `data:` URI of the generated sticker
    pub reward: Option<String>,
    pub awaiting_reply: bool,
    pub generating_reward: bool,
    /// The one reward attempt of this session has been made
    pub reward_requested: bool,
    /// Unix milliseconds at which the countdown reached zero
    pub completed_at: Option<i64>,
}

impl SessionSnapshot {
    /// Snapshot of a fresh session sitting on the landing screen
    pub fn landing(epoch: u64, sprint_duration: u32) -> Self {
        Self {
            epoch,
            stage: Stage::Landing,
            buddy: None,
            task: String::new(),
            messages: Vec::new(),
            time_remaining: sprint_duration,
            sprint_duration,
            timer_running: false,
            reward: None,
            awaiting_reply: false,
            generating_reward: false,
            reward_requested: false,
            completed_at: None,
        }
    }

    pub fn sprint_minutes(&self) -> u32 {
        self.sprint_duration / 60
    }

    /// Local `HH:MM` at which the sprint finished
    pub fn completed_clock(&self) -> Option<String> {
        let utc = chrono::DateTime::from_timestamp_millis(self.completed_at?)?;
        Some(utc.with_timezone(&chrono::Local).format("%H:%M").to_string())
    }

    /// Chat input is accepted only with a buddy present and no reply in flight
    pub fn can_send(&self) -> bool {
        self.buddy.is_some() && !self.awaiting_reply
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::landing(0, crate::config::DEFAULT_SPRINT_SECS)
    }
}
