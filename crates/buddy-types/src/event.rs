use serde::{Deserialize, Serialize};
use crate::session::SessionSnapshot;

/// User intents forwarded by the presentation layer.
/// These are the only inputs a user can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    /// Leave the landing screen and look for a buddy
    StartMatch,
    /// Send a chat line to the buddy
    SendChat { text: String },
    /// Begin the countdown
    StartSprint,
    /// Give up on a running sprint. Only dispatched after the user confirms.
    AbandonSprint,
    /// Ask for the reward image on the completed screen
    RevealReward,
    /// Discard the session and go back to the landing screen
    Reset,
}

/// Events emitted by the session machine.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Session state changed; carries the full immutable snapshot
    Updated(SessionSnapshot),

    /// The countdown reached zero
    SprintCompleted { task: String },

    /// The session was discarded; `epoch` is the new generation
    Reset { epoch: u64 },
}
