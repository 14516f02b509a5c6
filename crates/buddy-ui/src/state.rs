//! UI-level state that drives rendering.
//! This is a read-only projection of the session machine,
//! updated each frame by draining the EventBus.

use buddy_types::event::SessionEvent;
use buddy_types::session::SessionSnapshot;
use buddy_types::stage::Stage;

use crate::reward::RewardImage;

/// State visible to UI panels
pub struct UiState {
    /// Latest snapshot published by the machine
    pub snapshot: SessionSnapshot,
    /// Chat input field content
    pub input_text: String,
    /// Goal field on the planning card
    pub goal_text: String,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Abandon confirmation window is showing
    pub confirm_abandon: bool,
    /// Status line text
    pub status_text: String,
    /// Decoded sticker for the current snapshot's reward
    pub reward_image: Option<RewardImage>,
    /// The Download button was pressed this frame
    pub download_requested: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_snapshot(SessionSnapshot::default())
    }

    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        let status_text = status_for(&snapshot);
        Self {
            snapshot,
            input_text: String::new(),
            goal_text: String::new(),
            show_settings: false,
            confirm_abandon: false,
            status_text,
            reward_image: None,
            download_requested: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::Updated(snapshot) => self.apply_snapshot(snapshot),
                SessionEvent::SprintCompleted { task } => {
                    log::info!("Sprint finished: {}", task);
                }
                SessionEvent::Reset { epoch } => {
                    log::debug!("UI reset for epoch {}", epoch);
                    self.input_text.clear();
                    self.goal_text.clear();
                    self.confirm_abandon = false;
                    self.reward_image = None;
                    self.download_requested = false;
                }
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: SessionSnapshot) {
        if snapshot.reward != self.snapshot.reward || snapshot.epoch != self.snapshot.epoch {
            self.reward_image = snapshot.reward.as_deref().and_then(|uri| {
                RewardImage::from_data_uri(uri, snapshot.epoch)
                    .map_err(|e| log::warn!("Cannot show reward: {}", e))
                    .ok()
            });
        }
        if snapshot.stage != Stage::Sprinting {
            self.confirm_abandon = false;
        }
        self.status_text = status_for(&snapshot);
        self.snapshot = snapshot;
    }

    pub fn stage(&self) -> Stage {
        self.snapshot.stage
    }

    /// Take the sticker the user asked to save, if one is showing
    pub fn take_download(&mut self) -> Option<RewardImage> {
        if !std::mem::take(&mut self.download_requested) {
            return None;
        }
        self.reward_image.clone()
    }

    /// Take the trimmed chat input if it can be sent right now
    pub fn take_input(&mut self) -> Option<String> {
        take_trimmed(&mut self.input_text, self.snapshot.can_send())
    }

    /// Take the trimmed goal text if it can be sent right now
    pub fn take_goal(&mut self) -> Option<String> {
        take_trimmed(&mut self.goal_text, self.snapshot.can_send())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn take_trimmed(field: &mut String, allowed: bool) -> Option<String> {
    let text = field.trim();
    if !allowed || text.is_empty() {
        return None;
    }
    let text = text.to_string();
    field.clear();
    Some(text)
}

fn status_for(snapshot: &SessionSnapshot) -> String {
    match snapshot.stage {
        Stage::Landing => "Ready".to_string(),
        Stage::Matching => "Finding a buddy...".to_string(),
        Stage::Planning if snapshot.awaiting_reply => "Buddy is typing...".to_string(),
        Stage::Planning => "Planning".to_string(),
        Stage::Sprinting => format!("Focusing on {}", snapshot.task),
        Stage::Completed if snapshot.generating_reward => "Minting your sticker...".to_string(),
        Stage::Completed if snapshot.reward_requested && snapshot.reward.is_none() => {
            "Sprint complete (no sticker)".to_string()
        }
        Stage::Completed => "Sprint complete".to_string(),
    }
}
