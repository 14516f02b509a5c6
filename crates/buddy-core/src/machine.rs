//! Session state machine: the sole mutator of session state.
//!
//! Drives a sprint through LANDING → MATCHING → PLANNING → SPRINTING → COMPLETED:
//! 1. Take one input (user intent, timer tick, or collaborator result)
//! 2. Validate it against the current stage and epoch
//! 3. Apply the transition to the owned session
//! 4. Publish a fresh snapshot and return the effects the host must run
//!
//! The machine never awaits anything. Delays, ticks and AI calls are effects;
//! their outcomes come back later as inputs stamped with the epoch that asked
//! for them. A reset bumps the epoch, so late results from a discarded session
//! are dropped on arrival.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use buddy_types::{
    buddy::Buddy,
    config::SprintConfig,
    event::{Intent, SessionEvent},
    message::Message,
    session::SessionSnapshot,
    stage::Stage,
};
use crate::collaborator::CollaboratorRequest;
use crate::event_bus::EventBus;
use crate::matcher::match_buddy;
use crate::timer::{Countdown, TickOutcome};

pub const TASK_REQUIRED: &str = "Wait! Tell me your task first.";
pub const CELEBRATION: &str = "We did it!";

/// Everything the machine reacts to
#[derive(Debug, Clone)]
pub enum Input {
    Intent(Intent),
    /// The matching delay elapsed
    MatchElapsed { epoch: u64 },
    /// One second of the sprint passed
    Tick { epoch: u64 },
    ChatReply { epoch: u64, text: String },
    SummaryReady { epoch: u64, text: String },
    RewardReady { epoch: u64, image: Option<String> },
}

impl Input {
    /// Epoch stamp of scheduled/async inputs. User intents always apply to the current session.
    pub fn epoch(&self) -> Option<u64> {
        match self {
            Input::Intent(_) => None,
            Input::MatchElapsed { epoch }
            | Input::Tick { epoch }
            | Input::ChatReply { epoch, .. }
            | Input::SummaryReady { epoch, .. }
            | Input::RewardReady { epoch, .. } => Some(*epoch),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Input::Intent(_) => "intent",
            Input::MatchElapsed { .. } => "match",
            Input::Tick { .. } => "tick",
            Input::ChatReply { .. } => "chat reply",
            Input::SummaryReady { .. } => "summary",
            Input::RewardReady { .. } => "reward",
        }
    }
}

/// Work the host must carry out on the machine's behalf
#[derive(Debug, Clone)]
pub enum Effect {
    /// Feed `Input::MatchElapsed { epoch }` back after `delay_ms`
    ScheduleMatch { epoch: u64, delay_ms: u32 },
    /// Drop any pending match delay
    CancelMatch,
    /// Feed `Input::Tick { epoch }` back once per second until stopped
    StartTicker { epoch: u64 },
    StopTicker,
    /// Run the request and feed the result back as an input
    Collaborate(CollaboratorRequest),
}

/// The session value itself. Replaced wholesale on reset.
#[derive(Debug, Clone)]
struct Session {
    stage: Stage,
    buddy: Option<Buddy>,
    task: String,
    messages: Vec<Message>,
    timer: Countdown,
    reward: Option<String>,
    awaiting_reply: bool,
    generating_reward: bool,
    /// Set by the first reveal; only a reset clears it
    reward_requested: bool,
    completed_at: Option<i64>,
}

impl Session {
    fn new(sprint_duration: u32) -> Self {
        Self {
            stage: Stage::Landing,
            buddy: None,
            task: String::new(),
            messages: Vec::new(),
            timer: Countdown::new(sprint_duration),
            reward: None,
            awaiting_reply: false,
            generating_reward: false,
            reward_requested: false,
            completed_at: None,
        }
    }
}

pub struct SessionMachine {
    config: SprintConfig,
    session: Session,
    epoch: u64,
    rng: Box<dyn RngCore>,
    events: EventBus<SessionEvent>,
}

impl SessionMachine {
    pub fn new(config: SprintConfig, events: EventBus<SessionEvent>) -> Self {
        Self::with_rng(config, events, Box::new(StdRng::from_entropy()))
    }

    /// Build with an explicit random source, e.g. a seeded generator in tests
    pub fn with_rng(
        config: SprintConfig,
        events: EventBus<SessionEvent>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let session = Session::new(config.duration_secs);
        Self {
            config,
            session,
            epoch: 0,
            rng,
            events,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn stage(&self) -> Stage {
        self.session.stage
    }

    pub fn config(&self) -> &SprintConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let s = &self.session;
        SessionSnapshot {
            epoch: self.epoch,
            stage: s.stage,
            buddy: s.buddy.clone(),
            task: s.task.clone(),
            messages: s.messages.clone(),
            time_remaining: s.timer.remaining(),
            sprint_duration: s.timer.duration(),
            timer_running: s.timer.is_running(),
            reward: s.reward.clone(),
            awaiting_reply: s.awaiting_reply,
            generating_reward: s.generating_reward,
            reward_requested: s.reward_requested,
            completed_at: s.completed_at,
        }
    }

    /// Publish the current state without handling anything (initial frame).
    pub fn publish(&self) {
        self.events.emit(SessionEvent::Updated(self.snapshot()));
    }

    /// Apply one input. Runs to completion; returns effects for the host.
    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        if let Some(epoch) = input.epoch() {
            if epoch != self.epoch {
                log::debug!(
                    "Discarding stale {} from epoch {} (current {})",
                    input.kind(),
                    epoch,
                    self.epoch
                );
                return Vec::new();
            }
        }

        let effects = match input {
            Input::Intent(intent) => self.apply_intent(intent),
            Input::MatchElapsed { .. } => self.on_match_elapsed(),
            Input::Tick { .. } => self.on_tick(),
            Input::ChatReply { text, .. } => self.on_chat_reply(text),
            Input::SummaryReady { text, .. } => self.on_summary(text),
            Input::RewardReady { image, .. } => self.on_reward(image),
        };

        self.publish();
        effects
    }

    fn apply_intent(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::StartMatch => self.start_match(),
            Intent::SendChat { text } => self.send_chat(&text),
            Intent::StartSprint => self.start_sprint(),
            Intent::AbandonSprint => self.abandon_sprint(),
            Intent::RevealReward => self.reveal_reward(),
            Intent::Reset => self.reset(),
        }
    }

    fn ignore(&self, what: &str) -> Vec<Effect> {
        log::debug!("Ignoring {} in stage {}", what, self.session.stage);
        Vec::new()
    }

    fn enter(&mut self, stage: Stage) {
        log::info!("Stage {} -> {}", self.session.stage, stage);
        self.session.stage = stage;
    }

    fn start_match(&mut self) -> Vec<Effect> {
        if self.session.stage != Stage::Landing {
            return self.ignore("start-match");
        }
        self.enter(Stage::Matching);
        vec![Effect::ScheduleMatch {
            epoch: self.epoch,
            delay_ms: self.config.match_delay_ms,
        }]
    }

    fn on_match_elapsed(&mut self) -> Vec<Effect> {
        if self.session.stage != Stage::Matching {
            return self.ignore("match");
        }
        let buddy = match_buddy(self.rng.as_mut());
        log::info!("Matched with {} ({})", buddy.name, buddy.personality);
        self.session.messages.push(Message::buddy(buddy.greeting()));
        self.session.buddy = Some(buddy);
        self.enter(Stage::Planning);
        Vec::new()
    }

    fn send_chat(&mut self, text: &str) -> Vec<Effect> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        let Some(buddy) = self.session.buddy.clone() else {
            return self.ignore("chat without a buddy");
        };
        if self.session.awaiting_reply {
            return self.ignore("chat while a reply is pending");
        }

        if self.session.stage == Stage::Planning && self.session.task.is_empty() {
            log::info!("Task set: {}", text);
            self.session.task = text.to_string();
        }

        self.session.messages.push(Message::user(text));
        self.session.awaiting_reply = true;

        let start = self
            .session
            .messages
            .len()
            .saturating_sub(self.config.history_window);
        vec![Effect::Collaborate(CollaboratorRequest::Converse {
            epoch: self.epoch,
            history: self.session.messages[start..].to_vec(),
            buddy,
            task: self.session.task.clone(),
            stage: self.session.stage,
        })]
    }

    fn on_chat_reply(&mut self, text: String) -> Vec<Effect> {
        if !self.session.awaiting_reply {
            return self.ignore("unexpected chat reply");
        }
        self.session.awaiting_reply = false;
        self.session.messages.push(Message::buddy(text));
        Vec::new()
    }

    fn start_sprint(&mut self) -> Vec<Effect> {
        if self.session.stage != Stage::Planning {
            return self.ignore("start-sprint");
        }
        if self.session.task.is_empty() {
            self.session.messages.push(Message::system(TASK_REQUIRED));
            return Vec::new();
        }
        if let Err(e) = self.session.timer.start(self.config.duration_secs) {
            log::warn!("Cannot start sprint: {}", e);
            return Vec::new();
        }
        self.enter(Stage::Sprinting);
        self.session.messages.push(Message::system(format!(
            "Timer is ON! Head down, focus up. I'll see you in {} mins.",
            self.config.duration_minutes()
        )));
        vec![Effect::StartTicker { epoch: self.epoch }]
    }

    fn on_tick(&mut self) -> Vec<Effect> {
        if self.session.stage != Stage::Sprinting {
            return self.ignore("tick");
        }
        match self.session.timer.tick() {
            TickOutcome::Idle | TickOutcome::Running { .. } => Vec::new(),
            TickOutcome::Completed => self.complete_sprint(),
        }
    }

    fn complete_sprint(&mut self) -> Vec<Effect> {
        self.enter(Stage::Completed);
        self.session.completed_at = Some(chrono::Utc::now().timestamp_millis());
        let task = self.session.task.clone();
        self.events.emit(SessionEvent::SprintCompleted { task: task.clone() });
        vec![
            Effect::StopTicker,
            Effect::Collaborate(CollaboratorRequest::Summarize {
                epoch: self.epoch,
                task,
                duration_minutes: self.config.duration_minutes(),
            }),
        ]
    }

    fn on_summary(&mut self, text: String) -> Vec<Effect> {
        self.session
            .messages
            .push(Message::buddy(format!("{} {}", CELEBRATION, text)));
        Vec::new()
    }

    fn abandon_sprint(&mut self) -> Vec<Effect> {
        if self.session.stage != Stage::Sprinting {
            return self.ignore("abandon");
        }
        log::info!("Sprint abandoned with {}s left", self.session.timer.remaining());
        self.reset()
    }

    fn reveal_reward(&mut self) -> Vec<Effect> {
        if self.session.stage != Stage::Completed {
            return self.ignore("reveal-reward");
        }
        if self.session.reward_requested {
            return self.ignore("repeated reveal-reward");
        }
        self.session.reward_requested = true;
        self.session.generating_reward = true;
        vec![Effect::Collaborate(CollaboratorRequest::RewardImage {
            epoch: self.epoch,
            task: self.session.task.clone(),
        })]
    }

    fn on_reward(&mut self, image: Option<String>) -> Vec<Effect> {
        self.session.generating_reward = false;
        if self.session.reward.is_some() {
            return self.ignore("second reward");
        }
        match image {
            Some(uri) => self.session.reward = Some(uri),
            None => log::info!("No reward image this time"),
        }
        Vec::new()
    }

    /// Discard the session. Valid from any stage.
    fn reset(&mut self) -> Vec<Effect> {
        self.session.timer.cancel();
        self.epoch += 1;
        self.session = Session::new(self.config.duration_secs);
        log::info!("Session reset (epoch {})", self.epoch);
        self.events.emit(SessionEvent::Reset { epoch: self.epoch });
        vec![Effect::CancelMatch, Effect::StopTicker]
    }
}
