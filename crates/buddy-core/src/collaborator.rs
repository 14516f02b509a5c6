//! AI collaborator: the three calls the session machine makes into the
//! generative service: chat reply, sprint summary, and reward sticker.
//!
//! Every call is a single attempt. Missing credentials, transport errors and
//! empty answers all collapse into fixed fallback values here, so nothing
//! past this boundary ever sees an error.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use buddy_types::{
    buddy::Buddy,
    config::AiConfig,
    message::Message,
    stage::Stage,
};
use crate::machine::Input;
use crate::ports::{GenerativePort, ImageRequest, TextRequest, Turn};

pub const REPLY_NO_CREDENTIAL: &str = "I can't connect to my brain (API Key missing).";
pub const REPLY_FAILED: &str = "Let's get back to work!";
pub const REPLY_EMPTY: &str = "...";

pub const SUMMARY_NO_CREDENTIAL: &str = "Great job!";
pub const SUMMARY_FAILED: &str = "Great hustle!";
pub const SUMMARY_EMPTY: &str = "Well done!";

const REWARD_ASPECT_RATIO: &str = "1:1";

/// A collaborator call requested by the session machine.
/// `epoch` ties the eventual result back to the session that asked for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollaboratorRequest {
    Converse {
        epoch: u64,
        history: Vec<Message>,
        buddy: Buddy,
        task: String,
        stage: Stage,
    },
    Summarize {
        epoch: u64,
        task: String,
        duration_minutes: u32,
    },
    RewardImage {
        epoch: u64,
        task: String,
    },
}

impl CollaboratorRequest {
    pub fn epoch(&self) -> u64 {
        match self {
            CollaboratorRequest::Converse { epoch, .. }
            | CollaboratorRequest::Summarize { epoch, .. }
            | CollaboratorRequest::RewardImage { epoch, .. } => *epoch,
        }
    }
}

pub struct Collaborator {
    port: Rc<dyn GenerativePort>,
    config: AiConfig,
    history_window: usize,
}

impl Collaborator {
    pub fn new(port: Rc<dyn GenerativePort>, config: AiConfig, history_window: usize) -> Self {
        Self {
            port,
            config,
            history_window,
        }
    }

    /// Run a request and wrap its result as the follow-up machine input.
    pub async fn fulfil(&self, req: CollaboratorRequest) -> Input {
        match req {
            CollaboratorRequest::Converse {
                epoch,
                history,
                buddy,
                task,
                stage,
            } => Input::ChatReply {
                epoch,
                text: self.converse(&history, &buddy, &task, stage).await,
            },
            CollaboratorRequest::Summarize {
                epoch,
                task,
                duration_minutes,
            } => Input::SummaryReady {
                epoch,
                text: self.summarize(&task, duration_minutes).await,
            },
            CollaboratorRequest::RewardImage { epoch, task } => Input::RewardReady {
                epoch,
                image: self.generate_reward_image(&task).await,
            },
        }
    }

    /// Short in-character reply to the latest history.
    pub async fn converse(
        &self,
        history: &[Message],
        buddy: &Buddy,
        task: &str,
        stage: Stage,
    ) -> String {
        if !self.port.has_credential() {
            return REPLY_NO_CREDENTIAL.to_string();
        }

        let req = TextRequest {
            model: self.config.chat_model.clone(),
            system_instruction: Some(buddy_instruction(buddy, task, stage)),
            turns: recent_turns(history, self.history_window),
            temperature: Some(self.config.temperature),
            max_output_tokens: Some(self.config.max_output_tokens),
        };

        match self.port.generate_text(req).await {
            Ok(text) if text.trim().is_empty() => REPLY_EMPTY.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                log::warn!("{} chat failed: {}", self.port.provider_name(), e);
                REPLY_FAILED.to_string()
            }
        }
    }

    /// One motivational sentence about the finished sprint.
    pub async fn summarize(&self, task: &str, duration_minutes: u32) -> String {
        if !self.port.has_credential() {
            return SUMMARY_NO_CREDENTIAL.to_string();
        }

        let req = TextRequest {
            model: self.config.chat_model.clone(),
            system_instruction: None,
            turns: vec![Turn::new("user", summary_prompt(task, duration_minutes))],
            temperature: None,
            max_output_tokens: None,
        };

        match self.port.generate_text(req).await {
            Ok(text) if text.trim().is_empty() => SUMMARY_EMPTY.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                log::warn!("{} summary failed: {}", self.port.provider_name(), e);
                SUMMARY_FAILED.to_string()
            }
        }
    }

    /// Square sticker celebrating the task, as a `data:` URI.
    pub async fn generate_reward_image(&self, task: &str) -> Option<String> {
        if !self.port.has_credential() {
            return None;
        }

        let req = ImageRequest {
            model: self.config.image_model.clone(),
            prompt: reward_prompt(task),
            aspect_ratio: REWARD_ASPECT_RATIO.to_string(),
        };

        match self.port.generate_image(req).await {
            Ok(Some(image)) => Some(image.data_uri()),
            Ok(None) => {
                log::warn!("{} returned no image part", self.port.provider_name());
                None
            }
            Err(e) => {
                log::warn!("{} image failed: {}", self.port.provider_name(), e);
                None
            }
        }
    }
}

/// Last `window` messages, oldest first, tagged for the model.
pub fn recent_turns(history: &[Message], window: usize) -> Vec<Turn> {
    let start = history.len().saturating_sub(window);
    history[start..]
        .iter()
        .map(|m| Turn::new(m.sender.history_role(), m.text.clone()))
        .collect()
}

fn stage_guidance(stage: Stage) -> &'static str {
    match stage {
        Stage::Sprinting => {
            "The sprint is running. Be very brief. Discourage chatting unless they are stuck and nudge them back to work."
        }
        Stage::Completed => "The sprint is over. Congratulate them warmly and ask how it went.",
        _ => "Help them pin down a concrete task for the sprint. Sound eager to start.",
    }
}

pub fn buddy_instruction(buddy: &Buddy, task: &str, stage: Stage) -> String {
    format!(
        "You are {name}, a virtual study buddy. Personality: {personality}\n\
         \n\
         The user is working on: \"{task}\"\n\
         Current stage: {stage}\n\
         \n\
         Reply in at most two sentences so the user keeps their focus.\n\
         {guidance}\n\
         Talk like a human accountability partner, not a generic assistant.",
        name = buddy.name,
        personality = buddy.personality,
        task = task,
        stage = stage.tag(),
        guidance = stage_guidance(stage),
    )
}

pub fn summary_prompt(task: &str, duration_minutes: u32) -> String {
    format!(
        "The user just finished a {} minute sprint working on: \"{}\". \
         Give them a one-sentence motivational quote or insight related to this topic.",
        duration_minutes, task
    )
}

pub fn reward_prompt(task: &str) -> String {
    format!(
        "A cool, vibrant, vector-art style digital sticker or badge representing the accomplishment of: \"{}\". \
         High contrast, colorful, clean lines, white background, suitable for a gamification reward icon.",
        task
    )
}
