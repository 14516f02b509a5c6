//! WASM-target tests for buddy-platform (Node.js runtime).
//!
//! Exercises the Gemini adapter's offline paths and the effect host's
//! timers under wasm32-unknown-unknown via `wasm-pack test --node`.
//! Nothing here reaches the network.

use wasm_bindgen_test::*;

use std::cell::Cell;
use std::rc::Rc;

use buddy_core::collaborator::{Collaborator, CollaboratorRequest, REPLY_NO_CREDENTIAL, SUMMARY_NO_CREDENTIAL};
use buddy_core::event_bus::EventBus;
use buddy_core::machine::{Effect, Input};
use buddy_core::ports::{GenerativePort, ImageRequest, TextRequest, Turn};
use buddy_platform::download::{save_bytes, STICKER_FILENAME};
use buddy_platform::host::EffectHost;
use buddy_platform::llm::GeminiProvider;
use buddy_types::buddy::Buddy;
use buddy_types::config::{AiConfig, DEFAULT_HISTORY_WINDOW};
use buddy_types::stage::Stage;
use buddy_types::BuddyError;
use gloo_timers::future::TimeoutFuture;

fn offline_host() -> (EffectHost, EventBus<Input>, Rc<Cell<u32>>) {
    let inbox = EventBus::new();
    let config = AiConfig::default();
    let port: Rc<dyn GenerativePort> = Rc::new(GeminiProvider::new(config.clone()));
    let collaborator = Rc::new(Collaborator::new(port, config, DEFAULT_HISTORY_WINDOW));
    let wakes = Rc::new(Cell::new(0));
    let counter = wakes.clone();
    let host = EffectHost::new(inbox.clone(), collaborator, move || counter.set(counter.get() + 1));
    (host, inbox, wakes)
}

// ─── GeminiProvider Tests ────────────────────────────────

#[wasm_bindgen_test]
async fn gemini_text_without_key_fails_fast() {
    let provider = GeminiProvider::new(AiConfig::default());
    let req = TextRequest {
        model: "gemini-3-flash-preview".to_string(),
        system_instruction: None,
        turns: vec![Turn::new("user", "hi")],
        temperature: None,
        max_output_tokens: None,
    };
    let err = provider.generate_text(req).await.unwrap_err();
    assert!(matches!(err, BuddyError::MissingCredential));
}

#[wasm_bindgen_test]
async fn gemini_image_without_key_fails_fast() {
    let provider = GeminiProvider::new(AiConfig {
        api_key: "   ".to_string(),
        ..AiConfig::default()
    });
    let req = ImageRequest {
        model: "gemini-2.5-flash-image".to_string(),
        prompt: "badge".to_string(),
        aspect_ratio: "1:1".to_string(),
    };
    let err = provider.generate_image(req).await.unwrap_err();
    assert!(matches!(err, BuddyError::MissingCredential));
}

// ─── EffectHost Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn host_delivers_match_after_delay() {
    let (mut host, inbox, wakes) = offline_host();
    host.run(vec![Effect::ScheduleMatch { epoch: 4, delay_ms: 5 }]);
    assert!(!inbox.has_pending());

    TimeoutFuture::new(40).await;
    let inputs = inbox.drain();
    assert!(matches!(inputs.as_slice(), [Input::MatchElapsed { epoch: 4 }]));
    assert_eq!(wakes.get(), 1);
}

#[wasm_bindgen_test]
async fn host_cancelled_match_never_fires() {
    let (mut host, inbox, wakes) = offline_host();
    host.run(vec![
        Effect::ScheduleMatch { epoch: 0, delay_ms: 5 },
        Effect::CancelMatch,
    ]);

    TimeoutFuture::new(40).await;
    assert!(!inbox.has_pending());
    assert_eq!(wakes.get(), 0);
}

#[wasm_bindgen_test]
async fn host_ticker_start_and_stop() {
    let (mut host, inbox, wakes) = offline_host();
    host.run(vec![Effect::StartTicker { epoch: 1 }]);
    TimeoutFuture::new(1_100).await;
    let ticks = inbox.drain();
    assert!(ticks.iter().any(|i| matches!(i, Input::Tick { epoch: 1 })));
    assert!(wakes.get() >= 1);

    host.run(vec![Effect::StopTicker]);
    TimeoutFuture::new(1_100).await;
    assert!(!inbox.has_pending());
}

// ─── Download Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn download_without_document_reports_browser_error() {
    let err = save_bytes(&[0x89, b'P', b'N', b'G'], "image/png", STICKER_FILENAME).unwrap_err();
    assert!(matches!(err, BuddyError::Browser(_)));
}

#[wasm_bindgen_test]
async fn host_collaborator_reply_without_key() {
    let (mut host, inbox, wakes) = offline_host();
    host.run(vec![
        Effect::Collaborate(CollaboratorRequest::Converse {
            epoch: 2,
            history: Vec::new(),
            buddy: Buddy::new("Alex", "Chill"),
            task: "essay".to_string(),
            stage: Stage::Planning,
        }),
        Effect::Collaborate(CollaboratorRequest::Summarize {
            epoch: 2,
            task: "essay".to_string(),
            duration_minutes: 25,
        }),
        Effect::Collaborate(CollaboratorRequest::RewardImage {
            epoch: 2,
            task: "essay".to_string(),
        }),
    ]);

    TimeoutFuture::new(20).await;
    let inputs = inbox.drain();
    assert_eq!(inputs.len(), 3);
    assert_eq!(wakes.get(), 3);
    assert!(inputs.iter().any(|i| matches!(i,
        Input::ChatReply { epoch: 2, text } if text == REPLY_NO_CREDENTIAL)));
    assert!(inputs.iter().any(|i| matches!(i,
        Input::SummaryReady { epoch: 2, text } if text == SUMMARY_NO_CREDENTIAL)));
    assert!(inputs.iter().any(|i| matches!(i, Input::RewardReady { epoch: 2, image: None })));
}
