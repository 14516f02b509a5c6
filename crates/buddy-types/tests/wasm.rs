//! WASM-target tests for buddy-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use buddy_types::buddy::*;
use buddy_types::config::*;
use buddy_types::message::*;
use buddy_types::session::*;
use buddy_types::stage::*;

#[wasm_bindgen_test]
fn message_ids_are_unique() {
    let a = Message::user("same");
    let b = Message::user("same");
    assert_ne!(a.id, b.id);
}

#[wasm_bindgen_test]
fn message_timestamp_uses_js_clock() {
    assert!(Message::system("tick").timestamp > 0);
}

#[wasm_bindgen_test]
fn buddy_avatar_url() {
    let buddy = Buddy::new("Alex", BUDDY_PERSONALITIES[0]);
    assert!(buddy.avatar_url.contains("seed=Alex"));
}

#[wasm_bindgen_test]
fn default_sprint_config() {
    let config = SprintConfig::default();
    assert_eq!(config.duration_secs, 1500);
    assert_eq!(config.match_delay_ms, 3500);
}

#[wasm_bindgen_test]
fn landing_snapshot() {
    let snap = SessionSnapshot::landing(0, 1500);
    assert_eq!(snap.stage, Stage::Landing);
    assert!(!snap.can_send());
}
