#[cfg(test)]
mod tests {
    use crate::buddy::*;
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::session::*;
    use crate::stage::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::user("hi").sender, Sender::User);
        assert_eq!(Message::buddy("hey").sender, Sender::Buddy);
        assert_eq!(Message::system("note").sender, Sender::System);
        assert_eq!(Message::user("hi").text, "hi");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("same");
        let b = Message::user("same");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_message_timestamp_is_set() {
        let msg = Message::buddy("hello");
        assert!(msg.timestamp > 0);
    }

    #[test]
    fn test_sender_history_role() {
        assert_eq!(Sender::User.history_role(), "user");
        assert_eq!(Sender::Buddy.history_role(), "model");
        assert_eq!(Sender::System.history_role(), "model");
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::Buddy).unwrap(), r#""buddy""#);
        let sender: Sender = serde_json::from_str(r#""system""#).unwrap();
        assert_eq!(sender, Sender::System);
    }

    // ─── Buddy Tests ─────────────────────────────────────────

    #[test]
    fn test_buddy_pools() {
        assert_eq!(BUDDY_NAMES.len(), 6);
        assert_eq!(BUDDY_PERSONALITIES.len(), 4);
    }

    #[test]
    fn test_avatar_url_is_deterministic() {
        let a = Buddy::new("Riley", BUDDY_PERSONALITIES[0]);
        let b = Buddy::new("Riley", BUDDY_PERSONALITIES[1]);
        assert_eq!(a.avatar_url, b.avatar_url);
        assert_eq!(
            a.avatar_url,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Riley&backgroundColor=b6e3f4"
        );
    }

    #[test]
    fn test_buddy_greeting() {
        let buddy = Buddy::new("Casey", BUDDY_PERSONALITIES[2]);
        assert_eq!(
            buddy.greeting(),
            "Hey! I'm Casey. Ready to get stuff done? What are we working on?"
        );
        assert_eq!(buddy.initial(), 'C');
    }

    // ─── Stage Tests ─────────────────────────────────────────

    #[test]
    fn test_stage_order_follows_progression() {
        assert!(Stage::Landing < Stage::Matching);
        assert!(Stage::Matching < Stage::Planning);
        assert!(Stage::Planning < Stage::Sprinting);
        assert!(Stage::Sprinting < Stage::Completed);
    }

    #[test]
    fn test_stage_tags() {
        assert_eq!(Stage::Planning.tag(), "PLANNING");
        assert_eq!(Stage::Sprinting.to_string(), "SPRINTING");
        assert_eq!(serde_json::to_string(&Stage::Completed).unwrap(), r#""COMPLETED""#);
    }

    #[test]
    fn test_stage_has_chat() {
        assert!(!Stage::Landing.has_chat());
        assert!(!Stage::Matching.has_chat());
        assert!(Stage::Planning.has_chat());
        assert!(Stage::Sprinting.has_chat());
        assert!(Stage::Completed.has_chat());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_intent_serialization() {
        let intent = Intent::SendChat { text: "Write 500 words".to_string() };
        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("SendChat"));
        assert!(json.contains("Write 500 words"));
    }

    #[test]
    fn test_session_event_carries_snapshot() {
        let event = SessionEvent::Updated(SessionSnapshot::default());
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("LANDING"));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = BuddyConfig::default();
        assert_eq!(config.sprint.duration_secs, 1500);
        assert_eq!(config.sprint.duration_minutes(), 25);
        assert_eq!(config.sprint.match_delay_ms, 3500);
        assert_eq!(config.sprint.history_window, 10);
        assert_eq!(config.ai.chat_model, "gemini-3-flash-preview");
        assert_eq!(config.ai.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.ai.max_output_tokens, 150);
        assert!(!config.ai.has_credential());
    }

    #[test]
    fn test_blank_key_is_not_a_credential() {
        let ai = AiConfig {
            api_key: "   ".to_string(),
            ..AiConfig::default()
        };
        assert!(!ai.has_credential());
    }

    #[test]
    fn test_base_url_override() {
        let mut ai = AiConfig::default();
        assert_eq!(ai.base_url(), "https://generativelanguage.googleapis.com");
        ai.api_base = Some(String::new());
        assert_eq!(ai.base_url(), "https://generativelanguage.googleapis.com");
        ai.api_base = Some("http://localhost:8080".to_string());
        assert_eq!(ai.base_url(), "http://localhost:8080");
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_landing_snapshot() {
        let snap = SessionSnapshot::landing(3, 1500);
        assert_eq!(snap.epoch, 3);
        assert_eq!(snap.stage, Stage::Landing);
        assert!(snap.buddy.is_none());
        assert!(snap.task.is_empty());
        assert!(snap.messages.is_empty());
        assert_eq!(snap.time_remaining, 1500);
        assert!(!snap.timer_running);
        assert!(snap.reward.is_none());
        assert_eq!(snap.sprint_minutes(), 25);
        assert!(!snap.can_send());
        assert_eq!(snap.completed_clock(), None);
    }

    #[test]
    fn test_completed_clock_format() {
        let mut snap = SessionSnapshot::landing(0, 1500);
        snap.completed_at = Some(1_700_000_000_000);
        let clock = snap.completed_clock().unwrap();
        assert_eq!(clock.len(), 5);
        assert_eq!(&clock[2..3], ":");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = BuddyError::Http { status: 503, body: "overloaded".to_string() };
        assert_eq!(err.to_string(), "HTTP 503: overloaded");
        assert_eq!(BuddyError::MissingCredential.to_string(), "API credential missing");
        assert_eq!(BuddyError::TimerRunning.to_string(), "Timer already running");
        assert_eq!(
            BuddyError::Browser("no document".to_string()).to_string(),
            "Browser API error: no document"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: BuddyError = serde_err.into();
        assert!(matches!(err, BuddyError::Serialization(_)));
    }
}
