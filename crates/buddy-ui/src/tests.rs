#[cfg(test)]
mod tests {
    use crate::panels::settings::{settings_panel, SettingsAction};
    use crate::panels::timer::*;
    use crate::panels::{chat, landing, workspace};
    use crate::reward::*;
    use crate::state::*;
    use crate::theme;
    use buddy_types::buddy::Buddy;
    use buddy_types::config::{AiConfig, SprintConfig};
    use buddy_types::event::{Intent, SessionEvent};
    use buddy_types::message::Message;
    use buddy_types::session::SessionSnapshot;
    use buddy_types::stage::Stage;

    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn planning_snapshot() -> SessionSnapshot {
        let buddy = Buddy::new("Alex", "Chill");
        SessionSnapshot {
            stage: Stage::Planning,
            messages: vec![Message::buddy(buddy.greeting())],
            buddy: Some(buddy),
            ..SessionSnapshot::default()
        }
    }

    fn run_frame(mut f: impl FnMut(&egui::Context)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| f(ctx));
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert_eq!(state.stage(), Stage::Landing);
        assert!(state.input_text.is_empty());
        assert!(!state.show_settings);
        assert!(!state.confirm_abandon);
        assert!(state.reward_image.is_none());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_applies_latest_snapshot() {
        let mut state = UiState::new();
        let mut matching = SessionSnapshot::default();
        matching.stage = Stage::Matching;
        state.process_events(vec![
            SessionEvent::Updated(matching),
            SessionEvent::Updated(planning_snapshot()),
        ]);
        assert_eq!(state.stage(), Stage::Planning);
        assert_eq!(state.snapshot.messages.len(), 1);
        assert_eq!(state.status_text, "Planning");
    }

    #[test]
    fn test_ui_state_status_follows_stage() {
        let mut state = UiState::new();
        let mut snap = planning_snapshot();
        snap.awaiting_reply = true;
        state.process_events(vec![SessionEvent::Updated(snap.clone())]);
        assert_eq!(state.status_text, "Buddy is typing...");

        snap.awaiting_reply = false;
        snap.stage = Stage::Sprinting;
        snap.task = "essay".to_string();
        state.process_events(vec![SessionEvent::Updated(snap)]);
        assert_eq!(state.status_text, "Focusing on essay");
    }

    #[test]
    fn test_take_input_requires_buddy_and_idle_chat() {
        let mut state = UiState::new();
        state.input_text = "hello".to_string();
        assert_eq!(state.take_input(), None);
        assert_eq!(state.input_text, "hello");

        state.process_events(vec![SessionEvent::Updated(planning_snapshot())]);
        assert_eq!(state.take_input(), Some("hello".to_string()));
        assert!(state.input_text.is_empty());

        let mut busy = planning_snapshot();
        busy.awaiting_reply = true;
        state.process_events(vec![SessionEvent::Updated(busy)]);
        state.input_text = "again".to_string();
        assert_eq!(state.take_input(), None);
    }

    #[test]
    fn test_take_input_ignores_whitespace() {
        let mut state = UiState::with_snapshot(planning_snapshot());
        state.goal_text = "   ".to_string();
        assert_eq!(state.take_goal(), None);
        state.goal_text = "  Write 500 words ".to_string();
        assert_eq!(state.take_goal(), Some("Write 500 words".to_string()));
    }

    #[test]
    fn test_reset_event_clears_transient_fields() {
        let mut state = UiState::with_snapshot(planning_snapshot());
        state.input_text = "draft".to_string();
        state.goal_text = "goal".to_string();
        state.confirm_abandon = true;
        state.process_events(vec![
            SessionEvent::Reset { epoch: 1 },
            SessionEvent::Updated(SessionSnapshot::landing(1, 1500)),
        ]);
        assert!(state.input_text.is_empty());
        assert!(state.goal_text.is_empty());
        assert!(!state.confirm_abandon);
        assert_eq!(state.stage(), Stage::Landing);
        assert_eq!(state.snapshot.epoch, 1);
    }

    #[test]
    fn test_leaving_sprint_closes_abandon_dialog() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Sprinting;
        let mut state = UiState::with_snapshot(snap.clone());
        state.confirm_abandon = true;
        snap.stage = Stage::Completed;
        state.process_events(vec![SessionEvent::Updated(snap)]);
        assert!(!state.confirm_abandon);
    }

    #[test]
    fn test_reward_decoded_once_per_uri() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Completed;
        let mut state = UiState::with_snapshot(snap.clone());

        snap.reward = Some(PNG_URI.to_string());
        state.process_events(vec![SessionEvent::Updated(snap.clone())]);
        let image = state.reward_image.clone().unwrap();
        assert_eq!(image.uri, "bytes://reward-0.png");
        assert_eq!(&image.bytes[..4], &[0x89, b'P', b'N', b'G']);

        state.process_events(vec![SessionEvent::Updated(snap)]);
        assert_eq!(state.reward_image, Some(image));
    }

    #[test]
    fn test_status_after_failed_reward() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Completed;
        snap.reward_requested = true;
        let state = UiState::with_snapshot(snap);
        assert_eq!(state.status_text, "Sprint complete (no sticker)");
    }

    #[test]
    fn test_bad_reward_is_dropped() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Completed;
        snap.reward = Some("data:image/png;base64,@@@".to_string());
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::Updated(snap)]);
        assert!(state.reward_image.is_none());
        assert_eq!(state.status_text, "Sprint complete");
    }

    #[test]
    fn test_download_needs_request_and_sticker() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Completed;
        let mut state = UiState::with_snapshot(snap.clone());

        state.download_requested = true;
        assert_eq!(state.take_download(), None);
        assert!(!state.download_requested);

        snap.reward = Some(PNG_URI.to_string());
        state.process_events(vec![SessionEvent::Updated(snap)]);
        assert_eq!(state.take_download(), None);

        state.download_requested = true;
        let image = state.take_download().unwrap();
        assert_eq!(image.mime, "image/png");
        assert_eq!(&image.bytes[..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(state.take_download(), None);
    }

    #[test]
    fn test_reset_drops_pending_download() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Completed;
        snap.reward = Some(PNG_URI.to_string());
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::Updated(snap)]);
        state.download_requested = true;
        state.process_events(vec![SessionEvent::Reset { epoch: 1 }]);
        assert_eq!(state.take_download(), None);
    }

    // ─── Reward Decoding Tests ───────────────────────────────

    #[test]
    fn test_decode_data_uri() {
        let (mime, bytes) = decode_data_uri(PNG_URI).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn test_decode_data_uri_rejects_garbage() {
        assert!(decode_data_uri("https://example.com/a.png").is_err());
        assert!(decode_data_uri("data:image/png;base64").is_err());
        assert!(decode_data_uri("data:image/png,plain").is_err());
        assert!(decode_data_uri("data:image/png;base64,").is_err());
    }

    #[test]
    fn test_reward_uri_extension_follows_mime() {
        let jpeg = RewardImage::from_data_uri("data:image/jpeg;base64,/9j/4A==", 3).unwrap();
        assert_eq!(jpeg.uri, "bytes://reward-3.jpg");
        let unknown = RewardImage::from_data_uri("data:;base64,iVBORw0KGgo=", 4).unwrap();
        assert_eq!(unknown.uri, "bytes://reward-4.png");
    }

    // ─── Timer Face Tests ────────────────────────────────────

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_remaining_fraction() {
        assert_eq!(remaining_fraction(1500, 1500), 1.0);
        assert_eq!(remaining_fraction(750, 1500), 0.5);
        assert_eq!(remaining_fraction(10, 0), 0.0);
        assert_eq!(remaining_fraction(20, 10), 1.0);
    }

    #[test]
    fn test_face_caption() {
        assert_eq!(face_caption(true), "SPRINT ACTIVE");
        assert_eq!(face_caption(false), "TIME'S UP");
    }

    #[test]
    fn test_liquid_color_thresholds() {
        assert_eq!(liquid_color(1.0), theme::TIMER_CALM);
        assert_eq!(liquid_color(0.6), theme::TIMER_CALM);
        assert_eq!(liquid_color(0.59), theme::TIMER_HALF);
        assert_eq!(liquid_color(0.3), theme::TIMER_HALF);
        assert_eq!(liquid_color(0.29), theme::TIMER_LOW);
    }

    // ─── Headless Panel Tests ────────────────────────────────

    #[test]
    fn test_panels_render_without_input() {
        let mut state = UiState::with_snapshot(planning_snapshot());
        run_frame(|ctx| {
            theme::apply_theme(ctx);
            egui::CentralPanel::default().show(ctx, |ui| {
                assert_eq!(landing::landing_panel(ui), None);
                assert_eq!(workspace::workspace_panel(ui, &mut state), None);
                assert_eq!(chat::chat_panel(ui, &mut state), None);
            });
        });
    }

    #[test]
    fn test_completed_card_renders_reward_without_input() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Completed;
        snap.reward = Some(PNG_URI.to_string());
        snap.completed_at = Some(1_700_000_000_000);
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::Updated(snap)]);
        assert!(state.reward_image.is_some());
        run_frame(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                assert_eq!(workspace::workspace_panel(ui, &mut state), None);
                assert_eq!(chat::chat_panel(ui, &mut state), None);
            });
        });
        assert!(!state.download_requested);
    }

    #[test]
    fn test_chat_panel_hidden_without_buddy() {
        let mut state = UiState::new();
        state.input_text = "hi".to_string();
        run_frame(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                assert_eq!(chat::chat_panel(ui, &mut state), None);
            });
        });
        assert_eq!(state.input_text, "hi");
    }

    #[test]
    fn test_abandon_dialog_only_when_requested() {
        let mut snap = planning_snapshot();
        snap.stage = Stage::Sprinting;
        snap.task = "essay".to_string();
        let mut state = UiState::with_snapshot(snap);
        run_frame(|ctx| {
            assert_eq!(workspace::abandon_dialog(ctx, &mut state), None);
            state.confirm_abandon = true;
            let intent: Option<Intent> = workspace::abandon_dialog(ctx, &mut state);
            assert_eq!(intent, None);
        });
        assert!(state.confirm_abandon);
    }

    #[test]
    fn test_settings_untouched_reports_none() {
        let mut config = AiConfig::default();
        let sprint = SprintConfig::default();
        run_frame(|ctx| {
            egui::SidePanel::right("settings").show(ctx, |ui| {
                let action = settings_panel(ui, &mut config, &sprint, None);
                assert_eq!(action, SettingsAction::None);
            });
        });
        assert_eq!(config.chat_model, AiConfig::default().chat_model);
    }
}
