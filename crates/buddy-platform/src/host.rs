//! Effect host: runs the session machine's effects on the browser event loop.
//!
//! - Match delay → one-shot `gloo_timers::callback::Timeout`
//! - Sprint ticks → 1 s `gloo_timers::callback::Interval`
//! - Collaborator calls → `wasm_bindgen_futures::spawn_local`
//!
//! Every outcome is pushed onto the machine's inbox and followed by a wake-up
//! call so the UI drains it on the next frame. Dropping a timer handle cancels
//! it, so stopping the ticker or cancelling the match is immediate.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

use buddy_core::collaborator::{Collaborator, CollaboratorRequest};
use buddy_core::event_bus::EventBus;
use buddy_core::machine::{Effect, Input};

const TICK_MS: u32 = 1_000;

pub struct EffectHost {
    inbox: EventBus<Input>,
    wake: Rc<dyn Fn()>,
    collaborator: Rc<Collaborator>,
    ticker: Option<Interval>,
    pending_match: Option<Timeout>,
}

impl EffectHost {
    pub fn new(
        inbox: EventBus<Input>,
        collaborator: Rc<Collaborator>,
        wake: impl Fn() + 'static,
    ) -> Self {
        Self {
            inbox,
            wake: Rc::new(wake),
            collaborator,
            ticker: None,
            pending_match: None,
        }
    }

    /// Swap the collaborator after a settings change. Calls already in flight
    /// keep the old one.
    pub fn set_collaborator(&mut self, collaborator: Rc<Collaborator>) {
        self.collaborator = collaborator;
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleMatch { epoch, delay_ms } => self.schedule_match(epoch, delay_ms),
                Effect::CancelMatch => {
                    self.pending_match = None;
                }
                Effect::StartTicker { epoch } => self.start_ticker(epoch),
                Effect::StopTicker => {
                    if self.ticker.take().is_some() {
                        log::debug!("Ticker stopped");
                    }
                }
                Effect::Collaborate(req) => self.collaborate(req),
            }
        }
    }

    fn schedule_match(&mut self, epoch: u64, delay_ms: u32) {
        let inbox = self.inbox.clone();
        let wake = self.wake.clone();
        self.pending_match = Some(Timeout::new(delay_ms, move || {
            inbox.emit(Input::MatchElapsed { epoch });
            wake();
        }));
    }

    fn start_ticker(&mut self, epoch: u64) {
        let inbox = self.inbox.clone();
        let wake = self.wake.clone();
        // Replacing an old interval drops (and cancels) it
        self.ticker = Some(Interval::new(TICK_MS, move || {
            inbox.emit(Input::Tick { epoch });
            wake();
        }));
        log::debug!("Ticker started for epoch {}", epoch);
    }

    fn collaborate(&self, req: CollaboratorRequest) {
        log::debug!("Collaborator call for epoch {}", req.epoch());
        let collaborator = self.collaborator.clone();
        let inbox = self.inbox.clone();
        let wake = self.wake.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let input = collaborator.fulfil(req).await;
            inbox.emit(input);
            wake();
        });
    }
}
