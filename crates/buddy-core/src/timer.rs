//! Countdown engine for the focus sprint.
//!
//! The engine does not own a clock. An external scheduler calls [`Countdown::tick`]
//! roughly once per second; a lost or doubled tick only skews the display.

use buddy_types::{BuddyError, Result};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing changed
    Idle,
    /// Still counting down
    Running { remaining: u32 },
    /// Reached zero on this tick. Emitted once per run.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// A stopped countdown showing the full duration
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration: duration_secs,
            remaining: duration_secs,
            running: false,
        }
    }

    /// Begin a run. A zero-length sprint is refused so a running timer
    /// always has time left.
    pub fn start(&mut self, duration_secs: u32) -> Result<()> {
        if self.running {
            return Err(BuddyError::TimerRunning);
        }
        if duration_secs == 0 {
            return Err(BuddyError::Config("sprint duration must be positive".to_string()));
        }
        self.duration = duration_secs;
        self.remaining = duration_secs;
        self.running = true;
        Ok(())
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Stop without completing
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
