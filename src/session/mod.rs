//! Countdown practice-session state
//!
//! A session pairs a countdown clock with a target question count and a
//! solved counter. The state owns no clock of its own: a driver calls
//! [`PracticeSession::tick`] once per second (the CLI uses a `tokio`
//! interval), which keeps the state explicit and directly testable.

use crate::utils::{DEFAULT_SESSION_MINUTES, DEFAULT_TARGET_QUESTIONS};

const SECS_PER_MINUTE: u64 = 60;

/// Lifecycle of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not started, or reset
    Idle,
    /// Counting down
    Running,
    /// Stopped with the clock exhausted or the target reached
    Complete,
}

/// Countdown, target, and solved-counter state for one practice run.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    /// Configured session length, restored on reset
    configured_secs: u64,
    remaining_secs: u64,
    target: u32,
    solved: u32,
    running: bool,
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_MINUTES, DEFAULT_TARGET_QUESTIONS)
    }
}

impl PracticeSession {
    #[must_use]
    pub fn new(minutes: u64, target: u32) -> Self {
        let configured_secs = minutes * SECS_PER_MINUTE;
        Self {
            configured_secs,
            remaining_secs: configured_secs,
            target,
            solved: 0,
            running: false,
        }
    }

    /// Begin a run: zero the solved counter, restore the full countdown,
    /// and start the clock.
    pub fn start(&mut self) {
        self.solved = 0;
        self.remaining_secs = self.configured_secs;
        self.running = self.configured_secs > 0;
    }

    /// Stop the clock, zero the solved counter, restore the countdown.
    pub fn reset(&mut self) {
        self.running = false;
        self.solved = 0;
        self.remaining_secs = self.configured_secs;
    }

    /// Advance the clock by one second. At zero the session stops.
    pub fn tick(&mut self) -> SessionStatus {
        if self.running {
            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                self.running = false;
            }
        }
        self.status()
    }

    /// Count one solved question. Only counts while the clock runs;
    /// reaching the target does not stop the clock — completion is
    /// observed once the session stops.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.solved += 1;
        true
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.running {
            SessionStatus::Running
        } else if self.is_complete() {
            SessionStatus::Complete
        } else {
            SessionStatus::Idle
        }
    }

    /// Whether the run is over: stopped, with the clock exhausted or the
    /// target reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.running && (self.remaining_secs == 0 || self.solved >= self.target)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    #[must_use]
    pub fn solved(&self) -> u32 {
        self.solved
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// `MM:SS` rendering of the remaining time.
    #[must_use]
    pub fn clock(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / SECS_PER_MINUTE,
            self.remaining_secs % SECS_PER_MINUTE
        )
    }
}
