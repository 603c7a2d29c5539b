//! Round timer - resumable stopwatch with a one-second display tick
//!
//! Active time is kept as a single banked total plus the instant the current
//! running stretch began, so pausing and resuming never drifts:
//!
//! ```text
//! Stopped --start--> Running --pause--> Paused --resume--> Running
//!    ^                  |                  |
//!    +------stop--------+-------stop-------+
//! ```
//!
//! All methods take the current time in milliseconds from the caller; the
//! timer never reads a clock itself.

use crate::types::{format_mm_ss, DISPLAY_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Stopped,
    Running {
        /// Start of the current running stretch.
        resumed_at: u64,
        /// Active time from earlier stretches.
        banked_ms: u64,
    },
    Paused {
        banked_ms: u64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RoundTimer {
    state: TimerState,
    /// When the next display refresh is due; `None` cancels the tick.
    next_tick_at: Option<u64>,
    /// Elapsed time as of the last display refresh.
    displayed_ms: u64,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, TimerState::Paused { .. })
    }

    /// Active (unpaused) time so far.
    pub fn elapsed(&self, now_ms: u64) -> u64 {
        match self.state {
            TimerState::Stopped => 0,
            TimerState::Running {
                resumed_at,
                banked_ms,
            } => banked_ms + now_ms.saturating_sub(resumed_at),
            TimerState::Paused { banked_ms } => banked_ms,
        }
    }

    /// Stopped -> Running. Returns false if the timer was not stopped.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.state != TimerState::Stopped {
            return false;
        }
        self.state = TimerState::Running {
            resumed_at: now_ms,
            banked_ms: 0,
        };
        self.displayed_ms = 0;
        self.next_tick_at = Some(now_ms + DISPLAY_TICK_MS);
        true
    }

    /// Running -> Paused. Idempotent.
    pub fn pause(&mut self, now_ms: u64) -> bool {
        if !self.is_running() {
            return false;
        }
        let banked_ms = self.elapsed(now_ms);
        self.state = TimerState::Paused { banked_ms };
        self.displayed_ms = banked_ms;
        self.next_tick_at = None;
        true
    }

    /// Paused -> Running, continuing from the banked time. Idempotent.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        let TimerState::Paused { banked_ms } = self.state else {
            return false;
        };
        self.state = TimerState::Running {
            resumed_at: now_ms,
            banked_ms,
        };
        self.next_tick_at = Some(now_ms + DISPLAY_TICK_MS);
        true
    }

    /// Stop and reset, returning the total active time.
    ///
    /// Returns `None` if the timer was already stopped.
    pub fn stop(&mut self, now_ms: u64) -> Option<u64> {
        if self.state == TimerState::Stopped {
            return None;
        }
        let total = self.elapsed(now_ms);
        self.state = TimerState::Stopped;
        self.next_tick_at = None;
        self.displayed_ms = total;
        Some(total)
    }

    /// Back to Stopped with a zeroed display.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// When the next display refresh is due, if the tick is armed.
    pub fn next_display_due(&self) -> Option<u64> {
        self.next_tick_at
    }

    /// Fire the display tick if it is due. Returns whether the display changed.
    ///
    /// Missed ticks are skipped rather than replayed, keeping the cadence
    /// aligned to whole seconds since the last start or resume.
    pub fn poll_display(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_tick_at else {
            return false;
        };
        if now_ms < due {
            return false;
        }

        let missed = (now_ms - due) / DISPLAY_TICK_MS;
        self.next_tick_at = Some(due + (missed + 1) * DISPLAY_TICK_MS);

        let elapsed = self.elapsed(now_ms);
        let changed = elapsed / 1000 != self.displayed_ms / 1000;
        self.displayed_ms = elapsed;
        changed
    }

    /// `MM:SS` text of the display.
    pub fn display_text(&self) -> String {
        format_mm_ss(self.displayed_ms)
    }
}
