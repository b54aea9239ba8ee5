//! Timer state structure and management

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::utils::text::format_time;

pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 60;

/// Result of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running, nothing changed
    Idle,
    /// One second elapsed, this many remain
    Ticked(u64),
    /// The countdown just reached zero and the timer stopped
    Expired,
}

/// Countdown timer: remaining seconds, configured duration and running flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub configured_minutes: u32,
    pub running: bool,
}

impl TimerState {
    /// Create a paused timer set to `minutes` (clamped to 1..=60)
    pub fn new(minutes: i64) -> Self {
        let configured_minutes = clamp_minutes(minutes);
        Self {
            remaining_seconds: u64::from(configured_minutes) * 60,
            configured_minutes,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting down. Returns false when nothing changed.
    ///
    /// A timer sitting at zero stays paused until it is reset.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining_seconds == 0 {
            return false;
        }
        self.running = true;
        info!("Timer started with {} remaining", format_time(self.remaining_seconds));
        true
    }

    /// Pause the countdown. Returns false when already paused.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("Timer paused with {} remaining", format_time(self.remaining_seconds));
        true
    }

    /// Stop and rewind to the configured duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = u64::from(self.configured_minutes) * 60;
        info!("Timer reset to {} minutes", self.configured_minutes);
    }

    /// Advance one second while running
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            info!("Timer expired");
            TickOutcome::Expired
        } else {
            debug!("Timer tick, {} remaining", format_time(self.remaining_seconds));
            TickOutcome::Ticked(self.remaining_seconds)
        }
    }

    /// Change the duration and rewind to it, even mid-countdown
    pub fn set_configured_minutes(&mut self, value: i64) -> u32 {
        self.configured_minutes = clamp_minutes(value);
        self.remaining_seconds = u64::from(self.configured_minutes) * 60;
        info!("Timer duration set to {} minutes", self.configured_minutes);
        self.configured_minutes
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(i64::from(MIN_MINUTES))
    }
}

/// Clamp a requested duration into 1..=60 minutes
pub fn clamp_minutes(value: i64) -> u32 {
    // Bounded by the clamp, the cast cannot truncate
    value.clamp(i64::from(MIN_MINUTES), i64::from(MAX_MINUTES)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_paused_and_full() {
        let timer = TimerState::new(25);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds, 1500);
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn test_default_is_one_minute() {
        assert_eq!(TimerState::default().remaining_seconds, 60);
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut timer = TimerState::new(1);
        assert!(timer.start());
        assert!(!timer.start());
        assert!(timer.is_running());
        assert!(timer.pause());
        assert!(!timer.pause());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut timer = TimerState::new(1);
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_seconds, 60);

        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Ticked(59));
    }

    #[test]
    fn test_reset_stops_and_rewinds() {
        let mut timer = TimerState::new(2);
        timer.start();
        timer.tick();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds, 120);
    }

    #[test]
    fn test_set_minutes_resets_remaining() {
        let mut timer = TimerState::new(1);
        assert_eq!(timer.set_configured_minutes(5), 5);
        assert_eq!(timer.remaining_seconds, 300);
    }

    #[test]
    fn test_set_minutes_keeps_running() {
        let mut timer = TimerState::new(1);
        timer.start();
        timer.tick();
        timer.set_configured_minutes(3);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds, 180);
    }

    #[test]
    fn test_set_minutes_clamps() {
        let mut timer = TimerState::new(1);
        assert_eq!(timer.set_configured_minutes(0), 1);
        assert_eq!(timer.remaining_seconds, 60);
        assert_eq!(timer.set_configured_minutes(61), 60);
        assert_eq!(timer.remaining_seconds, 3600);
        assert_eq!(timer.set_configured_minutes(-20), 1);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = TimerState::new(1);
        timer.set_configured_minutes(5);
        timer.start();

        let outcomes: Vec<TickOutcome> = (0..300).map(|_| timer.tick()).collect();
        let expired = outcomes
            .iter()
            .filter(|outcome| **outcome == TickOutcome::Expired)
            .count();

        assert_eq!(expired, 1);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Expired));
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds, 0);

        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
    }

    #[test]
    fn test_start_at_zero_stays_paused() {
        let mut timer = TimerState::new(1);
        timer.start();
        for _ in 0..60 {
            timer.tick();
        }
        assert!(!timer.start());
        assert_eq!(timer.tick(), TickOutcome::Idle);

        timer.reset();
        assert!(timer.start());
    }
}
