//! Focus/break countdown state machine.
//!
//! # Invariants
//! - `remaining_seconds <= duration_for(mode)` after every operation.
//! - Configured durations are at least one minute.
//! - Natural completion always stops the timer and swaps the mode.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
/// Upper bound for a configured interval (one day).
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    #[default]
    Focus,
    Break,
}

impl TimerMode {
    pub fn other(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Break => "break",
        }
    }
}

impl Display for TimerMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Duration outside `1..=MAX_DURATION_MINUTES`.
    InvalidDuration { mode: TimerMode, minutes: u32 },
}

impl Display for TimerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDuration { mode, minutes } => write!(
                f,
                "invalid {mode} duration {minutes} min; expected 1..={MAX_DURATION_MINUTES}"
            ),
        }
    }
}

impl Error for TimerError {}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed.
    Idle,
    Counting { remaining_seconds: u32 },
    /// Interval finished; the timer stopped and switched to `next`.
    Completed { finished: TimerMode, next: TimerMode },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub mode: TimerMode,
    pub running: bool,
    pub focus_duration_seconds: u32,
    pub break_duration_seconds: u32,
    /// Focus intervals that ran down to zero.
    pub completed_focus_sessions: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            remaining_seconds: DEFAULT_FOCUS_MINUTES * 60,
            mode: TimerMode::Focus,
            running: false,
            focus_duration_seconds: DEFAULT_FOCUS_MINUTES * 60,
            break_duration_seconds: DEFAULT_BREAK_MINUTES * 60,
            completed_focus_sessions: 0,
        }
    }
}

impl TimerState {
    /// Idle focus timer with the given durations, full focus interval remaining.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, TimerError> {
        let focus_duration_seconds = minutes_to_seconds(TimerMode::Focus, focus_minutes)?;
        let break_duration_seconds = minutes_to_seconds(TimerMode::Break, break_minutes)?;
        Ok(Self {
            remaining_seconds: focus_duration_seconds,
            mode: TimerMode::Focus,
            running: false,
            focus_duration_seconds,
            break_duration_seconds,
            completed_focus_sessions: 0,
        })
    }

    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_duration_seconds,
            TimerMode::Break => self.break_duration_seconds,
        }
    }

    pub fn current_duration(&self) -> u32 {
        self.duration_for(self.mode)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advances one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counting {
                remaining_seconds: self.remaining_seconds,
            };
        }

        let finished = self.mode;
        if finished == TimerMode::Focus {
            self.completed_focus_sessions = self.completed_focus_sessions.saturating_add(1);
        }
        self.running = false;
        self.mode = finished.other();
        self.remaining_seconds = self.current_duration();
        TickOutcome::Completed {
            finished,
            next: self.mode,
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.current_duration();
    }

    /// Jumps to `mode` with a full interval; any partial countdown is dropped.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.running = false;
        self.remaining_seconds = self.duration_for(mode);
    }

    /// Changes the configured duration of `mode`.
    ///
    /// The countdown in progress is kept, except that it is clamped when the
    /// active mode's duration shrinks below it.
    pub fn set_duration(&mut self, mode: TimerMode, minutes: u32) -> Result<(), TimerError> {
        let seconds = minutes_to_seconds(mode, minutes)?;
        match mode {
            TimerMode::Focus => self.focus_duration_seconds = seconds,
            TimerMode::Break => self.break_duration_seconds = seconds,
        }
        if mode == self.mode {
            self.remaining_seconds = self.remaining_seconds.min(seconds);
        }
        Ok(())
    }

    /// Elapsed share of the current interval, `0.0..=100.0`.
    ///
    /// A zero duration reports `0.0`.
    pub fn progress_percent(&self) -> f64 {
        let total = self.current_duration();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_seconds);
        (f64::from(elapsed) / f64::from(total) * 100.0).clamp(0.0, 100.0)
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Formats seconds as zero-padded `MM:SS`; minutes are not wrapped into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn minutes_to_seconds(mode: TimerMode, minutes: u32) -> Result<u32, TimerError> {
    if minutes == 0 || minutes > MAX_DURATION_MINUTES {
        return Err(TimerError::InvalidDuration { mode, minutes });
    }
    Ok(minutes * 60)
}

#[cfg(test)]
mod tests {
    use super::{format_clock, TimerMode, TimerState};

    #[test]
    fn format_clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90 * 60), "90:00");
    }

    #[test]
    fn shrinking_active_duration_clamps_remaining() {
        let mut state = TimerState::default();
        state.set_duration(TimerMode::Focus, 15).unwrap();
        assert_eq!(state.remaining_seconds, 15 * 60);
    }

    #[test]
    fn progress_tracks_elapsed_share() {
        let mut state = TimerState::new(1, 1).unwrap();
        assert_eq!(state.progress_percent(), 0.0);
        state.start();
        for _ in 0..30 {
            state.tick();
        }
        assert_eq!(state.progress_percent(), 50.0);
    }
}
