//! Pomodoro countdown: pure state machine plus the ticker-owning controller.

pub mod controller;
pub mod state;

pub use controller::{TimerController, TimerPresets, TimerSnapshot};
pub use state::{format_clock, TickOutcome, TimerError, TimerMode, TimerState};
