//! Countdown controller owning the one-second ticker task.
//!
//! # Responsibility
//! - Drive `TimerState::tick` from a tokio interval while the timer runs.
//! - Publish a snapshot to subscribers after every state change.
//!
//! # Invariants
//! - At most one ticker task exists per controller.
//! - The ticker is aborted on pause, reset, mode switch and drop; it exits
//!   on its own after a natural completion.
//! - `start` must be called from within a tokio runtime.

use crate::config::TimerConfig;
use crate::timer::state::{TickOutcome, TimerError, TimerMode, TimerState};
use log::{debug, info, trace};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Read model pushed to the timer view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub running: bool,
    pub remaining_seconds: u32,
    pub duration_seconds: u32,
    pub clock: String,
    pub progress_percent: f64,
    pub completed_focus_sessions: u32,
}

impl From<&TimerState> for TimerSnapshot {
    fn from(state: &TimerState) -> Self {
        Self {
            mode: state.mode,
            running: state.running,
            remaining_seconds: state.remaining_seconds,
            duration_seconds: state.current_duration(),
            clock: state.clock(),
            progress_percent: state.progress_percent(),
            completed_focus_sessions: state.completed_focus_sessions,
        }
    }
}

/// Duration choices offered by the timer's duration pickers, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerPresets {
    pub focus_minutes: Vec<u32>,
    pub break_minutes: Vec<u32>,
}

impl TimerPresets {
    pub fn for_mode(&self, mode: TimerMode) -> &[u32] {
        match mode {
            TimerMode::Focus => &self.focus_minutes,
            TimerMode::Break => &self.break_minutes,
        }
    }
}

pub struct TimerController {
    state: Arc<Mutex<TimerState>>,
    updates: Arc<watch::Sender<TimerSnapshot>>,
    ticker: Option<JoinHandle<()>>,
    tick_interval: Duration,
    presets: TimerPresets,
}

impl TimerController {
    pub fn new(config: &TimerConfig) -> Result<Self, TimerError> {
        let state = TimerState::new(config.focus_minutes, config.break_minutes)?;
        let (updates, _) = watch::channel(TimerSnapshot::from(&state));

        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            updates: Arc::new(updates),
            ticker: None,
            tick_interval: config.tick_interval(),
            presets: TimerPresets {
                focus_minutes: config.focus_presets.clone(),
                break_minutes: config.break_presets.clone(),
            },
        })
    }

    pub fn presets(&self) -> &TimerPresets {
        &self.presets
    }

    pub async fn state(&self) -> TimerState {
        self.state.lock().await.clone()
    }

    pub async fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from(&*self.state.lock().await)
    }

    /// Receives a snapshot after every change, including each tick.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.updates.subscribe()
    }

    /// Whether a ticker task is currently alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub async fn start(&mut self) -> TimerSnapshot {
        let snapshot = {
            let mut guard = self.state.lock().await;
            if guard.running && self.is_ticking() {
                return TimerSnapshot::from(&*guard);
            }
            guard.start();
            self.publish(&guard)
        };

        self.spawn_ticker();
        info!(
            "event=timer_start module=timer status=ok mode={} remaining_s={}",
            snapshot.mode, snapshot.remaining_seconds
        );
        snapshot
    }

    /// Stops ticking; calling it on a paused timer changes nothing.
    pub async fn pause(&mut self) -> TimerSnapshot {
        self.cancel_ticker();
        let snapshot = {
            let mut guard = self.state.lock().await;
            guard.pause();
            self.publish(&guard)
        };
        debug!(
            "event=timer_pause module=timer status=ok mode={} remaining_s={}",
            snapshot.mode, snapshot.remaining_seconds
        );
        snapshot
    }

    pub async fn toggle(&mut self) -> TimerSnapshot {
        let running = self.state.lock().await.running;
        if running {
            self.pause().await
        } else {
            self.start().await
        }
    }

    pub async fn reset(&mut self) -> TimerSnapshot {
        self.cancel_ticker();
        let snapshot = {
            let mut guard = self.state.lock().await;
            guard.reset();
            self.publish(&guard)
        };
        info!(
            "event=timer_reset module=timer status=ok mode={}",
            snapshot.mode
        );
        snapshot
    }

    /// Forces `mode`, abandoning the countdown in progress.
    pub async fn switch_mode(&mut self, mode: TimerMode) -> TimerSnapshot {
        self.cancel_ticker();
        let snapshot = {
            let mut guard = self.state.lock().await;
            guard.switch_mode(mode);
            self.publish(&guard)
        };
        info!("event=timer_switch module=timer status=ok mode={mode}");
        snapshot
    }

    pub async fn set_duration(
        &mut self,
        mode: TimerMode,
        minutes: u32,
    ) -> Result<TimerSnapshot, TimerError> {
        let snapshot = {
            let mut guard = self.state.lock().await;
            guard.set_duration(mode, minutes)?;
            self.publish(&guard)
        };
        info!("event=timer_duration module=timer status=ok mode={mode} minutes={minutes}");
        Ok(snapshot)
    }

    pub async fn completed_focus_sessions(&self) -> u32 {
        self.state.lock().await.completed_focus_sessions
    }

    /// Tears the controller down; no tick fires afterwards.
    pub fn dispose(self) {}

    /// Caller must hold the state lock.
    fn publish(&self, state: &TimerState) -> TimerSnapshot {
        let snapshot = TimerSnapshot::from(state);
        self.updates.send_replace(snapshot.clone());
        snapshot
    }

    fn spawn_ticker(&mut self) {
        self.cancel_ticker();

        let state = self.state.clone();
        let updates = self.updates.clone();
        let period = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;

                let outcome = {
                    let mut guard = state.lock().await;
                    if !guard.running {
                        break;
                    }
                    let outcome = guard.tick();
                    updates.send_replace(TimerSnapshot::from(&*guard));
                    outcome
                };

                match outcome {
                    TickOutcome::Completed { finished, next } => {
                        info!(
                            "event=timer_completed module=timer status=ok finished={finished} next={next}"
                        );
                        break;
                    }
                    TickOutcome::Counting { remaining_seconds } => {
                        trace!("event=timer_tick module=timer remaining_s={remaining_seconds}");
                    }
                    TickOutcome::Idle => break,
                }
            }
        });

        self.ticker = Some(handle);
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}
