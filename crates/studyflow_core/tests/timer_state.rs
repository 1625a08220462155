use studyflow_core::timer::{TickOutcome, TimerError, TimerMode, TimerState};

fn running(mut state: TimerState) -> TimerState {
    state.start();
    state
}

#[test]
fn new_timer_is_idle_focus_with_full_interval() {
    let state = TimerState::default();
    assert_eq!(state.mode, TimerMode::Focus);
    assert!(!state.running);
    assert_eq!(state.remaining_seconds, 25 * 60);
    assert_eq!(state.break_duration_seconds, 5 * 60);
    assert_eq!(state.clock(), "25:00");
}

#[test]
fn set_duration_then_reset_yields_full_interval() {
    for minutes in [1, 15, 25, 45, 60, 90, 1440] {
        let mut state = TimerState::default();
        state.set_duration(TimerMode::Focus, minutes).unwrap();
        state.reset();
        assert_eq!(state.remaining_seconds, minutes * 60, "minutes={minutes}");
        assert_eq!(state.mode, TimerMode::Focus);
    }
}

#[test]
fn tick_counts_down_one_second_in_same_mode() {
    let mut state = running(TimerState::default());
    let before = state.remaining_seconds;

    let outcome = state.tick();

    assert_eq!(state.remaining_seconds, before - 1);
    assert_eq!(state.mode, TimerMode::Focus);
    assert!(state.running);
    assert_eq!(
        outcome,
        TickOutcome::Counting {
            remaining_seconds: before - 1
        }
    );
}

#[test]
fn paused_tick_changes_nothing() {
    let mut state = TimerState::default();
    let before = state.clone();
    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state, before);
}

#[test]
fn focus_completion_switches_to_idle_break() {
    let mut state = running(TimerState::new(25, 10).unwrap());
    state.remaining_seconds = 1;

    let outcome = state.tick();

    assert_eq!(
        outcome,
        TickOutcome::Completed {
            finished: TimerMode::Focus,
            next: TimerMode::Break
        }
    );
    assert_eq!(state.mode, TimerMode::Break);
    assert!(!state.running);
    assert_eq!(state.remaining_seconds, 10 * 60);
    assert_eq!(state.completed_focus_sessions, 1);
}

#[test]
fn break_completion_returns_to_focus_without_counting_a_session() {
    let mut state = TimerState::default();
    state.switch_mode(TimerMode::Break);
    state.start();
    state.remaining_seconds = 1;

    state.tick();

    assert_eq!(state.mode, TimerMode::Focus);
    assert!(!state.running);
    assert_eq!(state.remaining_seconds, 25 * 60);
    assert_eq!(state.completed_focus_sessions, 0);
}

#[test]
fn pause_twice_equals_pause_once() {
    let mut once = running(TimerState::default());
    once.tick();
    let mut twice = once.clone();

    once.pause();
    twice.pause();
    twice.pause();

    assert_eq!(once, twice);
    assert!(!twice.running);
}

#[test]
fn switching_mode_discards_countdown_in_progress() {
    let mut state = running(TimerState::default());
    state.tick();
    state.tick();

    state.switch_mode(TimerMode::Break);
    state.switch_mode(TimerMode::Focus);

    assert_eq!(state.remaining_seconds, 25 * 60);
    assert!(!state.running);
}

#[test]
fn changing_inactive_duration_keeps_countdown() {
    let mut state = running(TimerState::default());
    state.tick();

    state.set_duration(TimerMode::Break, 15).unwrap();

    assert_eq!(state.remaining_seconds, 25 * 60 - 1);
    assert_eq!(state.break_duration_seconds, 15 * 60);
}

#[test]
fn zero_and_oversized_durations_are_rejected_without_change() {
    let mut state = TimerState::default();
    let before = state.clone();

    assert!(matches!(
        state.set_duration(TimerMode::Focus, 0),
        Err(TimerError::InvalidDuration { minutes: 0, .. })
    ));
    assert!(state.set_duration(TimerMode::Break, 24 * 60 + 1).is_err());
    assert!(TimerState::new(0, 5).is_err());
    assert_eq!(state, before);
}

#[test]
fn restored_state_outside_its_duration_reports_bounded_progress() {
    let overfull: TimerState = serde_json::from_str(
        r#"{"remainingSeconds":1500,"mode":"focus","running":false,
            "focusDurationSeconds":900,"breakDurationSeconds":300,
            "completedFocusSessions":0}"#,
    )
    .unwrap();
    assert_eq!(overfull.progress_percent(), 0.0);

    let zero: TimerState = serde_json::from_str(
        r#"{"remainingSeconds":0,"mode":"focus","running":false,
            "focusDurationSeconds":0,"breakDurationSeconds":300,
            "completedFocusSessions":0}"#,
    )
    .unwrap();
    assert_eq!(zero.progress_percent(), 0.0);
    assert!(!zero.progress_percent().is_nan());
}
