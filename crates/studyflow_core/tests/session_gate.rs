use std::time::Duration;
use studyflow_core::session::LandingMode;
use studyflow_core::{
    AppView, DashboardTab, LandingView, LoginForm, SessionError, SessionGate, SessionHandoff,
    SignupForm, StudyConfig, TaskFilter, UserProfile,
};

fn signed_in_gate() -> SessionGate {
    let mut gate = SessionGate::new(StudyConfig::default());
    let mut landing = LandingView::new();
    landing.login = LoginForm::new("ada@example.com", "secret");
    landing.submit(&mut gate).unwrap();
    gate
}

#[test]
fn gate_starts_on_landing() {
    let gate = SessionGate::new(StudyConfig::default());
    assert_eq!(gate.view(), AppView::Landing);
    assert!(!gate.is_signed_in());
    assert!(gate.user().is_none());
    assert!(gate.dashboard().is_none());
}

#[test]
fn sign_in_opens_seeded_dashboard_on_progress_tab() {
    let gate = signed_in_gate();

    assert_eq!(gate.view(), AppView::Dashboard);
    let user = gate.user().unwrap();
    assert_eq!(user.name, "Study User");
    assert_eq!(user.email, "ada@example.com");

    let dashboard = gate.dashboard().unwrap();
    assert_eq!(dashboard.active_tab(), DashboardTab::Progress);
    assert_eq!(dashboard.tasks().list_tasks(TaskFilter::All).unwrap().len(), 3);
    assert_eq!(dashboard.notes().search_notes("").unwrap().len(), 3);
    assert_eq!(
        dashboard.timer().presets().focus_minutes,
        vec![15, 25, 30, 45, 60]
    );
}

#[test]
fn sign_up_uses_entered_name() {
    let mut gate = SessionGate::empty(StudyConfig::default());
    let mut landing = LandingView::new();
    landing.show(LandingMode::SignUp);
    landing.signup = SignupForm::new("  Grace Hopper ", "grace@example.com", "cobol");

    let user = landing.submit(&mut gate).unwrap();

    assert_eq!(user.name, "Grace Hopper");
    assert_eq!(gate.user(), Some(&user));
    let dashboard = gate.dashboard().unwrap();
    assert!(dashboard.tasks().list_tasks(TaskFilter::All).unwrap().is_empty());
}

#[test]
fn invalid_login_stays_on_landing() {
    let mut gate = SessionGate::new(StudyConfig::default());
    let mut landing = LandingView::new();
    landing.login = LoginForm::new("ada@example.com", "");

    let err = landing.submit(&mut gate).unwrap_err();

    assert!(matches!(err, SessionError::InvalidForm(_)));
    assert_eq!(gate.view(), AppView::Landing);
    assert_eq!(landing.login.email, "ada@example.com");
}

#[test]
fn logout_returns_to_landing_and_second_logout_is_rejected() {
    let mut gate = signed_in_gate();

    gate.on_logout().unwrap();

    assert_eq!(gate.view(), AppView::Landing);
    assert!(gate.user().is_none());
    assert!(matches!(gate.on_logout(), Err(SessionError::NotSignedIn)));
}

#[test]
fn relogin_replaces_the_previous_session() {
    let mut gate = signed_in_gate();
    gate.dashboard_mut()
        .unwrap()
        .select_tab(DashboardTab::Notes);

    gate.on_login(UserProfile {
        name: "Second".to_string(),
        email: "second@example.com".to_string(),
    })
    .unwrap();

    assert_eq!(gate.user().unwrap().name, "Second");
    assert_eq!(gate.dashboard().unwrap().active_tab(), DashboardTab::Progress);
}

#[test]
fn tab_selection_parses_labels() {
    let mut gate = signed_in_gate();
    let dashboard = gate.dashboard_mut().unwrap();

    dashboard.select_tab("Schedule".parse().unwrap());

    assert_eq!(dashboard.active_tab(), DashboardTab::Schedule);
    assert!("calendar".parse::<DashboardTab>().is_err());
}

#[test]
fn tab_strip_starts_with_progress_and_ends_with_notes() {
    assert_eq!(DashboardTab::default(), DashboardTab::Progress);
    assert_eq!(
        DashboardTab::ALL,
        [
            DashboardTab::Progress,
            DashboardTab::Timer,
            DashboardTab::Tasks,
            DashboardTab::Schedule,
            DashboardTab::Notes,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn logout_stops_the_running_timer() {
    let mut gate = signed_in_gate();
    let timer = gate.dashboard_mut().unwrap().timer_mut();
    let mut updates = timer.subscribe();
    timer.start().await;
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    updates.borrow_and_update();

    gate.on_logout().unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(updates.changed().await.is_err());
}
