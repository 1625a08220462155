//! Session gate and landing view.
//!
//! # Responsibility
//! - Switch between the unauthenticated landing view and the dashboard.
//! - Hold the signed-in user record for the lifetime of a session.
//!
//! # Invariants
//! - A dashboard exists if and only if a user is signed in.
//! - Logging out drops the dashboard, which stops the timer ticker.
//! - A rejected form leaves the session and the form untouched.

use crate::config::StudyConfig;
use crate::dashboard::{Dashboard, DashboardError};
use crate::model::user::{LoginForm, SignupForm, UserProfile};
use crate::model::ValidationError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SessionError {
    InvalidForm(ValidationError),
    NotSignedIn,
    Dashboard(DashboardError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidForm(err) => write!(f, "invalid form: {err}"),
            Self::NotSignedIn => write!(f, "no user is signed in"),
            Self::Dashboard(err) => write!(f, "failed to open dashboard: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidForm(err) => Some(err),
            Self::NotSignedIn => None,
            Self::Dashboard(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidForm(value)
    }
}

impl From<DashboardError> for SessionError {
    fn from(value: DashboardError) -> Self {
        Self::Dashboard(value)
    }
}

/// Callbacks the landing view uses to hand a user to its owner.
pub trait SessionHandoff {
    fn on_login(&mut self, user: UserProfile) -> Result<(), SessionError>;
    fn on_logout(&mut self) -> Result<(), SessionError>;
}

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Landing,
    Dashboard,
}

pub struct SessionGate {
    config: StudyConfig,
    seed_data: bool,
    dashboard: Option<Dashboard>,
}

impl SessionGate {
    /// Gate whose dashboards open with the mock study data.
    pub fn new(config: StudyConfig) -> Self {
        Self {
            config,
            seed_data: true,
            dashboard: None,
        }
    }

    /// Gate whose dashboards open with empty panels.
    pub fn empty(config: StudyConfig) -> Self {
        Self {
            seed_data: false,
            ..Self::new(config)
        }
    }

    pub fn view(&self) -> AppView {
        if self.dashboard.is_some() {
            AppView::Dashboard
        } else {
            AppView::Landing
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.dashboard.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.dashboard.as_ref().map(Dashboard::user)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }
}

impl SessionHandoff for SessionGate {
    /// Opens a fresh dashboard, replacing any session already active.
    fn on_login(&mut self, user: UserProfile) -> Result<(), SessionError> {
        let dashboard = if self.seed_data {
            Dashboard::seeded(user, &self.config)?
        } else {
            Dashboard::new(user, &self.config)?
        };
        let replaced = self.dashboard.replace(dashboard).is_some();
        info!("event=session_login module=session status=ok replaced={replaced}");
        Ok(())
    }

    fn on_logout(&mut self) -> Result<(), SessionError> {
        match self.dashboard.take() {
            Some(_) => {
                info!("event=session_logout module=session status=ok");
                Ok(())
            }
            None => {
                warn!("event=session_logout module=session status=rejected reason=not_signed_in");
                Err(SessionError::NotSignedIn)
            }
        }
    }
}

/// Which landing form is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LandingMode {
    #[default]
    SignIn,
    SignUp,
}

/// Landing view holding the sign-in and sign-up form state.
#[derive(Debug, Clone, Default)]
pub struct LandingView {
    pub mode: LandingMode,
    pub login: LoginForm,
    pub signup: SignupForm,
}

impl LandingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, mode: LandingMode) {
        self.mode = mode;
    }

    /// Submits whichever form is showing.
    pub fn submit(
        &mut self,
        handoff: &mut impl SessionHandoff,
    ) -> Result<UserProfile, SessionError> {
        match self.mode {
            LandingMode::SignIn => self.submit_login(handoff),
            LandingMode::SignUp => self.submit_signup(handoff),
        }
    }

    pub fn submit_login(
        &mut self,
        handoff: &mut impl SessionHandoff,
    ) -> Result<UserProfile, SessionError> {
        let user = self.login.clone().into_profile()?;
        handoff.on_login(user.clone())?;
        self.login = LoginForm::default();
        Ok(user)
    }

    pub fn submit_signup(
        &mut self,
        handoff: &mut impl SessionHandoff,
    ) -> Result<UserProfile, SessionError> {
        let user = self.signup.clone().into_profile()?;
        handoff.on_login(user.clone())?;
        self.signup = SignupForm::default();
        Ok(user)
    }
}
