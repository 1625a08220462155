//! User record and landing-page forms.
//!
//! Authentication is cosmetic: passwords are required but never checked.

use crate::model::{require_text, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Display name given to users who sign in instead of signing up.
pub const SIGN_IN_DISPLAY_NAME: &str = "Study User";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// The signed-in user handed from the landing view to the session gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn into_profile(self) -> Result<UserProfile, ValidationError> {
        let email = validate_email(&self.email)?;
        require_text("password", &self.password)?;
        Ok(UserProfile {
            name: SIGN_IN_DISPLAY_NAME.to_string(),
            email,
        })
    }
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn into_profile(self) -> Result<UserProfile, ValidationError> {
        require_text("name", &self.name)?;
        let email = validate_email(&self.email)?;
        require_text("password", &self.password)?;
        Ok(UserProfile {
            name: self.name.trim().to_string(),
            email,
        })
    }
}

fn validate_email(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    require_text("email", trimmed)?;
    if !EMAIL_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
