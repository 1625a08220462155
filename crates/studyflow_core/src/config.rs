//! Application configuration.
//!
//! # Responsibility
//! - Describe timer defaults, progress goal and logging setup.
//! - Load configuration from JSON with every field optional.
//!
//! # Invariants
//! - A missing field takes its default; unknown fields are rejected.
//! - `validate()` must pass before a config is used to build panels.

use crate::logging::default_log_level;
use crate::timer::state::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES, MAX_DURATION_MINUTES};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub tick_interval_ms: u64,
    /// Choices offered by the focus duration picker.
    pub focus_presets: Vec<u32>,
    pub break_presets: Vec<u32>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            tick_interval_ms: 1000,
            focus_presets: vec![15, 25, 30, 45, 60],
            break_presets: vec![5, 10, 15, 20],
        }
    }
}

impl TimerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    pub weekly_goal_hours: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            weekly_goal_hours: 25.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(default_log_level())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudyConfig {
    pub timer: TimerConfig,
    pub progress: ProgressConfig,
    pub logging: LoggingConfig,
}

impl StudyConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let timer = &self.timer;
        for (name, minutes) in [
            ("timer.focus_minutes", timer.focus_minutes),
            ("timer.break_minutes", timer.break_minutes),
        ] {
            check_minutes(name, minutes)?;
        }
        for minutes in timer.focus_presets.iter().chain(&timer.break_presets) {
            check_minutes("timer presets", *minutes)?;
        }
        if timer.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "timer.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        let goal = self.progress.weekly_goal_hours;
        if !goal.is_finite() || goal <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "progress.weekly_goal_hours must be positive, got {goal}"
            )));
        }
        if let Some(dir) = &self.logging.dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "logging.dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

fn check_minutes(name: &str, minutes: u32) -> Result<(), ConfigError> {
    if minutes == 0 || minutes > MAX_DURATION_MINUTES {
        return Err(ConfigError::Invalid(format!(
            "{name} must be within 1..={MAX_DURATION_MINUTES} minutes, got {minutes}"
        )));
    }
    Ok(())
}
