//! Weekly schedule model.
//!
//! # Invariants
//! - `time` is a zero-padded 24-hour `HH:MM` string, so lexical order equals
//!   chronological order within a day.
//! - `title` is non-blank.

use crate::model::{require_text, ValidationError};
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

/// Monday-first week order used by the week overview.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub type EventId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Study,
    Exam,
    Assignment,
    Break,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Exam => "exam",
            Self::Assignment => "assignment",
            Self::Break => "break",
        }
    }
}

impl FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "study" => Ok(Self::Study),
            "exam" => Ok(Self::Exam),
            "assignment" => Ok(Self::Assignment),
            "break" => Ok(Self::Break),
            other => Err(ValidationError::UnknownValue {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// One block on the weekly board.
///
/// `duration` is free text as entered ("2 hours", "45 min").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: EventId,
    pub title: String,
    pub time: String,
    pub duration: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub day: Weekday,
}

impl ScheduleEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        validate_time_of_day(&self.time)
    }
}

/// Input for adding or replacing an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub time: String,
    pub duration: String,
    pub subject: String,
    pub kind: EventKind,
    pub day: Weekday,
}

impl EventDraft {
    pub fn into_event(self) -> Result<ScheduleEvent, ValidationError> {
        self.into_event_with_id(Uuid::new_v4())
    }

    pub(crate) fn into_event_with_id(self, id: EventId) -> Result<ScheduleEvent, ValidationError> {
        let event = ScheduleEvent {
            id,
            title: self.title,
            time: self.time.trim().to_string(),
            duration: self.duration,
            subject: self.subject,
            kind: self.kind,
            day: self.day,
        };
        event.validate()?;
        Ok(event)
    }
}

/// Accepts only zero-padded 24-hour `HH:MM`.
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    if TIME_OF_DAY_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTime(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_time_of_day;

    #[test]
    fn time_of_day_requires_padded_24_hour_clock() {
        assert!(validate_time_of_day("09:00").is_ok());
        assert!(validate_time_of_day("23:59").is_ok());
        assert!(validate_time_of_day("9:00").is_err());
        assert!(validate_time_of_day("24:00").is_err());
        assert!(validate_time_of_day("12:60").is_err());
    }
}
