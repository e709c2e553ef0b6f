//! The task record and its field types.
//!
//! A [`Task`] is one schedulable item: a name, a due date, a time of day
//! independent of the date, and a [`Priority`]. The name doubles as the
//! lookup key for update and delete operations (case-insensitive, first
//! match wins); uniqueness is deliberately not enforced, so two tasks may
//! share a name and only the first in collection order is targeted.
//!
//! Tasks serialize to the on-disk shape used by the task file:
//!
//! ```json
//! {
//!   "name": "Report",
//!   "due_date": "2025-05-01",
//!   "due_time": "09:00",
//!   "priority": 1
//! }
//! ```

use crate::libs::formatter::{ParseError, DATE_FORMAT, TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority, persisted as the integer 1-3.
///
/// High sorts before Medium, Medium before Low, matching the numeric
/// order of the persisted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl TryFrom<u8> for Priority {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(ParseError::InvalidPriority(other.to_string())),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    /// Accepts the numeric form ("1".."3") and the case-insensitive
    /// words "high", "medium", and "low".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "high" => Ok(Priority::High),
            "2" | "medium" => Ok(Priority::Medium),
            "3" | "low" => Ok(Priority::Low),
            other => Err(ParseError::InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(with = "date_format")]
    pub due_date: NaiveDate,
    #[serde(with = "time_format")]
    pub due_time: NaiveTime,
    pub priority: Priority,
}

impl Task {
    pub fn new(name: &str, due_date: NaiveDate, due_time: NaiveTime, priority: Priority) -> Self {
        Task {
            name: name.to_string(),
            due_date,
            due_time,
            priority,
        }
    }

    /// The full due instant, date and time combined.
    pub fn due_at(&self) -> NaiveDateTime {
        self.due_date.and_time(self.due_time)
    }

    /// Whether this task is the one a lookup by `name` targets.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Overwrites the fields a patch provides; everything else is kept.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(due_time) = patch.due_time {
            self.due_time = due_time;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }
}

/// A partial update for a task: `None` fields keep their prior value.
///
/// Handlers build a patch from whatever inputs parsed successfully, so a
/// malformed date does not block a valid new priority from committing.
/// An all-`None` patch is a valid no-op.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.due_date.is_none() && self.due_time.is_none() && self.priority.is_none()
    }
}

mod date_format {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod time_format {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
