use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::model::null_as_default;
use crate::model::status::{Priority, TaskStatus};
use crate::time::parse_calendar_date;

/// Checklist item as exported by the data API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Task {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(alias = "name", deserialize_with = "null_as_default")]
    pub title: String,

    // Raw value from the API. May be absent or garbage; see `due_day`.
    #[serde(rename = "dueDate", alias = "due_date")]
    pub due_date: Option<String>,

    pub status: TaskStatus,
    pub priority: Priority,

    #[serde(rename = "eventId", alias = "event_id")]
    pub event_id: Option<i64>,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due_date = Some(due.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Calendar day the task is due, if it has a readable one.
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_calendar_date)
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}
