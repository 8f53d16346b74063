use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::model::null_as_default;
use crate::model::status::EventStatus;
use crate::time::{date_or_far_future, parse_calendar_date};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(alias = "title", deserialize_with = "null_as_default")]
    pub name: String,

    // Single-day fallback when no explicit range is given.
    pub date: Option<String>,
    #[serde(rename = "startDate", alias = "start_date")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", alias = "end_date")]
    pub end_date: Option<String>,

    pub status: EventStatus,
    pub location: Option<String>,
}

impl Event {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn spanning(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// `startDate` when present, otherwise `date`. The raw string is returned
    /// so callers decide how to treat unparsable values.
    pub fn effective_start_raw(&self) -> Option<&str> {
        self.start_date.as_deref().or(self.date.as_deref())
    }

    /// Resolved `[start, end]` day range. `None` when the start, or an
    /// explicitly given end, cannot be read.
    pub fn day_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.effective_start_raw().and_then(parse_calendar_date)?;
        let end = match self.end_date.as_deref() {
            Some(raw) => parse_calendar_date(raw)?,
            None => start,
        };
        Some((start, end))
    }

    /// Effective start for ordering: missing or broken dates sort last.
    pub fn sort_start(&self) -> NaiveDate {
        date_or_far_future(self.effective_start_raw())
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
