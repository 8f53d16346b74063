use serde::{Deserialize, Serialize};

use crate::model::event::Event;
use crate::model::null_as_default;
use crate::model::task::Task;

/// Everything the core needs for one invocation, as handed over by the data API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub fn new(events: Vec<Event>, tasks: Vec<Task>) -> Self {
        Self { events, tasks }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::{EventStatus, Priority, TaskStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_aliases() {
        let json = r#"{
            "events": [
                {"id": 1, "name": "Kickoff", "startDate": "2024-01-10", "endDate": "2024-01-12", "status": "confirmed"},
                {"id": 2, "title": "Retro", "start_date": "2024-02-01", "status": "Cancelled"},
                {"id": 3, "name": "Bare"}
            ],
            "tasks": [
                {"id": 10, "title": "Book venue", "dueDate": "2024-01-09", "status": "completed", "priority": "high", "eventId": 1},
                {"id": 11, "name": "Send invites", "due_date": null, "status": "todo"}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.events.len(), 3);
        assert_eq!(snapshot.events[0].end_date.as_deref(), Some("2024-01-12"));
        assert_eq!(snapshot.events[1].name, "Retro");
        assert_eq!(snapshot.events[1].start_date.as_deref(), Some("2024-02-01"));
        assert_eq!(snapshot.events[1].status, EventStatus::Cancelled);
        assert_eq!(snapshot.events[2].status, EventStatus::Planning);
        assert_eq!(snapshot.events[2].day_range(), None);

        assert_eq!(snapshot.tasks[0].priority, Priority::High);
        assert_eq!(snapshot.tasks[0].event_id, Some(1));
        assert_eq!(snapshot.tasks[0].due_day(), NaiveDate::from_ymd_opt(2024, 1, 9));
        assert_eq!(snapshot.tasks[1].title, "Send invites");
        assert_eq!(snapshot.tasks[1].status, TaskStatus::Todo);
        assert_eq!(snapshot.tasks[1].due_day(), None);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let json = r#"{
            "events": [{"id": null, "name": null, "date": "2024-01-10", "status": null}],
            "tasks": [
                {"id": 2, "title": null, "dueDate": "2024-01-10", "status": "todo"},
                {"id": 3, "title": "Fine", "priority": null, "eventId": null}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.events[0].id, 0);
        assert_eq!(snapshot.events[0].name, "");
        assert_eq!(snapshot.events[0].status, EventStatus::Planning);
        assert!(snapshot.events[0].day_range().is_some());
        assert_eq!(snapshot.tasks[0].id, 2);
        assert_eq!(snapshot.tasks[0].title, "");
        assert_eq!(snapshot.tasks[0].due_day(), NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(snapshot.tasks[1].priority, Priority::Medium);
        assert_eq!(snapshot.tasks[1].event_id, None);
    }

    #[test]
    fn test_null_collections_are_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"events": null, "tasks": null}"#).unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_broken_dates_do_not_fail_deserialization() {
        let json = r#"{"events": [{"id": 1, "startDate": "not-a-date"}]}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.events[0].day_range(), None);
    }
}
