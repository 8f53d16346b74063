use serde::{Deserialize, Serialize};
use std::fmt;

fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Lifecycle of an event. Unknown labels are kept verbatim in `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum EventStatus {
    #[default]
    Planning,
    Confirmed,
    InProgress,
    Active,
    Completed,
    Cancelled,
    Other(String),
}

/// Statuses counted as ongoing on the dashboard.
pub const ACTIVE_EVENT_STATUSES: [EventStatus; 4] = [
    EventStatus::Planning,
    EventStatus::Confirmed,
    EventStatus::InProgress,
    EventStatus::Active,
];

impl EventStatus {
    pub fn is_active(&self) -> bool {
        ACTIVE_EVENT_STATUSES.contains(self)
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Planning => "planning",
            EventStatus::Confirmed => "confirmed",
            EventStatus::InProgress => "in_progress",
            EventStatus::Active => "active",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Other(s) => s,
        }
    }
}

impl From<&str> for EventStatus {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "planning" => EventStatus::Planning,
            "confirmed" => EventStatus::Confirmed,
            "in_progress" => EventStatus::InProgress,
            "active" => EventStatus::Active,
            "completed" => EventStatus::Completed,
            "cancelled" | "canceled" => EventStatus::Cancelled,
            _ => EventStatus::Other(raw.to_string()),
        }
    }
}

impl From<String> for EventStatus {
    fn from(raw: String) -> Self {
        EventStatus::from(raw.as_str())
    }
}

// Null or absent labels fall back to the default.
impl From<Option<String>> for EventStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(EventStatus::from).unwrap_or_default()
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    /// `completed` is the only status that means done. Everything else,
    /// including unknown labels, counts as pending.
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(s) => s,
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "todo" => TaskStatus::Todo,
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(raw.to_string()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        TaskStatus::from(raw.as_str())
    }
}

// Null or absent labels fall back to the default.
impl From<Option<String>> for TaskStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(TaskStatus::from).unwrap_or_default()
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(from = "Option<String>", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Other(s) => s,
        }
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(raw.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        Priority::from(raw.as_str())
    }
}

// Null or absent labels fall back to the default.
impl From<Option<String>> for Priority {
    fn from(raw: Option<String>) -> Self {
        raw.map(Priority::from).unwrap_or_default()
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
