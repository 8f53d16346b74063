use serde::Serialize;
use chrono::NaiveDate;

use crate::model::event::Event;
use crate::model::task::Task;

/// What one calendar cell needs to render itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DaySummary<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
    pub tasks: Vec<&'a Task>,
    pub total: usize,
    pub has_pending: bool, // any task not completed
    pub has_done: bool,    // any task completed
}

impl<'a> DaySummary<'a> {
    pub fn new(date: NaiveDate, events: Vec<&'a Event>, tasks: Vec<&'a Task>) -> Self {
        let total = events.len() + tasks.len();
        let has_pending = tasks.iter().any(|t| !t.is_done());
        let has_done = tasks.iter().any(|t| t.is_done());
        Self {
            date,
            events,
            tasks,
            total,
            has_pending,
            has_done,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalendarCell<'a> {
    pub in_month: bool,
    pub summary: DaySummary<'a>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<CalendarCell<'a>>>,
}

impl<'a> CalendarMonth<'a> {
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell<'a>> {
        self.weeks.iter().flatten()
    }

    /// Total items falling on days of this month (padding days excluded).
    pub fn item_count(&self) -> usize {
        self.cells()
            .filter(|c| c.in_month)
            .map(|c| c.summary.total)
            .sum()
    }
}

/// An upcoming event with the share of its checklist already done.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpcomingEvent {
    #[serde(flatten)]
    pub event: Event,
    pub progress: u8,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub active_events: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub high_priority_pending: usize,
    pub overdue_tasks: usize,
    pub task_progress: u8, // 0..=100

    // Active events starting today or later, soonest first.
    pub upcoming: Vec<UpcomingEvent>,
    pub next_event: Option<Event>,
    // Unclamped: negative means the date has passed.
    pub days_until_next_event: Option<i64>,
}
