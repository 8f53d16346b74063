pub mod config;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Config, WeekStart};
pub use model::event::Event;
pub use model::snapshot::Snapshot;
pub use model::status::{EventStatus, Priority, TaskStatus, ACTIVE_EVENT_STATUSES};
pub use model::task::Task;
pub use repository::{FileSnapshotRepository, InMemorySnapshotRepository, SnapshotRepository};
pub use service::calendar::{events_on_day, month_grid, summarize_day, tasks_on_day};
pub use service::dashboard::{
    active_events, calculate_days_remaining, calculate_task_progress, event_progress,
    filter_upcoming_active,
};
pub use service::dto::{CalendarCell, CalendarMonth, DashboardSummary, DaySummary, UpcomingEvent};
pub use time::{parse_calendar_date, parse_month, Clock, FixedClock, SystemClock, FAR_FUTURE};
pub use usecase::calendar::CalendarUseCase;
pub use usecase::dashboard::DashboardUseCase;
