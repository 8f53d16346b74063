use chrono::{DateTime, NaiveDate, Utc};

use crate::model::event::Event;
use crate::model::snapshot::Snapshot;
use crate::model::status::Priority;
use crate::model::task::Task;
use crate::service::dto::{DashboardSummary, UpcomingEvent};
use crate::time::{date_or_far_future, midnight};

/// Share of completed tasks, in whole percent, rounded half-up.
/// An empty list is 0%.
pub fn calculate_task_progress(tasks: &[Task]) -> u8 {
    progress_of(tasks.iter())
}

/// Checklist progress of a single event: only tasks linked to `event_id` count.
pub fn event_progress(event_id: i64, tasks: &[Task]) -> u8 {
    progress_of(tasks.iter().filter(|t| t.event_id == Some(event_id)))
}

fn progress_of<'a>(tasks: impl Iterator<Item = &'a Task>) -> u8 {
    let (total, completed) = tasks.fold((0usize, 0usize), |(total, done), t| {
        (total + 1, done + usize::from(t.is_done()))
    });
    if total == 0 {
        return 0;
    }

    // round(100 * c / t) with half-up, kept in integers
    ((200 * completed + total) / (2 * total)) as u8
}

/// Whole calendar days from `now` to `target`, both taken at UTC midnight.
/// Negative for past dates. An unreadable target counts as the far-future
/// sentinel.
pub fn calculate_days_remaining(target: &str, now: DateTime<Utc>) -> i64 {
    let target_day = date_or_far_future(Some(target));
    days_between(midnight(now), target_day)
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    // Both sides sit on midnight, so the ceiling is the plain day count.
    to.signed_duration_since(from).num_days()
}

/// Events whose effective start is on or after `reference`, soonest first.
/// Ties keep their input order. Missing or broken start dates sort last.
pub fn filter_upcoming_active(events: &[Event], reference: NaiveDate) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .filter(|e| e.sort_start() >= reference)
        .collect();
    // sort_by_key is stable
    upcoming.sort_by_key(|e| e.sort_start());
    upcoming
}

pub fn active_events(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| e.is_active()).cloned().collect()
}

impl DashboardSummary {
    pub fn build(snapshot: &Snapshot, now: DateTime<Utc>, upcoming_limit: usize) -> Self {
        let today = midnight(now);
        let tasks = &snapshot.tasks;

        let active = active_events(&snapshot.events);
        let upcoming: Vec<Event> = filter_upcoming_active(&active, today)
            .into_iter()
            .cloned()
            .collect();

        let next_event = upcoming.first().cloned();
        let days_until_next_event = next_event
            .as_ref()
            .map(|e| calculate_days_remaining(e.effective_start_raw().unwrap_or_default(), now));

        let completed_tasks = tasks.iter().filter(|t| t.is_done()).count();
        let high_priority_pending = tasks
            .iter()
            .filter(|t| !t.is_done() && t.priority == Priority::High)
            .count();
        let overdue_tasks = tasks
            .iter()
            .filter(|t| !t.is_done())
            .filter(|t| matches!(t.due_day(), Some(due) if due < today))
            .count();

        log::debug!(
            "dashboard for {}: {} events ({} active), {} tasks",
            today,
            snapshot.events.len(),
            active.len(),
            tasks.len()
        );

        Self {
            total_events: snapshot.events.len(),
            active_events: active.len(),
            total_tasks: tasks.len(),
            completed_tasks,
            pending_tasks: tasks.len() - completed_tasks,
            high_priority_pending,
            overdue_tasks,
            task_progress: calculate_task_progress(tasks),
            upcoming: upcoming
                .into_iter()
                .take(upcoming_limit)
                .map(|event| UpcomingEvent {
                    progress: event_progress(event.id, tasks),
                    event,
                })
                .collect(),
            next_event,
            days_until_next_event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::{EventStatus, TaskStatus};
    use crate::time::FAR_FUTURE;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
    }

    fn task_with(status: &str) -> Task {
        Task::new(0, "t").with_status(TaskStatus::from(status))
    }

    #[test]
    fn test_task_progress_rounding() {
        assert_eq!(calculate_task_progress(&[]), 0);
        assert_eq!(
            calculate_task_progress(&[task_with("completed"), task_with("todo"), task_with("todo")]),
            33
        );
        assert_eq!(calculate_task_progress(&[task_with("completed"), task_with("todo")]), 50);
        assert_eq!(
            calculate_task_progress(&[task_with("completed"), task_with("completed"), task_with("todo")]),
            67
        );
        assert_eq!(calculate_task_progress(&[task_with("todo"), task_with("in_progress")]), 0);
        assert_eq!(calculate_task_progress(&[task_with("completed")]), 100);
    }

    #[test]
    fn test_task_progress_half_rounds_up() {
        // 1 of 8 = 12.5%
        let mut tasks = vec![task_with("completed")];
        tasks.extend((0..7).map(|_| task_with("todo")));
        assert_eq!(calculate_task_progress(&tasks), 13);
    }

    #[test]
    fn test_unknown_task_status_is_not_completed() {
        assert_eq!(calculate_task_progress(&[task_with("done"), task_with("completed")]), 50);
    }

    #[test]
    fn test_event_progress() {
        let tasks = vec![
            Task { event_id: Some(1), ..task_with("completed") },
            Task { event_id: Some(1), ..task_with("todo") },
            Task { event_id: Some(2), ..task_with("todo") },
            task_with("completed"),
        ];
        assert_eq!(event_progress(1, &tasks), 50);
        assert_eq!(event_progress(2, &tasks), 0);
        assert_eq!(event_progress(3, &tasks), 0);
    }

    #[test]
    fn test_days_remaining_sign() {
        let now = fixed_now();
        assert_eq!(calculate_days_remaining("2024-01-15", now), 5);
        assert_eq!(calculate_days_remaining("2024-01-05", now), -5);
        assert_eq!(calculate_days_remaining("2024-01-10", now), 0);
    }

    #[test]
    fn test_days_remaining_ignores_time_of_day() {
        let late = Utc.with_ymd_and_hms(2024, 1, 10, 23, 59, 0).unwrap();
        assert_eq!(calculate_days_remaining("2024-01-11", late), 1);
        assert_eq!(calculate_days_remaining("2024-01-11T00:01:00Z", late), 1);
    }

    #[test]
    fn test_days_remaining_garbage_is_far_future() {
        let now = fixed_now();
        let expected = FAR_FUTURE.signed_duration_since(d(2024, 1, 10)).num_days();
        assert_eq!(calculate_days_remaining("not-a-date", now), expected);
        assert_eq!(calculate_days_remaining("", now), expected);
        assert!(expected > 27_000);
    }

    #[test]
    fn test_filter_upcoming_sorts_and_filters() {
        let events = vec![
            Event::new(1, "Later").on("2024-02-01"),
            Event::new(2, "Past").on("2024-01-01"),
            Event::new(3, "Today").on("2024-01-10"),
            Event::new(4, "Broken").on("garbage"),
            Event::new(5, "Soon").spanning("2024-01-12", "2024-01-14"),
        ];
        let ids: Vec<i64> = filter_upcoming_active(&events, d(2024, 1, 10)).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 5, 1, 4]);
    }

    #[test]
    fn test_filter_upcoming_is_stable_and_idempotent() {
        let events = vec![
            Event::new(1, "A").on("2024-01-20"),
            Event::new(2, "B").on("2024-01-15"),
            Event::new(3, "C").on("2024-01-20"),
            Event::new(4, "D").on("2024-01-15"),
        ];
        let first: Vec<Event> = filter_upcoming_active(&events, d(2024, 1, 10)).into_iter().cloned().collect();
        let ids: Vec<i64> = first.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        let second: Vec<i64> = filter_upcoming_active(&first, d(2024, 1, 10)).iter().map(|e| e.id).collect();
        assert_eq!(second, ids);
    }

    #[test]
    fn test_filter_upcoming_empty() {
        assert!(filter_upcoming_active(&[], d(2024, 1, 10)).is_empty());
    }

    #[test]
    fn test_dashboard_summary() {
        let events = vec![
            Event::new(1, "Done").on("2024-01-20").with_status(EventStatus::Completed),
            Event::new(2, "Summit").on("2024-01-15").with_status(EventStatus::Confirmed),
            Event::new(3, "Old").on("2024-01-01").with_status(EventStatus::Active),
            Event::new(4, "Launch").on("2024-01-15").with_status(EventStatus::Planning),
            Event::new(5, "Dropped").on("2024-01-12").with_status(EventStatus::Cancelled),
            Event::new(6, "Party").on("2024-02-01").with_status(EventStatus::InProgress),
        ];
        let tasks = vec![
            Task { priority: Priority::High, ..task_with("todo").with_due("2024-01-05") },
            Task { priority: Priority::High, ..task_with("completed").with_due("2024-01-05") },
            task_with("in_progress").with_due("2024-01-11"),
            Task { event_id: Some(2), ..task_with("completed") },
            Task { event_id: Some(2), ..task_with("completed") },
            Task { event_id: Some(2), ..task_with("todo") },
        ];
        let snapshot = Snapshot::new(events, tasks);

        let summary = DashboardSummary::build(&snapshot, fixed_now(), 2);
        assert_eq!(summary.total_events, 6);
        assert_eq!(summary.active_events, 4);
        assert_eq!(summary.total_tasks, 6);
        assert_eq!(summary.completed_tasks, 3);
        assert_eq!(summary.pending_tasks, 3);
        assert_eq!(summary.high_priority_pending, 1);
        assert_eq!(summary.overdue_tasks, 1);
        assert_eq!(summary.task_progress, 50);

        let upcoming: Vec<(i64, u8)> = summary.upcoming.iter().map(|u| (u.event.id, u.progress)).collect();
        assert_eq!(upcoming, vec![(2, 67), (4, 0)]);
        assert_eq!(summary.next_event.map(|e| e.id), Some(2));
        assert_eq!(summary.days_until_next_event, Some(5));
    }

    #[test]
    fn test_dashboard_summary_empty() {
        let summary = DashboardSummary::build(&Snapshot::default(), fixed_now(), 5);
        assert_eq!(summary, DashboardSummary::default());
    }
}
