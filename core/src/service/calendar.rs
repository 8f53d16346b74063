use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::config::WeekStart;
use crate::model::event::Event;
use crate::model::task::Task;
use crate::model::snapshot::Snapshot;
use crate::service::dto::{CalendarCell, CalendarMonth, DaySummary};
use crate::time::day_in_range;

// Standalone functions for pure logic

/// Events whose effective `[start, end]` range contains `day` (inclusive on
/// both ends). Events with unreadable dates match no day. Input order is kept.
pub fn events_on_day(day: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| match event.day_range() {
            Some((start, end)) => day_in_range(day, start, end),
            None => false,
        })
        .collect()
}

/// Tasks due exactly on `day`. Unlike events there is no range here: a task
/// only ever shows up on its own due date.
pub fn tasks_on_day(day: NaiveDate, tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.due_day() == Some(day))
        .collect()
}

pub fn summarize_day<'a>(day: NaiveDate, events: &'a [Event], tasks: &'a [Task]) -> DaySummary<'a> {
    DaySummary::new(day, events_on_day(day, events), tasks_on_day(day, tasks))
}

/// Weeks covering `(year, month)`, padded with days from the neighbouring
/// months so every row is a full week starting on `week_start`.
/// Returns `None` for an invalid month.
pub fn month_grid(year: i32, month: u32, week_start: WeekStart) -> Option<Vec<[NaiveDate; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(chrono::Months::new(1))?.pred_opt()?;

    let lead = days_since_week_start(first.weekday(), week_start);
    let mut cursor = first - Duration::days(lead);

    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = [cursor; 7];
        for (i, slot) in week.iter_mut().enumerate() {
            *slot = cursor + Duration::days(i as i64);
        }
        weeks.push(week);
        cursor += Duration::days(7);
    }
    Some(weeks)
}

impl<'a> CalendarMonth<'a> {
    pub fn build(year: i32, month: u32, week_start: WeekStart, snapshot: &'a Snapshot) -> Option<Self> {
        let weeks = month_grid(year, month, week_start)?
            .iter()
            .map(|week| {
                week.iter()
                    .map(|&day| CalendarCell {
                        in_month: day.year() == year && day.month() == month,
                        summary: summarize_day(day, &snapshot.events, &snapshot.tasks),
                    })
                    .collect()
            })
            .collect();
        Some(Self { year, month, weeks })
    }
}

fn days_since_week_start(day: Weekday, week_start: WeekStart) -> i64 {
    match week_start {
        WeekStart::Sunday => day.num_days_from_sunday() as i64,
        WeekStart::Monday => day.num_days_from_monday() as i64,
    }
}
