use crate::config::WeekStart;
use crate::model::snapshot::Snapshot;
use crate::repository::SnapshotRepository;
use crate::service::calendar::summarize_day;
use crate::service::dto::{CalendarMonth, DaySummary};
use anyhow::Result;
use chrono::NaiveDate;

/// Owns one loaded snapshot and hands out borrowed calendar views of it.
pub struct CalendarUseCase {
    snapshot: Snapshot,
    week_start: WeekStart,
}

impl CalendarUseCase {
    pub fn new(snapshot: Snapshot, week_start: WeekStart) -> Self {
        Self { snapshot, week_start }
    }

    pub fn load<R: SnapshotRepository>(repo: &R, week_start: WeekStart) -> Result<Self> {
        Ok(Self::new(repo.load()?, week_start))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn month(&self, year: i32, month: u32) -> Option<CalendarMonth<'_>> {
        CalendarMonth::build(year, month, self.week_start, &self.snapshot)
    }

    pub fn day(&self, date: NaiveDate) -> DaySummary<'_> {
        summarize_day(date, &self.snapshot.events, &self.snapshot.tasks)
    }
}
