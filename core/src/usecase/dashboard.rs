use crate::repository::SnapshotRepository;
use crate::service::dto::DashboardSummary;
use crate::time::Clock;
use anyhow::Result;

pub struct DashboardUseCase<'a, R: SnapshotRepository, C: Clock> {
    repo: &'a R,
    clock: &'a C,
    upcoming_limit: usize,
}

impl<'a, R: SnapshotRepository, C: Clock> DashboardUseCase<'a, R, C> {
    pub fn new(repo: &'a R, clock: &'a C, upcoming_limit: usize) -> Self {
        Self {
            repo,
            clock,
            upcoming_limit,
        }
    }

    pub fn get_summary(&self) -> Result<DashboardSummary> {
        let snapshot = self.repo.load()?;
        Ok(DashboardSummary::build(&snapshot, self.clock.now(), self.upcoming_limit))
    }
}
