use crate::model::snapshot::Snapshot;
use anyhow::Result;

/// Supplies the events/tasks snapshot for one invocation.
pub trait SnapshotRepository {
    fn load(&self) -> Result<Snapshot>;
}

/// Fixed, already-materialized snapshot. Handy for tests and embedding.
pub struct InMemorySnapshotRepository {
    snapshot: Snapshot,
}

impl InMemorySnapshotRepository {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }
}
