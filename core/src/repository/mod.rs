pub mod file;
pub mod traits;

// Re-export
pub use file::FileSnapshotRepository;
pub use traits::{InMemorySnapshotRepository, SnapshotRepository};
