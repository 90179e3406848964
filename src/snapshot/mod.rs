pub mod loader;
pub mod store;

pub use loader::load_snapshot;
pub use store::{Snapshot, SnapshotTables};
