//! Traits at the boundary between the ranking engine and the outside world.

pub mod snapshot;

pub use snapshot::SnapshotSource;
