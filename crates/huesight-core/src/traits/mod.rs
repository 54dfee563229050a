//! Seams to collaborators: randomness and snapshot persistence.

pub mod random_source;
pub mod snapshot_store;

pub use random_source::RandomSource;
pub use snapshot_store::SnapshotStore;
