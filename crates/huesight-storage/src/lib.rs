//! # huesight-storage
//!
//! Persistence collaborator for the assessment engine: snapshot stores
//! behind the `SnapshotStore` trait, SQLite schema migrations, text
//! export of finished sessions, and a cross-session summary.

pub mod analytics;
pub mod connection;
pub mod export;
pub mod migrations;
pub mod queries;
pub mod stores;

pub use analytics::{summarize, AnalyticsSummary, CategoryAnalytics};
pub use stores::{open_store, InMemorySnapshotStore, SqliteSnapshotStore};
