//! SQL for each table, as free functions over a borrowed connection.

pub mod snapshots;
