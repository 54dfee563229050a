//! v001: assessment snapshot table.
//!
//! `revision` increases on every save and orders sessions by recency.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS assessment_snapshots (
    session_id     TEXT PRIMARY KEY NOT NULL,
    snapshot_json  TEXT NOT NULL,
    questions      INTEGER NOT NULL DEFAULT 0,
    created_at     TEXT NOT NULL,
    updated_at     TEXT NOT NULL,
    revision       INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_assessment_snapshots_revision
    ON assessment_snapshots(revision DESC);
";
