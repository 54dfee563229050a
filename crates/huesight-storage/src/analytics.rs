//! Aggregate view over every session a store holds.

use chrono::{DateTime, Utc};
use huesight_core::errors::StorageError;
use huesight_core::models::AssessmentSnapshot;
use huesight_core::traits::SnapshotStore;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Answer totals for one category across all sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAnalytics {
    pub category: String,
    pub total: usize,
    pub correct: usize,
    /// Fraction in `[0, 1]`, 0 with no answers.
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_sessions: usize,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Fraction in `[0, 1]`, 0 with no answers.
    pub overall_accuracy: f64,
    /// Sorted by category name.
    pub categories: Vec<CategoryAnalytics>,
    /// Timestamp of the latest recorded response in any session.
    pub last_session_date: Option<DateTime<Utc>>,
}

/// Summarize every stored session. `None` when the store is empty.
///
/// Totals come from each snapshot's response history. A session removed
/// between listing and loading is skipped.
pub fn summarize(store: &dyn SnapshotStore) -> Result<Option<AnalyticsSummary>, StorageError> {
    let ids = store.list_sessions()?;
    if ids.is_empty() {
        return Ok(None);
    }

    let mut snapshots = Vec::with_capacity(ids.len());
    for id in &ids {
        if let Some(snapshot) = store.load(id)? {
            snapshots.push(snapshot);
        }
    }

    let summary = from_snapshots(&snapshots);
    tracing::debug!(
        sessions = summary.total_sessions,
        questions = summary.total_questions,
        "analytics summarized"
    );
    Ok(Some(summary))
}

fn from_snapshots(snapshots: &[AssessmentSnapshot]) -> AnalyticsSummary {
    let mut per_category: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    let mut total_questions = 0;
    let mut correct_answers = 0;
    let mut last_session_date = None;

    for record in snapshots
        .iter()
        .filter_map(|s| s.response_history.as_ref())
        .flatten()
    {
        total_questions += 1;
        let entry = per_category.entry(record.stimulus.category.as_str()).or_default();
        entry.0 += 1;
        if record.is_correct {
            correct_answers += 1;
            entry.1 += 1;
        }
        last_session_date = last_session_date.max(Some(record.timestamp));
    }

    let mut categories: Vec<CategoryAnalytics> = per_category
        .into_iter()
        .map(|(category, (total, correct))| CategoryAnalytics {
            category: category.to_string(),
            total,
            correct,
            accuracy: fraction(correct, total),
        })
        .collect();
    categories.sort_unstable_by(|a, b| a.category.cmp(&b.category));

    AnalyticsSummary {
        total_sessions: snapshots.len(),
        total_questions,
        correct_answers,
        overall_accuracy: fraction(correct_answers, total_questions),
        categories,
        last_session_date,
    }
}

fn fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
