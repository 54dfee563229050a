//! Serializable view of all mutable assessment state.
//!
//! Every field is optional: a snapshot written by an older build, or
//! truncated by the persistence layer, still restores whatever it carries
//! and lets the engine default the rest.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ResponseRecord;

/// Counts and posterior of one category inside a snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    pub weight: Option<f64>,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub posterior_alpha: Option<f64>,
    pub posterior_beta: Option<f64>,
}

impl CategoryRecord {
    /// Decode each field on its own; a malformed field falls back to its
    /// default. `None` when `value` is not an object.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        value.is_object().then(|| Self {
            weight: field(value, "weight"),
            correct_count: field(value, "correct_count").unwrap_or_default(),
            incorrect_count: field(value, "incorrect_count").unwrap_or_default(),
            posterior_alpha: field(value, "posterior_alpha"),
            posterior_beta: field(value, "posterior_beta"),
        })
    }
}

/// Logical persistence shape consumed by `SnapshotStore` implementations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentSnapshot {
    pub response_history: Option<Vec<ResponseRecord>>,
    pub confidence_level: Option<f64>,
    pub severity_estimate: Option<f64>,
    pub exploration_mode: Option<bool>,
    /// `(name, record)` pairs in category order.
    pub categories: Option<Vec<(String, CategoryRecord)>>,
    pub prior_alpha: Option<f64>,
    pub prior_beta: Option<f64>,
}

impl AssessmentSnapshot {
    /// Extract each field independently from arbitrary JSON.
    ///
    /// A malformed field is dropped on its own. Inside the history and
    /// category lists, malformed entries are dropped and the rest kept.
    /// A category entry survives a malformed inner field as long as it is
    /// still a `[name, {..}]` pair. A non-object value yields an empty
    /// snapshot.
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            response_history: list_field(value, "response_history"),
            confidence_level: field(value, "confidence_level"),
            severity_estimate: field(value, "severity_estimate"),
            exploration_mode: field(value, "exploration_mode"),
            categories: category_list(value),
            prior_alpha: field(value, "prior_alpha"),
            prior_beta: field(value, "prior_beta"),
        }
    }

    /// Number of recorded responses, 0 when the history is absent.
    pub fn questions_asked(&self) -> usize {
        self.response_history.as_ref().map_or(0, Vec::len)
    }
}

fn field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .filter(|v| !v.is_null())
        .and_then(|v| T::deserialize(v).ok())
}

fn list_field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<Vec<T>> {
    let items = value.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
    )
}

fn category_list(value: &Value) -> Option<Vec<(String, CategoryRecord)>> {
    let items = value.get("categories")?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item.as_array()?.as_slice() {
                [name, record] => Some((
                    name.as_str()?.to_string(),
                    CategoryRecord::from_json_value(record)?,
                )),
                _ => None,
            })
            .collect(),
    )
}
