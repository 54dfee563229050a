//! Conversion between the live category model and snapshot records.

use huesight_core::models::{CategoryRecord, ConfusionCategory};

use crate::catalog::StimulusCatalog;
use crate::model::CategoryModel;

/// Weight given to a restored category the catalog does not know.
const FOREIGN_CATEGORY_WEIGHT: f64 = 1.0;

/// Snapshot records for every category, in model order.
pub fn category_records(model: &CategoryModel) -> Vec<(String, CategoryRecord)> {
    model
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                CategoryRecord {
                    weight: Some(c.weight),
                    correct_count: c.correct_count,
                    incorrect_count: c.incorrect_count,
                    posterior_alpha: Some(c.posterior_alpha),
                    posterior_beta: Some(c.posterior_beta),
                },
            )
        })
        .collect()
}

/// Rebuild one category from a record, defaulting each field on its own.
///
/// Missing weight comes from the catalog (1.0 for unknown names); a
/// missing posterior parameter is `prior + count`.
pub fn restore_category(
    name: &str,
    record: &CategoryRecord,
    catalog: &StimulusCatalog,
    prior_alpha: f64,
    prior_beta: f64,
) -> ConfusionCategory {
    let weight = record.weight.unwrap_or_else(|| {
        catalog
            .category(name)
            .map_or(FOREIGN_CATEGORY_WEIGHT, |def| def.weight)
    });
    ConfusionCategory {
        name: name.to_string(),
        weight,
        correct_count: record.correct_count,
        incorrect_count: record.incorrect_count,
        posterior_alpha: record
            .posterior_alpha
            .unwrap_or(prior_alpha + f64::from(record.correct_count)),
        posterior_beta: record
            .posterior_beta
            .unwrap_or(prior_beta + f64::from(record.incorrect_count)),
    }
}

/// Model restored from a snapshot's category list, in snapshot order.
pub fn restore_model(
    records: &[(String, CategoryRecord)],
    catalog: &StimulusCatalog,
    prior_alpha: f64,
    prior_beta: f64,
) -> CategoryModel {
    CategoryModel::from_categories(
        records
            .iter()
            .map(|(name, record)| restore_category(name, record, catalog, prior_alpha, prior_beta))
            .collect(),
    )
}
