//! Coverage-first selection.

use huesight_core::models::StimulusPair;
use huesight_core::traits::RandomSource;

use crate::catalog::StimulusCatalog;
use crate::model::CategoryModel;

/// Pick uniformly among the least-observed categories, then uniformly
/// among that category's stimuli.
///
/// Ties are collected in model order. Tied categories with no stimulus in
/// the catalog are passed over; if none remain, any catalog stimulus is
/// picked uniformly.
pub fn select<'a>(
    model: &CategoryModel,
    catalog: &'a StimulusCatalog,
    rng: &mut dyn RandomSource,
) -> &'a StimulusPair {
    let least_observed = least_observed(model);
    let askable: Vec<&str> = least_observed
        .into_iter()
        .filter(|name| catalog.stimulus_count_for(name) > 0)
        .collect();

    if askable.is_empty() {
        let stimuli = catalog.stimuli();
        return &stimuli[rng.pick_index(stimuli.len())];
    }

    let target = askable[rng.pick_index(askable.len())];
    let candidates: Vec<&StimulusPair> = catalog.stimuli_for(target).collect();
    let chosen = candidates[rng.pick_index(candidates.len())];

    tracing::debug!(category = target, ties = askable.len(), "exploration selection");
    chosen
}

/// Names of every category at the minimum observation count, in model order.
pub fn least_observed(model: &CategoryModel) -> Vec<&str> {
    let Some(min) = model.iter().map(|c| c.observations()).min() else {
        return Vec::new();
    };
    model
        .iter()
        .filter(|c| c.observations() == min)
        .map(|c| c.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use huesight_core::models::ConfusionCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn observed(name: &str, weight: f64, correct: u32) -> ConfusionCategory {
        let mut c = ConfusionCategory::new(name, weight, 2.0, 2.0);
        c.correct_count = correct;
        c.posterior_alpha += f64::from(correct);
        c
    }

    #[test]
    fn least_observed_in_model_order() {
        let model = CategoryModel::from_categories(vec![
            observed("pink-gray", 1.5, 2),
            observed("control", 0.8, 1),
            observed("red-brown", 2.5, 1),
        ]);
        assert_eq!(least_observed(&model), vec!["control", "red-brown"]);
    }

    #[test]
    fn only_least_observed_categories_are_chosen() {
        let catalog = StimulusCatalog::standard();
        let mut categories = CategoryModel::from_catalog(&catalog, 2.0, 2.0).to_vec();
        for c in categories.iter_mut() {
            if c.name != "pink-gray" {
                c.correct_count = 1;
                c.posterior_alpha = 3.0;
            }
        }
        let model = CategoryModel::from_categories(categories);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(select(&model, &catalog, &mut rng).category, "pink-gray");
        }
    }

    #[test]
    fn falls_back_to_catalog_when_tied_categories_have_no_stimuli() {
        let catalog = StimulusCatalog::standard();
        let model = CategoryModel::from_categories(vec![
            observed("ultraviolet", 1.0, 0),
            observed("control", 0.8, 3),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let pair = select(&model, &catalog, &mut rng);
        assert!(catalog.stimuli().contains(pair));
    }

    #[test]
    fn empty_model_still_selects() {
        let catalog = StimulusCatalog::standard();
        let mut rng = StdRng::seed_from_u64(5);
        let pair = select(&CategoryModel::default(), &catalog, &mut rng);
        assert!(catalog.stimuli().contains(pair));
    }
}
