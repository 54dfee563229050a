//! Ordered per-category belief model.
//!
//! Iteration order is the catalog's declaration order (or a restored
//! snapshot's order) and decides ties during selection, so categories live
//! in a `Vec` with a separate name index rather than in a hash map.

use rustc_hash::FxHashMap;

use huesight_core::models::ConfusionCategory;

use crate::catalog::StimulusCatalog;

#[derive(Debug, Clone, Default)]
pub struct CategoryModel {
    categories: Vec<ConfusionCategory>,
    index: FxHashMap<String, usize>,
}

impl CategoryModel {
    /// One fresh category per catalog category, posterior = prior.
    pub fn from_catalog(catalog: &StimulusCatalog, prior_alpha: f64, prior_beta: f64) -> Self {
        Self::from_categories(
            catalog
                .categories()
                .iter()
                .map(|def| ConfusionCategory::new(&def.name, def.weight, prior_alpha, prior_beta))
                .collect(),
        )
    }

    /// Build from an ordered list. A repeated name keeps its first position
    /// and takes the later record.
    pub fn from_categories(categories: Vec<ConfusionCategory>) -> Self {
        let mut model = Self::default();
        model.replace_all(categories);
        model
    }

    /// Clear and repopulate, preserving the given order.
    pub fn replace_all(&mut self, categories: Vec<ConfusionCategory>) {
        self.categories.clear();
        self.index.clear();
        for category in categories {
            match self.index.get(&category.name) {
                Some(&i) => self.categories[i] = category,
                None => {
                    self.index.insert(category.name.clone(), self.categories.len());
                    self.categories.push(category);
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ConfusionCategory> {
        self.index.get(name).map(|&i| &self.categories[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ConfusionCategory> {
        self.index.get(name).map(|&i| &mut self.categories[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Categories in model order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfusionCategory> {
        self.categories.iter()
    }

    /// Categories that feed severity and confidence.
    pub fn diagnostic(&self) -> impl Iterator<Item = &ConfusionCategory> {
        self.categories.iter().filter(|c| !c.is_control())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories with at least one observation.
    pub fn explored_count(&self) -> usize {
        self.categories.iter().filter(|c| c.is_observed()).count()
    }

    pub fn to_vec(&self) -> Vec<ConfusionCategory> {
        self.categories.clone()
    }
}

impl<'a> IntoIterator for &'a CategoryModel {
    type Item = &'a ConfusionCategory;
    type IntoIter = std::slice::Iter<'a, ConfusionCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
