//! Stimulus catalog: the fixed set of categories and colour pairs.
//!
//! Validated once at construction. A catalog that builds successfully
//! can always produce a next stimulus.

mod standard;

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use huesight_core::errors::CatalogError;
use huesight_core::models::StimulusPair;

/// A confusion category as declared in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    /// Diagnostic importance multiplier.
    pub weight: f64,
}

impl CategoryDefinition {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Immutable catalog of categories (in declaration order) and stimuli.
#[derive(Debug, Clone)]
pub struct StimulusCatalog {
    categories: Vec<CategoryDefinition>,
    stimuli: Vec<StimulusPair>,
    /// Category name → positions in `stimuli`, in catalog order.
    by_category: FxHashMap<String, Vec<usize>>,
}

/// On-disk TOML layout: `[[category]]` and `[[stimulus]]` tables.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryDefinition>,
    #[serde(rename = "stimulus", default)]
    stimuli: Vec<StimulusPair>,
}

impl StimulusCatalog {
    /// Build and validate a catalog.
    pub fn new(
        categories: Vec<CategoryDefinition>,
        stimuli: Vec<StimulusPair>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        if stimuli.is_empty() {
            return Err(CatalogError::NoStimuli);
        }

        let mut seen = FxHashSet::default();
        for def in &categories {
            if !seen.insert(def.name.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    name: def.name.clone(),
                });
            }
            if !(def.weight.is_finite() && def.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    name: def.name.clone(),
                    weight: def.weight,
                });
            }
        }

        let mut by_category: FxHashMap<String, Vec<usize>> = categories
            .iter()
            .map(|def| (def.name.clone(), Vec::new()))
            .collect();
        for (index, pair) in stimuli.iter().enumerate() {
            if pair.correct_option > 1 {
                return Err(CatalogError::InvalidCorrectOption {
                    index,
                    option: pair.correct_option,
                });
            }
            match by_category.get_mut(&pair.category) {
                Some(indices) => indices.push(index),
                None => {
                    return Err(CatalogError::UnknownCategory {
                        index,
                        category: pair.category.clone(),
                    })
                }
            }
        }

        if let Some(def) = categories
            .iter()
            .find(|def| by_category.get(&def.name).map_or(true, Vec::is_empty))
        {
            return Err(CatalogError::CategoryWithoutStimuli {
                name: def.name.clone(),
            });
        }

        Ok(Self {
            categories,
            stimuli,
            by_category,
        })
    }

    /// Assemble without validation. Only for catalogs known to be valid.
    fn from_parts_unchecked(categories: Vec<CategoryDefinition>, stimuli: Vec<StimulusPair>) -> Self {
        let mut by_category: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (index, pair) in stimuli.iter().enumerate() {
            by_category.entry(pair.category.clone()).or_default().push(index);
        }
        Self {
            categories,
            stimuli,
            by_category,
        }
    }

    /// The built-in catalog: 11 categories, 33 stimuli.
    pub fn standard() -> Self {
        standard::build()
    }

    /// Parse a catalog from TOML and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str).map_err(|e| CatalogError::ParseError {
            message: e.to_string(),
        })?;
        Self::new(file.categories, file.stimuli)
    }

    /// Read and parse a TOML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::ParseError {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|def| def.name == name)
    }

    /// All stimuli in catalog order.
    pub fn stimuli(&self) -> &[StimulusPair] {
        &self.stimuli
    }

    /// Stimuli of one category, in catalog order. Empty for unknown names.
    pub fn stimuli_for<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a StimulusPair> + 'a {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.stimuli[i])
    }

    pub fn stimulus_count_for(&self, category: &str) -> usize {
        self.by_category.get(category).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.stimuli.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stimuli.is_empty()
    }
}

impl Default for StimulusCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huesight_core::models::{Color, Difficulty};

    fn pair(category: &str) -> StimulusPair {
        StimulusPair {
            reference: Color::from_hex(0x0000FF),
            options: [Color::from_hex(0xFFFF00), Color::from_hex(0x0000FF)],
            correct_option: 1,
            difficulty: Difficulty::new(1).unwrap(),
            category: category.to_string(),
        }
    }

    #[test]
    fn standard_catalog_shape() {
        let catalog = StimulusCatalog::standard();
        assert_eq!(catalog.categories().len(), 11);
        assert_eq!(catalog.len(), 33);
        assert_eq!(catalog.categories()[0].name, "red-green-primary");
        assert_eq!(catalog.categories()[0].weight, 3.0);
        assert_eq!(catalog.categories()[10].name, "control");
        assert_eq!(catalog.stimulus_count_for("red-green-primary"), 4);
        assert_eq!(catalog.stimulus_count_for("brown-variations"), 5);
        for def in catalog.categories() {
            assert!(catalog.stimulus_count_for(&def.name) > 0, "{} has no stimuli", def.name);
        }
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let catalog = StimulusCatalog::standard();
        assert!(
            StimulusCatalog::new(catalog.categories().to_vec(), catalog.stimuli().to_vec()).is_ok()
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            StimulusCatalog::new(vec![], vec![]),
            Err(CatalogError::NoCategories)
        ));
        assert!(matches!(
            StimulusCatalog::new(vec![CategoryDefinition::new("control", 1.0)], vec![]),
            Err(CatalogError::NoStimuli)
        ));
    }

    #[test]
    fn rejects_category_without_stimuli() {
        let err = StimulusCatalog::new(
            vec![
                CategoryDefinition::new("control", 0.8),
                CategoryDefinition::new("blue-purple", 1.2),
            ],
            vec![pair("control")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::CategoryWithoutStimuli { name } if name == "blue-purple"));
    }

    #[test]
    fn rejects_orphan_stimulus() {
        let err = StimulusCatalog::new(
            vec![CategoryDefinition::new("control", 0.8)],
            vec![pair("control"), pair("infrared")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { index: 1, .. }));
    }

    #[test]
    fn rejects_duplicates_and_bad_weights() {
        let dup = StimulusCatalog::new(
            vec![
                CategoryDefinition::new("control", 0.8),
                CategoryDefinition::new("control", 1.0),
            ],
            vec![pair("control")],
        );
        assert!(matches!(dup, Err(CatalogError::DuplicateCategory { .. })));

        let zero = StimulusCatalog::new(
            vec![CategoryDefinition::new("control", 0.0)],
            vec![pair("control")],
        );
        assert!(matches!(zero, Err(CatalogError::InvalidWeight { .. })));
    }

    #[test]
    fn rejects_bad_option_index() {
        let mut bad = pair("control");
        bad.correct_option = 2;
        let err = StimulusCatalog::new(vec![CategoryDefinition::new("control", 0.8)], vec![bad]);
        assert!(matches!(err, Err(CatalogError::InvalidCorrectOption { index: 0, option: 2 })));
    }

    #[test]
    fn loads_from_toml() {
        let catalog = StimulusCatalog::from_toml(
            r##"
[[category]]
name = "blue-purple"
weight = 1.2

[[category]]
name = "control"
weight = 0.8

[[stimulus]]
reference = "#0000FF"
options = ["#8A2BE2", "#0000FF"]
correct_option = 1
difficulty = 2
category = "blue-purple"

[[stimulus]]
reference = "#FFFFFF"
options = ["#000000", "#FFFFFF"]
correct_option = 1
difficulty = 1
category = "control"
"##,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stimuli_for("blue-purple").count(), 1);
        assert_eq!(catalog.stimuli_for("nope").count(), 0);
    }

    #[test]
    fn toml_with_bad_difficulty_is_a_parse_error() {
        let err = StimulusCatalog::from_toml(
            r##"
[[category]]
name = "control"
weight = 0.8

[[stimulus]]
reference = "#FFFFFF"
options = ["#000000", "#FFFFFF"]
correct_option = 1
difficulty = 9
category = "control"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }
}
