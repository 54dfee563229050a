//! Built-in catalog.
//!
//! Categories are ordered by declaration; the order decides ties in both
//! selection policies. Weights reflect diagnostic importance for
//! red-green deficiencies, with `control` as an easy baseline.

use huesight_core::models::{Color, Difficulty, StimulusPair};

use super::{CategoryDefinition, StimulusCatalog};

const CATEGORIES: &[(&str, f64)] = &[
    ("red-green-primary", 3.0),
    ("red-brown", 2.5),
    ("green-yellow", 2.0),
    ("orange-green", 1.8),
    ("brown-variations", 2.2),
    ("pink-gray", 1.5),
    ("blue-purple", 1.2),
    ("yellow-orange", 1.4),
    ("dark-colors", 1.3),
    ("pastel-colors", 1.1),
    ("control", 0.8),
];

/// (reference, decoy, difficulty, category). The reference is always the
/// second option.
const STIMULI: &[(u32, u32, u8, &str)] = &[
    (0xFF0000, 0x8FBC8F, 5, "red-green-primary"),
    (0x00FF00, 0xFF6B6B, 5, "red-green-primary"),
    (0xDC143C, 0x14DC3C, 4, "red-green-primary"),
    (0x32CD32, 0xCD3232, 4, "red-green-primary"),
    (0x8B4513, 0x228B22, 4, "red-brown"),
    (0xA0522D, 0x52A02D, 3, "red-brown"),
    (0xCD853F, 0x853FCD, 3, "red-brown"),
    (0x8B4513, 0x4B4B8D, 3, "brown-variations"),
    (0xD2691E, 0x691ED2, 3, "brown-variations"),
    (0xA0522D, 0x522DA0, 4, "brown-variations"),
    (0x8B4513, 0x13458B, 4, "brown-variations"),
    (0xCD853F, 0x3F85CD, 2, "brown-variations"),
    (0xADFF2F, 0xFF2FAD, 4, "green-yellow"),
    (0x9ACD32, 0xCD329A, 3, "green-yellow"),
    (0x32CD32, 0xCD32CD, 3, "green-yellow"),
    (0xFF4500, 0x45FF00, 3, "orange-green"),
    (0xFF8C00, 0x8CFF00, 2, "orange-green"),
    (0xFFD700, 0xD700FF, 2, "yellow-orange"),
    (0xFFA500, 0xA500FF, 2, "yellow-orange"),
    (0xFF8C00, 0x8C00FF, 3, "yellow-orange"),
    (0xFFC0CB, 0xC0C0C0, 3, "pink-gray"),
    (0xFFB6C1, 0xB6C1FF, 2, "pink-gray"),
    (0x0000FF, 0x8A2BE2, 2, "blue-purple"),
    (0x4169E1, 0xE14169, 2, "blue-purple"),
    (0x2F4F4F, 0x4F2F4F, 4, "dark-colors"),
    (0x556B2F, 0x6B2F55, 4, "dark-colors"),
    (0x800000, 0x008000, 5, "dark-colors"),
    (0xF0E68C, 0xE68CF0, 2, "pastel-colors"),
    (0xDDA0DD, 0xA0DDDD, 2, "pastel-colors"),
    (0xF8BBD9, 0xBBF8D9, 3, "pastel-colors"),
    (0x0000FF, 0xFFFF00, 1, "control"),
    (0xFFFFFF, 0x000000, 1, "control"),
    (0xFF00FF, 0x00FFFF, 1, "control"),
];

pub(super) fn build() -> StimulusCatalog {
    let categories = CATEGORIES
        .iter()
        .map(|&(name, weight)| CategoryDefinition::new(name, weight))
        .collect();

    let stimuli = STIMULI
        .iter()
        .map(|&(reference, decoy, difficulty, category)| StimulusPair {
            reference: Color::from_hex(reference),
            options: [Color::from_hex(decoy), Color::from_hex(reference)],
            correct_option: 1,
            difficulty: Difficulty::saturating(difficulty),
            category: category.to_string(),
        })
        .collect();

    StimulusCatalog::from_parts_unchecked(categories, stimuli)
}
