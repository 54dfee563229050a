use serde::{Deserialize, Serialize};

use super::Color;
use crate::errors::CatalogError;

/// Ordinal stimulus difficulty, 1 (trivial) to 5 (hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CatalogError::InvalidDifficulty { value })
        }
    }

    /// Clamp into 1..=5. For statically known catalog entries.
    pub const fn saturating(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// One binary-choice colour-discrimination stimulus.
///
/// The subject sees `reference` and must pick the matching colour out of
/// `options`. Immutable once the catalog is built. Deserialization rejects
/// a `correct_option` outside `0..=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStimulusPair")]
pub struct StimulusPair {
    pub reference: Color,
    pub options: [Color; 2],
    pub correct_option: usize,
    pub difficulty: Difficulty,
    /// Name of the confusion category this stimulus tests.
    pub category: String,
}

/// Unvalidated wire shape of [`StimulusPair`].
#[derive(Deserialize)]
struct RawStimulusPair {
    reference: Color,
    options: [Color; 2],
    correct_option: usize,
    difficulty: Difficulty,
    category: String,
}

impl TryFrom<RawStimulusPair> for StimulusPair {
    type Error = CatalogError;

    fn try_from(raw: RawStimulusPair) -> Result<Self, Self::Error> {
        if raw.correct_option > 1 {
            return Err(CatalogError::InvalidCorrectOption {
                index: 0,
                option: raw.correct_option,
            });
        }
        Ok(Self {
            reference: raw.reference,
            options: raw.options,
            correct_option: raw.correct_option,
            difficulty: raw.difficulty,
            category: raw.category,
        })
    }
}

impl StimulusPair {
    /// Option index of the correct answer, clamped into `0..=1` for pairs
    /// built by hand with an out-of-range index.
    pub fn correct_index(&self) -> usize {
        self.correct_option.min(1)
    }

    /// Whether choosing `option` answers this stimulus correctly.
    pub fn is_correct_choice(&self, option: usize) -> bool {
        option == self.correct_option
    }

    /// The colour that answers this stimulus correctly.
    pub fn correct_color(&self) -> Color {
        self.options[self.correct_index()]
    }
}
