use serde::{Deserialize, Serialize};
use std::fmt;

/// Item-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Balanced coverage: ask the least-observed categories first.
    Exploration,
    /// Maximal expected information gain per question.
    #[default]
    Exploitation,
}

impl SelectionMode {
    pub fn from_exploration_flag(exploration: bool) -> Self {
        if exploration {
            Self::Exploration
        } else {
            Self::Exploitation
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exploration => "exploration",
            Self::Exploitation => "exploitation",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
