use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a Pokémon can acquire a move.
///
/// This is a closed set: the upstream API speaks in free-form strings, but
/// everything past the ingestion boundary works with these five variants.
/// Unrecognized upstream strings are folded into `Other` by [`from_wire`]
/// so that data drift upstream never breaks grouping downstream.
///
/// [`from_wire`]: LearnMethod::from_wire
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Egg,
    Other,
}

impl LearnMethod {
    /// Every method, in display order. This is also the priority order used
    /// when a subject is learnable several ways: the earliest method here
    /// wins the primary bucket.
    pub const ALL: [LearnMethod; 5] = [
        LearnMethod::LevelUp,
        LearnMethod::Machine,
        LearnMethod::Tutor,
        LearnMethod::Egg,
        LearnMethod::Other,
    ];

    /// Position of this method within [`LearnMethod::ALL`]. Lower = higher
    /// priority.
    pub fn priority(self) -> usize {
        match self {
            LearnMethod::LevelUp => 0,
            LearnMethod::Machine => 1,
            LearnMethod::Tutor => 2,
            LearnMethod::Egg => 3,
            LearnMethod::Other => 4,
        }
    }

    /// Look up a method by its position in [`LearnMethod::ALL`].
    pub fn from_index(index: usize) -> Option<LearnMethod> {
        LearnMethod::ALL.get(index).copied()
    }

    /// Parse an upstream method string, coercing anything unrecognized to
    /// `Other`. Accepts `_` and whitespace as separator variants of `-`.
    pub fn from_wire(raw: &str) -> LearnMethod {
        let lowered = raw.to_lowercase();
        let key = lowered
            .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        LearnMethod::from_str(&key).unwrap_or(LearnMethod::Other)
    }

    /// Human-readable bucket label for paged message headers.
    pub fn label(self) -> &'static str {
        match self {
            LearnMethod::LevelUp => "Level Up",
            LearnMethod::Machine => "TM/HM",
            LearnMethod::Tutor => "Move Tutor",
            LearnMethod::Egg => "Egg Moves",
            LearnMethod::Other => "Other",
        }
    }
}
