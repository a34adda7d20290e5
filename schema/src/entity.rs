use serde::{Deserialize, Serialize};

/// The kinds of entities a user can look up by name.
///
/// Each kind gets its own search index; the indexes share one resolver
/// implementation.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Species,
    Move,
    Item,
    Ability,
}

impl EntityKind {
    /// Human-readable label for prompts ("No move found...", etc.)
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Species => "Pokémon",
            EntityKind::Move => "move",
            EntityKind::Item => "item",
            EntityKind::Ability => "ability",
        }
    }
}
