use serde::{Deserialize, Serialize};
use std::fmt;

/// A game version-group identifier, e.g. "red-blue" or "sword-shield".
///
/// The upstream vocabulary is open-ended (new games ship), so this stays a
/// string newtype rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionGroup(pub String);

impl VersionGroup {
    pub fn new(name: impl Into<String>) -> Self {
        VersionGroup(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VersionGroup {
    fn from(name: &str) -> Self {
        VersionGroup(name.to_string())
    }
}

/// One raw "how can this be learned" observation, exactly as the fetch/cache
/// layer hands it over.
///
/// `method` is kept as the raw upstream string here; the lookup core coerces
/// it to a [`crate::LearnMethod`] during normalization. `level` is only
/// meaningful for level-up records and may be absent (or present and stale)
/// on anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnRecord {
    pub subject_name: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    pub version: VersionGroup,
}

impl LearnRecord {
    pub fn new(
        subject_name: impl Into<String>,
        method: impl Into<String>,
        level: Option<u8>,
        version: impl Into<String>,
    ) -> Self {
        LearnRecord {
            subject_name: subject_name.into(),
            method: method.into(),
            level,
            version: VersionGroup::new(version),
        }
    }
}
