//! Fuzzy name resolution over canonical entity names.
//!
//! One [`NameIndex`] is built per entity kind (species, moves, items,
//! abilities) from the canonical name list the fetch/cache layer supplies at
//! startup. The index is immutable after construction, so concurrent lookups
//! from simultaneous user interactions are safe without any locking.
//!
//! Scoring is a bounded dissimilarity in `[0, 1]` (0 = identical) over
//! separator-normalized keys, so "t-bolt", "Thunder Bolt" and "thunder-bolt"
//! all land on the same candidate. Exact matches score 0 and prefix matches
//! score near 0, which guarantees they outrank any partial match.

use ordered_float::NotNan;
use schema::EntityKind;
use serde::Serialize;

use crate::errors::{ResolveError, ResolveResult};

/// Default acceptance threshold: candidates scoring above this are dropped.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Ceiling for prefix-match scores. Any prefix of a candidate scores below
/// this, keeping prefixes ahead of approximate matches in almost all cases.
const PREFIX_SCORE_CEIL: f64 = 0.1;

/// One searchable name: the display form plus its normalized match key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    canonical_name: String,
    search_key: String,
}

impl SearchEntry {
    /// The authoritative display string, as published upstream.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// The case-folded, separator-normalized form used for matching.
    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

/// An accepted candidate with its dissimilarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    entry: &'a SearchEntry,
    score: NotNan<f64>,
}

impl<'a> ScoredMatch<'a> {
    pub fn entry(&self) -> &'a SearchEntry {
        self.entry
    }

    pub fn canonical_name(&self) -> &'a str {
        &self.entry.canonical_name
    }

    /// Dissimilarity in `[0, 1]`; 0 means identical.
    pub fn score(&self) -> f64 {
        self.score.into_inner()
    }
}

/// The outcome of a successful lookup: the winner plus ranked alternates
/// for "did you mean" prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// The accepted candidate with the lowest dissimilarity.
    pub best_match: ScoredMatch<'a>,
    /// Remaining accepted candidates, by non-decreasing dissimilarity.
    /// Ties keep the index's original order. Never contains `best_match`.
    pub other_matches: Vec<ScoredMatch<'a>>,
}

/// An immutable fuzzy-search index over the canonical names of one entity
/// kind.
#[derive(Debug, Clone)]
pub struct NameIndex {
    kind: EntityKind,
    threshold: f64,
    entries: Vec<SearchEntry>,
}

impl NameIndex {
    /// Build an index from a canonical name list. Duplicate names collapse
    /// to their first occurrence, preserving list order.
    pub fn from_names<I, S>(kind: EntityKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<SearchEntry> = Vec::new();
        for name in names {
            let canonical_name = name.into();
            if entries.iter().any(|e| e.canonical_name == canonical_name) {
                continue;
            }
            let search_key = normalize_key(&canonical_name);
            entries.push(SearchEntry {
                canonical_name,
                search_key,
            });
        }
        NameIndex {
            kind,
            threshold: DEFAULT_THRESHOLD,
            entries,
        }
    }

    /// Override the acceptance threshold (dissimilarity above it is
    /// rejected). Values are clamped to `[0, 1]`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Resolve free-text user input against this index.
    ///
    /// Fails with [`ResolveError::NotFound`] when the query is blank or no
    /// candidate clears the acceptance threshold. On success the result
    /// always contains at least the best match.
    pub fn resolve(&self, query: &str) -> ResolveResult<MatchResult<'_>> {
        let query_key = normalize_key(query);
        if query_key.is_empty() {
            return Err(self.not_found(query));
        }

        let mut accepted: Vec<ScoredMatch<'_>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = dissimilarity(&query_key, &entry.search_key);
                // NaN cannot come out of a finite-input comparison, but a
                // dropped candidate beats a panic if that ever changes.
                let score = NotNan::new(score).ok()?;
                (score.into_inner() <= self.threshold).then_some(ScoredMatch { entry, score })
            })
            .collect();

        // Stable sort: equal scores keep original index order.
        accepted.sort_by_key(|candidate| candidate.score);

        let mut ranked = accepted.into_iter();
        let best_match = ranked.next().ok_or_else(|| self.not_found(query))?;
        Ok(MatchResult {
            best_match,
            other_matches: ranked.collect(),
        })
    }

    fn not_found(&self, query: &str) -> ResolveError {
        ResolveError::NotFound {
            kind: self.kind,
            query: query.to_string(),
        }
    }
}

/// Case-fold and collapse `-`, `_` and whitespace runs into single spaces,
/// so "Thunder Punch", "thunder-punch" and "THUNDER_PUNCH" share one key.
fn normalize_key(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bounded dissimilarity between two normalized keys.
///
/// Exact matches are 0. Prefixes score under [`PREFIX_SCORE_CEIL`],
/// proportionally to how much of the candidate is left untyped. Everything
/// else takes the better of normalized Levenshtein and Jaro-Winkler
/// similarity, inverted.
fn dissimilarity(query_key: &str, search_key: &str) -> f64 {
    if query_key == search_key {
        return 0.0;
    }
    if search_key.starts_with(query_key) {
        let query_len = query_key.chars().count() as f64;
        let key_len = search_key.chars().count() as f64;
        return PREFIX_SCORE_CEIL * ((key_len - query_len) / key_len);
    }
    let levenshtein = strsim::normalized_levenshtein(query_key, search_key);
    let jaro_winkler = strsim::jaro_winkler(query_key, search_key);
    1.0 - levenshtein.max(jaro_winkler)
}
