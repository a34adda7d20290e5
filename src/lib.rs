// In: src/lib.rs

//! Pokedex Lookup Core
//!
//! The name-resolution and learnset grouping/pagination core of a Pokémon
//! reference chat bot. Command dispatch, embed rendering, the document
//! store and the REST fetch/cache layer are collaborators; this crate is
//! the pure, synchronous middle they compose: fuzzy lookup of free-text
//! entity names, normalization of raw learn records into method-keyed
//! groups, and a deterministic page cursor over the grouped output.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod errors;
pub mod learnset;
pub mod pagination;
pub mod resolver;


// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokedex-core` crate,
// making it easy for callers to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared wire-facing data definitions.
pub use schema::{EntityKind, LearnMethod, LearnRecord, VersionGroup};

// --- From this crate's modules (`src/`) ---

// Fuzzy name resolution.
pub use resolver::{MatchResult, NameIndex, ScoredMatch, SearchEntry, DEFAULT_THRESHOLD};

// Learn-record normalization and grouping.
pub use learnset::{group, normalize, GroupedEntry, GroupedMoves, MoveMethod, NormalizedSubject};

// Pagination over grouped output.
pub use pagination::{PageCursor, PageView, DEFAULT_PAGE_SIZE};

// Crate-specific error and result types.
pub use errors::{PageError, PageResult, ResolveError, ResolveResult};
