use schema::{EntityKind, LearnMethod};
use std::fmt;

/// Errors from fuzzy name resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No candidate in the index cleared the acceptance threshold.
    /// Recovered at the call site by prompting the user; never fatal.
    NotFound { kind: EntityKind, query: String },
}

/// Errors from pagination navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// Navigation targeted a learn method with zero entries. The cursor is
    /// left unchanged.
    EmptyBucket(LearnMethod),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound { kind, query } => {
                write!(f, "no {} matches \"{}\"", kind.label(), query)
            }
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::EmptyBucket(method) => {
                write!(f, "no entries under {}", method.label())
            }
        }
    }
}

impl std::error::Error for ResolveError {}
impl std::error::Error for PageError {}

/// Type alias for Results using ResolveError
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Type alias for Results using PageError
pub type PageResult<T> = Result<T, PageError>;
