//! Two-axis pagination over [`GroupedMoves`].
//!
//! A [`PageCursor`] walks `(method, page)` coordinates: forward/backward one
//! page at a time, crossing into the next or previous non-empty method
//! bucket at the edges, clamped (never wrapping) at both ends. Each user
//! interaction session owns its own cursor; the grouped data is immutable
//! and shared. Every transition is a pure state transform with no I/O, so
//! the calling layer can replay button presses in any order it receives
//! them.

use schema::LearnMethod;
use serde::{Deserialize, Serialize};

use crate::errors::{PageError, PageResult};
use crate::learnset::{GroupedEntry, GroupedMoves};

/// Default number of entries per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state for one interaction session.
///
/// The initial state is `(method_index: 0, page: 0)` even when the level-up
/// bucket is empty; the first `next_page` skips ahead to the first
/// non-empty bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    method_index: usize,
    page: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        PageCursor::new()
    }
}

/// One renderable page: the entry slice at the cursor's coordinates plus
/// the metadata a paged-message renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    pub method: LearnMethod,
    pub method_index: usize,
    pub page: usize,
    pub total_pages: usize,
    pub label: &'static str,
    pub entries: &'a [GroupedEntry],
}

impl PageCursor {
    pub fn new() -> Self {
        PageCursor::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// A cursor with a custom page size (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        PageCursor {
            method_index: 0,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn method_index(&self) -> usize {
        self.method_index
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The learn method at the cursor's current coordinate.
    pub fn method(&self) -> LearnMethod {
        LearnMethod::ALL[self.method_index]
    }

    /// Advance one page, crossing into the next non-empty method bucket
    /// when the current one is exhausted. Returns whether the state
    /// changed; at the very end the call is a clamped no-op.
    pub fn next_page(&mut self, moves: &GroupedMoves) -> bool {
        if self.page + 1 < self.pages_in(moves, self.method_index) {
            self.page += 1;
            return true;
        }
        for index in self.method_index + 1..LearnMethod::ALL.len() {
            if self.pages_in(moves, index) > 0 {
                self.method_index = index;
                self.page = 0;
                return true;
            }
        }
        false
    }

    /// Step back one page, landing on the previous non-empty method's last
    /// page at a bucket boundary. Clamped at the first non-empty
    /// method/page; never wraps below the start.
    pub fn prev_page(&mut self, moves: &GroupedMoves) -> bool {
        if self.page > 0 {
            self.page -= 1;
            return true;
        }
        for index in (0..self.method_index).rev() {
            let pages = self.pages_in(moves, index);
            if pages > 0 {
                self.method_index = index;
                self.page = pages - 1;
                return true;
            }
        }
        false
    }

    /// Jump straight to the first page of a method's bucket.
    ///
    /// Reports [`PageError::EmptyBucket`] and leaves the cursor unchanged
    /// when that bucket has no entries.
    pub fn jump_to_method(&mut self, moves: &GroupedMoves, method: LearnMethod) -> PageResult<()> {
        if moves.bucket(method).is_empty() {
            return Err(PageError::EmptyBucket(method));
        }
        self.method_index = method.priority();
        self.page = 0;
        Ok(())
    }

    /// The page at the cursor's current coordinates.
    ///
    /// An empty bucket yields an empty slice with `total_pages` 0 rather
    /// than failing, so the renderer can always draw something.
    pub fn current_page<'a>(&self, moves: &'a GroupedMoves) -> PageView<'a> {
        let method = self.method();
        let bucket = moves.bucket(method);
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(bucket.len());
        let entries = if start < bucket.len() {
            &bucket[start..end]
        } else {
            &[]
        };
        PageView {
            method,
            method_index: self.method_index,
            page: self.page,
            total_pages: self.pages_in(moves, self.method_index),
            label: method.label(),
            entries,
        }
    }

    /// Page count for the bucket at `index` under this cursor's page size.
    fn pages_in(&self, moves: &GroupedMoves, index: usize) -> usize {
        moves
            .bucket_at(index)
            .map(|bucket| bucket.len().div_ceil(self.page_size))
            .unwrap_or(0)
    }
}
