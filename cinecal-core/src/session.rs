//! Session state container.
//!
//! One `Session` owns all mutable UI state: the selection store, the
//! sort key, and the fetch sequence counter. Fetches are tagged with a
//! monotonically increasing token so a superseded fetch that resolves
//! late can never overwrite newer state.

use crate::movie::{Movie, MovieId};
use crate::selection::SelectionStore;
use crate::sort::{SortColumn, SortKey, sorted_view};

/// Token identifying one fetch. Only the most recently issued token can
/// install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Default)]
pub struct Session {
    store: SelectionStore,
    sort_key: SortKey,
    fetch_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch: the previous list and selection are discarded
    /// immediately, and any fetch still in flight is superseded.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.fetch_seq += 1;
        self.store.clear();
        FetchToken(self.fetch_seq)
    }

    /// Install a fetch result. Returns false (and changes nothing) if a
    /// newer fetch has been started since `token` was issued.
    pub fn complete_fetch(&mut self, token: FetchToken, movies: Vec<Movie>) -> bool {
        if token.0 != self.fetch_seq {
            return false;
        }
        self.store.replace(movies);
        true
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Re-sort by `column`, flipping direction when it is already the
    /// active column. The sort key survives list replacement.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort_key.toggle(column);
    }

    /// The current movie list ordered by the session's sort key.
    pub fn sorted_view(&self) -> Vec<&Movie> {
        sorted_view(self.store.movies(), self.sort_key)
    }

    pub fn is_selected(&self, id: MovieId) -> bool {
        self.store.is_selected(id)
    }
}
