//! Per-category pagination state
//!
//! One `CategoryPagination` record exists for every category at all times;
//! the store is a dense map pre-populated at construction and only ever
//! mutated through the transactional operations below, each of which
//! touches exactly one category's slice.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Category, FeedItem};

/// Upstream APIs report page counts far beyond what is practically
/// browsable; the ceiling is capped here
pub const MAX_BROWSABLE_PAGES: u32 = 500;

/// Fetch lifecycle of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Pagination record for a single category tab
///
/// Invariants, maintained by `PaginationStore`:
/// - `fetched_pages ⊆ [1, total_pages]` once `total_pages > 0`
/// - `current_page ∈ fetched_pages` whenever `current_page > 0`
/// - `total_pages == 0` means "not yet known"; `current_page == 0` means
///   "never fetched"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPagination {
    current_page: u32,
    total_pages: u32,
    fetched_pages: BTreeSet<u32>,
    items: Vec<FeedItem>,
    status: FetchStatus,
    last_error: Option<String>,
    generation: u64,
}

impl CategoryPagination {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn fetched_pages(&self) -> &BTreeSet<u32> {
        &self.fetched_pages
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Bumped on every reset; completions carrying an older generation
    /// are stale and must be discarded
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once every browsable page has been fetched
    pub fn is_exhausted(&self) -> bool {
        self.total_pages > 0 && self.fetched_pages.len() >= self.total_pages as usize
    }
}

/// Dense map of category -> pagination record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationStore {
    slices: [CategoryPagination; Category::ALL.len()],
}

const fn slot(category: Category) -> usize {
    match category {
        Category::Discover => 0,
        Category::Popular => 1,
        Category::TopRated => 2,
        Category::Upcoming => 3,
    }
}

impl PaginationStore {
    /// Create a store with an empty record for every category
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to one category's record
    pub fn slice(&self, category: Category) -> &CategoryPagination {
        &self.slices[slot(category)]
    }

    /// Mark a fetch as started: status -> Loading, error cleared.
    ///
    /// Single-flight is the orchestrator's responsibility; callers must
    /// not invoke this while the category is already Loading.
    pub fn begin_fetch(&mut self, category: Category) {
        let slice = &mut self.slices[slot(category)];
        slice.status = FetchStatus::Loading;
        slice.last_error = None;
    }

    /// Seed the total-page ceiling, capped at `MAX_BROWSABLE_PAGES`.
    ///
    /// Only the first call for a category takes effect; the ceiling must
    /// not shrink or grow mid-session from a re-fetch of page 1.
    pub fn record_total_pages(&mut self, category: Category, total: u32) {
        let slice = &mut self.slices[slot(category)];
        if slice.total_pages == 0 {
            slice.total_pages = total.min(MAX_BROWSABLE_PAGES);
        }
    }

    /// Record that a page was fetched; idempotent on the page set
    pub fn record_fetched_page(&mut self, category: Category, page: u32) {
        let slice = &mut self.slices[slot(category)];
        slice.fetched_pages.insert(page);
        slice.current_page = page;
    }

    /// Append a completed page's items: status -> Success.
    ///
    /// Must only be called while the category is Loading; the orchestrator
    /// enforces this via its generation check before completing.
    pub fn append_items(&mut self, category: Category, items: Vec<FeedItem>) {
        let slice = &mut self.slices[slot(category)];
        debug_assert_eq!(slice.status, FetchStatus::Loading);
        slice.items.extend(items);
        slice.status = FetchStatus::Success;
    }

    /// Record a failed fetch: status -> Error, partial progress kept
    pub fn fail(&mut self, category: Category, message: impl Into<String>) {
        let slice = &mut self.slices[slot(category)];
        slice.status = FetchStatus::Error;
        slice.last_error = Some(message.into());
    }

    /// Restore one category to its initial empty state.
    ///
    /// The generation counter survives (and advances), so completions from
    /// fetches started before the reset can be recognized as stale.
    pub fn reset(&mut self, category: Category) {
        let slice = &mut self.slices[slot(category)];
        *slice = CategoryPagination {
            generation: slice.generation + 1,
            ..CategoryPagination::default()
        };
    }

    /// Reset every category (filter changes invalidate them all)
    pub fn reset_all(&mut self) {
        for category in Category::ALL {
            self.reset(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaItem;

    fn item(id: u64) -> FeedItem {
        FeedItem::without_trailer(MediaItem {
            id,
            title: None,
            name: None,
            overview: None,
            vote_average: None,
            vote_count: None,
            popularity: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            first_air_date: None,
            genre_ids: None,
            origin_country: None,
        })
    }

    #[test]
    fn test_store_prepopulates_every_category() {
        let store = PaginationStore::new();
        for category in Category::ALL {
            let slice = store.slice(category);
            assert_eq!(slice.status(), FetchStatus::Idle);
            assert_eq!(slice.current_page(), 0);
            assert_eq!(slice.total_pages(), 0);
            assert!(slice.items().is_empty());
        }
    }

    #[test]
    fn test_begin_fetch_clears_error() {
        let mut store = PaginationStore::new();
        store.begin_fetch(Category::Popular);
        store.fail(Category::Popular, "timeout");
        assert_eq!(store.slice(Category::Popular).last_error(), Some("timeout"));

        store.begin_fetch(Category::Popular);
        let slice = store.slice(Category::Popular);
        assert_eq!(slice.status(), FetchStatus::Loading);
        assert!(slice.last_error().is_none());
    }

    #[test]
    fn test_total_pages_capped_and_first_write_wins() {
        let mut store = PaginationStore::new();
        store.record_total_pages(Category::Discover, 800);
        assert_eq!(store.slice(Category::Discover).total_pages(), 500);

        // A later re-fetch of page 1 must not move the ceiling
        store.record_total_pages(Category::Discover, 50);
        assert_eq!(store.slice(Category::Discover).total_pages(), 500);
    }

    #[test]
    fn test_total_pages_below_cap_kept_verbatim() {
        let mut store = PaginationStore::new();
        store.record_total_pages(Category::Upcoming, 12);
        assert_eq!(store.slice(Category::Upcoming).total_pages(), 12);
    }

    #[test]
    fn test_record_fetched_page_idempotent() {
        let mut store = PaginationStore::new();
        store.record_fetched_page(Category::Discover, 7);
        store.record_fetched_page(Category::Discover, 3);
        store.record_fetched_page(Category::Discover, 7);

        let slice = store.slice(Category::Discover);
        assert_eq!(slice.fetched_pages().len(), 2);
        assert_eq!(slice.current_page(), 7);
        assert!(slice.fetched_pages().contains(&7));
    }

    #[test]
    fn test_append_items_accumulates() {
        let mut store = PaginationStore::new();
        store.begin_fetch(Category::Popular);
        store.append_items(Category::Popular, vec![item(1), item(2)]);
        store.begin_fetch(Category::Popular);
        store.append_items(Category::Popular, vec![item(3)]);

        let slice = store.slice(Category::Popular);
        assert_eq!(slice.items().len(), 3);
        assert_eq!(slice.status(), FetchStatus::Success);
    }

    #[test]
    fn test_fail_preserves_partial_progress() {
        let mut store = PaginationStore::new();
        store.begin_fetch(Category::TopRated);
        store.record_fetched_page(Category::TopRated, 1);
        store.append_items(Category::TopRated, vec![item(1)]);

        store.begin_fetch(Category::TopRated);
        store.fail(Category::TopRated, "upstream 503");

        let slice = store.slice(Category::TopRated);
        assert_eq!(slice.status(), FetchStatus::Error);
        assert_eq!(slice.last_error(), Some("upstream 503"));
        assert_eq!(slice.items().len(), 1);
        assert_eq!(slice.fetched_pages().len(), 1);
    }

    #[test]
    fn test_reset_restores_initial_state_and_bumps_generation() {
        let mut store = PaginationStore::new();
        store.begin_fetch(Category::Discover);
        store.record_total_pages(Category::Discover, 40);
        store.record_fetched_page(Category::Discover, 5);
        store.append_items(Category::Discover, vec![item(1)]);
        let before = store.slice(Category::Discover).generation();

        store.reset(Category::Discover);

        let slice = store.slice(Category::Discover);
        assert_eq!(slice.status(), FetchStatus::Idle);
        assert_eq!(slice.total_pages(), 0);
        assert_eq!(slice.current_page(), 0);
        assert!(slice.items().is_empty());
        assert!(slice.fetched_pages().is_empty());
        assert_eq!(slice.generation(), before + 1);
    }

    #[test]
    fn test_reset_all_touches_every_category() {
        let mut store = PaginationStore::new();
        for category in Category::ALL {
            store.begin_fetch(category);
            store.record_fetched_page(category, 1);
            store.append_items(category, vec![item(9)]);
        }

        store.reset_all();

        for category in Category::ALL {
            assert!(store.slice(category).items().is_empty());
            assert_eq!(store.slice(category).generation(), 1);
        }
    }

    #[test]
    fn test_is_exhausted() {
        let mut store = PaginationStore::new();
        // Unknown ceiling is never exhausted
        assert!(!store.slice(Category::Discover).is_exhausted());

        store.record_total_pages(Category::Discover, 2);
        store.record_fetched_page(Category::Discover, 1);
        assert!(!store.slice(Category::Discover).is_exhausted());

        store.record_fetched_page(Category::Discover, 2);
        assert!(store.slice(Category::Discover).is_exhausted());
    }
}
