//! Next-page selection
//!
//! Ranked categories page sequentially because their order is meaningful.
//! The Discover tab instead draws a page uniformly at random from the
//! not-yet-fetched range, so the feed feels non-repetitive across sessions.

use rand::Rng;

use crate::error::{FeedError, Result};
use crate::store::CategoryPagination;
use crate::types::Category;

/// Pick the next page to fetch for `category`.
///
/// For `Category::Discover` the draw rejects pages already in
/// `fetched_pages`. When every page in `[1, total_pages]` has been fetched
/// (or the ceiling is 0, an empty feed) there is nothing left to draw and
/// `FeedError::FeedExhausted` is returned; rejection sampling alone would
/// never terminate in that case.
///
/// The caller is responsible for having seeded `total_pages` before
/// sampling and for recording the returned page once fetched.
pub fn pick_next_page(
    category: Category,
    state: &CategoryPagination,
    rng: &mut impl Rng,
) -> Result<u32> {
    if category != Category::Discover {
        return Ok(state.current_page() + 1);
    }

    let total = state.total_pages();
    if total == 0 || state.is_exhausted() {
        return Err(FeedError::FeedExhausted);
    }

    loop {
        let candidate = rng.random_range(1..=total);
        if !state.fetched_pages().contains(&candidate) {
            return Ok(candidate);
        }
    }
}
