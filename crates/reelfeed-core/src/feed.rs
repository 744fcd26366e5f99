//! Feed orchestration
//!
//! Coordinates the pagination store, query compiler, discovery sampler and
//! trailer enrichment under a single-flight-per-category discipline.
//! Fetches are tagged with the category's generation at start; a reset
//! (refresh or filter change) bumps the generation, so completions of
//! superseded fetches are recognized and silently discarded instead of
//! corrupting freshly reset state.
//!
//! The state lock is never held across a network await: each operation
//! locks briefly to read or apply a transition, and the Loading status
//! itself excludes concurrent fetches for the same category while the
//! lock is released.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::client::TmdbClient;
use crate::enrich::{self, TrailerPolicy};
use crate::error::{FeedError, Result};
use crate::filter::{DiscoverFilter, FilterUpdate};
use crate::query::{self, CompiledQuery};
use crate::sampler;
use crate::store::{CategoryPagination, FetchStatus, PaginationStore};
use crate::types::{Category, CountryInfo, DetailWithVideos, Genre};

/// Everything the UI renders from, behind one lock
#[derive(Debug)]
struct FeedState {
    store: PaginationStore,
    filter: DiscoverFilter,
    active: Category,
}

/// Point-in-time copy of one category's pagination record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: Category,
    pub pagination: CategoryPagination,
}

/// Point-in-time copy of the full feed state, for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub active_category: Category,
    pub filter: DiscoverFilter,
    pub categories: Vec<CategorySlice>,
}

/// Orchestrates fetch, refresh, filter and tab changes over the feed
pub struct FeedController {
    state: Mutex<FeedState>,
    client: TmdbClient,
}

impl FeedController {
    /// Create a controller with empty pagination for every category,
    /// the default filter, and Discover active
    pub fn new(client: TmdbClient) -> Self {
        Self {
            state: Mutex::new(FeedState {
                store: PaginationStore::new(),
                filter: DiscoverFilter::new(),
                active: Category::Discover,
            }),
            client,
        }
    }

    /// Fetch the next page for `category` and append its enriched items.
    ///
    /// Silent no-op when a fetch for the category is already in flight, or
    /// when a sequential category has fetched every page. An exhausted
    /// Discover feed returns `FeedError::FeedExhausted` so the caller can
    /// choose between surfacing "all caught up" and refreshing to allow
    /// revisits; the category stays in its steady Success state.
    ///
    /// Fetch errors are recorded on the category (status Error) and also
    /// returned. Completions that lost a race with a reset do neither.
    pub async fn load_more(&self, category: Category) -> Result<()> {
        let (generation, query) = {
            let mut state = self.state.lock().await;
            let slice = state.store.slice(category);

            if slice.status() == FetchStatus::Loading {
                debug!(?category, "fetch already in flight, ignoring");
                return Ok(());
            }
            if slice.is_exhausted() {
                if category == Category::Discover {
                    return Err(FeedError::FeedExhausted);
                }
                debug!(?category, "every page fetched, nothing to load");
                return Ok(());
            }

            state.store.begin_fetch(category);
            let generation = state.store.slice(category).generation();
            let query = query::compile(category, &state.filter);
            (generation, query)
        };

        match self.run_fetch(category, generation, &query).await {
            Ok(()) => Ok(()),
            Err(error) => {
                let mut state = self.state.lock().await;
                if state.store.slice(category).generation() != generation {
                    debug!(?category, "stale fetch failure discarded");
                    return Ok(());
                }
                state.store.fail(category, error.to_string());
                Err(error)
            }
        }
    }

    /// One fetch cycle: probe the ceiling if unknown, pick a page, fetch,
    /// enrich, append. Every state write re-checks the generation first.
    async fn run_fetch(
        &self,
        category: Category,
        generation: u64,
        query: &CompiledQuery,
    ) -> Result<()> {
        let known_total = {
            let state = self.state.lock().await;
            state.store.slice(category).total_pages()
        };

        // First fetch for this category: an awaited page-1 probe seeds the
        // capped ceiling before any page is sampled.
        if known_total == 0 {
            let probe = self.client.discover_page(query, 1).await?;
            let mut state = self.state.lock().await;
            if state.store.slice(category).generation() != generation {
                debug!(?category, "stale probe discarded");
                return Ok(());
            }
            state
                .store
                .record_total_pages(category, probe.total_pages.unwrap_or(0));

            if state.store.slice(category).total_pages() == 0 {
                // Nothing matches the current filter; an empty Success is
                // the honest steady state.
                state.store.append_items(category, Vec::new());
                return Ok(());
            }
        }

        let (page, content_type) = {
            let state = self.state.lock().await;
            if state.store.slice(category).generation() != generation {
                debug!(?category, "superseded before page selection");
                return Ok(());
            }
            let mut rng = rand::rng();
            let page = sampler::pick_next_page(category, state.store.slice(category), &mut rng)?;
            (page, state.filter.content_type())
        };

        let response = self.client.discover_page(query, page).await?;

        {
            let mut state = self.state.lock().await;
            if state.store.slice(category).generation() != generation {
                debug!(?category, page, "stale page fetch discarded");
                return Ok(());
            }
            state.store.record_fetched_page(category, page);
        }

        let items = enrich::attach_trailers(
            &self.client,
            content_type,
            response.results,
            TrailerPolicy::TrailerOnly,
        )
        .await;

        let mut state = self.state.lock().await;
        if state.store.slice(category).generation() != generation {
            debug!(?category, page, "stale completion discarded");
            return Ok(());
        }
        state.store.append_items(category, items);
        Ok(())
    }

    /// Discard `category`'s items and page history, then fetch anew.
    ///
    /// The reset bumps the generation, so a fetch still in flight for the
    /// old state becomes inert on completion. The total-page ceiling is
    /// rediscovered by the next probe.
    pub async fn refresh(&self, category: Category) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.store.reset(category);
        }
        self.load_more(category).await
    }

    /// Switch the active tab; fetches the first page as a side effect when
    /// the new tab has no items yet
    pub async fn set_active_category(&self, category: Category) -> Result<()> {
        let needs_fetch = {
            let mut state = self.state.lock().await;
            state.active = category;
            state.store.slice(category).items().is_empty()
        };
        if needs_fetch {
            self.load_more(category).await
        } else {
            Ok(())
        }
    }

    /// Apply a filter mutation, invalidate every category's pagination,
    /// and refetch the active tab.
    ///
    /// All categories reset, not just the active one: a page-to-content
    /// mapping fetched under the old filter is meaningless under the new.
    pub async fn apply_filter(&self, update: FilterUpdate) -> Result<()> {
        let active = {
            let mut state = self.state.lock().await;
            state.filter.apply(update);
            state.store.reset_all();
            state.active
        };
        self.load_more(active).await
    }

    /// Fetch a media item's full detail record plus its YouTube-hosted
    /// videos. A failed detail fetch is an error; a failed video lookup
    /// degrades to an empty list.
    pub async fn load_detail(&self, id: u64) -> Result<DetailWithVideos> {
        let content_type = {
            let state = self.state.lock().await;
            state.filter.content_type()
        };

        let detail = self.client.media_detail(content_type, id).await?;
        let videos = match self.client.videos(content_type, id).await {
            Ok(response) => enrich::hosted_videos(response.results),
            Err(error) => {
                warn!(id, %error, "video lookup failed, detail shown without videos");
                Vec::new()
            }
        };

        Ok(DetailWithVideos { detail, videos })
    }

    /// Genre options for the current content type
    pub async fn genre_options(&self) -> Result<Vec<Genre>> {
        let content_type = {
            let state = self.state.lock().await;
            state.filter.content_type()
        };
        Ok(self.client.genres(content_type).await?.genres)
    }

    /// Country options for the origin-country filter
    pub async fn country_options(&self) -> Result<Vec<CountryInfo>> {
        self.client.countries().await
    }

    /// Point-in-time copy of the full feed state
    pub async fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock().await;
        FeedSnapshot {
            active_category: state.active,
            filter: state.filter.clone(),
            categories: Category::ALL
                .into_iter()
                .map(|category| CategorySlice {
                    category,
                    pagination: state.store.slice(category).clone(),
                })
                .collect(),
        }
    }

    /// Point-in-time copy of one category's pagination record
    pub async fn category_state(&self, category: Category) -> CategoryPagination {
        let state = self.state.lock().await;
        state.store.slice(category).clone()
    }

    pub async fn active_category(&self) -> Category {
        self.state.lock().await.active
    }

    pub async fn filter(&self) -> DiscoverFilter {
        self.state.lock().await.filter.clone()
    }
}
