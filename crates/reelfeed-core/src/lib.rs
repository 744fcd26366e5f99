//! Reelfeed Core Library
//!
//! Client-side engine for an infinite-scroll trailer feed over a
//! TMDB-style metadata API.
//!
//! # Features
//! - Independent pagination per feed category (Discover, Popular,
//!   Top Rated, Upcoming)
//! - Filter model compiled into upstream discovery queries
//! - Randomized never-repeat page sampling for the Discover tab
//! - Concurrent, fault-isolated trailer enrichment for each page
//! - Single-flight fetch discipline with stale-completion discard

pub mod client;
pub mod enrich;
pub mod error;
pub mod feed;
pub mod filter;
pub mod network;
pub mod query;
pub mod sampler;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, TmdbClient};
pub use enrich::TrailerPolicy;
pub use error::{FeedError, Result};
pub use feed::{CategorySlice, FeedController, FeedSnapshot};
pub use filter::{DiscoverFilter, FilterUpdate};
pub use network::{AlwaysOnline, ConnectivityProbe, SharedConnectivity};
pub use store::{CategoryPagination, FetchStatus, PaginationStore, MAX_BROWSABLE_PAGES};
pub use types::{
    Category, ContentType, CountryInfo, DetailWithVideos, FeedItem, Genre, MediaDetail, MediaItem,
    PageResponse, VideoCandidate,
};
