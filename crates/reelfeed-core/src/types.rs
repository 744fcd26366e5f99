//! Data types for the reelfeed engine
//!
//! Wire types mirror the upstream TMDB-style API: every field except the
//! identifier may be absent, so everything else is optional with serde
//! defaults. All types implement Serialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// Kind of content the feed is browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContentType {
    /// Feature films
    #[default]
    Movie,
    /// TV shows
    TvShow,
}

impl ContentType {
    /// Upstream path segment for this content type
    pub fn path_segment(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::TvShow => "tv",
        }
    }
}

/// Feed tab with independent pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Randomized, non-sequential feed
    Discover,
    /// Ranked by current popularity
    Popular,
    /// Ranked by rating
    TopRated,
    /// Not yet released, soonest first
    Upcoming,
}

impl Category {
    /// Every category, in tab order
    pub const ALL: [Category; 4] = [
        Category::Discover,
        Category::Popular,
        Category::TopRated,
        Category::Upcoming,
    ];
}

/// One result from a discovery page
///
/// Field names follow the upstream wire format; movies carry
/// `title`/`release_date`, TV shows carry `name`/`first_air_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Upstream identifier; the only field guaranteed present
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub origin_country: Option<Vec<String>>,
}

impl MediaItem {
    /// Display title regardless of content type
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

/// A media item after trailer enrichment
///
/// `trailer_key` is absent when no suitable trailer was found or the
/// lookup failed; the item itself is still shown in the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub media: MediaItem,
    #[serde(default)]
    pub trailer_key: Option<String>,
}

impl FeedItem {
    /// Wrap a bare media item with no trailer attached
    pub fn without_trailer(media: MediaItem) -> Self {
        Self {
            media,
            trailer_key: None,
        }
    }

    /// Wrap a media item with its selected trailer
    pub fn with_trailer(media: MediaItem, trailer_key: String) -> Self {
        Self {
            media,
            trailer_key: Some(trailer_key),
        }
    }
}

/// One page of discovery results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<MediaItem>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

/// One candidate from a media's video list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoCandidate {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub official: Option<bool>,
}

/// Video list response for a single media item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub results: Vec<VideoCandidate>,
}

/// Genre entry from the upstream genre list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Genre list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Country entry from the upstream configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Full detail record for a single movie or show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDetail {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub origin_country: Vec<String>,
}

/// Detail screen payload: the record plus its YouTube-hosted videos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailWithVideos {
    pub detail: MediaDetail,
    pub videos: Vec<VideoCandidate>,
}
