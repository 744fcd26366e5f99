//! Filter model for the discovery feed
//!
//! An immutable-by-convention description of the user's query intent.
//! Every mutating operation bumps a revision counter so dependents (genre
//! lists fetched for the previous content type, compiled queries, cached
//! pages) can detect that their derived data is stale.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::ContentType;

/// User-selected constraints applied to every discovery request
///
/// All operations are total; there are no error conditions. Threshold
/// fields use toggle-to-unset semantics: selecting the currently-active
/// value clears it, selecting a different value replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoverFilter {
    content_type: ContentType,
    min_score: Option<f64>,
    min_vote_count: Option<u64>,
    genre_ids: BTreeSet<String>,
    year: Option<i32>,
    origin_country: Option<String>,
    revision: u64,
}

/// One filter mutation, as dispatched from a UI layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FilterUpdate {
    ContentType(ContentType),
    ToggleGenre(String),
    MinScore(f64),
    MinVoteCount(u64),
    Year(i32),
    OriginCountry(String),
    Clear,
}

/// Set `slot` to `value`, or clear it if `value` is already active
fn toggle_threshold<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

impl DiscoverFilter {
    /// Create the default filter: movies, no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn min_score(&self) -> Option<f64> {
        self.min_score
    }

    pub fn min_vote_count(&self) -> Option<u64> {
        self.min_vote_count
    }

    pub fn genre_ids(&self) -> &BTreeSet<String> {
        &self.genre_ids
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn origin_country(&self) -> Option<&str> {
        self.origin_country.as_deref()
    }

    /// Change counter; bumped by every mutating call
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the content type unconditionally
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
        self.revision += 1;
    }

    /// Symmetric-difference update: add the genre if absent, remove if present
    pub fn toggle_genre(&mut self, genre_id: impl Into<String>) {
        let genre_id = genre_id.into();
        if !self.genre_ids.remove(&genre_id) {
            self.genre_ids.insert(genre_id);
        }
        self.revision += 1;
    }

    pub fn set_min_score(&mut self, score: f64) {
        toggle_threshold(&mut self.min_score, score);
        self.revision += 1;
    }

    pub fn set_min_vote_count(&mut self, count: u64) {
        toggle_threshold(&mut self.min_vote_count, count);
        self.revision += 1;
    }

    pub fn set_year(&mut self, year: i32) {
        toggle_threshold(&mut self.year, year);
        self.revision += 1;
    }

    pub fn set_origin_country(&mut self, country: impl Into<String>) {
        toggle_threshold(&mut self.origin_country, country.into());
        self.revision += 1;
    }

    /// Reset to the default filter (movies, no constraints)
    pub fn clear(&mut self) {
        let revision = self.revision + 1;
        *self = Self::default();
        self.revision = revision;
    }

    /// Apply a single UI-dispatched mutation
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::ContentType(content_type) => self.set_content_type(content_type),
            FilterUpdate::ToggleGenre(id) => self.toggle_genre(id),
            FilterUpdate::MinScore(score) => self.set_min_score(score),
            FilterUpdate::MinVoteCount(count) => self.set_min_vote_count(count),
            FilterUpdate::Year(year) => self.set_year(year),
            FilterUpdate::OriginCountry(country) => self.set_origin_country(country),
            FilterUpdate::Clear => self.clear(),
        }
    }
}

/// Equality over the user-visible selection; the revision counter tracks
/// change history, not filter identity
impl PartialEq for DiscoverFilter {
    fn eq(&self, other: &Self) -> bool {
        self.content_type == other.content_type
            && self.min_score == other.min_score
            && self.min_vote_count == other.min_vote_count
            && self.genre_ids == other.genre_ids
            && self.year == other.year
            && self.origin_country == other.origin_country
    }
}
