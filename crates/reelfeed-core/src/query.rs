//! Query compiler: filter + category -> upstream request parameters
//!
//! Pure translation layer with no I/O. Each category carries its own
//! sorting and threshold rules; the user's filter constraints are layered
//! on top, contributing a parameter only when actually set.

use chrono::NaiveDate;

use crate::filter::DiscoverFilter;
use crate::types::{Category, ContentType};

/// Vote-count floor applied to ranked categories when the filter does not
/// override it, keeping statistically insignificant entries out
pub const DEFAULT_VOTE_COUNT_FLOOR: u64 = 500;

// Upstream parameter vocabulary
const SORT_BY: &str = "sort_by";
const POPULARITY: &str = "popularity";
const VOTE_AVERAGE: &str = "vote_average";
const VOTE_COUNT: &str = "vote_count";
const PRIMARY_RELEASE_DATE: &str = "primary_release_date";
const FIRST_AIR_DATE: &str = "first_air_date";
const PRIMARY_RELEASE_YEAR: &str = "primary_release_year";
const FIRST_AIR_DATE_YEAR: &str = "first_air_date_year";
const WITH_GENRES: &str = "with_genres";
const WITH_ORIGIN_COUNTRY: &str = "with_origin_country";

/// `{field}.gte` comparison key
fn gte(field: &str) -> String {
    format!("{field}.gte")
}

/// A compiled upstream request: endpoint path plus query parameters
///
/// The page number is not part of the compiled query; the orchestration
/// layer appends it per fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl CompiledQuery {
    fn new(path: String) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Insert or replace a parameter, keeping one value per key
    fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Look up a parameter value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Compile a request for `category` under `filter`, dating UPCOMING
/// constraints from the current day
pub fn compile(category: Category, filter: &DiscoverFilter) -> CompiledQuery {
    compile_for_date(category, filter, chrono::Utc::now().date_naive())
}

/// Compile a request with an explicit "today" (deterministic for tests)
pub fn compile_for_date(
    category: Category,
    filter: &DiscoverFilter,
    today: NaiveDate,
) -> CompiledQuery {
    let content_type = filter.content_type();
    let mut query = CompiledQuery::new(format!("/discover/{}", content_type.path_segment()));

    let date_field = match content_type {
        ContentType::Movie => PRIMARY_RELEASE_DATE,
        ContentType::TvShow => FIRST_AIR_DATE,
    };

    match category {
        Category::TopRated => {
            query.set(SORT_BY, format!("{VOTE_AVERAGE}.desc"));
            query.set(
                gte(VOTE_COUNT),
                vote_count_floor(filter).to_string(),
            );
        }
        Category::Upcoming => {
            query.set(gte(date_field), today.format("%Y-%m-%d").to_string());
            query.set(
                SORT_BY,
                format!("{date_field}.asc,{POPULARITY}.desc"),
            );
        }
        Category::Popular | Category::Discover => {
            query.set(SORT_BY, format!("{POPULARITY}.desc"));
            query.set(
                gte(VOTE_COUNT),
                vote_count_floor(filter).to_string(),
            );
        }
    }

    if let Some(score) = filter.min_score() {
        query.set(gte(VOTE_AVERAGE), score.to_string());
    }

    if let Some(count) = filter.min_vote_count() {
        query.set(gte(VOTE_COUNT), count.to_string());
    }

    // OR semantics: pipe-joined ids. An empty set contributes no key at all.
    if !filter.genre_ids().is_empty() {
        let joined: Vec<&str> = filter.genre_ids().iter().map(String::as_str).collect();
        query.set(WITH_GENRES, joined.join("|"));
    }

    if let Some(year) = filter.year() {
        let year_field = match content_type {
            ContentType::Movie => PRIMARY_RELEASE_YEAR,
            ContentType::TvShow => FIRST_AIR_DATE_YEAR,
        };
        query.set(year_field, year.to_string());
    }

    if let Some(country) = filter.origin_country() {
        query.set(WITH_ORIGIN_COUNTRY, country);
    }

    query
}

fn vote_count_floor(filter: &DiscoverFilter) -> u64 {
    filter.min_vote_count().unwrap_or(DEFAULT_VOTE_COUNT_FLOOR)
}
