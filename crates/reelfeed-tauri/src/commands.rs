//! Tauri commands for the reelfeed engine
//!
//! This module contains all Tauri commands that can be invoked from the
//! frontend. Errors cross the boundary as display strings.

use tauri::State;

use crate::FeedHost;
use reelfeed_core::{
    Category, CategoryPagination, CountryInfo, DetailWithVideos, FeedSnapshot, FilterUpdate, Genre,
};

/// Fetch the next page for a category.
///
/// No-op while a fetch for the category is already in flight.
///
/// # Arguments
/// * `category` - Feed tab to load
///
/// # Returns
/// * `Ok(())` once the page is appended (or the call was a no-op)
/// * `Err(String)` with error message if the fetch fails
#[tauri::command]
pub async fn load_more(state: State<'_, FeedHost>, category: Category) -> Result<(), String> {
    state
        .controller()
        .load_more(category)
        .await
        .map_err(|e| e.to_string())
}

/// Reset a category and fetch a fresh first batch.
///
/// # Arguments
/// * `category` - Feed tab to refresh
#[tauri::command]
pub async fn refresh_feed(state: State<'_, FeedHost>, category: Category) -> Result<(), String> {
    state
        .controller()
        .refresh(category)
        .await
        .map_err(|e| e.to_string())
}

/// Switch the active tab, fetching its first page when it has no items.
///
/// # Arguments
/// * `category` - Feed tab to activate
#[tauri::command]
pub async fn set_active_category(
    state: State<'_, FeedHost>,
    category: Category,
) -> Result<(), String> {
    state
        .controller()
        .set_active_category(category)
        .await
        .map_err(|e| e.to_string())
}

/// Apply one filter mutation; every category's pagination is invalidated
/// and the active tab refetched.
///
/// # Arguments
/// * `update` - Filter mutation dispatched from the filter sheet
#[tauri::command]
pub async fn update_filters(
    state: State<'_, FeedHost>,
    update: FilterUpdate,
) -> Result<(), String> {
    state
        .controller()
        .apply_filter(update)
        .await
        .map_err(|e| e.to_string())
}

/// Read the full feed state for rendering.
#[tauri::command]
pub async fn feed_snapshot(state: State<'_, FeedHost>) -> Result<FeedSnapshot, String> {
    Ok(state.controller().snapshot().await)
}

/// Read one category's pagination record.
///
/// # Arguments
/// * `category` - Feed tab to read
#[tauri::command]
pub async fn category_feed(
    state: State<'_, FeedHost>,
    category: Category,
) -> Result<CategoryPagination, String> {
    Ok(state.controller().category_state(category).await)
}

/// Get a media item's detail record plus its YouTube-hosted videos.
///
/// # Arguments
/// * `id` - Upstream media identifier
#[tauri::command]
pub async fn get_media_detail(
    state: State<'_, FeedHost>,
    id: u64,
) -> Result<DetailWithVideos, String> {
    state
        .controller()
        .load_detail(id)
        .await
        .map_err(|e| e.to_string())
}

/// List genre options for the current content type.
#[tauri::command]
pub async fn list_genres(state: State<'_, FeedHost>) -> Result<Vec<Genre>, String> {
    state
        .controller()
        .genre_options()
        .await
        .map_err(|e| e.to_string())
}

/// List country options for the origin-country filter.
#[tauri::command]
pub async fn list_countries(state: State<'_, FeedHost>) -> Result<Vec<CountryInfo>, String> {
    state
        .controller()
        .country_options()
        .await
        .map_err(|e| e.to_string())
}
