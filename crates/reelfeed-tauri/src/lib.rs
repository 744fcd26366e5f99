//! Reelfeed Tauri Integration
//!
//! This crate provides Tauri commands for driving the reelfeed engine
//! from a Tauri 2.0 application.
//!
//! # Usage
//!
//! ```rust,ignore
//! use reelfeed_tauri::FeedHost;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(FeedHost::new(std::env::var("TMDB_API_KEY")?)?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             reelfeed_tauri::commands::load_more,
//!             reelfeed_tauri::commands::refresh_feed,
//!             reelfeed_tauri::commands::set_active_category,
//!             reelfeed_tauri::commands::update_filters,
//!             reelfeed_tauri::commands::feed_snapshot,
//!             reelfeed_tauri::commands::get_media_detail,
//!             reelfeed_tauri::commands::list_genres,
//!             reelfeed_tauri::commands::list_countries,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `load_more` - Fetch the next page for a category
//! - `refresh_feed` - Reset a category and fetch anew
//! - `set_active_category` - Switch tabs, fetching if the tab is empty
//! - `update_filters` - Apply a filter mutation and refetch
//! - `feed_snapshot` - Read the full feed state for rendering
//! - `get_media_detail` - Detail record plus hosted videos
//! - `list_genres` / `list_countries` - Filter sheet options

pub mod commands;

use std::sync::Arc;

use reelfeed_core::{FeedController, SharedConnectivity, TmdbClient};

/// Managed state wrapping the feed controller.
///
/// The controller is internally synchronized, so commands share it
/// without an outer lock; concurrent invocations for different
/// categories proceed independently.
pub struct FeedHost {
    controller: Arc<FeedController>,
    connectivity: SharedConnectivity,
}

impl FeedHost {
    /// Create a host with the given API key.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        let connectivity = SharedConnectivity::new(true);
        let client = TmdbClient::with_config(
            reelfeed_core::ClientConfig::new(api_key),
            Arc::new(connectivity.clone()),
        )
        .map_err(|e| e.to_string())?;

        Ok(Self {
            controller: Arc::new(FeedController::new(client)),
            connectivity,
        })
    }

    /// Get a reference to the feed controller.
    pub fn controller(&self) -> &Arc<FeedController> {
        &self.controller
    }

    /// Update the connectivity flag from the host's reachability events.
    pub fn set_online(&self, online: bool) {
        self.connectivity.set_online(online);
    }
}
