//! Error types for the reelfeed engine
//!
//! This module defines all error types used throughout the library.
//! FeedError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for reelfeed operations
#[derive(Error, Debug)]
pub enum FeedError {
    /// Device reported no connectivity; detected before any request was sent
    #[error("No internet connection")]
    Offline,

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status
    #[error("Upstream returned {status} for {path}")]
    Api { status: u16, path: String },

    /// Response body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Every browsable page of the discovery feed has been fetched
    #[error("Discovery feed exhausted - all pages fetched")]
    FeedExhausted,

    /// Invalid media identifier provided
    #[error("Invalid media ID: {0}")]
    InvalidId(u64),
}

/// Serialize FeedError as a string for Tauri compatibility
impl Serialize for FeedError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for reelfeed operations
pub type Result<T> = std::result::Result<T, FeedError>;
