//! HTTP client for the TMDB-style metadata API
//!
//! Thin, already-authenticated transport: the api key and language ride
//! along as default query parameters on every request, a connectivity
//! probe is consulted before anything touches the network, and non-2xx
//! responses surface as errors. Retry and token-refresh policy live
//! outside this crate.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{FeedError, Result};
use crate::network::{AlwaysOnline, ConnectivityProbe};
use crate::query::CompiledQuery;
use crate::types::{ContentType, CountryInfo, GenreResponse, MediaDetail, PageResponse, VideoResponse};

/// Production base URL
const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default response language
const DEFAULT_LANGUAGE: &str = "en-US";

/// Request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the metadata API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL; overridable for tests
    pub base_url: String,
    /// Response language (BCP 47)
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Production configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: TMDB_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Client for the metadata API consumed by the feed engine
pub struct TmdbClient {
    http: reqwest::Client,
    config: ClientConfig,
    probe: Arc<dyn ConnectivityProbe>,
}

impl TmdbClient {
    /// Create a client with default configuration and no reachability
    /// source (always assumed online).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key), Arc::new(AlwaysOnline))
    }

    /// Create a client with custom configuration and connectivity probe
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig, probe: Arc<dyn ConnectivityProbe>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            probe,
        })
    }

    /// GET `path` with the given query parameters and decode the JSON body.
    ///
    /// Fails fast with `FeedError::Offline` when the probe reports no
    /// connectivity, without attempting the request.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        if !self.probe.is_online() {
            return Err(FeedError::Offline);
        }

        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Api {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FeedError::MalformedResponse(e.to_string()))
    }

    /// Fetch one page of a compiled discovery query
    pub async fn discover_page(&self, query: &CompiledQuery, page: u32) -> Result<PageResponse> {
        let mut params = query.params.clone();
        params.push(("page".to_string(), page.to_string()));
        self.get_json(&query.path, &params).await
    }

    /// Fetch the video candidates for one media item
    pub async fn videos(&self, content_type: ContentType, id: u64) -> Result<VideoResponse> {
        if id == 0 {
            return Err(FeedError::InvalidId(id));
        }
        let path = format!("/{}/{}/videos", content_type.path_segment(), id);
        self.get_json(&path, &[]).await
    }

    /// Fetch the genre list for a content type
    pub async fn genres(&self, content_type: ContentType) -> Result<GenreResponse> {
        let path = format!("/genre/{}/list", content_type.path_segment());
        self.get_json(&path, &[]).await
    }

    /// Fetch the country list used for the origin-country filter
    pub async fn countries(&self) -> Result<Vec<CountryInfo>> {
        self.get_json("/configuration/countries", &[]).await
    }

    /// Fetch the full detail record for one media item
    pub async fn media_detail(&self, content_type: ContentType, id: u64) -> Result<MediaDetail> {
        if id == 0 {
            return Err(FeedError::InvalidId(id));
        }
        let path = format!("/{}/{}", content_type.path_segment(), id);
        self.get_json(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::SharedConnectivity;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url, TMDB_BASE_URL);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_client_creation() {
        let client = TmdbClient::new("key");
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_offline_fails_fast_without_request() {
        let probe = SharedConnectivity::new(false);
        // Unroutable base URL: if the request were attempted it would error
        // differently than Offline
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::new("key")
        };
        let client = TmdbClient::with_config(config, Arc::new(probe)).unwrap();

        let result = client.videos(ContentType::Movie, 550).await;
        assert!(matches!(result, Err(FeedError::Offline)));
    }

    #[tokio::test]
    async fn test_videos_rejects_zero_id() {
        let client = TmdbClient::new("key").unwrap();
        let result = client.videos(ContentType::Movie, 0).await;
        assert!(matches!(result, Err(FeedError::InvalidId(0))));
    }

    #[tokio::test]
    async fn test_media_detail_rejects_zero_id() {
        let client = TmdbClient::new("key").unwrap();
        let result = client.media_detail(ContentType::TvShow, 0).await;
        assert!(matches!(result, Err(FeedError::InvalidId(0))));
    }
}
