//! Trailer enrichment
//!
//! Fan-out/fan-in join: every item of a fetched page issues its video
//! lookup concurrently and the page is ready once all lookups settle.
//! A failed lookup degrades that one item (no trailer key) and never
//! fails the page.

use futures::future::join_all;
use tracing::warn;

use crate::client::TmdbClient;
use crate::types::{ContentType, FeedItem, MediaItem, VideoCandidate};

/// Hosting site accepted for playable trailers; exact, case-sensitive
const HOSTING_SITE: &str = "YouTube";

/// Video type required by the strict policy
const TRAILER_TYPE: &str = "Trailer";

/// How strictly a video candidate must match to count as a trailer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailerPolicy {
    /// Hosted on YouTube and typed "Trailer"
    TrailerOnly,
    /// Any YouTube-hosted video
    AnyVideo,
}

/// First candidate satisfying the policy, in upstream order
pub fn select_trailer(
    candidates: &[VideoCandidate],
    policy: TrailerPolicy,
) -> Option<&VideoCandidate> {
    candidates.iter().find(|video| {
        let hosted = video.site.as_deref() == Some(HOSTING_SITE);
        match policy {
            TrailerPolicy::TrailerOnly => hosted && video.kind.as_deref() == Some(TRAILER_TYPE),
            TrailerPolicy::AnyVideo => hosted,
        }
    })
}

/// All candidates hosted on the accepted site, in upstream order
pub fn hosted_videos(candidates: Vec<VideoCandidate>) -> Vec<VideoCandidate> {
    candidates
        .into_iter()
        .filter(|video| video.site.as_deref() == Some(HOSTING_SITE))
        .collect()
}

/// Attach a trailer key to each item of a page.
///
/// All lookups are issued together; the returned order matches the input
/// order. Items whose lookup fails or finds no acceptable candidate are
/// passed through without a trailer key.
pub async fn attach_trailers(
    client: &TmdbClient,
    content_type: ContentType,
    items: Vec<MediaItem>,
    policy: TrailerPolicy,
) -> Vec<FeedItem> {
    let lookups = items.into_iter().map(|media| async move {
        match client.videos(content_type, media.id).await {
            Ok(response) => {
                let key = select_trailer(&response.results, policy)
                    .and_then(|video| video.key.clone());
                match key {
                    Some(key) => FeedItem::with_trailer(media, key),
                    None => FeedItem::without_trailer(media),
                }
            }
            Err(error) => {
                warn!(id = media.id, %error, "trailer lookup failed, item kept without trailer");
                FeedItem::without_trailer(media)
            }
        }
    });

    join_all(lookups).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(site: &str, kind: &str, key: &str) -> VideoCandidate {
        VideoCandidate {
            key: Some(key.to_string()),
            site: Some(site.to_string()),
            kind: Some(kind.to_string()),
            official: None,
        }
    }

    #[test]
    fn test_trailer_only_requires_site_and_type() {
        let candidates = vec![
            candidate("YouTube", "Featurette", "feat1"),
            candidate("Vimeo", "Trailer", "vim1"),
            candidate("YouTube", "Trailer", "tr1"),
        ];
        let selected = select_trailer(&candidates, TrailerPolicy::TrailerOnly).unwrap();
        assert_eq!(selected.key.as_deref(), Some("tr1"));
    }

    #[test]
    fn test_any_video_relaxes_type() {
        let candidates = vec![
            candidate("Vimeo", "Trailer", "vim1"),
            candidate("YouTube", "Featurette", "feat1"),
        ];
        let selected = select_trailer(&candidates, TrailerPolicy::AnyVideo).unwrap();
        assert_eq!(selected.key.as_deref(), Some("feat1"));
    }

    #[test]
    fn test_site_match_is_case_sensitive() {
        let candidates = vec![candidate("youtube", "Trailer", "low1")];
        assert!(select_trailer(&candidates, TrailerPolicy::AnyVideo).is_none());
    }

    #[test]
    fn test_no_acceptable_candidate() {
        let candidates = vec![candidate("Vimeo", "Trailer", "vim1")];
        assert!(select_trailer(&candidates, TrailerPolicy::TrailerOnly).is_none());
        assert!(select_trailer(&[], TrailerPolicy::AnyVideo).is_none());
    }

    #[test]
    fn test_hosted_videos_keeps_order() {
        let candidates = vec![
            candidate("YouTube", "Teaser", "a"),
            candidate("Vimeo", "Trailer", "b"),
            candidate("YouTube", "Trailer", "c"),
        ];
        let hosted = hosted_videos(candidates);
        let keys: Vec<_> = hosted.iter().filter_map(|v| v.key.as_deref()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
