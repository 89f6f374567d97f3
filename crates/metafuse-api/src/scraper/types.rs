//! Scraping provider wire types.
//!
//! Identifiers live in the scraper's own namespace and are not stable
//! across provider catalog updates.

use serde::{Deserialize, Serialize};

/// Media kind as reported by a scraping provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScraperMediaType {
    /// Feature film.
    Movie,
    /// TV series.
    Series,
}

/// Response from a scraping provider's search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperSearchResponse {
    /// Current page number.
    #[serde(default)]
    pub current_page: u32,
    /// Whether another page follows.
    #[serde(default)]
    pub has_next_page: bool,
    /// Result entries.
    pub results: Vec<ScraperSearchResult>,
}

/// A single scraping provider search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperSearchResult {
    /// Identifier in the provider's own namespace.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Media kind.
    #[serde(rename = "type")]
    pub media_type: ScraperMediaType,
    /// Release date (YYYY-MM-DD), when the provider exposes one.
    pub release_date: Option<String>,
    /// Season count, when the provider exposes one (series only).
    pub seasons: Option<u32>,
}

/// Media info returned by a scraping provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperMediaInfo {
    /// Identifier in the provider's own namespace.
    pub id: String,
    /// Display title.
    pub title: Option<String>,
    /// Watchable episodes across all seasons.
    #[serde(default)]
    pub episodes: Vec<ScraperEpisode>,
}

/// A watchable episode record from a scraping provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperEpisode {
    /// Opaque episode identifier.
    pub id: String,
    /// Episode number within its season.
    pub number: u32,
    /// Season number; absent for movies.
    pub season: Option<u32>,
    /// Playback page URL.
    pub url: Option<String>,
    /// Episode title, when the provider exposes one.
    pub title: Option<String>,
}

/// Playback sources for one episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeSources {
    /// Video sources.
    pub sources: Vec<VideoSource>,
    /// Subtitle tracks.
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
}

/// A single video source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSource {
    /// Stream URL.
    pub url: String,
    /// Quality label (e.g., "1080p", "auto").
    pub quality: Option<String>,
    /// Whether the URL is an HLS playlist.
    #[serde(rename = "isM3U8", default)]
    pub is_m3u8: bool,
}

/// A subtitle track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtitle {
    /// Track URL.
    pub url: String,
    /// Language label.
    pub lang: String,
}

/// A hosting server offering one episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeServer {
    /// Server name.
    pub name: String,
    /// Embed URL on that server.
    pub url: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_media_type_serde_round() {
        // Arrange
        let json = r#"{"id":"tv/watch-breaking-bad-39506","title":"Breaking Bad","type":"series","releaseDate":null,"seasons":5}"#;

        // Act
        let result: ScraperSearchResult = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(result.media_type, ScraperMediaType::Series);
        assert_eq!(result.seasons, Some(5));
    }

    #[test]
    fn test_media_info_defaults_episodes() {
        // Arrange
        let json = r#"{"id":"movie/watch-inception-19752","title":"Inception"}"#;

        // Act
        let info: ScraperMediaInfo = serde_json::from_str(json).unwrap();

        // Assert
        assert!(info.episodes.is_empty());
    }
}
