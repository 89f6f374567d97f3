//! `ScraperApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{
    EpisodeServer, EpisodeSources, ScraperMediaInfo, ScraperSearchResponse,
};

/// Capability contract every pluggable scraping provider implements.
///
/// How a provider discovers or authenticates content is its own concern;
/// this layer only consumes search results, episode lists, and playback
/// endpoints. Uses `trait_variant::make` to generate a `Send`-bound async
/// trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(ScraperApi: Send)]
pub trait LocalScraperApi {
    /// Searches the provider's own catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying fetch or parse fails.
    async fn search(&self, query: &str) -> Result<ScraperSearchResponse>;

    /// Fetches media info including the watchable episode list.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying fetch or parse fails.
    async fn fetch_media_info(&self, media_id: &str) -> Result<ScraperMediaInfo>;

    /// Fetches playback sources for one episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying fetch or parse fails.
    async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        media_id: &str,
        server: Option<&str>,
    ) -> Result<EpisodeSources>;

    /// Lists hosting servers offering one episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying fetch or parse fails.
    async fn fetch_episode_servers(
        &self,
        episode_id: &str,
        media_id: &str,
    ) -> Result<Vec<EpisodeServer>>;
}
