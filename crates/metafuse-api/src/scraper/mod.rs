//! Scraping provider capability interface.
//!
//! A scraping provider exposes watchable-content identifiers and playback
//! endpoints with its own independent search catalog. Any concrete scraper
//! implementing [`LocalScraperApi`] can be injected into the aggregation
//! layer; none ship with this crate.

mod api;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalScraperApi, ScraperApi};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    EpisodeServer, EpisodeSources, ScraperEpisode, ScraperMediaInfo, ScraperMediaType,
    ScraperSearchResponse, ScraperSearchResult, Subtitle, VideoSource,
};
