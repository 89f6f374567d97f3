//! Cross-catalog resolution and merge layer for metafuse.
//!
//! Joins the authoritative TMDB catalog with a scraping provider's own
//! identifier space: normalized catalog records are matched against the
//! scraper's search results by fuzzy title similarity and attribute filters,
//! and per-episode records from both sides are spliced into unified shapes.

/// Facade orchestrating search, trending, detail, and passthrough operations.
pub mod aggregator;

/// Unified result shapes.
pub mod models;

/// Raw catalog record normalization.
pub mod normalize;

/// Title-to-scraper-identifier resolution.
pub mod resolve;

/// Season fetching and episode merging.
pub mod seasons;

/// Lexical similarity scoring.
pub mod similarity;

pub use aggregator::MediaAggregator;
