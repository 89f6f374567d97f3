//! Provider interfaces for metafuse.
//!
//! Provides a client for the TMDB catalog API and the capability trait any
//! scraping provider must implement to be pluggable.

/// Scraping provider capability interface.
pub mod scraper;

/// TMDB API client.
pub mod tmdb;
