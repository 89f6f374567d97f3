//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{
    TitleKind, TmdbCredits, TmdbMovieDetails, TmdbMultiResponse, TmdbTvDetails, TmdbTvSeason,
    TmdbVideos, TrendingKind, TrendingPeriod,
};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Searches movies, series, and people in one call (`search/multi`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_multi(&self, query: &str, page: u32) -> Result<TmdbMultiResponse>;

    /// Fetches trending entries for the given kind and time window.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending(
        &self,
        kind: TrendingKind,
        period: TrendingPeriod,
        page: u32,
    ) -> Result<TmdbMultiResponse>;

    /// Fetches movie details.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails>;

    /// Fetches TV series details including season counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64) -> Result<TmdbTvDetails>;

    /// Fetches cast and crew credits for a movie or series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn credits(&self, kind: TitleKind, id: u64) -> Result<TmdbCredits>;

    /// Fetches video entries (trailers, teasers) for a movie or series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn videos(&self, kind: TitleKind, id: u64) -> Result<TmdbVideos>;

    /// Fetches TV season details including the episode list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_season(&self, series_id: u64, season_number: u32) -> Result<TmdbTvSeason>;
}
