//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB v3 REST endpoints and deserializes
//! multi search, trending, detail, credits, videos, and season payloads.
//! Every request is routed through the injected response cache first.

mod api;
mod client;
mod rate_limiter;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    TitleKind, TmdbCastMember, TmdbCredits, TmdbCrewMember, TmdbEpisode, TmdbErrorResponse,
    TmdbGenre, TmdbMovieDetails, TmdbMultiResponse, TmdbMultiResult, TmdbTvDetails, TmdbTvSeason,
    TmdbVideo, TmdbVideos, TrendingKind, TrendingPeriod,
};
