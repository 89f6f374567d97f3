//! TMDB API response types and request enums.

use serde::Deserialize;

// --- Request enums ---

/// Media kind selector for detail, credits, and videos endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    /// Feature film endpoints (`movie/{id}`).
    Movie,
    /// TV series endpoints (`tv/{id}`).
    Tv,
}

impl TitleKind {
    /// Path segment used by the TMDB REST layout.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

/// Media kind selector for the trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingKind {
    /// Every media kind mixed.
    All,
    /// Movies only.
    Movie,
    /// TV series only.
    Series,
    /// People only.
    Person,
}

impl TrendingKind {
    /// Path segment used by `trending/{kind}/{period}`.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Movie => "movie",
            Self::Series => "tv",
            Self::Person => "person",
        }
    }
}

/// Time window for the trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingPeriod {
    /// Trending today.
    Day,
    /// Trending this week.
    Week,
}

impl TrendingPeriod {
    /// Path segment used by `trending/{kind}/{period}`.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

// --- Multi search / trending ---

/// Response from `search/multi` and `trending/{kind}/{period}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMultiResponse {
    /// Current page number.
    pub page: u32,
    /// Result entries; movies, series, and people mixed.
    pub results: Vec<TmdbMultiResult>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// A single multi search / trending entry.
///
/// The `media_type` discriminant decides which of the optional field groups
/// is populated; movies carry `title`/`release_date`, series carry
/// `name`/`first_air_date`, people carry `name`/`profile_path`/`known_for`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMultiResult {
    /// TMDB record ID.
    pub id: u64,
    /// Discriminant: `movie`, `tv`, or `person`.
    #[serde(default)]
    pub media_type: String,
    /// Movie title.
    pub title: Option<String>,
    /// Series or person name.
    pub name: Option<String>,
    /// Poster image path (movies, series).
    pub poster_path: Option<String>,
    /// Profile image path (people).
    pub profile_path: Option<String>,
    /// Movie release date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Series first air date (YYYY-MM-DD).
    pub first_air_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Vote average; absent for people.
    #[serde(default)]
    pub vote_average: f64,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Titles a person is known for; absent for movies and series.
    #[serde(default)]
    pub known_for: Vec<TmdbMultiResult>,
}

// --- Movie details ---

/// Response from `movie/{movie_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

// --- TV details ---

/// Response from `tv/{series_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Total number of episodes.
    pub number_of_episodes: u32,
    /// Total number of seasons.
    pub number_of_seasons: u32,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// --- Credits ---

/// Response from `{movie|tv}/{id}/credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredits {
    /// Cast entries, ordered by billing.
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    /// Crew entries.
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

/// A cast entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    /// Actor name.
    pub name: String,
    /// Character played.
    pub character: Option<String>,
    /// Billing order.
    pub order: Option<u32>,
}

/// A crew entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    /// Crew member name.
    pub name: String,
    /// Job title (e.g., "Director", "Screenplay").
    pub job: String,
}

// --- Videos ---

/// Response from `{movie|tv}/{id}/videos`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideos {
    /// Video entries in provider order.
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

/// A single video entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    /// Hosting-site video key.
    pub key: String,
    /// Hosting site (e.g., "YouTube").
    pub site: String,
    /// Video title.
    pub name: Option<String>,
    /// Video kind (e.g., "Trailer", "Teaser").
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// --- TV season ---

/// Response from `tv/{series_id}/season/{season_number}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvSeason {
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    pub name: Option<String>,
    /// Season overview.
    pub overview: Option<String>,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Episodes in this season.
    pub episodes: Vec<TmdbEpisode>,
}

/// A single episode within a season.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbEpisode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    pub season_number: u32,
    /// Episode name.
    pub name: String,
    /// Episode overview.
    pub overview: Option<String>,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Still image path.
    pub still_path: Option<String>,
}

// --- Error response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    pub success: bool,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_title_kind_paths() {
        // Arrange & Act & Assert
        assert_eq!(TitleKind::Movie.as_path(), "movie");
        assert_eq!(TitleKind::Tv.as_path(), "tv");
    }

    #[test]
    fn test_trending_kind_paths() {
        // Arrange & Act & Assert
        assert_eq!(TrendingKind::All.as_path(), "all");
        assert_eq!(TrendingKind::Series.as_path(), "tv");
        assert_eq!(TrendingPeriod::Week.as_path(), "week");
    }

    #[test]
    fn test_multi_result_person_defaults() {
        // Arrange: person entries omit vote_average and title fields
        let json = r#"{
            "id": 6193,
            "media_type": "person",
            "name": "Leonardo DiCaprio",
            "profile_path": "/wo2hJpn04vbtmh0B9utCFdsQhxM.jpg",
            "popularity": 88.2,
            "known_for": [
                {"id": 27205, "media_type": "movie", "title": "Inception", "vote_average": 8.4}
            ]
        }"#;

        // Act
        let result: TmdbMultiResult = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(result.media_type, "person");
        assert!(result.title.is_none());
        assert_eq!(result.vote_average, 0.0);
        assert_eq!(result.known_for.len(), 1);
        assert_eq!(result.known_for[0].title.as_deref(), Some("Inception"));
    }
}
