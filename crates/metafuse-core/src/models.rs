//! Unified result shapes.
//!
//! One shape regardless of which provider a field came from: descriptive
//! fields originate in the TMDB catalog, watchable fields (`provider_id`,
//! episode `id`/`url`) in the scraping provider.

use serde::Serialize;

/// Kind of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature film.
    Movie,
    /// TV series.
    Series,
    /// A person (actor, director, ...).
    Person,
}

/// One page of results with remote-reported paging totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// Current page number.
    pub current_page: u32,
    /// Whether `current_page + 1` is still within the reported total.
    pub has_next_page: bool,
    /// Total number of pages reported by the catalog.
    pub total_pages: u32,
    /// Total number of results reported by the catalog.
    pub total_results: u32,
    /// Result entries.
    pub results: Vec<T>,
}

/// A normalized search or trending entry.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MediaSummary {
    /// A movie or series.
    Title(TitleSummary),
    /// A person.
    Person(PersonSummary),
}

/// A movie or series summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSummary {
    /// TMDB catalog ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Poster image URL.
    pub image: Option<String>,
    /// Movie or series.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Vote average.
    pub rating: f64,
    /// Release year, when the catalog reports a parseable date.
    pub release_year: Option<i32>,
}

/// A person summary with the titles they are known for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    /// TMDB catalog ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Profile image URL.
    pub image: Option<String>,
    /// Popularity score (people carry no vote average).
    pub rating: f64,
    /// Known-for titles.
    pub known_for: Vec<MediaSummary>,
}

/// Image served in two resolution variants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVariants {
    /// Small variant for constrained screens.
    pub mobile: String,
    /// Large variant.
    pub hd: String,
}

/// A trailer reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trailer {
    /// Hosting-site video key.
    pub id: String,
    /// Hosting site.
    pub site: String,
    /// Watch URL.
    pub url: String,
}

/// Full detail for a movie or series, spliced from both providers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetail {
    /// TMDB catalog ID.
    pub id: u64,
    /// Resolved identifier in the scraping provider's namespace, when a
    /// best-effort match was found. Not stable across catalog updates.
    pub provider_id: Option<String>,
    /// Display title.
    pub title: String,
    /// Movie or series.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Poster image URL.
    pub image: Option<String>,
    /// Backdrop image URL.
    pub cover: Option<String>,
    /// Vote average.
    pub rating: f64,
    /// Release date (movies) or first air date (series).
    pub release_date: Option<String>,
    /// Overview text.
    pub description: Option<String>,
    /// Genre names.
    pub genres: Vec<String>,
    /// Runtime in minutes (movies) or typical episode runtime (series).
    pub duration: Option<u32>,
    /// Total episode count (series only).
    pub total_episodes: Option<u32>,
    /// Total season count (series only).
    pub total_seasons: Option<u32>,
    /// Crew names credited as "Director".
    pub directors: Vec<String>,
    /// Crew names credited as "Screenplay".
    pub writers: Vec<String>,
    /// Top-billed cast names.
    pub actors: Vec<String>,
    /// First video entry, when present.
    pub trailer: Option<Trailer>,
    /// Ordered seasons (series only).
    pub seasons: Vec<Season>,
}

/// One season of a series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Season number (1-based).
    pub season: u32,
    /// Season poster.
    pub image: Option<ImageVariants>,
    /// Episodes in broadcast order.
    pub episodes: Vec<Episode>,
    /// Whether the season's air date has passed. Seasons without an air
    /// date are never released.
    pub is_released: bool,
}

/// One episode, merged from both providers.
///
/// Descriptive fields always populate from the catalog; `id` and `url`
/// populate only when the scraping provider listed a matching episode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Scraping provider's opaque episode identifier.
    pub id: Option<String>,
    /// Episode title.
    pub title: String,
    /// Episode number within the season.
    pub episode: u32,
    /// Season number.
    pub season: u32,
    /// Air date (YYYY-MM-DD).
    pub release_date: Option<String>,
    /// Overview text.
    pub description: Option<String>,
    /// Playback page URL on the scraping provider.
    pub url: Option<String>,
    /// Still image.
    pub image: Option<ImageVariants>,
}
