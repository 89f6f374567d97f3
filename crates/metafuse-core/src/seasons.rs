//! Season fetching and episode merging.
//!
//! Fetches every season of a series concurrently from the catalog and
//! left-joins the scraping provider's episode list by episode number.
//! Catalog fields always populate; watchable fields only on a match.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use futures::future::try_join_all;
use metafuse_api::scraper::ScraperEpisode;
use metafuse_api::tmdb::{LocalTmdbApi, TmdbEpisode, TmdbTvSeason};
use tracing::instrument;

use crate::models::{Episode, ImageVariants, Season};
use crate::normalize::{STILL_HD_SIZE, STILL_MOBILE_SIZE, image_url};

/// Air date format reported by the catalog.
const AIR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether an air date has passed.
///
/// Missing or unparseable dates are never released — the comparison must
/// not fail on bad catalog data.
pub(crate) fn is_released(air_date: Option<&str>) -> bool {
    air_date
        .and_then(|date| NaiveDate::parse_from_str(date, AIR_DATE_FORMAT).ok())
        .is_some_and(|date| date <= Utc::now().date_naive())
}

/// Builds the two-variant image for a still or season poster path.
fn variant_image(path: &str) -> ImageVariants {
    ImageVariants {
        mobile: image_url(STILL_MOBILE_SIZE, path),
        hd: image_url(STILL_HD_SIZE, path),
    }
}

/// Left-joins catalog episodes against the scraper's records for one season.
fn merge_episodes(catalog: Vec<TmdbEpisode>, scraped: &[&ScraperEpisode]) -> Vec<Episode> {
    catalog
        .into_iter()
        .map(|episode| {
            let matched = scraped
                .iter()
                .find(|candidate| candidate.number == episode.episode_number);
            Episode {
                id: matched.map(|found| found.id.clone()),
                url: matched.and_then(|found| found.url.clone()),
                title: episode.name,
                episode: episode.episode_number,
                season: episode.season_number,
                release_date: episode.air_date,
                description: episode.overview,
                image: episode.still_path.as_deref().map(variant_image),
            }
        })
        .collect()
}

/// Assembles one unified season from catalog data and the scraper episodes
/// already filtered to that season number.
fn build_season(data: TmdbTvSeason, number: u32, provider_episodes: &[ScraperEpisode]) -> Season {
    let in_season: Vec<&ScraperEpisode> = provider_episodes
        .iter()
        .filter(|episode| episode.season == Some(number))
        .collect();

    Season {
        season: number,
        image: data.poster_path.as_deref().map(variant_image),
        is_released: is_released(data.air_date.as_deref()),
        episodes: merge_episodes(data.episodes, &in_season),
    }
}

/// Fetches seasons 1..=`total_seasons` concurrently and merges each against
/// the scraper's episode list.
///
/// The batch fails atomically: one failed season fetch fails the whole
/// operation, with no partial result.
///
/// # Errors
///
/// Returns an error if any season fetch fails.
#[instrument(skip_all, fields(series_id = series_id, total_seasons = total_seasons))]
pub async fn fetch_seasons(
    tmdb: &(impl LocalTmdbApi + Sync),
    series_id: u64,
    total_seasons: u32,
    provider_episodes: &[ScraperEpisode],
) -> Result<Vec<Season>> {
    let fetches = (1..=total_seasons).map(|number| tmdb.tv_season(series_id, number));
    let seasons_data = try_join_all(fetches)
        .await
        .with_context(|| format!("failed to fetch seasons for series {series_id}"))?;

    Ok(seasons_data
        .into_iter()
        .zip(1u32..)
        .map(|(data, number)| build_season(data, number, provider_episodes))
        .collect())
}
