//! Facade orchestrating search, trending, detail, and passthrough
//! operations over the two providers.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use metafuse_api::scraper::{EpisodeServer, EpisodeSources, LocalScraperApi};
use metafuse_api::tmdb::{LocalTmdbApi, TitleKind, TrendingKind, TrendingPeriod};
use metafuse_cache::{MemoryCache, ResponseCache};
use tracing::instrument;

use crate::models::{MediaDetail, MediaKind, MediaSummary, Paged};
use crate::normalize;
use crate::resolve::{self, ResolveConstraints};
use crate::seasons;

/// Splices the TMDB catalog with a scraping provider behind one API.
///
/// The catalog is authoritative for everything descriptive; the scraper
/// only contributes watchable identifiers and playback data. The shared
/// cache holds resolved identifiers across calls.
#[derive(Debug)]
pub struct MediaAggregator<T, S> {
    tmdb: T,
    scraper: S,
    cache: Arc<dyn ResponseCache>,
}

impl<T, S> MediaAggregator<T, S>
where
    T: LocalTmdbApi + Sync,
    S: LocalScraperApi + Sync,
{
    /// Creates an aggregator with an in-process resolution cache.
    #[must_use]
    pub fn new(tmdb: T, scraper: S) -> Self {
        Self::with_cache(tmdb, scraper, Arc::new(MemoryCache::new()))
    }

    /// Creates an aggregator over an externally owned cache.
    #[must_use]
    pub fn with_cache(tmdb: T, scraper: S, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            tmdb,
            scraper,
            cache,
        }
    }

    /// Searches the catalog and returns one normalized page.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog request fails.
    #[instrument(skip_all, fields(query = %query, page = page))]
    pub async fn search(&self, query: &str, page: u32) -> Result<Paged<MediaSummary>> {
        let response = self
            .tmdb
            .search_multi(query, page)
            .await
            .with_context(|| format!("search failed: {query}"))?;
        Ok(normalize::paged_summaries(&response, page))
    }

    /// Returns one normalized page of trending records.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog request fails.
    #[instrument(skip_all, fields(kind = ?kind, period = ?period, page = page))]
    pub async fn fetch_trending(
        &self,
        kind: TrendingKind,
        period: TrendingPeriod,
        page: u32,
    ) -> Result<Paged<MediaSummary>> {
        let response = self
            .tmdb
            .trending(kind, period, page)
            .await
            .context("trending fetch failed")?;
        Ok(normalize::paged_summaries(&response, page))
    }

    /// Fetches the full unified detail for one movie or series.
    ///
    /// Catalog detail, credits, and videos are fetched concurrently, then
    /// the title is resolved against the scraper. Resolution failure to
    /// match is not an error: the result simply carries no `provider_id`
    /// and no watchable episode fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog request or the scraper search fails,
    /// or when `kind` is [`MediaKind::Person`].
    #[instrument(skip_all, fields(id = id, kind = ?kind))]
    pub async fn fetch_media_info(&self, id: u64, kind: MediaKind) -> Result<MediaDetail> {
        match kind {
            MediaKind::Movie => self.movie_info(id).await,
            MediaKind::Series => self.series_info(id).await,
            MediaKind::Person => bail!("person records have no media detail"),
        }
    }

    async fn movie_info(&self, id: u64) -> Result<MediaDetail> {
        let (details, credits, videos) = tokio::try_join!(
            self.tmdb.movie_details(id),
            self.tmdb.credits(TitleKind::Movie, id),
            self.tmdb.videos(TitleKind::Movie, id),
        )
        .with_context(|| format!("movie detail fetch failed: {id}"))?;

        let constraints =
            ResolveConstraints::movie(normalize::release_year(details.release_date.as_deref()));
        let provider_id = resolve::find_id_from_title(
            &self.scraper,
            self.cache.as_ref(),
            &details.title,
            &constraints,
        )
        .await?;

        Ok(MediaDetail {
            id: details.id,
            provider_id,
            title: details.title,
            kind: MediaKind::Movie,
            image: details
                .poster_path
                .as_deref()
                .map(normalize::poster_url),
            cover: details
                .backdrop_path
                .as_deref()
                .map(normalize::cover_url),
            rating: details.vote_average,
            release_date: details.release_date,
            description: details.overview,
            genres: details.genres.into_iter().map(|genre| genre.name).collect(),
            duration: details.runtime,
            total_episodes: None,
            total_seasons: None,
            directors: normalize::directors(&credits),
            writers: normalize::writers(&credits),
            actors: normalize::actors(&credits),
            trailer: normalize::trailer(&videos),
            seasons: Vec::new(),
        })
    }

    async fn series_info(&self, id: u64) -> Result<MediaDetail> {
        let (details, credits, videos) = tokio::try_join!(
            self.tmdb.tv_details(id),
            self.tmdb.credits(TitleKind::Tv, id),
            self.tmdb.videos(TitleKind::Tv, id),
        )
        .with_context(|| format!("series detail fetch failed: {id}"))?;

        let constraints = ResolveConstraints::series(
            Some(details.number_of_seasons),
            Some(details.number_of_episodes),
        );
        let provider_id = resolve::find_id_from_title(
            &self.scraper,
            self.cache.as_ref(),
            &details.name,
            &constraints,
        )
        .await?;

        // Without a resolved identifier the merge still runs; every episode
        // just stays catalog-only.
        let provider_episodes = match &provider_id {
            Some(found) => {
                self.scraper
                    .fetch_media_info(found)
                    .await
                    .with_context(|| format!("scraper media info failed: {found}"))?
                    .episodes
            }
            None => Vec::new(),
        };

        let seasons = seasons::fetch_seasons(
            &self.tmdb,
            id,
            details.number_of_seasons,
            &provider_episodes,
        )
        .await?;

        Ok(MediaDetail {
            id: details.id,
            provider_id,
            title: details.name,
            kind: MediaKind::Series,
            image: details
                .poster_path
                .as_deref()
                .map(normalize::poster_url),
            cover: details
                .backdrop_path
                .as_deref()
                .map(normalize::cover_url),
            rating: details.vote_average,
            release_date: details.first_air_date,
            description: details.overview,
            genres: details.genres.into_iter().map(|genre| genre.name).collect(),
            duration: details.episode_run_time.first().copied(),
            total_episodes: Some(details.number_of_episodes),
            total_seasons: Some(details.number_of_seasons),
            directors: normalize::directors(&credits),
            writers: normalize::writers(&credits),
            actors: normalize::actors(&credits),
            trailer: normalize::trailer(&videos),
            seasons,
        })
    }

    /// Fetches playback sources for one episode, straight from the scraper.
    ///
    /// # Errors
    ///
    /// Returns an error if the scraper request fails.
    #[instrument(skip_all, fields(episode_id = %episode_id))]
    pub async fn fetch_episode_sources(
        &self,
        episode_id: &str,
        media_id: &str,
        server: Option<&str>,
    ) -> Result<EpisodeSources> {
        self.scraper
            .fetch_episode_sources(episode_id, media_id, server)
            .await
            .with_context(|| format!("episode source fetch failed: {episode_id}"))
    }

    /// Lists available streaming servers for one episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the scraper request fails.
    #[instrument(skip_all, fields(episode_id = %episode_id))]
    pub async fn fetch_episode_servers(
        &self,
        episode_id: &str,
        media_id: &str,
    ) -> Result<Vec<EpisodeServer>> {
        self.scraper
            .fetch_episode_servers(episode_id, media_id)
            .await
            .with_context(|| format!("episode server fetch failed: {episode_id}"))
    }
}
