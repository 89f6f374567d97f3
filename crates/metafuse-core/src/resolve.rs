//! Title-to-scraper-identifier resolution.
//!
//! Best-effort heuristic match between a catalog title and the scraping
//! provider's own search results. Wrong matches and over-strict filters are
//! accepted failure modes; downstream playback depends on whatever this
//! picks.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use metafuse_api::scraper::{LocalScraperApi, ScraperMediaType, ScraperSearchResult};
use metafuse_cache::ResponseCache;
use regex::Regex;
use serde::Serialize;
use tracing::instrument;

use crate::similarity;

/// Lifetime of a cached resolved identifier (1 hour).
const RESOLVED_ID_TTL: Duration = Duration::from_secs(3600);

/// Season-count slack between catalogs that disagree on specials.
const SEASON_TOLERANCE: u32 = 2;

/// Characters stripped before comparison.
#[allow(clippy::expect_used)]
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 ]").expect("failed to compile title regex"));

/// Normalizes a title for cross-catalog comparison: strips everything but
/// alphanumerics and spaces, then lowercases.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    NON_ALNUM_RE.replace_all(title, "").to_lowercase()
}

/// Auxiliary signals constraining a resolution.
///
/// Absent fields skip their filter entirely; a `None` year is not year zero.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveConstraints {
    /// Requested kind; candidates of any other kind are discarded outright.
    pub media_type: ScraperMediaType,
    /// Exact release year (movies only).
    pub year: Option<i32>,
    /// Season count matched within ±2 (series only).
    pub total_seasons: Option<u32>,
    /// Episode count; carried in the cache key but not filtered on.
    pub total_episodes: Option<u32>,
}

impl ResolveConstraints {
    /// Constraints for a movie resolution.
    #[must_use]
    pub const fn movie(year: Option<i32>) -> Self {
        Self {
            media_type: ScraperMediaType::Movie,
            year,
            total_seasons: None,
            total_episodes: None,
        }
    }

    /// Constraints for a series resolution.
    #[must_use]
    pub const fn series(total_seasons: Option<u32>, total_episodes: Option<u32>) -> Self {
        Self {
            media_type: ScraperMediaType::Series,
            year: None,
            total_seasons,
            total_episodes,
        }
    }
}

/// Resolves a catalog title to an identifier in the scraper's namespace.
///
/// Searches the scraper with the normalized title, discards candidates of
/// the wrong kind, ranks the rest by similarity (stable on ties), then
/// applies the year / season-count filters *after* ranking — they may
/// legitimately empty the set. `Ok(None)` is a no-match, not an error.
/// Only non-empty outcomes are cached, so a later retry can succeed once
/// the scraper's catalog updates.
///
/// # Errors
///
/// Returns an error if the scraper search itself fails.
#[instrument(skip_all, fields(title = %title))]
pub async fn find_id_from_title(
    scraper: &(impl LocalScraperApi + Sync),
    cache: &dyn ResponseCache,
    title: &str,
    constraints: &ResolveConstraints,
) -> Result<Option<String>> {
    let clean_title = normalize_title(title);
    let constraint_key = serde_json::to_string(constraints)
        .context("failed to serialize resolve constraints")?;
    let cache_key = format!("resolve:{clean_title}:{constraint_key}");

    if let Some(id) = cache.get(&cache_key) {
        tracing::debug!(id = %id, "resolved identifier cache hit");
        return Ok(Some(id));
    }

    let found = scraper
        .search(&clean_title)
        .await
        .with_context(|| format!("scraper search failed: {clean_title}"))?;
    if found.results.is_empty() {
        tracing::debug!("scraper returned no results");
        return Ok(None);
    }

    let mut scored: Vec<(f64, ScraperSearchResult)> = found
        .results
        .into_iter()
        .filter(|result| result.media_type == constraints.media_type)
        .map(|result| {
            let score = similarity::score(&clean_title, &result.title.to_lowercase());
            (score, result)
        })
        .collect();
    // Stable sort keeps provider order on equal scores.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    let mut candidates: Vec<ScraperSearchResult> =
        scored.into_iter().map(|(_, result)| result).collect();

    if constraints.media_type == ScraperMediaType::Movie
        && let Some(year) = constraints.year
    {
        let year = year.to_string();
        candidates.retain(|result| {
            result
                .release_date
                .as_deref()
                .and_then(|date| date.split('-').next())
                == Some(year.as_str())
        });
    }

    if constraints.media_type == ScraperMediaType::Series
        && let Some(target) = constraints.total_seasons
    {
        candidates.retain(|result| {
            let seasons = result.seasons.unwrap_or(0);
            seasons >= target.saturating_sub(SEASON_TOLERANCE)
                && seasons <= target.saturating_add(SEASON_TOLERANCE)
        });
    }

    let resolved = candidates.into_iter().next().map(|result| result.id);
    match &resolved {
        Some(id) => {
            tracing::debug!(id = %id, "resolved scraper identifier");
            cache.set(&cache_key, id.clone(), RESOLVED_ID_TTL);
        }
        // Empty outcomes are never cached.
        None => tracing::debug!("no candidate survived filtering"),
    }

    Ok(resolved)
}
