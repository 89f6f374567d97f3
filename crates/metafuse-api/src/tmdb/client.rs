//! `TmdbClient` - TMDB API client implementation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use metafuse_cache::{MemoryCache, ResponseCache};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbApi;
use super::rate_limiter::TmdbRateLimiter;
use super::types::{
    TitleKind, TmdbCredits, TmdbErrorResponse, TmdbMovieDetails, TmdbMultiResponse, TmdbTvDetails,
    TmdbTvSeason, TmdbVideos, TrendingKind, TrendingPeriod,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default lifetime of a cached raw response (1 hour).
const DEFAULT_RESPONSE_TTL: Duration = Duration::from_secs(3600);

/// Response language requested from detail endpoints.
const LANGUAGE: &str = "en-US";

/// TMDB API client.
///
/// Every GET is keyed by path and serialized query into the injected
/// [`ResponseCache`]; a hit skips the network entirely. Transport and parse
/// failures propagate unmodified — no retry, no backoff.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer API token.
    api_token: String,
    /// Raw response cache.
    cache: Arc<dyn ResponseCache>,
    /// Lifetime of cached responses.
    response_ttl: Duration,
    /// Rate limiter.
    rate_limiter: Arc<Mutex<TmdbRateLimiter>>,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    cache: Option<Arc<dyn ResponseCache>>,
    response_ttl: Option<Duration>,
    min_interval: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            cache: None,
            response_ttl: None,
            min_interval: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Injects the response cache (default: a fresh unbounded `MemoryCache`).
    #[must_use]
    pub fn cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Sets the lifetime of cached responses (default: 1 hour).
    #[must_use]
    pub const fn response_ttl(mut self, ttl: Duration) -> Self {
        self.response_ttl = Some(ttl);
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_token = self.api_token.context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(MemoryCache::new()) as Arc<dyn ResponseCache>);

        let rate_limiter = self
            .min_interval
            .map_or_else(TmdbRateLimiter::default_interval, TmdbRateLimiter::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_token,
            cache,
            response_ttl: self.response_ttl.unwrap_or(DEFAULT_RESPONSE_TTL),
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends a GET request with Bearer auth, query params, and rate limiting.
    ///
    /// The response cache is consulted first; the raw body of a successful
    /// response is written back under the same key.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let params = serde_json::to_string(query)
            .with_context(|| format!("failed to serialize query params: {path}"))?;
        let cache_key = format!("tmdb:{path}:{params}");

        if let Some(body) = self.cache.get(&cache_key) {
            tracing::debug!(path = path, "TMDB response cache hit");
            let parsed = serde_json::from_str(&body)
                .with_context(|| format!("failed to decode cached response: {path}"))?;
            return Ok(parsed);
        }

        self.rate_limiter.lock().await.wait().await;

        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let request = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .query(query)
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if let Ok(error_response) = serde_json::from_str::<TmdbErrorResponse>(&body) {
                bail!(
                    "TMDB API error (HTTP {}): code={}, message={}",
                    status,
                    error_response.status_code,
                    error_response.status_message,
                );
            }
            bail!("TMDB API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        let parsed =
            raw_result.with_context(|| format!("failed to decode JSON response: {path}"))?;

        self.cache.set(&cache_key, body, self.response_ttl);
        Ok(parsed)
    }
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn search_multi(&self, query: &str, page: u32) -> Result<TmdbMultiResponse> {
        let params: Vec<(&str, String)> = vec![
            ("query", String::from(query)),
            ("page", page.to_string()),
            ("include_adult", String::from("false")),
        ];
        self.get_json("search/multi", &params).await
    }

    #[instrument(skip_all)]
    async fn trending(
        &self,
        kind: TrendingKind,
        period: TrendingPeriod,
        page: u32,
    ) -> Result<TmdbMultiResponse> {
        let path = format!("trending/{}/{}", kind.as_path(), period.as_path());
        let params = [("page", page.to_string())];
        self.get_json(&path, &params).await
    }

    #[instrument(skip_all)]
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails> {
        let path = format!("movie/{movie_id}");
        let params = [("language", String::from(LANGUAGE))];
        self.get_json(&path, &params).await
    }

    #[instrument(skip_all)]
    async fn tv_details(&self, series_id: u64) -> Result<TmdbTvDetails> {
        let path = format!("tv/{series_id}");
        let params = [("language", String::from(LANGUAGE))];
        self.get_json(&path, &params).await
    }

    #[instrument(skip_all)]
    async fn credits(&self, kind: TitleKind, id: u64) -> Result<TmdbCredits> {
        let path = format!("{}/{id}/credits", kind.as_path());
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn videos(&self, kind: TitleKind, id: u64) -> Result<TmdbVideos> {
        let path = format!("{}/{id}/videos", kind.as_path());
        self.get_json(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn tv_season(&self, series_id: u64, season_number: u32) -> Result<TmdbTvSeason> {
        let path = format!("tv/{series_id}/season/{season_number}");
        let params = [("language", String::from(LANGUAGE))];
        self.get_json(&path, &params).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn test_client(mock_uri: &str) -> TmdbClient {
        let base_url = format!("{mock_uri}/3/");
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("test-token")
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_token() {
        // Arrange & Act
        let result = TmdbClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api_token is required")
        );
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = TmdbClient::builder().api_token("test-token").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/3/").unwrap();

        // Act
        let client = TmdbClient::builder()
            .base_url(custom_url.clone())
            .api_token("test-token")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_parse_search_multi_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/search_multi_inception.json");

        // Act
        let response: TmdbMultiResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(response.page, 1);
        assert!(!response.results.is_empty());
        let first = &response.results[0];
        assert_eq!(first.id, 27_205);
        assert_eq!(first.media_type, "movie");
        assert_eq!(first.title.as_deref(), Some("Inception"));
    }

    #[test]
    fn test_parse_tv_details_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/tv_details_1399.json");

        // Act
        let details: TmdbTvDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.id, 1_399);
        assert_eq!(details.name, "Game of Thrones");
        assert_eq!(details.number_of_seasons, 8);
    }

    #[test]
    fn test_parse_tv_season_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/tv_season_1399_1.json");

        // Act
        let season: TmdbTvSeason = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(season.season_number, 1);
        assert!(!season.episodes.is_empty());
        assert_eq!(season.episodes[0].episode_number, 1);
    }

    #[test]
    fn test_parse_error_response() {
        // Arrange
        let json = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        // Act
        let error: TmdbErrorResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(error.status_code, 7);
        assert!(!error.success);
        assert!(error.status_message.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_search_multi_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_multi_inception.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/multi"))
            .and(wiremock::matchers::query_param("include_adult", "false"))
            .and(wiremock::matchers::header_exists("Authorization"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let response = client.search_multi("Inception", 1).await.unwrap();

        // Assert
        assert!(!response.results.is_empty());
        assert_eq!(response.results[0].title.as_deref(), Some("Inception"));
    }

    #[tokio::test]
    async fn test_trending_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/trending_all_day.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/trending/all/day"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let response = client
            .trending(TrendingKind::All, TrendingPeriod::Day, 1)
            .await
            .unwrap();

        // Assert
        assert!(!response.results.is_empty());
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_multi_empty.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Bearer my-secret-token",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = format!("{}/3/", mock_server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_token("my-secret-token")
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap();

        // Act & Assert (mock expect(1) verifies Authorization header)
        client.search_multi("test", 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_http_error_returns_tmdb_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let result = client.search_multi("test", 1).await;

        // Assert
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("TMDB API error"));
        assert!(err.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        // Arrange: the server may only ever see one request
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_multi_inception.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/multi"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act
        let first = client.search_multi("Inception", 1).await.unwrap();
        let second = client.search_multi("Inception", 1).await.unwrap();

        // Assert
        assert_eq!(first.total_results, second.total_results);
        assert_eq!(first.results.len(), second.results.len());
    }

    #[tokio::test]
    async fn test_different_params_miss_cache() {
        // Arrange: page 1 and page 2 are distinct cache keys
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_multi_empty.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/multi"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act & Assert (mock expect(2) verifies both pages hit the network)
        client.search_multi("test", 1).await.unwrap();
        client.search_multi("test", 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_responses_are_not_cached() {
        // Arrange: first call fails, second call must reach the server again
        let mock_server = wiremock::MockServer::start().await;
        let error_body = r#"{"status_code":25,"status_message":"Your request count is over the allowed limit.","success":false}"#;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500).set_body_string(error_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());

        // Act & Assert
        assert!(client.search_multi("test", 1).await.is_err());
        assert!(client.search_multi("test", 1).await.is_err());
    }
}
