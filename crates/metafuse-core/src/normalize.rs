//! Raw catalog record normalization.
//!
//! Pure mappings from TMDB response shapes to the unified shapes of
//! [`crate::models`]. Image URLs are templated from the raw path fragment
//! without validating it, matching what the catalog hands out.

use metafuse_api::tmdb::{TmdbCredits, TmdbMultiResponse, TmdbMultiResult, TmdbVideos};

use crate::models::{MediaKind, MediaSummary, Paged, PersonSummary, TitleSummary, Trailer};

/// Image CDN base path.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster size token.
pub(crate) const POSTER_SIZE: &str = "w500";

/// Backdrop/cover size token.
pub(crate) const COVER_SIZE: &str = "w1280";

/// Small still/season-poster size token.
pub(crate) const STILL_MOBILE_SIZE: &str = "w300";

/// Large still/season-poster size token.
pub(crate) const STILL_HD_SIZE: &str = "w780";

/// Cast entries kept in the unified detail.
const MAX_CREDITED_ACTORS: usize = 10;

/// Crew job title counted as director.
const DIRECTOR_JOB: &str = "Director";

/// Crew job title counted as writer.
const WRITER_JOB: &str = "Screenplay";

/// Watch URL prefix for trailer keys.
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Templates an image URL from a size token and a raw path fragment.
pub(crate) fn image_url(size: &str, path: &str) -> String {
    format!("{IMAGE_BASE_URL}/{size}{path}")
}

/// Poster URL for a raw path fragment.
pub(crate) fn poster_url(path: &str) -> String {
    image_url(POSTER_SIZE, path)
}

/// Backdrop/cover URL for a raw path fragment.
pub(crate) fn cover_url(path: &str) -> String {
    image_url(COVER_SIZE, path)
}

/// Extracts the leading year from a `YYYY-MM-DD` date string.
///
/// Unparseable or absent dates yield `None`, never an error.
#[must_use]
pub fn release_year(date: Option<&str>) -> Option<i32> {
    date?.split('-').next()?.parse().ok()
}

/// Normalizes one multi search / trending entry.
///
/// The `media_type` discriminant picks the variant: people become
/// [`MediaSummary::Person`] with their known-for titles normalized
/// recursively, everything else becomes [`MediaSummary::Title`].
#[must_use]
pub fn summarize(result: &TmdbMultiResult) -> MediaSummary {
    if result.media_type == "person" {
        return MediaSummary::Person(PersonSummary {
            id: result.id,
            name: result.name.clone().unwrap_or_default(),
            image: result
                .profile_path
                .as_deref()
                .map(|path| image_url(POSTER_SIZE, path)),
            rating: result.popularity,
            known_for: result.known_for.iter().map(summarize).collect(),
        });
    }

    let kind = if result.media_type == "movie" {
        MediaKind::Movie
    } else {
        MediaKind::Series
    };
    let date = result
        .release_date
        .as_deref()
        .or(result.first_air_date.as_deref());

    MediaSummary::Title(TitleSummary {
        id: result.id,
        title: result
            .title
            .clone()
            .or_else(|| result.name.clone())
            .unwrap_or_default(),
        image: result
            .poster_path
            .as_deref()
            .map(|path| image_url(POSTER_SIZE, path)),
        kind,
        rating: result.vote_average,
        release_year: release_year(date),
    })
}

/// Wraps a multi response into the unified paged envelope.
///
/// `has_next_page` holds exactly when `page + 1` is within the catalog's
/// reported total.
#[must_use]
pub fn paged_summaries(response: &TmdbMultiResponse, page: u32) -> Paged<MediaSummary> {
    Paged {
        current_page: page,
        has_next_page: page.saturating_add(1) <= response.total_pages,
        total_pages: response.total_pages,
        total_results: response.total_results,
        results: response.results.iter().map(summarize).collect(),
    }
}

/// Crew names credited as "Director".
#[must_use]
pub fn directors(credits: &TmdbCredits) -> Vec<String> {
    credits
        .crew
        .iter()
        .filter(|member| member.job == DIRECTOR_JOB)
        .map(|member| member.name.clone())
        .collect()
}

/// Crew names credited as "Screenplay".
#[must_use]
pub fn writers(credits: &TmdbCredits) -> Vec<String> {
    credits
        .crew
        .iter()
        .filter(|member| member.job == WRITER_JOB)
        .map(|member| member.name.clone())
        .collect()
}

/// Top-billed cast names, capped at ten.
#[must_use]
pub fn actors(credits: &TmdbCredits) -> Vec<String> {
    credits
        .cast
        .iter()
        .take(MAX_CREDITED_ACTORS)
        .map(|member| member.name.clone())
        .collect()
}

/// Picks the first video entry as the trailer, if any.
///
/// The watch URL is always YouTube-templated from the key, matching the
/// catalog's dominant hosting site.
#[must_use]
pub fn trailer(videos: &TmdbVideos) -> Option<Trailer> {
    videos.results.first().map(|video| Trailer {
        id: video.key.clone(),
        site: video.site.clone(),
        url: format!("{YOUTUBE_WATCH_URL}{}", video.key),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]
    #![allow(clippy::panic)]

    use metafuse_api::tmdb::{TmdbCastMember, TmdbCrewMember, TmdbVideo};

    use super::*;

    fn multi_result(media_type: &str) -> TmdbMultiResult {
        TmdbMultiResult {
            id: 27_205,
            media_type: String::from(media_type),
            title: Some(String::from("Inception")),
            name: None,
            poster_path: Some(String::from("/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")),
            profile_path: None,
            release_date: Some(String::from("2010-07-15")),
            first_air_date: None,
            overview: None,
            vote_average: 8.4,
            popularity: 83.6,
            known_for: vec![],
        }
    }

    #[test]
    fn test_summarize_movie() {
        // Arrange
        let raw = multi_result("movie");

        // Act
        let MediaSummary::Title(summary) = summarize(&raw) else {
            panic!("expected a title summary");
        };

        // Assert
        assert_eq!(summary.kind, MediaKind::Movie);
        assert_eq!(summary.title, "Inception");
        assert_eq!(summary.release_year, Some(2010));
        assert_eq!(
            summary.image.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
        );
    }

    #[test]
    fn test_summarize_person_nests_known_for() {
        // Arrange
        let raw = TmdbMultiResult {
            id: 6_193,
            media_type: String::from("person"),
            title: None,
            name: Some(String::from("Leonardo DiCaprio")),
            poster_path: None,
            profile_path: Some(String::from("/wo2hJpn04vbtmh0B9utCFdsQhxM.jpg")),
            release_date: None,
            first_air_date: None,
            overview: None,
            vote_average: 0.0,
            popularity: 88.2,
            known_for: vec![multi_result("movie")],
        };

        // Act
        let MediaSummary::Person(person) = summarize(&raw) else {
            panic!("expected a person summary");
        };

        // Assert
        assert_eq!(person.name, "Leonardo DiCaprio");
        assert_eq!(person.rating, 88.2);
        assert_eq!(person.known_for.len(), 1);
    }

    #[test]
    fn test_paged_has_next_page_boundary() {
        // Arrange
        let response = TmdbMultiResponse {
            page: 1,
            results: vec![],
            total_pages: 2,
            total_results: 23,
        };

        // Act & Assert: page 1 of 2 has a next page, page 2 of 2 does not
        assert!(paged_summaries(&response, 1).has_next_page);
        assert!(!paged_summaries(&response, 2).has_next_page);
    }

    #[test]
    fn test_release_year_invalid_date() {
        // Arrange & Act & Assert
        assert_eq!(release_year(Some("2010-07-15")), Some(2010));
        assert_eq!(release_year(Some("not a date")), None);
        assert_eq!(release_year(None), None);
    }

    #[test]
    fn test_directors_and_writers_filter_by_job() {
        // Arrange
        let credits = TmdbCredits {
            cast: vec![],
            crew: vec![
                TmdbCrewMember {
                    name: String::from("Christopher Nolan"),
                    job: String::from("Director"),
                },
                TmdbCrewMember {
                    name: String::from("Christopher Nolan"),
                    job: String::from("Screenplay"),
                },
                TmdbCrewMember {
                    name: String::from("Hans Zimmer"),
                    job: String::from("Original Music Composer"),
                },
            ],
        };

        // Act & Assert
        assert_eq!(directors(&credits), vec!["Christopher Nolan"]);
        assert_eq!(writers(&credits), vec!["Christopher Nolan"]);
    }

    #[test]
    fn test_actors_capped_at_ten() {
        // Arrange
        let cast = (0..15)
            .map(|i| TmdbCastMember {
                name: format!("Actor {i}"),
                character: None,
                order: Some(i),
            })
            .collect();
        let credits = TmdbCredits { cast, crew: vec![] };

        // Act
        let names = actors(&credits);

        // Assert
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Actor 0");
    }

    #[test]
    fn test_trailer_is_first_video() {
        // Arrange
        let videos = TmdbVideos {
            results: vec![
                TmdbVideo {
                    key: String::from("YoHD9XEInc0"),
                    site: String::from("YouTube"),
                    name: Some(String::from("Official Trailer")),
                    kind: Some(String::from("Trailer")),
                },
                TmdbVideo {
                    key: String::from("66TuSJo4dZM"),
                    site: String::from("YouTube"),
                    name: Some(String::from("Teaser")),
                    kind: Some(String::from("Teaser")),
                },
            ],
        };

        // Act
        let trailer = trailer(&videos).unwrap();

        // Assert: deterministically the first entry
        assert_eq!(trailer.id, "YoHD9XEInc0");
        assert_eq!(trailer.url, "https://www.youtube.com/watch?v=YoHD9XEInc0");
    }

    #[test]
    fn test_trailer_absent_when_no_videos() {
        // Arrange
        let videos = TmdbVideos { results: vec![] };

        // Act & Assert
        assert!(trailer(&videos).is_none());
    }
}
