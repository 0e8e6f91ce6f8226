//! TMDB wire types and their mapping into domain records

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::types::{CreditItem, Page, VideoDetail, VideoIds, VideoKind, VideoThumbnail};

const POSTER_SIZE: &str = "w342";
const BACKDROP_SIZE: &str = "w780";
const PROFILE_SIZE: &str = "w185";

/// Cast members kept per title
pub const MAX_CAST: usize = 20;

/// Builds absolute image URLs from TMDB's relative paths
#[derive(Clone, Debug)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    fn url(&self, size: &str, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}/{}/{}", self.base, size, p.trim_start_matches('/')))
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.url(POSTER_SIZE, path)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.url(BACKDROP_SIZE, path)
    }

    pub fn profile(&self, path: Option<&str>) -> Option<String> {
        self.url(PROFILE_SIZE, path)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenreDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieDetailDto {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShowDetailDto {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
}

/// Row of any TMDB list endpoint; movies carry `title`, shows carry `name`
#[derive(Debug, Deserialize)]
pub struct ListItemDto {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageDto {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<ListItemDto>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct CastDto {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CreditsDto {
    #[serde(default)]
    pub cast: Vec<CastDto>,
}

/// Body TMDB sends with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub status_message: Option<String>,
}

fn year_of(date: Option<&str>) -> Option<i32> {
    date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.year())
}

fn vote(raw: Option<f32>) -> f32 {
    (raw.unwrap_or(0.0) / 10.0).clamp(0.0, 1.0)
}

fn genre_names(genres: Vec<GenreDto>) -> Vec<String> {
    genres.into_iter().map(|g| g.name).collect()
}

impl MovieDetailDto {
    pub fn into_detail(self, images: &ImageUrls) -> VideoDetail {
        let vote_average = vote(self.vote_average);
        VideoDetail {
            ids: VideoIds {
                tmdb_id: Some(self.id),
                imdb_id: self.imdb_id.filter(|id| !id.is_empty()),
            },
            kind: VideoKind::Movie,
            title: self.title,
            description: self.overview.unwrap_or_default(),
            poster_url: images.poster(self.poster_path.as_deref()),
            cover_url: images.backdrop(self.backdrop_path.as_deref()),
            runtime: self.runtime.filter(|r| *r > 0),
            release_date: self.release_date.unwrap_or_default(),
            vote_average,
            vote_color: VideoDetail::vote_color_for(vote_average),
            genres: genre_names(self.genres),
            is_watched: None,
        }
    }
}

impl ShowDetailDto {
    pub fn into_detail(self, images: &ImageUrls) -> VideoDetail {
        let vote_average = vote(self.vote_average);
        VideoDetail {
            ids: VideoIds::tmdb(self.id),
            kind: VideoKind::Show,
            title: self.name,
            description: self.overview.unwrap_or_default(),
            poster_url: images.poster(self.poster_path.as_deref()),
            cover_url: images.backdrop(self.backdrop_path.as_deref()),
            runtime: self.episode_run_time.first().copied().filter(|r| *r > 0),
            release_date: self.first_air_date.unwrap_or_default(),
            vote_average,
            vote_color: VideoDetail::vote_color_for(vote_average),
            genres: genre_names(self.genres),
            is_watched: None,
        }
    }
}

impl ListItemDto {
    pub fn into_thumbnail(self, kind: VideoKind, images: &ImageUrls) -> VideoThumbnail {
        let date = self.release_date.as_deref().or(self.first_air_date.as_deref());
        let year = year_of(date);
        VideoThumbnail {
            ids: VideoIds::tmdb(self.id),
            kind,
            title: self.title.or(self.name).unwrap_or_default(),
            poster_url: images.poster(self.poster_path.as_deref()),
            year,
        }
    }
}

impl PageDto {
    pub fn into_page(self, kind: VideoKind, images: &ImageUrls) -> Page<VideoThumbnail> {
        Page {
            page: self.page,
            total_pages: self.total_pages,
            results: self
                .results
                .into_iter()
                .map(|item| item.into_thumbnail(kind, images))
                .collect(),
        }
    }
}

impl CreditsDto {
    pub fn into_credits(mut self, images: &ImageUrls) -> Vec<CreditItem> {
        self.cast.sort_by_key(|c| c.order.unwrap_or(u32::MAX));
        self.cast
            .into_iter()
            .take(MAX_CAST)
            .map(|c| CreditItem {
                name: c.name,
                character: c.character.filter(|s| !s.is_empty()),
                profile_url: images.profile(c.profile_path.as_deref()),
            })
            .collect()
    }
}
