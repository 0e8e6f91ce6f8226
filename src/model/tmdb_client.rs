//! TMDB v3 API client

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::TmdbConfig;
use crate::error::{ApiResult, GeneralError};
use crate::{log_api_request, log_api_result};

use super::tmdb_dto::{CreditsDto, ErrorDto, ImageUrls, MovieDetailDto, PageDto, ShowDetailDto};
use super::types::{
    CreditItem, MovieListType, Page, ShowListType, VideoDetail, VideoKind, VideoThumbnail,
};

/// Thin client over the TMDB endpoints the app needs.
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
    images: ImageUrls,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("filmtime/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeneralError::Unknown(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            images: ImageUrls::new(&config.image_base_url),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, page: Option<u32>) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())]);
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GeneralError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorDto>()
                .await
                .ok()
                .and_then(|body| body.status_message)
                .unwrap_or_default();
            return Err(GeneralError::from_status(status.as_u16(), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GeneralError::Unknown(format!("malformed response from {}: {}", path, e)))
    }

    pub async fn movie_details(&self, movie_id: u32) -> ApiResult<VideoDetail> {
        log_api_request!("movie_details", movie_id);
        let result = self
            .get::<MovieDetailDto>(&format!("movie/{}", movie_id), None)
            .await
            .map(|dto| dto.into_detail(&self.images));
        log_api_result!("movie_details", result);
        result
    }

    pub async fn show_details(&self, show_id: u32) -> ApiResult<VideoDetail> {
        log_api_request!("show_details", show_id);
        let result = self
            .get::<ShowDetailDto>(&format!("tv/{}", show_id), None)
            .await
            .map(|dto| dto.into_detail(&self.images));
        log_api_result!("show_details", result);
        result
    }

    pub async fn credits(&self, kind: VideoKind, id: u32) -> ApiResult<Vec<CreditItem>> {
        log_api_request!("credits", ?kind, id);
        let result = self
            .get::<CreditsDto>(&format!("{}/{}/credits", kind.tmdb_path(), id), None)
            .await
            .map(|dto| dto.into_credits(&self.images));
        log_api_result!("credits", result);
        result
    }

    pub async fn similar(&self, kind: VideoKind, id: u32) -> ApiResult<Vec<VideoThumbnail>> {
        log_api_request!("similar", ?kind, id);
        let result = self
            .get::<PageDto>(&format!("{}/{}/similar", kind.tmdb_path(), id), Some(1))
            .await
            .map(|dto| dto.into_page(kind, &self.images).results);
        log_api_result!("similar", result);
        result
    }

    pub async fn trending_movies(&self) -> ApiResult<Vec<VideoThumbnail>> {
        log_api_request!("trending_movies", page = 1);
        let result = self
            .get::<PageDto>("trending/movie/week", Some(1))
            .await
            .map(|dto| dto.into_page(VideoKind::Movie, &self.images).results);
        log_api_result!("trending_movies", result);
        result
    }

    pub async fn movie_list(&self, list_type: MovieListType, page: u32) -> ApiResult<Page<VideoThumbnail>> {
        log_api_request!("movie_list", ?list_type, page);
        let result = self
            .get::<PageDto>(list_type.tmdb_path(), Some(page))
            .await
            .map(|dto| dto.into_page(VideoKind::Movie, &self.images));
        log_api_result!("movie_list", result);
        result
    }

    pub async fn show_list(&self, list_type: ShowListType, page: u32) -> ApiResult<Page<VideoThumbnail>> {
        log_api_request!("show_list", ?list_type, page);
        let result = self
            .get::<PageDto>(list_type.tmdb_path(), Some(page))
            .await
            .map(|dto| dto.into_page(VideoKind::Show, &self.images));
        log_api_result!("show_list", result);
        result
    }
}
