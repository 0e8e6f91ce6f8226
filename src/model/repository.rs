//! Repository seams over the TMDB client
//!
//! Controllers and use-cases only see these traits, so tests can swap in
//! in-memory fakes.

use async_trait::async_trait;

use crate::error::ApiResult;

use super::paging::{VideoStream, paginate};
use super::tmdb_client::TmdbClient;
use super::types::{
    CreditItem, MovieListType, ShowListType, VideoDetail, VideoKind, VideoThumbnail,
};

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get_movie_details(&self, movie_id: u32) -> ApiResult<VideoDetail>;

    async fn get_movie_credits(&self, movie_id: u32) -> ApiResult<Vec<CreditItem>>;

    async fn get_similar_movies(&self, movie_id: u32) -> ApiResult<Vec<VideoThumbnail>>;

    async fn get_trending_movies(&self) -> ApiResult<Vec<VideoThumbnail>>;

    fn movies_stream(&self, list_type: MovieListType) -> VideoStream;
}

#[async_trait]
pub trait ShowsRepository: Send + Sync {
    async fn get_show_details(&self, show_id: u32) -> ApiResult<VideoDetail>;

    async fn get_show_credits(&self, show_id: u32) -> ApiResult<Vec<CreditItem>>;

    async fn get_similar_shows(&self, show_id: u32) -> ApiResult<Vec<VideoThumbnail>>;

    fn shows_stream(&self, list_type: ShowListType) -> VideoStream;
}

#[derive(Clone, Debug)]
pub struct TmdbMovieRepository {
    client: TmdbClient,
}

impl TmdbMovieRepository {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieRepository for TmdbMovieRepository {
    async fn get_movie_details(&self, movie_id: u32) -> ApiResult<VideoDetail> {
        self.client.movie_details(movie_id).await
    }

    async fn get_movie_credits(&self, movie_id: u32) -> ApiResult<Vec<CreditItem>> {
        self.client.credits(VideoKind::Movie, movie_id).await
    }

    async fn get_similar_movies(&self, movie_id: u32) -> ApiResult<Vec<VideoThumbnail>> {
        self.client.similar(VideoKind::Movie, movie_id).await
    }

    async fn get_trending_movies(&self) -> ApiResult<Vec<VideoThumbnail>> {
        self.client.trending_movies().await
    }

    fn movies_stream(&self, list_type: MovieListType) -> VideoStream {
        let client = self.client.clone();
        paginate(move |page| {
            let client = client.clone();
            async move { client.movie_list(list_type, page).await }
        })
    }
}

#[derive(Clone, Debug)]
pub struct TmdbShowsRepository {
    client: TmdbClient,
}

impl TmdbShowsRepository {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ShowsRepository for TmdbShowsRepository {
    async fn get_show_details(&self, show_id: u32) -> ApiResult<VideoDetail> {
        self.client.show_details(show_id).await
    }

    async fn get_show_credits(&self, show_id: u32) -> ApiResult<Vec<CreditItem>> {
        self.client.credits(VideoKind::Show, show_id).await
    }

    async fn get_similar_shows(&self, show_id: u32) -> ApiResult<Vec<VideoThumbnail>> {
        self.client.similar(VideoKind::Show, show_id).await
    }

    fn shows_stream(&self, list_type: ShowListType) -> VideoStream {
        let client = self.client.clone();
        paginate(move |page| {
            let client = client.clone();
            async move { client.show_list(list_type, page).await }
        })
    }
}
