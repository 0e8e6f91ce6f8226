//! Use-cases: one operation per user intent
//!
//! Each use-case forwards to a repository and carries no state of its own
//! beyond the collaborators it was built with.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::model::{
    CreditItem, HistoryRepository, ListType, MovieRepository, ShowsRepository, StreamRepository,
    VideoDetail, VideoIds, VideoKind, VideoStream, VideoThumbnail,
};

/// Detail record of a movie or show, with the watch flag filled from history
#[derive(Clone)]
pub struct GetVideoDetails {
    movies: Arc<dyn MovieRepository>,
    shows: Arc<dyn ShowsRepository>,
    history: Arc<dyn HistoryRepository>,
}

impl GetVideoDetails {
    pub fn new(
        movies: Arc<dyn MovieRepository>,
        shows: Arc<dyn ShowsRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self { movies, shows, history }
    }

    pub async fn call(&self, kind: VideoKind, id: u32) -> ApiResult<VideoDetail> {
        let mut detail = match kind {
            VideoKind::Movie => self.movies.get_movie_details(id).await?,
            VideoKind::Show => self.shows.get_show_details(id).await?,
        };

        // History is best effort; an unreadable store leaves the flag unknown
        match self.history.is_watched(kind, &detail.ids).await {
            Ok(watched) => detail.is_watched = Some(watched),
            Err(e) => tracing::warn!(?kind, id, error = %e, "Could not read watch history"),
        }
        Ok(detail)
    }
}

#[derive(Clone)]
pub struct GetCredits {
    movies: Arc<dyn MovieRepository>,
    shows: Arc<dyn ShowsRepository>,
}

impl GetCredits {
    pub fn new(movies: Arc<dyn MovieRepository>, shows: Arc<dyn ShowsRepository>) -> Self {
        Self { movies, shows }
    }

    pub async fn call(&self, kind: VideoKind, id: u32) -> ApiResult<Vec<CreditItem>> {
        match kind {
            VideoKind::Movie => self.movies.get_movie_credits(id).await,
            VideoKind::Show => self.shows.get_show_credits(id).await,
        }
    }
}

#[derive(Clone)]
pub struct GetSimilar {
    movies: Arc<dyn MovieRepository>,
    shows: Arc<dyn ShowsRepository>,
}

impl GetSimilar {
    pub fn new(movies: Arc<dyn MovieRepository>, shows: Arc<dyn ShowsRepository>) -> Self {
        Self { movies, shows }
    }

    pub async fn call(&self, kind: VideoKind, id: u32) -> ApiResult<Vec<VideoThumbnail>> {
        match kind {
            VideoKind::Movie => self.movies.get_similar_movies(id).await,
            VideoKind::Show => self.shows.get_similar_shows(id).await,
        }
    }
}

#[derive(Clone)]
pub struct GetTrendingMovies {
    movies: Arc<dyn MovieRepository>,
}

impl GetTrendingMovies {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn call(&self) -> ApiResult<Vec<VideoThumbnail>> {
        self.movies.get_trending_movies().await
    }
}

/// Fresh page stream for a list; every call restarts from page 1
#[derive(Clone)]
pub struct ObserveListStream {
    movies: Arc<dyn MovieRepository>,
    shows: Arc<dyn ShowsRepository>,
}

impl ObserveListStream {
    pub fn new(movies: Arc<dyn MovieRepository>, shows: Arc<dyn ShowsRepository>) -> Self {
        Self { movies, shows }
    }

    pub fn call(&self, list_type: ListType) -> VideoStream {
        tracing::debug!(?list_type, "Opening list stream");
        match list_type {
            ListType::Movies(list) => self.movies.movies_stream(list),
            ListType::Shows(list) => self.shows.shows_stream(list),
        }
    }
}

#[derive(Clone)]
pub struct LoadStreamInfo {
    streams: Arc<dyn StreamRepository>,
}

impl LoadStreamInfo {
    pub fn new(streams: Arc<dyn StreamRepository>) -> Self {
        Self { streams }
    }

    pub async fn call(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<String> {
        self.streams.stream_url(kind, ids).await
    }
}

#[derive(Clone)]
pub struct AddToHistory {
    history: Arc<dyn HistoryRepository>,
}

impl AddToHistory {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    pub async fn call(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<()> {
        self.history.add_to_history(kind, ids).await
    }
}

/// Every use-case the screens need, built once from the repositories
#[derive(Clone)]
pub struct UseCases {
    pub get_video_details: GetVideoDetails,
    pub get_credits: GetCredits,
    pub get_similar: GetSimilar,
    pub get_trending_movies: GetTrendingMovies,
    pub observe_list: ObserveListStream,
    pub load_stream_info: LoadStreamInfo,
    pub add_to_history: AddToHistory,
}

impl UseCases {
    pub fn new(
        movies: Arc<dyn MovieRepository>,
        shows: Arc<dyn ShowsRepository>,
        history: Arc<dyn HistoryRepository>,
        streams: Arc<dyn StreamRepository>,
    ) -> Self {
        Self {
            get_video_details: GetVideoDetails::new(movies.clone(), shows.clone(), history.clone()),
            get_credits: GetCredits::new(movies.clone(), shows.clone()),
            get_similar: GetSimilar::new(movies.clone(), shows.clone()),
            get_trending_movies: GetTrendingMovies::new(movies.clone()),
            observe_list: ObserveListStream::new(movies, shows),
            load_stream_info: LoadStreamInfo::new(streams),
            add_to_history: AddToHistory::new(history),
        }
    }
}
