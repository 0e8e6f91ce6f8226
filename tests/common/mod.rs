#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use filmtime::error::{ApiResult, GeneralError};
use filmtime::model::{
    CreditItem, HistoryRepository, MovieListType, MovieRepository, Page, ShowListType,
    ShowsRepository, StreamRepository, VideoDetail, VideoIds, VideoKind, VideoStream,
    VideoThumbnail, paginate,
};
use filmtime::usecase::UseCases;

pub fn fight_club() -> VideoDetail {
    VideoDetail {
        ids: VideoIds { tmdb_id: Some(550), imdb_id: Some("tt0137523".to_string()) },
        kind: VideoKind::Movie,
        title: "Fight Club".to_string(),
        description: "An insomniac office worker and a soap maker form an underground fight club."
            .to_string(),
        poster_url: None,
        cover_url: None,
        runtime: Some(139),
        release_date: "1999-10-15".to_string(),
        vote_average: 0.84,
        vote_color: VideoDetail::vote_color_for(0.84),
        genres: vec!["Drama".to_string()],
        is_watched: None,
    }
}

pub fn thumbnail(id: u32, title: &str, year: i32) -> VideoThumbnail {
    VideoThumbnail {
        ids: VideoIds::tmdb(id),
        kind: VideoKind::Movie,
        title: title.to_string(),
        poster_url: None,
        year: Some(year),
    }
}

pub fn cast() -> Vec<CreditItem> {
    vec![
        CreditItem {
            name: "Edward Norton".to_string(),
            character: Some("The Narrator".to_string()),
            profile_url: None,
        },
        CreditItem {
            name: "Brad Pitt".to_string(),
            character: Some("Tyler Durden".to_string()),
            profile_url: None,
        },
    ]
}

/// In-memory catalogue serving both movies and shows
pub struct FakeCatalog {
    pub detail: Mutex<ApiResult<VideoDetail>>,
    pub credits: Mutex<ApiResult<Vec<CreditItem>>>,
    pub similar: Mutex<ApiResult<Vec<VideoThumbnail>>>,
    pub trending: Mutex<ApiResult<Vec<VideoThumbnail>>>,
    pub delay: Mutex<Duration>,
    pub detail_calls: AtomicUsize,
    pub total_pages: u32,
    pub failing_pages: Arc<Mutex<HashSet<u32>>>,
    pub stream_opens: AtomicUsize,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            detail: Mutex::new(Ok(fight_club())),
            credits: Mutex::new(Ok(cast())),
            similar: Mutex::new(Ok(vec![thumbnail(807, "Se7en", 1995)])),
            trending: Mutex::new(Ok(vec![thumbnail(550, "Fight Club", 1999)])),
            delay: Mutex::new(Duration::ZERO),
            detail_calls: AtomicUsize::new(0),
            total_pages: 3,
            failing_pages: Arc::new(Mutex::new(HashSet::new())),
            stream_opens: AtomicUsize::new(0),
        }
    }
}

impl FakeCatalog {
    pub fn set_detail(&self, result: ApiResult<VideoDetail>) {
        *self.detail.lock().unwrap() = result;
    }

    pub fn set_credits(&self, result: ApiResult<Vec<CreditItem>>) {
        *self.credits.lock().unwrap() = result;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Make `page` fail with a network error until `heal_page` is called
    pub fn fail_page(&self, page: u32) {
        self.failing_pages.lock().unwrap().insert(page);
    }

    pub fn heal_page(&self, page: u32) {
        self.failing_pages.lock().unwrap().remove(&page);
    }

    pub fn stream_opens(&self) -> usize {
        self.stream_opens.load(Ordering::SeqCst)
    }

    fn pages(&self, kind: VideoKind) -> VideoStream {
        self.stream_opens.fetch_add(1, Ordering::SeqCst);
        let total_pages = self.total_pages;
        let failing = self.failing_pages.clone();
        paginate(move |page| {
            let fails = failing.lock().unwrap().contains(&page);
            async move {
                if fails {
                    return Err(GeneralError::NetworkError);
                }
                let results = (0..3)
                    .map(|i| VideoThumbnail {
                        ids: VideoIds::tmdb(page * 100 + i),
                        kind,
                        title: format!("Title {}-{}", page, i),
                        poster_url: None,
                        year: None,
                    })
                    .collect();
                Ok(Page { page, total_pages, results })
            }
        })
    }
}

#[async_trait]
impl MovieRepository for FakeCatalog {
    async fn get_movie_details(&self, _movie_id: u32) -> ApiResult<VideoDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.detail.lock().unwrap().clone()
    }

    async fn get_movie_credits(&self, _movie_id: u32) -> ApiResult<Vec<CreditItem>> {
        self.pause().await;
        self.credits.lock().unwrap().clone()
    }

    async fn get_similar_movies(&self, _movie_id: u32) -> ApiResult<Vec<VideoThumbnail>> {
        self.pause().await;
        self.similar.lock().unwrap().clone()
    }

    async fn get_trending_movies(&self) -> ApiResult<Vec<VideoThumbnail>> {
        self.pause().await;
        self.trending.lock().unwrap().clone()
    }

    fn movies_stream(&self, _list_type: MovieListType) -> VideoStream {
        self.pages(VideoKind::Movie)
    }
}

#[async_trait]
impl ShowsRepository for FakeCatalog {
    async fn get_show_details(&self, show_id: u32) -> ApiResult<VideoDetail> {
        self.get_movie_details(show_id).await.map(|mut detail| {
            detail.kind = VideoKind::Show;
            detail
        })
    }

    async fn get_show_credits(&self, show_id: u32) -> ApiResult<Vec<CreditItem>> {
        self.get_movie_credits(show_id).await
    }

    async fn get_similar_shows(&self, show_id: u32) -> ApiResult<Vec<VideoThumbnail>> {
        self.get_similar_movies(show_id).await
    }

    fn shows_stream(&self, _list_type: ShowListType) -> VideoStream {
        self.pages(VideoKind::Show)
    }
}

#[derive(Default)]
pub struct FakeHistory {
    pub watched: Mutex<HashSet<(VideoKind, u32)>>,
    pub adds: AtomicUsize,
    pub fail_adds: bool,
}

impl FakeHistory {
    pub fn adds(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryRepository for FakeHistory {
    async fn add_to_history(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<()> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        if self.fail_adds {
            return Err(GeneralError::Unknown("disk full".to_string()));
        }
        if let Some(id) = ids.tmdb_id {
            self.watched.lock().unwrap().insert((kind, id));
        }
        Ok(())
    }

    async fn is_watched(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<bool> {
        Ok(ids
            .tmdb_id
            .is_some_and(|id| self.watched.lock().unwrap().contains(&(kind, id))))
    }
}

pub struct FakeStreams {
    pub result: ApiResult<String>,
}

impl Default for FakeStreams {
    fn default() -> Self {
        Self { result: Ok("https://stream.example.org/movie/550.m3u8".to_string()) }
    }
}

#[async_trait]
impl StreamRepository for FakeStreams {
    async fn stream_url(&self, _kind: VideoKind, _ids: &VideoIds) -> ApiResult<String> {
        self.result.clone()
    }
}

pub struct Fixture {
    pub catalog: Arc<FakeCatalog>,
    pub history: Arc<FakeHistory>,
    pub use_cases: UseCases,
}

pub fn fixture_with(catalog: FakeCatalog, history: FakeHistory, streams: FakeStreams) -> Fixture {
    let catalog = Arc::new(catalog);
    let history = Arc::new(history);
    let use_cases = UseCases::new(
        catalog.clone(),
        catalog.clone(),
        history.clone(),
        Arc::new(streams),
    );
    Fixture { catalog, history, use_cases }
}

pub fn fixture() -> Fixture {
    fixture_with(FakeCatalog::default(), FakeHistory::default(), FakeStreams::default())
}

/// Wait until `pred` holds for the latest value, failing the test after two seconds
pub async fn settle<T>(rx: &mut watch::Receiver<T>, pred: impl FnMut(&T) -> bool) -> T
where
    T: Clone,
{
    let value = tokio::time::timeout(Duration::from_secs(2), rx.wait_for(pred))
        .await
        .expect("state did not settle in time")
        .expect("state holder dropped");
    T::clone(&value)
}
