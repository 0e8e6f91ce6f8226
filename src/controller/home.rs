//! State holder of the home screen: this week's trending movies

use std::sync::Arc;

use crate::model::{ScreenState, StateCell, VideoThumbnail};
use crate::usecase::GetTrendingMovies;

use super::tasks::TaskGroup;

pub type TrendingState = ScreenState<Vec<VideoThumbnail>>;

pub struct HomeScreen {
    get_trending_movies: GetTrendingMovies,
    trending: Arc<StateCell<TrendingState>>,
    loads: TaskGroup,
}

impl HomeScreen {
    pub fn new(get_trending_movies: GetTrendingMovies) -> Self {
        Self {
            get_trending_movies,
            trending: Arc::new(StateCell::new(TrendingState::default())),
            loads: TaskGroup::new(),
        }
    }

    pub fn mount(get_trending_movies: GetTrendingMovies) -> Self {
        let screen = Self::new(get_trending_movies);
        screen.load();
        screen
    }

    pub fn load(&self) {
        let ticket = self.loads.restart();
        self.trending.update(|s| s.begin_load());

        let cell = self.trending.clone();
        let use_case = self.get_trending_movies.clone();
        self.loads.spawn(async move {
            let result = use_case.call().await;
            cell.update_if(|s| {
                if !ticket.is_current() {
                    return false;
                }
                match result {
                    Ok(movies) => s.succeed(movies),
                    Err(e) => s.fail(e),
                }
                true
            });
        });
    }

    /// Reload from the failed state, or refresh a loaded one
    pub fn reload(&self) -> bool {
        let state = self.trending.get();
        let allowed = state.can_retry() || state.can_refresh();
        if allowed {
            self.load();
        }
        allowed
    }

    pub fn trending(&self) -> TrendingState {
        self.trending.get()
    }

    pub fn unmount(&self) {
        self.loads.cancel();
    }
}
