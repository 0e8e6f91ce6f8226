//! Controller module - Screen state holders and event handling
//!
//! This module contains the app controller that owns the navigation stack,
//! translates key presses into state-holder calls and launches the player.
//! It is organized into submodules by responsibility:
//!
//! - `tasks`: Abortable, generation-tagged loads
//! - `home`: Trending movies on the home screen
//! - `list`: Paginated list screens
//! - `detail`: Detail screen with credits and similar titles
//! - `navigation`: Screen stack and player hand-off
//! - `input`: Key event handling

mod tasks;
mod home;
mod list;
mod detail;
mod navigation;
mod input;

use std::time::Instant;

pub use detail::DetailScreen;
pub use home::{HomeScreen, TrendingState};
pub use list::{ListScreen, PREFETCH_DISTANCE};
pub use navigation::{CommandLauncher, Navigator, PlayerLauncher, player_args};
pub use tasks::{TaskGroup, Ticket};

use crate::model::{ListType, ScreenView, UiState};
use crate::usecase::UseCases;

/// A mounted screen above the home screen
pub enum Route {
    List { screen: ListScreen, selected: usize },
    Detail { screen: DetailScreen, selected: usize },
}

impl Route {
    fn unmount(&self) {
        match self {
            Route::List { screen, .. } => screen.unmount(),
            Route::Detail { screen, .. } => screen.unmount(),
        }
    }
}

pub struct AppController {
    pub(crate) use_cases: UseCases,
    pub(crate) launcher: Box<dyn PlayerLauncher>,
    pub(crate) home: HomeScreen,
    pub(crate) routes: Vec<Route>,
    pub(crate) ui: UiState,
    should_quit: bool,
}

impl AppController {
    /// Mount the home screen and start loading it
    pub fn new(use_cases: UseCases, launcher: Box<dyn PlayerLauncher>) -> Self {
        let home = HomeScreen::mount(use_cases.get_trending_movies.clone());
        Self {
            use_cases,
            launcher,
            home,
            routes: Vec::new(),
            ui: UiState::default(),
            should_quit: false,
        }
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn top(&self) -> Option<&Route> {
        self.routes.last()
    }

    /// Per-frame housekeeping: expire the notice and deliver pending player navigation
    pub fn tick(&mut self) {
        self.ui.auto_clear_old_notice(Instant::now());

        let pending = match self.routes.last() {
            Some(Route::Detail { screen, .. }) => screen.take_player_navigation(),
            _ => None,
        };
        if let Some(url) = pending {
            self.open_player(&url);
        }
    }

    /// Snapshot of the top screen for rendering
    pub fn screen_view(&self) -> ScreenView {
        match self.routes.last() {
            None => ScreenView::Home {
                trending: self.home.trending(),
                lists: ListType::all(),
            },
            Some(Route::List { screen, selected }) => ScreenView::List {
                list_type: screen.list_type(),
                state: screen.state(),
                selected: *selected,
            },
            Some(Route::Detail { screen, selected }) => ScreenView::Detail {
                detail: screen.detail_state(),
                credits: screen.credit_state(),
                similar: screen.similar_state(),
                selected: *selected,
            },
        }
    }

    pub fn shutdown(&mut self) {
        while self.back() {}
        self.home.unmount();
    }
}
