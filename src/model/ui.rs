//! UI state owned by the app controller and the per-frame screen snapshot

use std::time::{Duration, Instant};

use super::state::{CreditState, DetailState, ListState, ScreenState, SimilarState};
use super::types::{ListType, VideoThumbnail};

/// How long a notice popup stays up
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// Which row of the home screen has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Trending,
    Lists,
}

impl HomeSection {
    pub fn next(self) -> Self {
        match self {
            Self::Trending => Self::Lists,
            Self::Lists => Self::Trending,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub home_section: HomeSection,
    pub trending_selected: usize,
    pub list_selected: usize,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub show_help: bool,
}

impl UiState {
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.notice_timestamp = Some(Instant::now());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_timestamp = None;
    }

    /// Drop the notice once it has been up for `NOTICE_TIMEOUT`
    pub fn auto_clear_old_notice(&mut self, now: Instant) {
        if let Some(timestamp) = self.notice_timestamp {
            if now.saturating_duration_since(timestamp) >= NOTICE_TIMEOUT {
                self.clear_notice();
            }
        }
    }
}

/// Everything the renderer needs for the screen on top of the stack
#[derive(Clone, Debug)]
pub enum ScreenView {
    Home {
        trending: ScreenState<Vec<VideoThumbnail>>,
        lists: Vec<ListType>,
    },
    List {
        list_type: ListType,
        state: ListState,
        selected: usize,
    },
    Detail {
        detail: DetailState,
        credits: CreditState,
        similar: SimilarState,
        selected: usize,
    },
}
