//! Model module - Domain records, screen state and data access
//!
//! This module contains the data structures and the repositories that feed the screens.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Domain records (videos, credits, pages, list selectors)
//! - `state`: Per-screen load state (`ScreenState`, `DetailState`, `ListState`)
//! - `observable`: Latest-value state cells and the one-shot event slot
//! - `tmdb_dto` / `tmdb_client`: TMDB wire types and the HTTP client
//! - `paging`: Lazy, deduplicating page streams
//! - `repository`: Movie and show repositories over TMDB
//! - `history`: Local watch history
//! - `stream`: Stream URL resolution
//! - `ui`: Controller-owned UI state and the per-frame screen snapshot

mod types;
mod state;
mod observable;
mod tmdb_dto;
mod tmdb_client;
mod paging;
mod repository;
mod history;
mod stream;
mod ui;

// Re-export all public types for convenient access
pub use types::{
    CreditItem, ListType, MovieListType, Page, ShowListType, VideoDetail, VideoIds, VideoKind,
    VideoThumbnail, VOTE_COLOR_HIGH, VOTE_COLOR_LOW, VOTE_COLOR_MEDIUM, VOTE_COLOR_NONE,
};

pub use state::{
    CreditState, DetailState, Failure, ListState, LoadPhase, ScreenState, SimilarState,
};

pub use observable::{OneShot, StateCell};

pub use tmdb_dto::MAX_CAST;
pub use tmdb_client::TmdbClient;
pub use paging::{VideoStream, paginate};

pub use repository::{MovieRepository, ShowsRepository, TmdbMovieRepository, TmdbShowsRepository};
pub use history::{HistoryRepository, LocalHistoryStore};
pub use stream::{StreamRepository, TemplateStreamResolver};

pub use ui::{HomeSection, NOTICE_TIMEOUT, ScreenView, UiState};
