//! View module - UI rendering
//!
//! Pure functions from a screen snapshot to a ratatui frame. Nothing here
//! mutates state; actions go back through the controller.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (styles, truncation, scrollable lists)
//! - `layout`: Top bar and key hints
//! - `home`: Trending movies and list catalogue
//! - `list`: Paginated list screen
//! - `detail`: Detail screen with cast and similar titles
//! - `overlays`: Loading and failure panes, notice and help popups

mod utils;
mod layout;
mod home;
mod list;
mod detail;
mod overlays;

pub use overlays::{RETRY_HINT, illustration};
pub use utils::argb_color;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ScreenView, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, screen: &ScreenView, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(0),    // Screen content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        let (title, loading) = Self::heading(screen);
        layout::render_top_bar(frame, chunks[0], &title, loading);

        match screen {
            ScreenView::Home { trending, lists } => {
                home::render_home(frame, chunks[1], trending, lists, ui_state);
                layout::render_key_hints(
                    frame,
                    chunks[2],
                    &[("←→", "section"), ("↑↓", "move"), ("Enter", "open"), ("r", "reload"), ("h", "help"), ("q", "quit")],
                );
            }
            ScreenView::List { list_type, state, selected } => {
                list::render_list(frame, chunks[1], *list_type, state, *selected);
                layout::render_key_hints(
                    frame,
                    chunks[2],
                    &[("↑↓", "move"), ("Enter", "open"), ("Esc", "back"), ("r", "retry/refresh"), ("q", "quit")],
                );
            }
            ScreenView::Detail { detail, credits, similar, selected } => {
                detail::render_detail(frame, chunks[1], detail, credits, similar, *selected);
                layout::render_key_hints(
                    frame,
                    chunks[2],
                    &[("p", "play"), ("w", "watched"), ("↑↓", "similar"), ("Enter", "open"), ("Esc", "back"), ("r", "retry/refresh")],
                );
            }
        }

        // Notice overlay (if there's one)
        if ui_state.notice.is_some() {
            overlays::render_notice(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help {
            overlays::render_help_popup(frame);
        }
    }

    fn heading(screen: &ScreenView) -> (String, bool) {
        match screen {
            ScreenView::Home { trending, .. } => ("Home".to_string(), trending.is_loading),
            ScreenView::List { list_type, state, .. } => {
                (format!("Home › {}", list_type.title()), state.screen.is_loading)
            }
            ScreenView::Detail { detail, credits, similar, .. } => {
                let title = detail
                    .screen
                    .payload
                    .as_ref()
                    .map(|d| format!("{} › {}", d.kind.label(), d.title))
                    .unwrap_or_else(|| "Details".to_string());
                let loading = detail.screen.is_loading || credits.is_loading || similar.is_loading;
                (title, loading)
            }
        }
    }
}
