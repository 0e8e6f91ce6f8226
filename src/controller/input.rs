//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{HomeSection, ListType};

use super::navigation::Navigator;
use super::{AppController, Route};

fn move_selection(selected: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Notice popup blocks all other interactions
        if self.ui.notice.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.ui.clear_notice();
            }
            return;
        }

        if self.ui.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                self.ui.show_help = false;
            }
            return;
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.set_should_quit(true);
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.set_should_quit(true);
                return;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.ui.show_help = true;
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.back();
                return;
            }
            _ => {}
        }

        match self.routes.last() {
            None => self.handle_home_key(key.code),
            Some(Route::List { .. }) => self.handle_list_key(key.code),
            Some(Route::Detail { .. }) => self.handle_detail_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        let lists = ListType::all();
        match code {
            KeyCode::Left | KeyCode::Right => {
                self.ui.home_section = self.ui.home_section.next();
            }
            KeyCode::Up | KeyCode::Down => {
                let down = code == KeyCode::Down;
                match self.ui.home_section {
                    HomeSection::Trending => {
                        let len = self.home.trending().payload.map(|p| p.len()).unwrap_or(0);
                        self.ui.trending_selected = move_selection(self.ui.trending_selected, len, down);
                    }
                    HomeSection::Lists => {
                        self.ui.list_selected = move_selection(self.ui.list_selected, lists.len(), down);
                    }
                }
            }
            KeyCode::Enter => match self.ui.home_section {
                HomeSection::Trending => {
                    let item = self
                        .home
                        .trending()
                        .payload
                        .and_then(|items| items.into_iter().nth(self.ui.trending_selected));
                    if let Some(item) = item {
                        self.open_thumbnail(&item);
                    }
                }
                HomeSection::Lists => {
                    if let Some(list_type) = lists.get(self.ui.list_selected).copied() {
                        self.open_list(list_type);
                    }
                }
            },
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.home.reload();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let Some(Route::List { screen, selected }) = self.routes.last_mut() else {
            return;
        };

        match code {
            KeyCode::Up | KeyCode::Down => {
                let len = screen.state().items().len();
                *selected = move_selection(*selected, len, code == KeyCode::Down);
                screen.on_selection(*selected);
            }
            KeyCode::Enter => {
                let item = screen.state().items().get(*selected).cloned();
                if let Some(item) = item {
                    self.open_thumbnail(&item);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if !screen.retry() {
                    screen.refresh();
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        let Some(Route::Detail { screen, selected }) = self.routes.last_mut() else {
            return;
        };

        match code {
            KeyCode::Up | KeyCode::Down => {
                let len = screen.similar_state().payload.map(|p| p.len()).unwrap_or(0);
                *selected = move_selection(*selected, len, code == KeyCode::Down);
            }
            KeyCode::Enter => {
                let item = screen
                    .similar_state()
                    .payload
                    .and_then(|items| items.into_iter().nth(*selected));
                if let Some(item) = item {
                    self.open_thumbnail(&item);
                }
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                screen.load_stream_info();
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                let detail = screen.detail_state().screen.payload;
                // Only unwatched items with a known watch state can be marked
                if let Some(title) = detail.filter(|d| d.is_watched == Some(false)).map(|d| d.title) {
                    screen.add_item_to_history();
                    self.ui.set_notice(format!("Marking \"{}\" as watched", title));
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if !screen.retry() {
                    screen.refresh();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_clamps() {
        assert_eq!(move_selection(0, 0, true), 0);
        assert_eq!(move_selection(0, 3, false), 0);
        assert_eq!(move_selection(1, 3, true), 2);
        assert_eq!(move_selection(2, 3, true), 2);
    }
}
