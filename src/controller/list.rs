//! State holder of a paginated list screen

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{Mutex, watch};

use crate::model::{ListState, ListType, StateCell, VideoStream};
use crate::usecase::ObserveListStream;

use super::tasks::{TaskGroup, Ticket};

/// Rows left below the selection before the next page is requested
pub const PREFETCH_DISTANCE: usize = 5;

pub struct ListScreen {
    list_type: ListType,
    observe: ObserveListStream,
    state: Arc<StateCell<ListState>>,
    feed: Arc<Mutex<Feed>>,
    loads: TaskGroup,
}

impl ListScreen {
    pub fn new(list_type: ListType, observe: ObserveListStream) -> Self {
        Self {
            list_type,
            observe,
            state: Arc::new(StateCell::new(ListState::default())),
            feed: Arc::new(Mutex::new(Feed::default())),
            loads: TaskGroup::new(),
        }
    }

    /// Create the holder and request the first page
    pub fn mount(list_type: ListType, observe: ObserveListStream) -> Self {
        let screen = Self::new(list_type, observe);
        screen.load_next_page();
        screen
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn state(&self) -> ListState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Request the next page unless one is in flight or the list is exhausted.
    /// Returns whether a request was started.
    pub fn load_next_page(&self) -> bool {
        let mut started = false;
        self.state.update_if(|s| {
            if s.screen.is_loading || s.end_reached {
                return false;
            }
            s.screen.begin_load();
            started = true;
            true
        });
        if !started {
            return false;
        }

        let ticket = self.loads.restart();
        self.spawn_fetch(ticket, false);
        true
    }

    /// Load more when the selection gets close to the end of what is loaded
    pub fn on_selection(&self, selected: usize) {
        let state = self.state.get();
        let len = state.items().len();
        if state.screen.error().is_none() && selected + PREFETCH_DISTANCE >= len {
            self.load_next_page();
        }
    }

    /// Restart from page 1. Loaded items stay visible until the first page replaces them.
    pub fn refresh(&self) {
        tracing::debug!(list_type = ?self.list_type, "Refreshing list");
        let ticket = self.loads.restart();
        self.state.update(|s| {
            s.screen.begin_load();
            // A fresh stream may be longer than the one that ran out
            s.end_reached = false;
        });
        self.spawn_fetch(ticket, true);
    }

    /// Re-request the page that failed. A failed refresh retries page 1.
    pub fn retry(&self) -> bool {
        if !self.state.get().screen.can_retry() {
            return false;
        }
        self.load_next_page()
    }

    pub fn unmount(&self) {
        tracing::debug!(list_type = ?self.list_type, "Unmounting list screen");
        self.loads.cancel();
    }

    fn spawn_fetch(&self, ticket: Ticket, restart: bool) {
        let state = self.state.clone();
        let feed = self.feed.clone();
        let observe = self.observe.clone();
        let list_type = self.list_type;

        self.loads.spawn(async move {
            // One page request at a time per list
            let mut feed = feed.lock().await;
            if restart || feed.stream.is_none() {
                feed.stream = Some(observe.call(list_type));
                feed.replace_next = true;
            }
            let next = match feed.stream.as_mut() {
                Some(stream) => stream.next().await,
                None => None,
            };

            let replace = feed.replace_next;
            let mut landed = false;
            // Superseded fetches drop their page here
            state.update_if(|s| {
                if !ticket.is_current() {
                    return false;
                }
                match next {
                    Some(Ok(items)) => {
                        tracing::debug!(?list_type, count = items.len(), "List page loaded");
                        let mut all = if replace {
                            s.end_reached = false;
                            Vec::new()
                        } else {
                            s.screen.payload.take().unwrap_or_default()
                        };
                        all.extend(items);
                        s.screen.succeed(all);
                        landed = true;
                    }
                    Some(Err(e)) => {
                        tracing::warn!(?list_type, error = %e, "List page failed");
                        s.screen.fail(e);
                    }
                    None => {
                        tracing::debug!(?list_type, "List exhausted");
                        let items = if replace {
                            Vec::new()
                        } else {
                            s.screen.payload.take().unwrap_or_default()
                        };
                        s.screen.succeed(items);
                        s.end_reached = true;
                        landed = true;
                    }
                }
                true
            });
            // Keep replacing until a refresh actually delivers page 1
            if landed {
                feed.replace_next = false;
            }
        });
    }
}

/// Page stream of the list plus whether its next page replaces the loaded items
#[derive(Default)]
struct Feed {
    stream: Option<VideoStream>,
    replace_next: bool,
}

impl Drop for ListScreen {
    fn drop(&mut self) {
        self.loads.cancel();
    }
}

