//! State holder of the detail screen
//!
//! Detail, credits and similar titles load concurrently into three independent
//! cells. A failure in one section never blocks or clears the others.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{
    CreditState, DetailState, Failure, OneShot, SimilarState, StateCell, VideoIds, VideoKind,
};
use crate::usecase::UseCases;

use super::tasks::TaskGroup;

pub struct DetailScreen {
    kind: VideoKind,
    id: u32,
    use_cases: UseCases,
    detail: Arc<StateCell<DetailState>>,
    credits: Arc<StateCell<CreditState>>,
    similar: Arc<StateCell<SimilarState>>,
    navigate_to_player: Arc<OneShot<String>>,
    loads: TaskGroup,
    stream_load: TaskGroup,
}

impl DetailScreen {
    pub fn new(kind: VideoKind, id: u32, use_cases: UseCases) -> Self {
        Self {
            kind,
            id,
            use_cases,
            detail: Arc::new(StateCell::new(DetailState::default())),
            credits: Arc::new(StateCell::new(CreditState::default())),
            similar: Arc::new(StateCell::new(SimilarState::default())),
            navigate_to_player: Arc::new(OneShot::new()),
            loads: TaskGroup::new(),
            stream_load: TaskGroup::new(),
        }
    }

    /// Create the holder and start the first load
    pub fn mount(kind: VideoKind, id: u32, use_cases: UseCases) -> Self {
        let screen = Self::new(kind, id, use_cases);
        screen.load();
        screen
    }

    pub fn kind(&self) -> VideoKind {
        self.kind
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Load detail, credits and similar titles. Supersedes any load in flight.
    pub fn load(&self) {
        let ticket = self.loads.restart();
        tracing::debug!(kind = ?self.kind, id = self.id, "Loading detail screen");

        self.detail.update(|s| s.screen.begin_load());
        self.credits.update(|s| s.begin_load());
        self.similar.update(|s| s.begin_load());

        let (kind, id) = (self.kind, self.id);

        {
            let cell = self.detail.clone();
            let use_case = self.use_cases.get_video_details.clone();
            let ticket = ticket.clone();
            self.loads.spawn(async move {
                let result = use_case.call(kind, id).await;
                cell.update_if(|s| {
                    if !ticket.is_current() {
                        return false;
                    }
                    match result {
                        Ok(detail) => s.screen.succeed(detail),
                        Err(e) => s.screen.fail(e),
                    }
                    true
                });
            });
        }

        {
            let cell = self.credits.clone();
            let use_case = self.use_cases.get_credits.clone();
            let ticket = ticket.clone();
            self.loads.spawn(async move {
                let result = use_case.call(kind, id).await;
                cell.update_if(|s| {
                    if !ticket.is_current() {
                        return false;
                    }
                    match result {
                        Ok(credits) => s.succeed(credits),
                        Err(e) => s.fail(e),
                    }
                    true
                });
            });
        }

        {
            let cell = self.similar.clone();
            let use_case = self.use_cases.get_similar.clone();
            self.loads.spawn(async move {
                let result = use_case.call(kind, id).await;
                cell.update_if(|s| {
                    if !ticket.is_current() {
                        return false;
                    }
                    match result {
                        Ok(similar) => s.succeed(similar),
                        Err(e) => s.fail(e),
                    }
                    true
                });
            });
        }
    }

    /// Reload after a failure in any section
    pub fn retry(&self) -> bool {
        let failed = self.detail.get().screen.can_retry()
            || self.credits.get().can_retry()
            || self.similar.get().can_retry();
        if failed {
            self.load();
        }
        failed
    }

    /// Reload once the detail section has loaded
    pub fn refresh(&self) -> bool {
        let loaded = self.detail.get().screen.can_refresh();
        if loaded {
            self.load();
        }
        loaded
    }

    /// Resolve the stream URL; success is delivered once through `navigate_to_player`
    pub fn load_stream_info(&self) {
        let mut started = false;
        self.detail.update_if(|s| {
            if s.is_stream_loading {
                return false;
            }
            s.is_stream_loading = true;
            s.stream_failure = None;
            started = true;
            true
        });
        if !started {
            return;
        }

        let ticket = self.stream_load.restart();
        let ids = self.ids();
        let kind = self.kind;
        let cell = self.detail.clone();
        let event = self.navigate_to_player.clone();
        let use_case = self.use_cases.load_stream_info.clone();

        self.stream_load.spawn(async move {
            let result = use_case.call(kind, &ids).await;
            let committed = cell.update_if(|s| {
                if !ticket.is_current() {
                    return false;
                }
                s.is_stream_loading = false;
                if let Err(e) = &result {
                    s.stream_failure = Some(Failure::new(e.clone()));
                }
                true
            });

            match result {
                Ok(url) if committed => {
                    tracing::info!(?kind, url = %url, "Stream URL resolved");
                    event.emit(url);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(?kind, ?ids, error = %e, "Failed to resolve stream URL"),
            }
        });
    }

    /// Record the item as watched. Fire-and-forget; failures are only logged.
    pub fn add_item_to_history(&self) {
        let ids = self.ids();
        let kind = self.kind;
        let use_case = self.use_cases.add_to_history.clone();
        tokio::spawn(async move {
            if let Err(e) = use_case.call(kind, &ids).await {
                tracing::warn!(?kind, ?ids, error = %e, "Failed to add item to history");
            }
        });
    }

    /// Abort every load; nothing is committed afterwards
    pub fn unmount(&self) {
        tracing::debug!(kind = ?self.kind, id = self.id, "Unmounting detail screen");
        self.loads.cancel();
        self.stream_load.cancel();
    }

    /// Pending player navigation, consumed on read
    pub fn take_player_navigation(&self) -> Option<String> {
        self.navigate_to_player.take()
    }

    pub fn navigate_to_player(&self) -> &OneShot<String> {
        &self.navigate_to_player
    }

    pub fn detail_state(&self) -> DetailState {
        self.detail.get()
    }

    pub fn credit_state(&self) -> CreditState {
        self.credits.get()
    }

    pub fn similar_state(&self) -> SimilarState {
        self.similar.get()
    }

    pub fn subscribe_detail(&self) -> watch::Receiver<DetailState> {
        self.detail.subscribe()
    }

    pub fn subscribe_credits(&self) -> watch::Receiver<CreditState> {
        self.credits.subscribe()
    }

    pub fn subscribe_similar(&self) -> watch::Receiver<SimilarState> {
        self.similar.subscribe()
    }

    fn ids(&self) -> VideoIds {
        self.detail
            .get()
            .screen
            .payload
            .map(|detail| detail.ids)
            .unwrap_or_else(|| VideoIds::tmdb(self.id))
    }
}

impl Drop for DetailScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}
