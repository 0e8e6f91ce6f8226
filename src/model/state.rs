//! Screen state held by the screen state holders and read by the renderer

use crate::error::GeneralError;

use super::types::{CreditItem, VideoDetail, VideoThumbnail};

/// An error together with the message shown for it.
/// Keeping them in one value makes "error iff message" hold by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    pub error: GeneralError,
    pub message: String,
}

impl Failure {
    pub fn new(error: GeneralError) -> Self {
        let message = error.user_message();
        Self { error, message }
    }
}

/// Where a screen is in its load cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// Loading flag, last good payload and optional failure of one screen section
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState<T> {
    pub is_loading: bool,
    pub payload: Option<T>,
    failure: Option<Failure>,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            payload: None,
            failure: None,
        }
    }
}

impl<T> ScreenState<T> {
    /// State at mount time when the first load starts right away
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&GeneralError> {
        self.failure.as_ref().map(|f| &f.error)
    }

    pub fn message(&self) -> Option<&str> {
        self.failure.as_ref().map(|f| f.message.as_str())
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Failure to show on screen. A retry in flight hides the previous one.
    pub fn settled_failure(&self) -> Option<&Failure> {
        if self.is_loading {
            None
        } else {
            self.failure.as_ref()
        }
    }

    /// Start a load. The previous payload stays visible until the result lands.
    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    pub fn succeed(&mut self, payload: T) {
        self.payload = Some(payload);
        self.failure = None;
        self.is_loading = false;
    }

    /// Record a failure. The previous payload is kept.
    pub fn fail(&mut self, error: GeneralError) {
        self.failure = Some(Failure::new(error));
        self.is_loading = false;
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if self.failure.is_some() {
            LoadPhase::Failed
        } else if self.payload.is_some() {
            LoadPhase::Success
        } else {
            LoadPhase::Idle
        }
    }

    /// `retry()` is offered from the failed state only
    pub fn can_retry(&self) -> bool {
        self.phase() == LoadPhase::Failed
    }

    /// `refresh()` is offered once something has loaded
    pub fn can_refresh(&self) -> bool {
        self.phase() == LoadPhase::Success
    }

    pub fn map_payload<F: FnOnce(&mut T)>(&mut self, f: F) {
        if let Some(payload) = self.payload.as_mut() {
            f(payload);
        }
    }
}

/// Main section of the detail screen plus the play-button state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub screen: ScreenState<VideoDetail>,
    pub is_stream_loading: bool,
    pub stream_failure: Option<Failure>,
}

pub type CreditState = ScreenState<Vec<CreditItem>>;
pub type SimilarState = ScreenState<Vec<VideoThumbnail>>;

/// Accumulated pages of a list screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub screen: ScreenState<Vec<VideoThumbnail>>,
    pub end_reached: bool,
}

impl ListState {
    pub fn items(&self) -> &[VideoThumbnail] {
        self.screen.payload.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cycle_flags() {
        let mut state: ScreenState<u32> = ScreenState::default();
        assert_eq!(state.phase(), LoadPhase::Idle);

        state.begin_load();
        assert!(state.is_loading);
        assert_eq!(state.phase(), LoadPhase::Loading);

        state.succeed(7);
        assert!(!state.is_loading);
        assert_eq!(state.payload, Some(7));
        assert!(state.error().is_none());
        assert!(state.can_refresh());
    }

    #[test]
    fn test_failure_keeps_previous_payload() {
        let mut state = ScreenState::default();
        state.succeed("first");
        state.begin_load();
        assert_eq!(state.payload, Some("first"));

        state.fail(GeneralError::NetworkError);
        assert_eq!(state.payload, Some("first"));
        assert_eq!(state.error(), Some(&GeneralError::NetworkError));
        assert!(state.can_retry());
    }

    #[test]
    fn test_error_and_message_travel_together() {
        let mut state: ScreenState<u8> = ScreenState::loading();
        assert_eq!(state.error().is_some(), state.message().is_some());

        state.fail(GeneralError::NotFound);
        assert!(state.error().is_some());
        assert!(!state.message().unwrap().is_empty());

        state.begin_load();
        state.succeed(1);
        assert!(state.error().is_none());
        assert!(state.message().is_none());
    }

    #[test]
    fn test_retry_hides_failure_until_it_settles() {
        let mut state: ScreenState<u8> = ScreenState::default();
        state.fail(GeneralError::NetworkError);
        assert!(state.settled_failure().is_some());

        state.begin_load();
        assert!(state.settled_failure().is_none());
        assert_eq!(state.error(), Some(&GeneralError::NetworkError));

        state.fail(GeneralError::NotFound);
        assert_eq!(state.settled_failure().map(|f| &f.error), Some(&GeneralError::NotFound));
    }

    #[test]
    fn test_failed_reload_still_reports_failed_phase() {
        let mut state = ScreenState::default();
        state.succeed(1);
        state.begin_load();
        state.fail(GeneralError::Unknown("x".to_string()));
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert!(!state.can_refresh());
    }
}
