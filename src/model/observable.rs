//! Observable state cell and one-shot event slot
//!
//! `StateCell` replays its latest value to every subscriber. `OneShot` holds a
//! single pending event that is handed out once and then gone, so a renderer
//! that re-subscribes never sees an old navigation event again.

use std::sync::Mutex;

use tokio::sync::{Notify, watch};

/// Latest-value cell backed by a `watch` channel
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// New subscriber; sees the current value immediately
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Mutate in place and notify subscribers
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        self.tx.send_modify(f);
    }

    /// Mutate in place; subscribers are notified only when `f` returns true
    pub fn update_if<F: FnOnce(&mut T) -> bool>(&self, f: F) -> bool {
        self.tx.send_if_modified(f)
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }
}

/// Consume-on-read event slot.
/// A newer emission replaces one that was never taken.
#[derive(Debug, Default)]
pub struct OneShot<T> {
    slot: Mutex<Option<T>>,
    notify: Notify,
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            notify: Notify::new(),
        }
    }

    pub fn emit(&self, value: T) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(value);
        }
        self.notify.notify_one();
    }

    /// Take the pending event, if any
    pub fn take(&self) -> Option<T> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }

    pub fn is_pending(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Wait until an event is emitted and take it
    pub async fn recv(&self) -> T {
        loop {
            let notified = self.notify.notified();
            if let Some(value) = self.take() {
                return value;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_state_cell_replays_latest_value() {
        let cell = StateCell::new(1);
        cell.set(2);
        cell.update(|v| *v += 1);

        let late = cell.subscribe();
        assert_eq!(*late.borrow(), 3);
        assert_eq!(cell.get(), 3);
    }

    #[test]
    fn test_update_if_skips_notification_when_unchanged() {
        let cell = StateCell::new(1);
        let mut rx = cell.subscribe();
        rx.mark_unchanged();

        assert!(!cell.update_if(|_| false));
        assert!(!rx.has_changed().unwrap());

        assert!(cell.update_if(|v| {
            *v = 5;
            true
        }));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 5);
    }

    #[test]
    fn test_one_shot_is_consumed_once() {
        let event = OneShot::new();
        event.emit("https://example.org/stream.m3u8".to_string());

        assert!(event.is_pending());
        assert_eq!(event.take().as_deref(), Some("https://example.org/stream.m3u8"));
        assert_eq!(event.take(), None);
        assert!(!event.is_pending());
    }

    #[test]
    fn test_one_shot_keeps_latest_unconsumed_value() {
        let event = OneShot::new();
        event.emit(1);
        event.emit(2);
        assert_eq!(event.take(), Some(2));
        assert_eq!(event.take(), None);
    }

    #[tokio::test]
    async fn test_one_shot_recv_waits_for_emit() {
        let event = Arc::new(OneShot::new());
        let emitter = event.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            emitter.emit(42);
        });

        let value = tokio::time::timeout(Duration::from_secs(1), event.recv())
            .await
            .unwrap();
        assert_eq!(value, 42);
        assert_eq!(event.take(), None);
    }
}
