//! Spawned loads owned by a screen state holder

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::AbortHandle;

/// Identifies one load; stale once a newer load starts or the screen unmounts
#[derive(Clone, Debug)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Set of in-flight tasks sharing one generation counter
#[derive(Debug, Default)]
pub struct TaskGroup {
    generation: Arc<AtomicU64>,
    handles: Mutex<Vec<AbortHandle>>,
}

impl TaskGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort whatever is running and hand out a ticket for the next load
    pub fn restart(&self) -> Ticket {
        self.abort_all();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            current: self.generation.clone(),
        }
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future).abort_handle();
        if let Ok(mut handles) = self.handles.lock() {
            handles.retain(|h| !h.is_finished());
            handles.push(handle);
        }
    }

    /// Abort everything and invalidate outstanding tickets
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.abort_all();
    }

    fn abort_all(&self) {
        if let Ok(mut handles) = self.handles.lock() {
            for handle in handles.drain(..) {
                handle.abort();
            }
        }
    }
}

impl Drop for TaskGroup {
    fn drop(&mut self) {
        self.cancel();
    }
}
