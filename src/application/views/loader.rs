use super::{LoadFailure, LoadState};
use crate::shared::error::ApiError;
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

/// The boxed single-value call a view hands to its loader
pub type LoadFuture<T> = BoxFuture<'static, Result<T, ApiError>>;

struct Slot<T> {
    generation: u64,
    state: LoadState<T>,
}

/// Cancellable holder for one view's load
///
/// Each `start` spawns the call on the tokio runtime and stamps it with a
/// fresh generation. A completion whose generation no longer matches is
/// dropped, so a deactivated or re-activated view never sees a stale write
/// even if the abort races with the response.
pub struct Loader<T> {
    label: &'static str,
    slot: Arc<Mutex<Slot<T>>>,
    task: Option<JoinHandle<()>>,
}

fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    // The slot holds plain data; a panic elsewhere cannot leave it half-written
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone + Send + 'static> Loader<T> {
    /// Creates an idle loader; `label` names the data in diagnostics
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                state: LoadState::Idle,
            })),
            task: None,
        }
    }

    /// Starts a new load, cancelling any load still in flight
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, load: LoadFuture<T>) {
        let generation = self.advance(LoadState::Loading);
        let slot = Arc::clone(&self.slot);
        let label = self.label;

        self.task = Some(tokio::spawn(async move {
            let result = load.await;

            let mut slot = lock(&slot);
            if slot.generation != generation {
                tracing::debug!(view = label, "Discarding result of a cancelled load");
                return;
            }

            match &result {
                Ok(_) => tracing::debug!(view = label, "Loaded {}", label),
                Err(e) => tracing::error!(view = label, error = %e, "Error fetching {}", label),
            }
            slot.state = LoadState::from_result(result);
        }));
    }

    /// Ends the activation with a failure that happened before any request
    pub fn fail(&mut self, failure: LoadFailure) {
        tracing::warn!(view = self.label, reason = %failure.message, "Load rejected");
        self.advance(LoadState::Failed(failure));
    }

    /// Cancels the in-flight load (if any) and drops the stored result
    pub fn cancel(&mut self) {
        self.advance(LoadState::Idle);
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadState<T> {
        lock(&self.slot).state.clone()
    }

    /// The loaded value, if the load succeeded
    pub fn data(&self) -> Option<T> {
        lock(&self.slot).state.data().cloned()
    }

    /// Waits until the current load has completed or been cancelled
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if e.is_panic() {
                    tracing::error!(view = self.label, "Load task panicked");
                }
            }
        }
    }

    /// Aborts the running task, bumps the generation and installs `state`
    fn advance(&mut self, state: LoadState<T>) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.state = state;
        slot.generation
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
