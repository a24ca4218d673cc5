//! One-shot rendezvous between a producer and any number of blocking waiters.
//!
//! A [`ResolvableFuture`] starts pending and moves exactly once to a terminal state:
//! resolved with a value, rejected with an error, or cancelled. Later terminal calls
//! are ignored and report `false`.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use thiserror::Error;


/// Why [`ResolvableFuture::get`] did not produce a value.
#[derive(Debug, Clone, Error)]
pub enum FutureError {
    #[error("future was cancelled")]
    Cancelled,
    #[error("future was rejected: {0}")]
    Rejected(Arc<dyn Error + Send + Sync>),
    /// Only returned by [`ResolvableFuture::get_timeout`]; the future stays pending.
    #[error("timed out waiting for future")]
    Timeout,
}

impl FutureError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FutureError::Cancelled)
    }
}

enum State<T> {
    Pending,
    Resolved(T),
    Rejected(FutureError),
}

impl<T: Clone> State<T> {
    fn outcome(&self) -> Option<Result<T, FutureError>> {
        match self {
            State::Pending => None,
            State::Resolved(value) => Some(Ok(value.clone())),
            State::Rejected(error) => Some(Err(error.clone())),
        }
    }
}

pub struct ResolvableFuture<T> {
    state: Mutex<State<T>>,
    changed: Condvar,
}

impl<T> ResolvableFuture<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Pending),
            changed: Condvar::new(),
        }
    }

    /// Stores `value` and wakes every waiter. Returns `false` if already terminal.
    pub fn resolve(&self, value: T) -> bool {
        self.complete(State::Resolved(value), "resolved")
    }

    /// Stores `error` and wakes every waiter. Returns `false` if already terminal.
    pub fn reject(&self, error: impl Into<Box<dyn Error + Send + Sync>>) -> bool {
        let error: Arc<dyn Error + Send + Sync> = Arc::from(error.into());
        self.complete(State::Rejected(FutureError::Rejected(error)), "rejected")
    }

    /// Rejects with [`FutureError::Cancelled`]. Returns `false` if already terminal.
    pub fn cancel(&self) -> bool {
        self.complete(State::Rejected(FutureError::Cancelled), "cancelled")
    }

    pub fn is_pending(&self) -> bool {
        matches!(*self.lock(), State::Pending)
    }

    pub fn is_done(&self) -> bool {
        !self.is_pending()
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(*self.lock(), State::Rejected(FutureError::Cancelled))
    }

    fn complete(&self, next: State<T>, what: &'static str) -> bool {
        let mut state = self.lock();
        if !matches!(*state, State::Pending) {
            tracing::trace!(what, "ignoring transition of a completed future");
            return false;
        }
        *state = next;
        drop(state);
        tracing::debug!(what, "future completed");
        self.changed.notify_all();
        true
    }

    // A panicking waiter cannot leave the state half-written, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> ResolvableFuture<T> {
    /// Blocks until the future is terminal and returns its outcome.
    pub fn get(&self) -> Result<T, FutureError> {
        let mut state = self.lock();
        loop {
            if let Some(outcome) = state.outcome() {
                return outcome;
            }
            state = self
                .changed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Like [`ResolvableFuture::get`], giving up with [`FutureError::Timeout`] once
    /// `timeout` has elapsed. Spurious wakeups do not extend the deadline.
    pub fn get_timeout(&self, timeout: Duration) -> Result<T, FutureError> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.get();
        };
        let mut state = self.lock();
        loop {
            if let Some(outcome) = state.outcome() {
                return outcome;
            }
            let now = Instant::now();
            if now >= deadline {
                tracing::debug!(?timeout, "timed out waiting for future");
                return Err(FutureError::Timeout);
            }
            let (next, _) = self
                .changed
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            state = next;
        }
    }

    /// The outcome if terminal, without blocking.
    pub fn try_get(&self) -> Option<Result<T, FutureError>> {
        self.lock().outcome()
    }
}

impl<T> Default for ResolvableFuture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ResolvableFuture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.lock() {
            State::Pending => "Pending",
            State::Resolved(_) => "Resolved",
            State::Rejected(FutureError::Cancelled) => "Cancelled",
            State::Rejected(_) => "Rejected",
        };
        f.debug_struct("ResolvableFuture")
            .field("state", &state)
            .finish()
    }
}
