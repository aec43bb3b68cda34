// 🔁 Page activation
// One activation = one mount of a page = one fetch-and-render cycle.
//
// The slot remembers which activation is current. A response settles the slot
// only if its activation is still current and the slot was not disposed, and
// only once. Stale responses are dropped.

use crate::fetcher::FetchState;
use std::sync::{PoisonError, RwLock};

/// Token handed out by `PageSlot::activate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    generation: u64,
}

impl Activation {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct SlotInner<E> {
    generation: u64,
    disposed: bool,
    state: FetchState<E>,
}

/// Request-scoped state holder for one page
#[derive(Debug)]
pub struct PageSlot<E> {
    inner: RwLock<SlotInner<E>>,
}

impl<E> Default for PageSlot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PageSlot<E> {
    pub fn new() -> Self {
        PageSlot {
            inner: RwLock::new(SlotInner {
                generation: 0,
                disposed: false,
                state: FetchState::Loading,
            }),
        }
    }

    /// Start a fresh activation. Supersedes any in-flight one.
    pub fn activate(&self) -> Activation {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.generation += 1;
        inner.disposed = false;
        inner.state = FetchState::Loading;

        Activation {
            generation: inner.generation,
        }
    }

    /// Apply a terminal state. Returns `false` when the result was discarded.
    pub fn settle(&self, activation: &Activation, state: FetchState<E>) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if inner.disposed || inner.generation != activation.generation {
            tracing::debug!(
                activation = activation.generation,
                current = inner.generation,
                disposed = inner.disposed,
                "discarding stale fetch result"
            );
            return false;
        }

        if inner.state.is_terminal() || !state.is_terminal() {
            tracing::debug!(activation = activation.generation, "activation already settled");
            return false;
        }

        inner.state = state;
        true
    }

    /// Tear the consumer down. Every in-flight activation becomes stale.
    pub fn dispose(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.generation += 1;
        inner.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).disposed
    }

    /// Read the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<E>) -> R) -> R {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&inner.state)
    }
}

impl<E: Clone> PageSlot<E> {
    pub fn snapshot(&self) -> FetchState<E> {
        self.with_state(FetchState::clone)
    }
}

// ============================================================================
// TESTS
// ============================================================================
