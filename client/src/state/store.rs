//! Process-wide state container.
//!
//! DESIGN
//! ======
//! Stores hold plain state behind a mutex and notify subscribers after every
//! change. The UI bridges a store into a Leptos signal with one subscription,
//! while the async store operations stay testable without a reactive runtime.
//! Listeners run after the lock is released, so they may read or even write
//! the store again.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

/// Shared, clonable handle to one piece of state.
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: Clone + Send + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Arc::new(Mutex::new(Inner { value, next_id: 1, listeners: Vec::new() })) }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Read through a borrow without cloning the whole value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let (snapshot, listeners) = {
            let mut inner = self.lock();
            f(&mut inner.value);
            let listeners: Vec<Listener<T>> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.value.clone(), listeners)
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(existing, _)| *existing != id);
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
