//! Host capabilities resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and auth logic never probes for `window` on its own. The root
//! component builds a single [`Host`] and every store receives it, so the same
//! code runs in the browser, during SSR (headless), and under unit tests with
//! in-memory doubles.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Which environment the app is running in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostKind {
    /// A browser with storage, timers and navigation.
    Browser,
    /// Server-side rendering or any context without browser primitives.
    Headless,
}

/// A string key/value persistence area (`localStorage`-like).
pub trait StorageArea: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Wall-clock source.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Whole seconds since the Unix epoch.
    fn now_secs(&self) -> i64 {
        self.now_millis().div_euclid(1000)
    }
}

/// Handle to a scheduled one-shot task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Deferred work run by a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// One-shot timer facility (`setTimeout`-like).
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId;
    fn cancel(&self, id: TimerId);
}

/// Full-page navigation and the blocking dialog shown before it.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);

    /// Show `message` and block until acknowledged. Must survive a following
    /// `navigate`, which reloads the app and drops in-memory state.
    fn alert(&self, message: &str);
}

/// Bundle of capabilities injected into stores and the session controller.
#[derive(Clone)]
pub struct Host {
    pub kind: HostKind,
    /// Survives browser restarts (`localStorage`).
    pub durable: Arc<dyn StorageArea>,
    /// Scoped to the tab (`sessionStorage`).
    pub session: Arc<dyn StorageArea>,
    pub clock: Arc<dyn Clock>,
    pub scheduler: Arc<dyn Scheduler>,
    pub navigator: Arc<dyn Navigator>,
}

impl Host {
    /// Host without browser primitives. Storage is in-memory and timers and
    /// navigation are inert.
    pub fn headless() -> Self {
        Self {
            kind: HostKind::Headless,
            durable: Arc::new(MemoryArea::default()),
            session: Arc::new(MemoryArea::default()),
            clock: Arc::new(SystemClock),
            scheduler: Arc::new(InertScheduler),
            navigator: Arc::new(InertNavigator),
        }
    }

    /// Resolve the host for the current process: the browser when compiled
    /// for hydration and a `window` exists, headless otherwise.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(host) = super::host_browser::browser_host() {
                return host;
            }
        }
        Self::headless()
    }

    pub fn is_browser(&self) -> bool {
        self.kind == HostKind::Browser
    }
}

/// In-memory storage area used headless and in tests.
#[derive(Default)]
pub struct MemoryArea {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryArea {
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageArea for MemoryArea {
    fn get(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Clock backed by `SystemTime`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Scheduler that never runs anything.
pub struct InertScheduler;

impl Scheduler for InertScheduler {
    fn schedule(&self, _delay: Duration, _task: Task) -> TimerId {
        TimerId(0)
    }

    fn cancel(&self, _id: TimerId) {}
}

/// Navigator that ignores requests.
pub struct InertNavigator;

impl Navigator for InertNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("headless navigation to {path} ignored");
    }

    fn alert(&self, message: &str) {
        log::info!("headless alert: {message}");
    }
}
