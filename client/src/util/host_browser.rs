//! Browser implementations of the host capabilities.
//!
//! Only compiled with the `hydrate` feature. Storage failures (quota, private
//! mode) are logged and otherwise ignored, matching how the rest of the UI
//! treats `localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use gloo_timers::callback::Timeout;

use super::host::{Clock, Host, HostKind, Navigator, Scheduler, StorageArea, Task, TimerId};

/// Browsers fire `setTimeout` immediately when the delay overflows an i32.
const MAX_TIMEOUT_MS: u64 = i32::MAX as u64;

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static TIMERS: RefCell<HashMap<TimerId, Timeout>> = RefCell::new(HashMap::new());
}

/// Build the browser host, or `None` when no `window` is reachable.
pub(crate) fn browser_host() -> Option<Host> {
    web_sys::window()?;
    Some(Host {
        kind: HostKind::Browser,
        durable: Arc::new(BrowserArea::Local),
        session: Arc::new(BrowserArea::Session),
        clock: Arc::new(BrowserClock),
        scheduler: Arc::new(BrowserScheduler),
        navigator: Arc::new(LocationNavigator),
    })
}

/// `localStorage` or `sessionStorage`.
#[derive(Clone, Copy, Debug)]
pub enum BrowserArea {
    Local,
    Session,
}

impl BrowserArea {
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl StorageArea for BrowserArea {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            log::warn!("{self:?} storage unavailable; {key} not written");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("{self:?} storage rejected write of {key}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            log::warn!("{self:?} storage unavailable; {key} not removed");
            return;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("{self:?} storage rejected removal of {key}");
        }
    }
}

pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// `setTimeout` scheduler. Live timeouts are parked in a thread-local map so
/// they can be cancelled by id.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed));
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        arm(id, millis, task);
        id
    }

    fn cancel(&self, id: TimerId) {
        // Dropping a gloo `Timeout` clears it.
        let removed = TIMERS.with(|timers| timers.borrow_mut().remove(&id));
        drop(removed);
    }
}

/// Arm `task` after `remaining` ms, chaining intermediate timeouts under the
/// same id when the delay is longer than a single `setTimeout` allows.
fn arm(id: TimerId, remaining: u64, task: Task) {
    let step = remaining.min(MAX_TIMEOUT_MS);
    let rest = remaining - step;
    #[allow(clippy::cast_possible_truncation)]
    let timeout = Timeout::new(step as u32, move || {
        if let Some(fired) = TIMERS.with(|timers| timers.borrow_mut().remove(&id)) {
            // This callback is running inside `fired`'s closure, which must
            // not be dropped mid-call. `forget` leaks that one closure on
            // purpose; a session arms at most a few timers.
            let _ = fired.forget();
        }
        if rest == 0 {
            task();
        } else {
            arm(id, rest, task);
        }
    });
    TIMERS.with(|timers| timers.borrow_mut().insert(id, timeout));
}

/// Navigates by assigning `location.href`, which reloads the app.
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::warn!("navigation to {path} failed");
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert suppressed: {message}");
            }
        }
    }
}
