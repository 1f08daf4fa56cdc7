//! Session lifecycle: establish, end, and token expiry.
//!
//! ARCHITECTURE
//! ============
//! The controller owns the single expiry timer. Its phase moves
//! `Idle -> Armed -> Fired | Cancelled`; re-establishing a session cancels
//! the armed timer and arms a new one. Each arming gets a fresh generation so
//! a callback that was already queued when it got cancelled finds a newer
//! generation and does nothing.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::storage::TokenStorage;
use super::token::TokenCodec;
use crate::net::api::DefaultHeaders;
use crate::util::host::{Host, HostKind, Navigator, Scheduler, TimerId};

/// Where an expired session is sent.
pub const LOGIN_PATH: &str = "/login";

pub const EXPIRED_MESSAGE: &str = "Token expired";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Armed,
    Fired,
    Cancelled,
}

struct TimerSlot {
    phase: TimerPhase,
    armed: Option<TimerId>,
    generation: u64,
}

impl TimerSlot {
    fn lock(slot: &Mutex<Self>) -> MutexGuard<'_, Self> {
        slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

pub struct SessionController {
    kind: HostKind,
    storage: TokenStorage,
    codec: TokenCodec,
    scheduler: Arc<dyn Scheduler>,
    navigator: Arc<dyn Navigator>,
    timer: Arc<Mutex<TimerSlot>>,
    on_expired: Arc<Mutex<Option<ExpiryHook>>>,
}

impl SessionController {
    pub fn new(host: &Host, headers: DefaultHeaders) -> Self {
        Self {
            kind: host.kind,
            storage: TokenStorage::new(host, headers),
            codec: TokenCodec::new(host),
            scheduler: host.scheduler.clone(),
            navigator: host.navigator.clone(),
            timer: Arc::new(Mutex::new(TimerSlot { phase: TimerPhase::Idle, armed: None, generation: 0 })),
            on_expired: Arc::new(Mutex::new(None)),
        }
    }

    pub fn storage(&self) -> &TokenStorage {
        &self.storage
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn timer_phase(&self) -> TimerPhase {
        TimerSlot::lock(&self.timer).phase
    }

    /// Run `hook` when the expiry timer fires, before alerting and navigating
    /// away.
    pub fn on_expired(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_expired.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(hook));
    }

    /// Persist `token` and arm the expiry timer from its `exp` claim.
    pub fn establish(&self, token: &str, persistent: bool) {
        if self.kind == HostKind::Headless {
            return;
        }
        self.storage.set(token, persistent);
        self.cancel_timer();
        match self.codec.decode(token).and_then(|claims| claims.exp()) {
            Some(exp) => self.arm(exp),
            None => log::debug!("session token has no exp claim; expiry timer not armed"),
        }
    }

    /// Drop the token and any pending expiry. Does not call the backend.
    pub fn end(&self) {
        self.storage.clear();
        self.cancel_timer();
    }

    fn arm(&self, exp_secs: i64) {
        let delay_ms = exp_secs.saturating_mul(1000).saturating_sub(self.codec.now_millis()).max(0);
        let delay = Duration::from_millis(u64::try_from(delay_ms).unwrap_or(0));

        let generation = {
            let mut slot = TimerSlot::lock(&self.timer);
            slot.generation += 1;
            slot.generation
        };

        let timer = self.timer.clone();
        let storage = self.storage.clone();
        let navigator = self.navigator.clone();
        let on_expired = self.on_expired.clone();
        let task = Box::new(move || {
            {
                let mut slot = TimerSlot::lock(&timer);
                if slot.generation != generation || slot.phase != TimerPhase::Armed {
                    return;
                }
                slot.phase = TimerPhase::Fired;
                slot.armed = None;
            }
            log::info!("session token expired");
            storage.clear();
            let hook = on_expired.lock().unwrap_or_else(PoisonError::into_inner).clone();
            if let Some(hook) = hook {
                hook();
            }
            // The reload drops in-memory notices, so tell the user first.
            navigator.alert(EXPIRED_MESSAGE);
            navigator.navigate(LOGIN_PATH);
        });

        // Mark armed before scheduling so a zero-delay scheduler that runs the
        // task inline still sees the right phase.
        {
            let mut slot = TimerSlot::lock(&self.timer);
            slot.phase = TimerPhase::Armed;
        }
        let id = self.scheduler.schedule(delay, task);
        let mut slot = TimerSlot::lock(&self.timer);
        if slot.generation == generation && slot.phase == TimerPhase::Armed {
            slot.armed = Some(id);
        }
    }

    fn cancel_timer(&self) {
        let armed = {
            let mut slot = TimerSlot::lock(&self.timer);
            if slot.phase != TimerPhase::Armed {
                return;
            }
            slot.phase = TimerPhase::Cancelled;
            slot.generation += 1;
            slot.armed.take()
        };
        if let Some(id) = armed {
            self.scheduler.cancel(id);
        }
    }
}
