//! Transient user-visible notices (toasts).
//!
//! Stores push notices here instead of rendering anything themselves; the
//! `NoticeTray` component shows them and dismisses each after a timeout.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use super::store::Store;

/// How long a notice stays on screen.
pub const NOTICE_DURATION_MS: u32 = 4000;

/// Upper bound on simultaneously visible notices; the oldest is dropped.
pub const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
            Self::Info => "notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

/// Handle for pushing and dismissing notices.
#[derive(Clone)]
pub struct Notices {
    store: Store<NoticeState>,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

impl Notices {
    pub fn new() -> Self {
        Self { store: Store::new(NoticeState::default()) }
    }

    pub fn store(&self) -> &Store<NoticeState> {
        &self.store
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into())
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.store.update(|state| state.items.retain(|notice| notice.id != id));
    }

    pub fn items(&self) -> Vec<Notice> {
        self.store.with(|state| state.items.clone())
    }

    fn push(&self, kind: NoticeKind, message: String) -> u64 {
        let mut id = 0;
        self.store.update(|state| {
            state.next_id += 1;
            id = state.next_id;
            state.items.push(Notice { id, kind, message });
            if state.items.len() > MAX_NOTICES {
                let overflow = state.items.len() - MAX_NOTICES;
                state.items.drain(..overflow);
            }
        });
        id
    }
}
