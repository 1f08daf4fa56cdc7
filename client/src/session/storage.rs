//! Bearer token persistence across the durable and tab-scoped storage areas.
//!
//! The token lives in exactly one area at a time; which one records whether
//! the user asked to be remembered. Writes and clears also keep the API
//! client's default `Authorization` header in step.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Arc;

use crate::net::api::DefaultHeaders;
use crate::util::host::{Host, StorageArea};

/// Key used in both storage areas.
pub const TOKEN_KEY: &str = "accessToken";

#[derive(Clone)]
pub struct TokenStorage {
    durable: Arc<dyn StorageArea>,
    session: Arc<dyn StorageArea>,
    headers: DefaultHeaders,
}

impl TokenStorage {
    pub fn new(host: &Host, headers: DefaultHeaders) -> Self {
        Self { durable: host.durable.clone(), session: host.session.clone(), headers }
    }

    /// Store `token` in the durable area when `persistent`, else the session
    /// area. The other area is cleared first.
    pub fn set(&self, token: &str, persistent: bool) {
        let (target, other) = if persistent {
            (&self.durable, &self.session)
        } else {
            (&self.session, &self.durable)
        };
        other.remove(TOKEN_KEY);
        target.set(TOKEN_KEY, token);
        self.headers.set_bearer(token);
    }

    /// Stored token, durable area first.
    pub fn get(&self) -> Option<String> {
        self.durable
            .get(TOKEN_KEY)
            .or_else(|| self.session.get(TOKEN_KEY))
            .filter(|token| !token.is_empty())
    }

    /// Whether the stored token came from the durable area.
    pub fn is_persistent(&self) -> bool {
        self.durable.get(TOKEN_KEY).is_some_and(|token| !token.is_empty())
    }

    pub fn clear(&self) {
        self.durable.remove(TOKEN_KEY);
        self.session.remove(TOKEN_KEY);
        self.headers.clear_bearer();
    }
}
