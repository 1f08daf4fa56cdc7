//! Bearer token payload decoding.
//!
//! Tokens are read, never verified: the backend owns signatures. The client
//! only needs the expiry and the subject id from the middle segment.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::Arc;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;

use crate::util::host::{Clock, Host, HostKind};

/// base64url, with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claim names that may carry the user id, in lookup order.
const SUBJECT_CLAIMS: [&str; 3] = ["user", "sub", "id"];

/// Decoded token payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Claims(Value);

impl Claims {
    /// Expiry in seconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation)]
    pub fn exp(&self) -> Option<i64> {
        self.0.get("exp").and_then(|exp| exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64)))
    }

    /// User id the token was issued for.
    pub fn subject(&self) -> Option<String> {
        SUBJECT_CLAIMS.iter().find_map(|name| match self.0.get(*name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.0.get(claim)
    }
}

/// Decode the payload of a three-segment token. `None` on any malformed input.
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    let bytes = PAYLOAD_ENGINE.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok().map(Claims)
}

/// Whether `token` decodes and expires strictly after `now_secs`.
pub fn is_valid(token: &str, now_secs: i64) -> bool {
    if token.is_empty() {
        return false;
    }
    decode(token).and_then(|claims| claims.exp()).is_some_and(|exp| exp > now_secs)
}

/// Host-bound codec: decodes only where browser primitives exist and reads
/// the current time from the host clock.
#[derive(Clone)]
pub struct TokenCodec {
    kind: HostKind,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(host: &Host) -> Self {
        Self { kind: host.kind, clock: host.clock.clone() }
    }

    pub fn decode(&self, token: &str) -> Option<Claims> {
        if self.kind == HostKind::Headless {
            return None;
        }
        decode(token)
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.kind == HostKind::Browser && is_valid(token, self.clock.now_secs())
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}
