//! REST client for the blog backend.
//!
//! Every backend call goes through [`ApiClient::request`], which attaches the
//! default headers (the bearer token once a session is established) and runs
//! the shared response interceptor.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses and transport failures collapse into a single
//! [`ApiError`] carrying one human-readable message. A 401 or 403 from any call
//! fires the unauthorized hook first, so the session is torn down no matter
//! which store issued the request. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, Method, Transport};

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Normalized failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, if a response arrived.
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    /// Build the error for a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self { status: Some(status), message: error_message(body) }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401 | 403))
    }
}

/// Extract the user-facing message from an error body: a JSON `message`
/// string, a bare JSON string, or non-JSON text.
pub fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return FALLBACK_ERROR_MESSAGE.to_owned();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("message") {
            Some(serde_json::Value::String(message)) if !message.is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_owned(),
        },
        Ok(serde_json::Value::String(message)) if !message.is_empty() => message,
        Ok(_) => FALLBACK_ERROR_MESSAGE.to_owned(),
        Err(_) => trimmed.to_owned(),
    }
}

/// Headers attached to every outgoing request. Shared between the client and
/// token storage, which installs and removes the bearer token.
#[derive(Clone, Default)]
pub struct DefaultHeaders(Arc<Mutex<BTreeMap<String, String>>>);

impl DefaultHeaders {
    pub fn set_bearer(&self, token: &str) {
        self.lock().insert("Authorization".to_owned(), format!("Bearer {token}"));
    }

    pub fn clear_bearer(&self) {
        self.lock().remove("Authorization");
    }

    pub fn authorization(&self) -> Option<String> {
        self.lock().get("Authorization").cloned()
    }

    fn snapshot(&self) -> Vec<(String, String)> {
        self.lock().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    headers: DefaultHeaders,
    on_unauthorized: Mutex<Option<UnauthorizedHook>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            headers: DefaultHeaders::default(),
            on_unauthorized: Mutex::new(None),
        }
    }

    pub fn default_headers(&self) -> DefaultHeaders {
        self.headers.clone()
    }

    /// Install the hook run on any 401/403 response. Replaces a previous hook.
    pub fn on_unauthorized(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_unauthorized.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(hook));
    }

    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.request(Method::Get, path, None).await?;
        decode_body(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, ApiError> {
        let body = self.request(Method::Post, path, Some(encode_body(payload)?)).await?;
        decode_body(&body)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, ApiError> {
        let body = self.request(Method::Put, path, Some(encode_body(payload)?)).await?;
        decode_body(&body)
    }

    /// Send one request and return the raw success body.
    pub async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let mut headers = self.headers.snapshot();
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        let request = HttpRequest { method, url: self.url(path), headers, body };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{} {path} failed: {e}", method.as_str());
                return Err(ApiError::new(FALLBACK_ERROR_MESSAGE));
            }
        };
        if response.is_success() {
            return Ok(response.body);
        }

        let err = ApiError::from_response(response.status, &response.body);
        log::warn!("{} {path} -> {}: {}", method.as_str(), response.status, err.message);
        if err.is_unauthorized() {
            self.fire_unauthorized();
        }
        Err(err)
    }

    fn fire_unauthorized(&self) {
        let hook = self.on_unauthorized.lock().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn encode_body<B: Serialize>(payload: &B) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::new(format!("invalid request body: {e}")))
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::new(format!("unexpected response: {e}")))
}
