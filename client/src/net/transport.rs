//! HTTP transport seam.
//!
//! [`ApiClient`](super::api::ApiClient) speaks to the backend only through
//! [`Transport`], so the interceptor and every store operation can be driven by
//! scripted responses in tests. The browser implementation sits on `gloo-net`.

use futures::future::LocalBoxFuture;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body, already serialized.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status plus the body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, CORS, offline, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>>;
}

/// `fetch`-backed transport.
#[cfg(feature = "hydrate")]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        use gloo_net::http::Request;

        Box::pin(async move {
            let url = request.url.as_str();
            let mut builder = match request.method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
                Method::Put => Request::put(url),
                Method::Delete => Request::delete(url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match request.body {
                Some(body) => {
                    builder
                        .body(body)
                        .map_err(|e| TransportError(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        })
    }
}

/// Transport for renders without a browser. Every request fails, which the
/// stores surface like any other network error.
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        let message = format!("{} {} unavailable without a browser", request.method.as_str(), request.url);
        Box::pin(futures::future::ready(Err(TransportError(message))))
    }
}
