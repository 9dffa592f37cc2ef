//! Minimal HTTP client with safe logging, retries, and query-param auth.
//!
//! - Request options: query params, auth, timeout, retries
//! - Redacts sensitive query params (`key`, `token`, …) and never logs
//!   secret values
//! - Retries network failures and 429/5xx with exponential backoff and
//!   `Retry-After` support
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), stayscout_http::HttpError> {
//! let client = stayscout_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .get_json("v1/items", stayscout_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! Security: logs only ever include the auth kind (query/none), not the
//! secret itself.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}, request_id={request_id}")]
    Api {
        status: StatusCode,
        message: String,
        request_id: String,
    },
}

// ==============================
// Auth & Request Options
// ==============================

/// Authentication strategies supported by the client.
///
/// The places API authenticates with a `key` query parameter, which is the
/// only secret this workspace carries over the wire.
#[derive(Clone, Debug)]
pub enum Auth<'a> {
    /// Auth via query param (e.g. `key=<api key>`).
    Query { name: &'a str, value: Cow<'a, str> },
    None,
}

/// Per-request tuning knobs.
///
/// ```
/// use stayscout_http::{Auth, RequestOpts};
/// use std::borrow::Cow;
/// use std::time::Duration;
///
/// let opts = RequestOpts {
///     timeout: Some(Duration::from_secs(30)),
///     retries: Some(1),
///     auth: Some(Auth::Query {
///         name: "key",
///         value: Cow::Borrowed("demo"),
///     }),
///     ..Default::default()
/// };
/// assert_eq!(opts.timeout.unwrap().as_secs(), 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    pub timeout: Option<Duration>,
    pub retries: Option<usize>,
    pub auth: Option<Auth<'a>>,
    pub query: Option<Vec<(&'a str, Cow<'a, str>)>>, // e.g. [("input", "term".into())]
}

// ==============================
// Client
// ==============================

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
    pub max_retries: usize,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use stayscout_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// assert_eq!(client.max_retries, 2);
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(15),
            max_retries: 2,
        })
    }

    /// Override the default per-request timeout.
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// Override the default retry budget.
    pub fn with_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// GET a JSON document relative to the base URL and decode it.
    pub async fn get_json<T>(&self, path: &str, opts: RequestOpts<'_>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;
        let bytes = self.get_raw(url, opts).await?;
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            let snippet = snip_body(&bytes);
            tracing::warn!(
                serde_err = %e,
                body_snippet = %snippet,
                "http.response.decode_error"
            );
            HttpError::Decode(e.to_string(), snippet)
        })
    }

    // ==============================
    // Core request implementation
    // ==============================

    async fn get_raw(&self, url: Url, mut opts: RequestOpts<'_>) -> Result<Vec<u8>, HttpError> {
        // Fold query auth into the param list once, so retries reuse it.
        if let Some(Auth::Query { name, value }) = &opts.auth {
            let mut q = opts.query.take().unwrap_or_default();
            q.push((*name, value.clone()));
            opts.query = Some(q);
        }
        let auth_kind = match &opts.auth {
            Some(Auth::Query { .. }) => "query",
            Some(Auth::None) | None => "none",
        };

        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        let max_retries = opts.retries.unwrap_or(self.max_retries);
        let mut attempt = 0usize;

        loop {
            let mut rb = self.inner.request(Method::GET, url.clone()).timeout(timeout);
            if let Some(q) = &opts.query {
                let pairs: Vec<(&str, &str)> = q.iter().map(|(k, v)| (*k, v.as_ref())).collect();
                rb = rb.query(&pairs);
            }

            let req_id = format!(
                "r{:x}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_nanos()
            );

            tracing::debug!(
                req_id = %req_id,
                attempt = attempt + 1,
                max_retries,
                host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
                query = ?redact_query(opts.query.as_deref()),
                timeout_ms = timeout.as_millis() as u64,
                auth_kind,
                "http.request.start"
            );

            let t0 = std::time::Instant::now();
            let resp = match rb.send().await {
                Ok(resp) => resp,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt);
                        tracing::warn!(
                            req_id = %req_id,
                            attempt,
                            max_retries,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.network"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(req_id = %req_id, attempt, message = %message, "http.network_error");
                    return Err(HttpError::Network(message));
                }
            };

            let status = resp.status();
            let headers = resp.headers().clone();
            let bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt);
                        tracing::warn!(
                            req_id = %req_id,
                            attempt,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.body"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    return Err(HttpError::Network(message));
                }
            };

            let request_id = headers
                .get("x-request-id")
                .or_else(|| headers.get("x-correlation-id"))
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string();

            tracing::debug!(
                req_id = %req_id,
                %status,
                duration_ms = t0.elapsed().as_millis() as u64,
                body_len = bytes.len(),
                x_request_id = %request_id,
                "http.response"
            );

            if status.is_success() {
                return Ok(bytes.to_vec());
            }

            let snippet = snip_body(&bytes);
            let message = extract_error_message(&bytes);

            let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            if retryable && attempt < max_retries {
                attempt += 1;
                let delay = if let Some(secs) = retry_after_delay_secs(&headers) {
                    Duration::from_secs(secs)
                } else {
                    let exp = backoff_delay(attempt);
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        // default floor for 429 when no Retry-After is present
                        exp.max(Duration::from_millis(1100))
                    } else {
                        exp
                    }
                };
                tracing::warn!(
                    req_id = %req_id,
                    %status,
                    attempt,
                    max_retries,
                    backoff_ms = delay.as_millis() as u64,
                    message = %message,
                    "http.retrying"
                );
                sleep(delay).await;
                continue;
            }

            tracing::warn!(
                req_id = %req_id,
                %status,
                message = %message,
                x_request_id = %request_id,
                body_snippet = %snippet,
                "http.error"
            );
            return Err(HttpError::Api {
                status,
                message,
                request_id,
            });
        }
    }
}

// ==============================
// Helpers
// ==============================

fn backoff_delay(attempt: usize) -> Duration {
    Duration::from_millis(200u64.saturating_mul(1 << (attempt - 1)))
}

fn extract_error_message(body: &[u8]) -> String {
    // Places style: {"status":"REQUEST_DENIED","error_message":"..."}
    #[derive(Deserialize)]
    struct PlacesErr {
        error_message: String,
    }

    // Generic: {"message":"..."} or {"detail":"..."} or {"error":"..."}
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(p) = serde_json::from_slice::<PlacesErr>(body) {
        return p.error_message;
    }
    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.detail.is_empty() {
            return m.detail;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn retry_after_delay_secs(h: &HeaderMap) -> Option<u64> {
    h.get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())?
        .parse()
        .ok()
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}

fn redact_query(query: Option<&[(&str, Cow<'_, str>)]>) -> Vec<(String, String)> {
    query
        .map(|q| {
            q.iter()
                .map(|(k, v)| {
                    let is_secret = matches!(
                        k.to_ascii_lowercase().as_str(),
                        "access_token"
                            | "authorization"
                            | "auth"
                            | "key"
                            | "api_key"
                            | "token"
                            | "secret"
                            | "client_secret"
                            | "bearer"
                    );
                    (
                        (*k).to_string(),
                        if is_secret {
                            "<redacted>".to_string()
                        } else {
                            v.as_ref().to_string()
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_secret_query_params() {
        let q: Vec<(&str, Cow<'_, str>)> = vec![
            ("input", "Hotel Vega".into()),
            ("key", "super-secret".into()),
        ];
        let redacted = redact_query(Some(&q));
        assert_eq!(redacted[0], ("input".into(), "Hotel Vega".into()));
        assert_eq!(redacted[1], ("key".into(), "<redacted>".into()));
    }

    #[test]
    fn error_message_prefers_places_shape() {
        let body = br#"{"status":"REQUEST_DENIED","error_message":"bad key"}"#;
        assert_eq!(extract_error_message(body), "bad key");
        assert_eq!(extract_error_message(br#"{"message":"nope"}"#), "nope");
        assert_eq!(extract_error_message(b"plain text"), "plain text");
    }
}
