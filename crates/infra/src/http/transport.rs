use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use site24x7_common::{ErrorClassification, RetryConfig};
use site24x7_domain::{ApiError, ErrorKind, Result};
use tokio::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

use super::classify::{self, ResponseMeta};
use super::deadline::current_deadline;
use crate::auth::AccessTokenProvider;

const ACCEPT_VALUE: &str = "application/json; version=2.0";
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Authenticated request pipeline shared by every endpoint client.
///
/// Each call decodes the response envelope and returns its `data`. A 401 is
/// answered with one forced token refresh and one retry; 429, 5xx and network
/// failures are retried with backoff until the attempt budget or the
/// operation deadline runs out.
#[derive(Clone)]
pub struct Transport {
    client: ReqwestClient,
    base_url: String,
    tokens: Arc<dyn AccessTokenProvider>,
    retry: RetryConfig,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Transport {
    /// Start building a transport for `base_url` (e.g. `https://www.site24x7.com/api`).
    pub fn builder(base_url: impl Into<String>, tokens: Arc<dyn AccessTokenProvider>) -> TransportBuilder {
        TransportBuilder {
            base_url: base_url.into(),
            tokens,
            timeout: Duration::from_secs(60),
            retry: RetryConfig::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one API call and return the envelope's `data`
    /// (`Value::Null` when the response has none).
    #[instrument(skip(self, query, body), fields(%method, path = %path))]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let url = self.url_for(path)?;
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| ApiError::fatal(format!("failed to serialize request body: {err}")))?;

        let mut token = self.tokens.access_token().await?;
        let mut refreshed = false;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let err = match self.send_once(&method, &url, query, body.as_deref(), &token, attempt).await {
                Ok(data) => return Ok(data),
                Err(err) => err,
            };

            if err.kind == ErrorKind::Unauthorized && err.http_status == Some(401) && !refreshed {
                debug!(attempt, "access token rejected, refreshing");
                refreshed = true;
                token = self.tokens.refresh_after(&token).await?;
                // The refresh retry does not count against the backoff budget.
                attempt -= 1;
                continue;
            }

            if !err.is_retryable() || !self.retry.allows_another(attempt) {
                return Err(err);
            }

            let delay = match err.retry_after {
                Some(requested) => self.retry.clamp(requested),
                None => self.retry.delay_for(attempt - 1),
            };

            if let Some(deadline) = current_deadline() {
                if Instant::now() + delay >= deadline {
                    warn!(attempt, ?delay, "backoff would pass the operation deadline, giving up");
                    return Err(err);
                }
            }

            warn!(attempt, ?delay, kind = %err.kind, status = ?err.http_status, "retrying request");
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &Url,
        query: &[(&str, String)],
        body: Option<&[u8]>,
        token: &str,
        attempt: u32,
    ) -> Result<serde_json::Value> {
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(ACCEPT, ACCEPT_VALUE)
            .header(AUTHORIZATION, format!("Zoho-oauthtoken {token}"));

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body.to_vec());
        }

        let response = request.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let meta = ResponseMeta {
            status,
            request_id: header_str(response.headers(), REQUEST_ID_HEADER),
            retry_after: retry_after(response.headers()),
        };
        let bytes = response.bytes().await.map_err(network_error)?;

        debug!(attempt, status, request_id = ?meta.request_id, "received response");
        classify::interpret(meta, &bytes)
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|err| ApiError::fatal(format!("invalid request URL {joined:?}: {err}")))
    }

    /// GET `path` and decode `data` into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let data = self.execute(Method::GET, path, &[], None).await?;
        decode(path, data)
    }

    /// GET `path` with query parameters and decode `data` into `T`.
    pub async fn get_with_query<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let data = self.execute(Method::GET, path, query, None).await?;
        decode(path, data)
    }

    /// POST `body` to `path` and decode `data` into `T`.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = encode(body)?;
        let data = self.execute(Method::POST, path, &[], Some(&body)).await?;
        decode(path, data)
    }

    /// PUT `body` to `path` and decode `data` into `T`.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = encode(body)?;
        let data = self.execute(Method::PUT, path, &[], Some(&body)).await?;
        decode(path, data)
    }

    /// DELETE `path`, discarding any payload.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, &[], None).await.map(|_| ())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(|err| ApiError::fatal(format!("failed to serialize request body: {err}")))
}

fn decode<T: DeserializeOwned>(path: &str, data: serde_json::Value) -> Result<T> {
    serde_json::from_value(data)
        .map_err(|err| ApiError::fatal(format!("failed to decode response from {path}: {err}")))
}

fn network_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::fatal(format!("failed to build request: {err}"))
    } else {
        ApiError::transient(format!("network error: {err}"))
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_string)
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Builder for [`Transport`].
pub struct TransportBuilder {
    base_url: String,
    tokens: Arc<dyn AccessTokenProvider>,
    timeout: Duration,
    retry: RetryConfig,
}

impl TransportBuilder {
    /// Per-request timeout covering connect, send and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<Transport> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| ApiError::fatal(format!("invalid API base URL {base_url:?}: {err}")))?;
        self.retry
            .validate()
            .map_err(|err| ApiError::fatal(format!("invalid retry configuration: {err}")))?;

        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| ApiError::fatal(format!("failed to build HTTP client: {err}")))?;

        Ok(Transport { client, base_url, tokens: self.tokens, retry: self.retry })
    }
}
