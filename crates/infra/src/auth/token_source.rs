//! OAuth2 refresh-token source
//!
//! Exchanges the long-lived refresh token for short-lived access tokens at
//! `<accounts_base>/oauth/v2/token` and caches the result. Concurrent callers
//! that find the token stale share a single in-flight refresh; the state
//! mutex is only held to inspect or swap the cached token, never across the
//! HTTP call.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use serde::Deserialize;
use site24x7_domain::{ApiError, Credentials, Result};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with fake providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token, refreshing it when it is about to expire.
    async fn access_token(&self) -> Result<String>;

    /// Force a refresh because the server rejected `stale`.
    ///
    /// If another caller already replaced `stale`, the newer token is returned
    /// without another round trip.
    async fn refresh_after(&self, stale: &str) -> Result<String>;
}

/// Tokens are refreshed this long before they actually expire.
pub const DEFAULT_EXPIRY_SKEW: Duration = Duration::from_secs(30);

/// Lifetime assumed when the token response omits `expires_in`.
const DEFAULT_EXPIRES_IN: u64 = 3600;

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

type SharedRefresh = Shared<BoxFuture<'static, Result<CachedToken>>>;

#[derive(Default)]
struct State {
    current: Option<CachedToken>,
    inflight: Option<SharedRefresh>,
}

struct Inner {
    http: reqwest::Client,
    token_url: Url,
    credentials: Credentials,
    skew: Duration,
    state: Mutex<State>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<u64>,
    error: Option<String>,
}

/// Refresh-token backed [`AccessTokenProvider`].
#[derive(Clone)]
pub struct OAuthTokenSource {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for OAuthTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTokenSource")
            .field("token_url", &self.inner.token_url.as_str())
            .field("credentials", &self.inner.credentials)
            .finish_non_exhaustive()
    }
}

impl OAuthTokenSource {
    /// Start building a token source for `accounts_base_url`.
    pub fn builder(credentials: Credentials, accounts_base_url: impl Into<String>) -> OAuthTokenSourceBuilder {
        OAuthTokenSourceBuilder {
            credentials,
            accounts_base_url: accounts_base_url.into(),
            timeout: Duration::from_secs(30),
            skew: DEFAULT_EXPIRY_SKEW,
        }
    }

    /// Join the in-flight refresh or start a new one. Called with the state
    /// lock held; the returned future must be awaited after releasing it.
    fn join_or_start_refresh(&self, state: &mut State) -> SharedRefresh {
        if let Some(inflight) = &state.inflight {
            debug!("joining in-flight token refresh");
            return inflight.clone();
        }

        let inner = Arc::clone(&self.inner);
        let refresh = async move {
            let result = inner.request_token().await;
            let mut state = inner.state.lock();
            state.inflight = None;
            if let Ok(token) = &result {
                state.current = Some(token.clone());
            }
            result
        }
        .boxed()
        .shared();

        state.inflight = Some(refresh.clone());
        refresh
    }

    fn is_fresh(&self, token: &CachedToken) -> bool {
        Instant::now() + self.inner.skew < token.expires_at
    }
}

#[async_trait]
impl AccessTokenProvider for OAuthTokenSource {
    async fn access_token(&self) -> Result<String> {
        let refresh = {
            let mut state = self.inner.state.lock();
            if let Some(token) = state.current.as_ref().filter(|token| self.is_fresh(token)) {
                return Ok(token.access_token.clone());
            }
            self.join_or_start_refresh(&mut state)
        };

        refresh.await.map(|token| token.access_token)
    }

    async fn refresh_after(&self, stale: &str) -> Result<String> {
        let refresh = {
            let mut state = self.inner.state.lock();
            if let Some(token) = state
                .current
                .as_ref()
                .filter(|token| token.access_token != stale && self.is_fresh(token))
            {
                return Ok(token.access_token.clone());
            }
            state.current = None;
            self.join_or_start_refresh(&mut state)
        };

        refresh.await.map(|token| token.access_token)
    }
}

impl Inner {
    #[instrument(skip(self), fields(url = %self.token_url))]
    async fn request_token(&self) -> Result<CachedToken> {
        let form = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|err| ApiError::transient(format!("token refresh request failed: {err}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::transient(format!("token refresh response unreadable: {err}")))?;

        if status.is_server_error() || status.as_u16() == 429 {
            warn!(status = status.as_u16(), "token endpoint unavailable");
            return Err(ApiError::transient("token endpoint unavailable").with_status(status.as_u16()));
        }

        let parsed: Option<TokenResponse> = serde_json::from_slice(&body).ok();

        if !status.is_success() {
            let reason = parsed.and_then(|parsed| parsed.error).unwrap_or_else(|| "rejected".to_string());
            warn!(status = status.as_u16(), %reason, "token refresh rejected");
            return Err(ApiError::unauthorized(format!("token refresh failed: {reason}"))
                .with_status(status.as_u16()));
        }

        let parsed = parsed
            .ok_or_else(|| ApiError::fatal("token refresh response is not valid JSON").with_status(status.as_u16()))?;

        if let Some(reason) = parsed.error {
            warn!(%reason, "token refresh rejected");
            return Err(ApiError::unauthorized(format!("token refresh failed: {reason}"))
                .with_status(status.as_u16()));
        }

        let access_token = parsed
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::unauthorized("token refresh response carries no access_token"))?;
        let expires_in = parsed.expires_in.unwrap_or(DEFAULT_EXPIRES_IN);

        info!(expires_in, "access token refreshed");
        Ok(CachedToken { access_token, expires_at: Instant::now() + Duration::from_secs(expires_in) })
    }
}

/// Builder for [`OAuthTokenSource`].
#[derive(Debug)]
pub struct OAuthTokenSourceBuilder {
    credentials: Credentials,
    accounts_base_url: String,
    timeout: Duration,
    skew: Duration,
}

impl OAuthTokenSourceBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// How long before expiry a cached token is considered stale.
    pub fn skew(mut self, skew: Duration) -> Self {
        self.skew = skew;
        self
    }

    pub fn build(self) -> Result<OAuthTokenSource> {
        let base = self.accounts_base_url.trim_end_matches('/');
        let token_url = Url::parse(&format!("{base}/oauth/v2/token"))
            .map_err(|err| ApiError::fatal(format!("invalid accounts base URL {base:?}: {err}")))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| ApiError::fatal(format!("failed to build token HTTP client: {err}")))?;

        Ok(OAuthTokenSource {
            inner: Arc::new(Inner {
                http,
                token_url,
                credentials: self.credentials,
                skew: self.skew,
                state: Mutex::new(State::default()),
            }),
        })
    }
}
