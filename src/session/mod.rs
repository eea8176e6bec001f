//! Per-session HTTP channel towards the backend.
//!
//! An [`ApiSession`] owns the HTTP client, the API root URL, and the single
//! in-memory CSRF token. Modeled as an explicit object rather than a
//! process-wide default so tests can instantiate isolated sessions.

use std::time::Duration;

use reqwest::header::{COOKIE, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use tracing::debug;

use crate::consent::CONSENT_COOKIE_NAME;
use crate::error::ApiError;

/// Header the rotating anti-forgery token travels in, both directions.
pub const CSRF_HEADER_NAME: &str = "X-Cassette-CSRF";

const DEFAULT_USER_AGENT: &str = concat!("cassette/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct ApiSession {
    client: Client,
    root: Url,
    csrf_token: Option<HeaderValue>,
    consent_cookie: Option<HeaderValue>,
}

impl ApiSession {
    /// Builds a session against `server_url`. When a consent value is given
    /// it is replayed as the consent cookie on every request, which the
    /// backend's consent middleware requires.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid, the consent value cannot be
    /// encoded as a cookie, or the HTTP client cannot be built.
    pub fn new(
        server_url: &str,
        timeout: Duration,
        consent_value: Option<&str>,
    ) -> Result<Self, ApiError> {
        let root = Url::parse(server_url).map_err(|err| ApiError::InvalidServerUrl {
            url: server_url.to_owned(),
            source: err,
        })?;
        if root.cannot_be_a_base() {
            return Err(ApiError::ServerUrlNotABase {
                url: server_url.to_owned(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| ApiError::BuildClientFailed { source: err })?;

        let consent_cookie = consent_value
            .map(|value| HeaderValue::from_str(&format!("{CONSENT_COOKIE_NAME}={value}")))
            .transpose()
            .map_err(|err| ApiError::InvalidConsentValue { source: err })?;

        Ok(Self {
            client,
            root,
            csrf_token: None,
            consent_cookie,
        })
    }

    /// Fetches a fresh anti-forgery token and stores it for all later
    /// requests on this session. Each call performs a new round-trip; the
    /// stored token is replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or when
    /// the response lacks the token header. No retry is performed.
    pub async fn acquire_token(&mut self) -> Result<(), ApiError> {
        let url = self.endpoint(&["csrfToken"])?;
        let response = self.execute(Method::HEAD, url).await?;
        let token = response
            .headers()
            .get(CSRF_HEADER_NAME)
            .ok_or(ApiError::TokenHeaderMissing {
                header: CSRF_HEADER_NAME,
            })?
            .clone();
        debug!("Acquired CSRF token.");
        self.csrf_token = Some(token);
        Ok(())
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.csrf_token.is_some()
    }

    /// Resolves an endpoint path below the API root.
    ///
    /// # Errors
    ///
    /// Returns an error when the root URL cannot take path segments.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::ServerUrlNotABase {
                url: self.root.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request carrying the consent cookie and, when acquired, the
    /// CSRF token. Non-success responses become [`ApiError::Status`] with the
    /// response body attached.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub(crate) async fn execute(&self, method: Method, url: Url) -> Result<Response, ApiError> {
        let mut request = self.client.request(method, url.clone());
        if let Some(cookie) = self.consent_cookie.as_ref() {
            request = request.header(COOKIE, cookie.clone());
        }
        if let Some(token) = self.csrf_token.as_ref() {
            request = request.header(CSRF_HEADER_NAME, token.clone());
        }

        let response = request.send().await.map_err(|err| ApiError::Transport {
            url: url.to_string(),
            source: err,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}
