//! GitHub API client
//!
//! Minimal client that issues single GET requests and classifies the outcome.

use chrono::{DateTime, Utc};
use core::time::Duration;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = "repo-health";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// Result of a hosting API call
pub enum HostingApiResult<T> {
    /// Request succeeded
    Success(T),

    /// The API refused the request (403 or 429)
    RateLimited(Option<RateLimitInfo>),

    /// The requested resource was not found (404)
    NotFound,

    /// Request failed for any other reason
    Failed(ohno::AppError),
}

/// GitHub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new API client with optional authentication token and base URL
    pub fn new(token: Option<&str>, base_url: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an API call and classify the result
    pub async fn api_call(&self, url: &str) -> HostingApiResult<reqwest::Response> {
        let resp = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return HostingApiResult::Failed(e.into()),
        };

        let status = resp.status();
        if status.is_success() {
            return HostingApiResult::Success(resp);
        }

        let status_code = status.as_u16();
        if matches!(status_code, 403 | 429) {
            return HostingApiResult::RateLimited(extract_rate_limit_from_headers(resp.headers()));
        }

        if status_code == 404 {
            return HostingApiResult::NotFound;
        }

        HostingApiResult::Failed(ohno::app_err!("request to '{url}' failed with HTTP status {status}"))
    }

    /// Make an API call and decode a successful response body as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> HostingApiResult<T> {
        match self.api_call(url).await {
            HostingApiResult::Success(resp) => match resp.json().await {
                Ok(data) => HostingApiResult::Success(data),
                Err(e) => HostingApiResult::Failed(e.into()),
            },
            HostingApiResult::RateLimited(rate_limit) => HostingApiResult::RateLimited(rate_limit),
            HostingApiResult::NotFound => HostingApiResult::NotFound,
            HostingApiResult::Failed(e) => HostingApiResult::Failed(e),
        }
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
