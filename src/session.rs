//! Authenticated session against the AdGuard Home control API.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ListError, Result};

const TIMEOUT_SECS: u64 = 30;

const LOGIN_PATH: &str = "/control/login";
const ADD_URL_PATH: &str = "/control/filtering/add_url";
const REMOVE_URL_PATH: &str = "/control/filtering/remove_url";
const STATUS_PATH: &str = "/control/filtering/status";

#[derive(Serialize)]
struct LoginRequest<'a> {
    name: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AddUrlRequest<'a> {
    name: &'a str,
    url: &'a str,
    whitelist: bool,
}

#[derive(Serialize)]
struct RemoveUrlRequest<'a> {
    url: &'a str,
    whitelist: bool,
}

/// A filter list registered on the appliance
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredFilter {
    pub url: String,
}

/// Subset of `GET /control/filtering/status` the manager relies on
#[derive(Debug, Default, Deserialize)]
pub struct FilteringStatus {
    #[serde(default)]
    pub filters: Option<Vec<RegisteredFilter>>,
}

impl FilteringStatus {
    /// Registered filters, treating an absent or null list as empty
    pub fn into_filters(self) -> Vec<RegisteredFilter> {
        self.filters.unwrap_or_default()
    }
}

/// An authenticated HTTP session bound to one appliance.
///
/// The login cookie lives in the client's cookie store and is reused by
/// every call. Dropping the session releases the connection pool.
pub struct Session {
    client: Client,
    base_url: String,
}

impl Session {
    /// Log in and return a session usable for filtering calls.
    ///
    /// Any non-2xx answer is an authentication failure; no partial session
    /// is returned.
    pub async fn login(base_url: &str, username: &str, password: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(format!("adguard-list-manager/{}", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .build()?;

        let session = Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        debug!("Logging in to {} as {}", session.base_url, username);

        let response = session
            .client
            .post(session.endpoint(LOGIN_PATH))
            .json(&LoginRequest {
                name: username,
                password,
            })
            .send()
            .await
            .map_err(|e| ListError::Authentication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Body may echo credentials, keep it out of the error
            return Err(ListError::Authentication(format!(
                "{} returned HTTP {}",
                session.base_url, status
            )));
        }

        info!("Logged in to {}", session.base_url);
        Ok(session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a filter list, named after its own URL
    pub async fn add_url(&self, url: &str, whitelist: bool) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint(ADD_URL_PATH))
            .json(&AddUrlRequest {
                name: url,
                url,
                whitelist,
            })
            .send()
            .await?;
        ensure_success(response).await
    }

    /// Unregister a filter list
    pub async fn remove_url(&self, url: &str, whitelist: bool) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint(REMOVE_URL_PATH))
            .json(&RemoveUrlRequest { url, whitelist })
            .send()
            .await?;
        ensure_success(response).await
    }

    /// Read the currently registered filters
    pub async fn filtering_status(&self) -> Result<FilteringStatus> {
        let response = self
            .client
            .get(self.endpoint(STATUS_PATH))
            .send()
            .await
            .map_err(|e| ListError::Status(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListError::Status(format!("HTTP {}", status)));
        }

        response
            .json::<FilteringStatus>()
            .await
            .map_err(|e| ListError::Status(format!("invalid response: {}", e)))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Closing session to {}", self.base_url);
    }
}

/// Turn a non-2xx response into an error carrying the status and body text
async fn ensure_success(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    let reason = if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    };
    Err(ListError::Rejected(reason))
}
