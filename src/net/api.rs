//! REST helpers for the activities backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpActivitiesApi`] reports a transport error since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Non-success statuses keep the
//! server's `detail` text and the transport status text so the controller can
//! pick the most specific message without parsing anything itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActivityCollection, ErrorBody, MessageResponse};

/// Path of the activity listing endpoint.
pub const ACTIVITIES_PATH: &str = "/activities";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },
    /// A 2xx response whose body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a raw error response body.
    #[must_use]
    pub fn from_status(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
            detail: error_detail(body),
        }
    }

    /// Human-readable text for a transient message: server detail, then
    /// transport status text, then `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let candidate = match self {
            Self::Transport(reason) => Some(reason.as_str()),
            Self::Status {
                status_text, detail, ..
            } => detail.as_deref().or(Some(status_text.as_str())),
            Self::Decode(_) => None,
        };
        candidate
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Extract the `detail` string from an error response body, if any.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}

/// `POST /activities/{name}/signup?email={email}` with both parts percent-encoded.
#[must_use]
pub fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// `DELETE /activities/{name}/unregister` with the name percent-encoded.
#[must_use]
pub fn unregister_endpoint(activity: &str) -> String {
    format!("{ACTIVITIES_PATH}/{}/unregister", urlencoding::encode(activity))
}

/// The three backend calls the roster controller depends on.
///
/// Futures are driven on the browser's single thread, so implementations are
/// not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    /// Fetch the full activity collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the status is not 2xx.
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError>;

    /// Register `email` for `activity`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the status is not 2xx.
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError>;

    /// Remove `email` from `activity`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the status is not 2xx.
    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError>;
}

/// `gloo-net` backed implementation talking to the page's origin (or a
/// configured base URL).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpActivitiesApi {
    base_url: String,
}

impl HttpActivitiesApi {
    /// Use an absolute origin (e.g. `https://school.example`) instead of the
    /// page's own origin. Trailing slashes are dropped.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(ACTIVITIES_PATH))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url(ACTIVITIES_PATH);
            Err(not_in_browser())
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(&signup_endpoint(activity, email)))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.url(&signup_endpoint(activity, email));
            Err(not_in_browser())
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = super::types::UnregisterBody { email };
            let resp = gloo_net::http::Request::delete(&self.url(&unregister_endpoint(activity)))
                .json(&body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(&unregister_endpoint(activity)), email);
            Err(not_in_browser())
        }
    }
}

#[cfg(feature = "csr")]
async fn read_json<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        let status = resp.status();
        let status_text = resp.status_text();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, status_text, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}
