//! HTTP calls against the sign-up service. URL building and response-body
//! mapping are plain functions so they stay testable off-browser; only the
//! `async` wrappers touch fetch.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use urlencoding::encode;
use web_sys::RequestCache;

use crate::model::ActivityDirectory;

pub const ACTIVITIES_URL: &str = "/activities";

/// Shown when a rejection body carries no usable detail.
pub const GENERIC_REJECTION: &str = "An error occurred";

#[derive(Debug, Serialize)]
struct SignupBody<'a> {
    recaptcha_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct Confirmation {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Rejection {
    detail: String,
}

/// How a request against the service failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx answer; holds the human-readable detail for display.
    Rejected(String),
    /// The request never completed or the body was not the JSON we expect.
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Rejected(detail) => write!(f, "{detail}"),
            ApiError::Transport(reason) => write!(f, "{reason}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> ApiError {
        ApiError::Transport(e.to_string())
    }
}

pub fn signup_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

pub fn removal_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}

/// Text to show for a successful signup. The service always sends
/// `{"message": …}`; anything else falls back to a flat acknowledgement.
pub fn confirmation_text(body: &str) -> String {
    serde_json::from_str::<Confirmation>(body)
        .map(|c| c.message)
        .unwrap_or_else(|_| "Signed up.".to_string())
}

/// Text to show for a rejected request: the server's `detail` field when
/// present, the generic fallback otherwise.
pub fn rejection_text(body: &str) -> String {
    serde_json::from_str::<Rejection>(body)
        .map(|r| r.detail)
        .unwrap_or_else(|_| GENERIC_REJECTION.to_string())
}

/// Cache-bypassing fetch of the full activity directory.
pub async fn fetch_directory() -> Result<ActivityDirectory, ApiError> {
    let resp = Request::get(ACTIVITIES_URL)
        .cache(RequestCache::NoStore)
        .send()
        .await?;
    let directory = resp.json::<ActivityDirectory>().await?;
    Ok(directory)
}

/// Signs `email` up for `activity`, proving humanity with the widget token.
/// Ok carries the server's confirmation message.
pub async fn signup(activity: &str, email: &str, token: &str) -> Result<String, ApiError> {
    let resp = Request::post(&signup_url(activity, email))
        .json(&SignupBody {
            recaptcha_token: token,
        })?
        .send()
        .await?;
    let body = resp.text().await?;
    if resp.ok() {
        Ok(confirmation_text(&body))
    } else {
        Err(ApiError::Rejected(rejection_text(&body)))
    }
}

/// Drops `email` from `activity`'s roster.
pub async fn remove_participant(activity: &str, email: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&removal_url(activity, email)).send().await?;
    if resp.ok() {
        Ok(())
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Rejected(rejection_text(&body)))
    }
}
