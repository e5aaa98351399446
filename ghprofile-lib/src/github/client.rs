//! GitHub REST client
//!
//! Minimal client for the two unauthenticated endpoints the profile view needs.
//! No retries and no rate-limit handling: a failed request is reported once and
//! the caller decides what to do about it.

use super::records::UserRecord;
use crate::error::Error;
use crate::profile::Profile;
use bytes::Bytes;
use ohno::IntoAppError;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "    github";

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub rejects requests that don't identify themselves.
const USER_AGENT: &str = "ghprofile-client";

/// GitHub REST API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client rooted at `base_url` (normally [`DEFAULT_API_URL`]).
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let base_url = Url::parse(base_url).into_app_err_with(|| format!("parsing API URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            ohno::bail!("API URL '{base_url}' cannot be used as a base URL");
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .into_app_err("building HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| Error::Validation("API URL cannot be used as a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a request and return the raw body of a `200 OK` response.
    ///
    /// Any other status is turned into [`Error::Request`] carrying the body text so
    /// that GitHub's error message reaches the user.
    pub async fn fetch_json(&self, method: Method, url: &Url) -> Result<Bytes, Error> {
        log::debug!(target: LOG_TARGET, "{method} {url}");

        let transport = |source| Error::Transport {
            url: url.to_string(),
            source,
        };

        let resp = self.client.request(method.clone(), url.clone()).send().await.map_err(transport)?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(transport)?;

        if status != StatusCode::OK {
            return Err(Error::Request {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    /// GET `url` and decode the body as `T`.
    pub(super) async fn get_decoded<T: DeserializeOwned>(&self, url: &Url) -> Result<T, Error> {
        let body = self.fetch_json(Method::GET, url).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch the public profile of `username`.
    ///
    /// Derived statistics are left unset.
    pub async fn get_profile(&self, username: &str) -> Result<Profile, Error> {
        if username.is_empty() {
            return Err(Error::Validation("username is required"));
        }

        let url = self.endpoint(&["users", username])?;
        let record: UserRecord = self.get_decoded(&url).await?;
        Ok(record.into())
    }
}
