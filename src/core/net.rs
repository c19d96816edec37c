// src/core/net.rs
// One blocking GET per run against the TBA v3 API. No retries.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::consts::{API_BASE, AUTH_HEADER, TIMEOUT_SECS, USER_AGENT};
use crate::config::options::Resource;
use crate::error::{Result, TbaError};

/// Authenticated handle on the TBA read API.
pub struct TbaClient {
    http: Client,
    base: String,
    api_key: String,
}

impl TbaClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base(API_BASE, api_key)
    }

    /// Point at a different API root (mock servers, mirrors).
    pub fn with_base(base: &str, api_key: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/event/{event_key}/{resource}`
    pub fn event_url(&self, event_key: &str, resource: Resource) -> String {
        format!("{}/event/{}/{}", self.base, event_key, resource.path())
    }

    /// GET the body of an event resource as text.
    ///
    /// Any non-2xx answer becomes `TbaError::Http` carrying the status, its
    /// reason phrase and the raw body so the caller can show all three.
    pub fn get_text(&self, event_key: &str, resource: Resource) -> Result<String> {
        let url = self.event_url(event_key, resource);
        logd!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.api_key)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        logd!("{} from {url} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(TbaError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }
        Ok(body)
    }

    /// GET an event resource and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, event_key: &str, resource: Resource) -> Result<T> {
        let body = self.get_text(event_key, resource)?;
        Ok(serde_json::from_str(&body)?)
    }
}
