// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the vendor cloud API.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::command::ControlRequest;
use crate::error::{CommandError, FetchError};
use crate::response::QueryResponse;
use crate::state::DeviceSnapshot;
use crate::types::{CleanInterval, DeviceName};

// ============================================================================
// ClientConfig - Connection parameters for the vendor API
// ============================================================================

/// Configuration for a [`DeviceClient`].
///
/// Holds the API token, the base URL, and the request timeout. Both
/// endpoints share the same timeout and session policy; only the error
/// contract differs between fetches and commands.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::ClientConfig;
/// use std::time::Duration;
///
/// // Production endpoint with defaults
/// let config = ClientConfig::new("my-token");
///
/// // Custom endpoint, shorter timeout
/// let config = ClientConfig::new("my-token")
///     .with_base_url("https://staging.example.com/api")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Default vendor API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://cuzcanon.cn/api";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given API token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`DeviceClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn into_client(self) -> Result<DeviceClient, FetchError> {
        let base = self.base_url.trim_end_matches('/');
        let query_url = format!("{base}/querybytoken");
        let control_url = format!("{base}/control");

        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(FetchError::Network)?;

        Ok(DeviceClient {
            query_url,
            control_url,
            token: self.token,
            http,
            snapshot: Arc::new(RwLock::new(DeviceSnapshot::default())),
        })
    }
}

// ============================================================================
// DeviceClient - Single point of contact with the vendor API
// ============================================================================

/// Client for one drum filter device, keyed by its API token.
///
/// Owns the HTTP session and a cache of the last successfully fetched
/// [`DeviceSnapshot`]. The cache is replaced wholesale on every successful
/// fetch and left untouched on failure, so readers always see a consistent
/// (possibly stale) snapshot. Cloning the client is cheap; clones share the
/// session and the cache.
///
/// # Examples
///
/// ```no_run
/// use drumfilter_lib::DeviceClient;
/// use drumfilter_lib::types::CleanInterval;
///
/// #[tokio::main]
/// async fn main() -> drumfilter_lib::Result<()> {
///     let client = DeviceClient::new("my-token")?;
///
///     let snapshot = client.fetch_state().await?;
///     println!("{} is {}", snapshot.name(), snapshot.network());
///
///     client.set_interval(CleanInterval::new(30)?).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeviceClient {
    query_url: String,
    control_url: String,
    token: String,
    http: Client,
    snapshot: Arc<RwLock<DeviceSnapshot>>,
}

/// Body of `POST /querybytoken`.
#[derive(Serialize)]
struct QueryBody<'a> {
    token: &'a str,
}

impl DeviceClient {
    /// Creates a client for the production endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, FetchError> {
        ClientConfig::new(token).into_client()
    }

    /// Fetches the current device state and replaces the cached snapshot.
    ///
    /// Missing response fields fall back to documented defaults, so a sparse
    /// but well-formed response still succeeds. On any failure the previous
    /// snapshot stays in place.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] on transport failure (DNS, connect, timeout)
    /// - [`FetchError::UpstreamStatus`] on any non-200 response
    /// - [`FetchError::InvalidBody`] when the body is not valid JSON
    pub async fn fetch_state(&self) -> Result<DeviceSnapshot, FetchError> {
        tracing::debug!(url = %self.query_url, "fetching device state");

        let response = self
            .http
            .post(&self.query_url)
            .json(&QueryBody { token: &self.token })
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "network error fetching state");
                FetchError::Network(err)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "state query rejected upstream");
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        let parsed: QueryResponse = serde_json::from_str(&body)?;
        let snapshot = DeviceSnapshot::from(parsed);

        {
            let mut cached = self.snapshot.write();
            // The uid identifies the device for the whole session.
            if !cached.uid().is_empty() && cached.uid() != snapshot.uid() {
                tracing::warn!(
                    previous = %cached.uid(),
                    received = %snapshot.uid(),
                    "device uid changed between fetches"
                );
            }
            *cached = snapshot.clone();
        }

        tracing::debug!(
            uid = %snapshot.uid(),
            network = %snapshot.network(),
            records = snapshot.total_records(),
            "device state updated"
        );
        Ok(snapshot)
    }

    /// Sends a control command to the device.
    ///
    /// Requires a device uid, which is established by the first successful
    /// [`fetch_state`](Self::fetch_state); without one, no HTTP call is made.
    /// Success requires HTTP 200 and a parseable JSON body (the body contents
    /// are otherwise ignored). On success the cached snapshot is updated
    /// optimistically with the interval/name the command carried, without
    /// waiting for the next poll.
    ///
    /// Command failures never propagate further than this result: they are
    /// fire-and-forget user actions with no automatic retry.
    ///
    /// # Errors
    ///
    /// - [`CommandError::MissingUid`] before the first successful fetch
    /// - [`CommandError::Network`] on transport failure
    /// - [`CommandError::UpstreamStatus`] on any non-200 response
    /// - [`CommandError::InvalidBody`] when the body is not valid JSON
    pub async fn control(&self, request: &ControlRequest) -> Result<(), CommandError> {
        let uid = self.snapshot.read().uid().to_string();
        if uid.is_empty() {
            tracing::error!("control command dropped: no device uid known yet");
            return Err(CommandError::MissingUid);
        }

        tracing::debug!(
            url = %self.control_url,
            uid = %uid,
            interval = ?request.interval(),
            clean = request.clean(),
            name = ?request.name(),
            "sending control command"
        );

        let response = self
            .http
            .post(&self.control_url)
            .json(&request.to_body(&self.token, &uid))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "network error controlling device");
                CommandError::Network(err)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "control command rejected upstream");
            return Err(CommandError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(CommandError::Network)?;
        serde_json::from_str::<serde_json::Value>(&body).map_err(|err| {
            tracing::error!(error = %err, "control response was not valid JSON");
            CommandError::InvalidBody(err)
        })?;

        self.snapshot.write().apply_command(request);
        Ok(())
    }

    /// Sets the cleaning interval.
    ///
    /// # Errors
    ///
    /// See [`control`](Self::control).
    pub async fn set_interval(&self, interval: CleanInterval) -> Result<(), CommandError> {
        self.control(&ControlRequest::new().with_interval(interval))
            .await
    }

    /// Renames the device.
    ///
    /// # Errors
    ///
    /// See [`control`](Self::control).
    pub async fn rename(&self, name: DeviceName) -> Result<(), CommandError> {
        self.control(&ControlRequest::new().with_name(name)).await
    }

    /// Triggers an immediate cleaning cycle.
    ///
    /// # Errors
    ///
    /// See [`control`](Self::control).
    pub async fn clean_now(&self) -> Result<(), CommandError> {
        self.control(&ControlRequest::new().with_clean()).await
    }

    /// Validates the configured token against the API.
    ///
    /// Intended for setup flows: performs a state fetch and returns the
    /// device's display name as a suggested title. Any failure should be
    /// treated as a retryable "not ready" condition by the caller.
    ///
    /// # Errors
    ///
    /// See [`fetch_state`](Self::fetch_state).
    pub async fn verify_token(&self) -> Result<String, FetchError> {
        let snapshot = self.fetch_state().await?;
        Ok(snapshot.name().to_string())
    }

    /// Returns the most recent successfully fetched snapshot, or the
    /// all-defaults snapshot if no fetch has ever succeeded.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.snapshot.read().clone()
    }

    /// Returns the stable device identifier, or `None` before the first
    /// successful fetch. This is the identity key for anything derived
    /// from the device (UI entities, unique ids).
    #[must_use]
    pub fn uid(&self) -> Option<String> {
        let cached = self.snapshot.read();
        if cached.uid().is_empty() {
            None
        } else {
            Some(cached.uid().to_string())
        }
    }
}
