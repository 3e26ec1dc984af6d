// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Query response parsing.

use serde::Deserialize;

/// Response from `POST /querybytoken`.
///
/// Every field is optional on the wire; missing fields fall back to the
/// documented defaults so a sparse response still yields a usable snapshot.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::response::QueryResponse;
///
/// let json = r#"{
///     "name": "Tank1",
///     "interval": 30,
///     "network": "online",
///     "uid": "abc123",
///     "model": "DF-1",
///     "records": [{"time": 1700000000, "reason": "manual"}]
/// }"#;
/// let response: QueryResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.uid, "abc123");
/// assert_eq!(response.records.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Device display name. Defaults to `"DrumFilter"`.
    #[serde(default = "default_name")]
    pub name: String,

    /// Configured cleaning interval in minutes. Defaults to `10`.
    ///
    /// Stored as received; out-of-range values are an upstream
    /// data-quality issue and are not clamped here.
    #[serde(default = "default_interval")]
    pub interval: i64,

    /// Network status string (`"online"` / `"offline"`). Defaults to
    /// `"offline"`.
    #[serde(default = "default_network")]
    pub network: String,

    /// Stable device identifier. Defaults to empty, which marks the
    /// device identity as not yet established.
    #[serde(default)]
    pub uid: String,

    /// Device model. Defaults to `"DrumFilter"`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Cleaning history, oldest first. Defaults to empty.
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

/// One cleaning-history entry as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEntry {
    /// Unix timestamp of the cleaning cycle, in seconds.
    #[serde(default)]
    pub time: i64,

    /// Reason string for the cycle (`"timing"`, `"manual"`, `"limit"`).
    #[serde(default)]
    pub reason: String,
}

fn default_name() -> String {
    "DrumFilter".to_string()
}

fn default_interval() -> i64 {
    10
}

fn default_network() -> String {
    "offline".to_string()
}

fn default_model() -> String {
    "DrumFilter".to_string()
}
