// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device snapshot value type.

use chrono::{DateTime, TimeZone, Utc};

use crate::response::QueryResponse;
use crate::types::{CleanReason, NetworkStatus};

/// The most recent cleaning cycle reported by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRecord {
    timestamp: i64,
    reason: CleanReason,
}

impl CleanRecord {
    /// Creates a record from a unix timestamp (seconds) and a reason.
    #[must_use]
    pub fn new(timestamp: i64, reason: CleanReason) -> Self {
        Self { timestamp, reason }
    }

    /// Returns the unix timestamp in seconds, as received from the API.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the timestamp as a UTC datetime, or `None` if the raw
    /// value does not map to a representable instant.
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp, 0).single()
    }

    /// Returns the cleaning reason.
    #[must_use]
    pub const fn reason(&self) -> &CleanReason {
        &self.reason
    }
}

/// A full picture of the device at one point in time.
///
/// Snapshots are value types: every successful fetch produces a new one and
/// replaces the cached copy wholesale. A failed fetch never touches the
/// previous snapshot, so readers always see stale-but-valid data.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::state::DeviceSnapshot;
/// use drumfilter_lib::types::NetworkStatus;
///
/// let snapshot = DeviceSnapshot::default();
/// assert_eq!(snapshot.network(), NetworkStatus::Unknown);
/// assert!(snapshot.uid().is_empty());
/// assert!(snapshot.last_record().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSnapshot {
    name: String,
    interval_minutes: i64,
    network: NetworkStatus,
    uid: String,
    model: String,
    last_record: Option<CleanRecord>,
    total_records: usize,
}

impl DeviceSnapshot {
    /// Returns the device display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured cleaning interval in minutes, as reported.
    #[must_use]
    pub const fn interval_minutes(&self) -> i64 {
        self.interval_minutes
    }

    /// Returns the network status.
    #[must_use]
    pub const fn network(&self) -> NetworkStatus {
        self.network
    }

    /// Returns the stable device identifier. Empty until the first
    /// successful fetch establishes it.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the device model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the most recent cleaning record, if any history exists.
    #[must_use]
    pub const fn last_record(&self) -> Option<&CleanRecord> {
        self.last_record.as_ref()
    }

    /// Returns the number of cleaning records in the device's history.
    #[must_use]
    pub const fn total_records(&self) -> usize {
        self.total_records
    }

    /// Applies the optimistic effect of an accepted control command.
    pub(crate) fn apply_command(&mut self, request: &crate::command::ControlRequest) {
        if let Some(interval) = request.interval() {
            self.interval_minutes = i64::from(interval.minutes());
        }
        if let Some(name) = request.name() {
            self.name = name.as_str().to_string();
        }
        // A clean trigger has no snapshot projection until the next poll
        // reports the new history record.
    }
}

impl Default for DeviceSnapshot {
    /// The all-defaults snapshot used before any fetch has succeeded.
    /// Matches the documented missing-field defaults, with an empty uid
    /// marking the device identity as not yet established.
    fn default() -> Self {
        Self {
            name: "DrumFilter".to_string(),
            interval_minutes: 10,
            network: NetworkStatus::Unknown,
            uid: String::new(),
            model: "DrumFilter".to_string(),
            last_record: None,
            total_records: 0,
        }
    }
}

impl From<QueryResponse> for DeviceSnapshot {
    fn from(response: QueryResponse) -> Self {
        let total_records = response.records.len();
        let last_record = response
            .records
            .last()
            .map(|entry| CleanRecord::new(entry.time, CleanReason::from_api(&entry.reason)));

        Self {
            name: response.name,
            interval_minutes: response.interval,
            network: NetworkStatus::from_api(&response.network),
            uid: response.uid,
            model: response.model,
            last_record,
            total_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DeviceSnapshot {
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        DeviceSnapshot::from(response)
    }

    #[test]
    fn round_trip_from_crafted_response() {
        let snapshot = parse(
            r#"{
                "name": "Tank1",
                "interval": 30,
                "network": "online",
                "uid": "abc123",
                "model": "DF-1",
                "records": [{"time": 1700000000, "reason": "manual"}]
            }"#,
        );

        assert_eq!(snapshot.name(), "Tank1");
        assert_eq!(snapshot.interval_minutes(), 30);
        assert_eq!(snapshot.network(), NetworkStatus::Online);
        assert_eq!(snapshot.uid(), "abc123");
        assert_eq!(snapshot.model(), "DF-1");
        assert_eq!(snapshot.total_records(), 1);

        let record = snapshot.last_record().unwrap();
        assert_eq!(record.timestamp(), 1_700_000_000);
        assert_eq!(*record.reason(), CleanReason::Manual);
    }

    #[test]
    fn last_record_is_last_list_element() {
        let snapshot = parse(
            r#"{"records": [
                {"time": 100, "reason": "timing"},
                {"time": 200, "reason": "limit"},
                {"time": 300, "reason": "manual"}
            ]}"#,
        );
        assert_eq!(snapshot.total_records(), 3);
        assert_eq!(snapshot.last_record().unwrap().timestamp(), 300);
        assert_eq!(*snapshot.last_record().unwrap().reason(), CleanReason::Manual);
    }

    #[test]
    fn empty_history_has_no_last_record() {
        let snapshot = parse(r#"{"records": []}"#);
        assert!(snapshot.last_record().is_none());
        assert_eq!(snapshot.total_records(), 0);
    }

    #[test]
    fn unknown_reason_is_kept_not_dropped() {
        let snapshot = parse(r#"{"records": [{"time": 100, "reason": "foo"}]}"#);
        let record = snapshot.last_record().unwrap();
        assert!(!record.reason().is_known());
        assert_eq!(record.reason().as_str(), "foo");
    }

    #[test]
    fn sparse_response_yields_default_fields() {
        let snapshot = parse("{}");
        assert_eq!(snapshot.name(), "DrumFilter");
        assert_eq!(snapshot.interval_minutes(), 10);
        assert_eq!(snapshot.network(), NetworkStatus::Offline);
        assert_eq!(snapshot.uid(), "");
        assert_eq!(snapshot.model(), "DrumFilter");
    }

    #[test]
    fn record_timestamp_converts_to_utc() {
        let record = CleanRecord::new(1_700_000_000, CleanReason::Timing);
        let utc = record.timestamp_utc().unwrap();
        assert_eq!(utc.timestamp(), 1_700_000_000);
    }

    #[test]
    fn apply_command_updates_interval_and_name() {
        use crate::command::ControlRequest;
        use crate::types::{CleanInterval, DeviceName};

        let mut snapshot = DeviceSnapshot::default();
        let request = ControlRequest::new()
            .with_interval(CleanInterval::new(45).unwrap())
            .with_name(DeviceName::new("Pond").unwrap());

        snapshot.apply_command(&request);
        assert_eq!(snapshot.interval_minutes(), 45);
        assert_eq!(snapshot.name(), "Pond");
    }

    #[test]
    fn apply_clean_only_leaves_snapshot_unchanged() {
        use crate::command::ControlRequest;

        let mut snapshot = DeviceSnapshot::default();
        let before = snapshot.clone();
        snapshot.apply_command(&ControlRequest::new().with_clean());
        assert_eq!(snapshot, before);
    }
}
