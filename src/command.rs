// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control command definitions.
//!
//! A [`ControlRequest`] describes what to change on the device: any
//! combination of a new cleaning interval, a rename, and an immediate
//! clean trigger. The client serializes it into the vendor's control
//! payload, omitting fields that were not supplied (never sending nulls).
//!
//! # Examples
//!
//! ```
//! use drumfilter_lib::command::ControlRequest;
//! use drumfilter_lib::types::CleanInterval;
//!
//! let request = ControlRequest::new().with_interval(CleanInterval::new(30)?);
//! assert!(!request.is_empty());
//! # Ok::<(), drumfilter_lib::error::ValueError>(())
//! ```

use serde::Serialize;

use crate::types::{CleanInterval, DeviceName};

/// A control command to send to the device.
///
/// Defaults to an empty request; chain the builder methods to add the
/// fields to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlRequest {
    interval: Option<CleanInterval>,
    clean: bool,
    name: Option<DeviceName>,
}

impl ControlRequest {
    /// Creates an empty control request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new cleaning interval.
    #[must_use]
    pub fn with_interval(mut self, interval: CleanInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Triggers an immediate cleaning cycle.
    #[must_use]
    pub fn with_clean(mut self) -> Self {
        self.clean = true;
        self
    }

    /// Renames the device.
    #[must_use]
    pub fn with_name(mut self, name: DeviceName) -> Self {
        self.name = Some(name);
        self
    }

    /// Returns the interval to set, if any.
    #[must_use]
    pub fn interval(&self) -> Option<CleanInterval> {
        self.interval
    }

    /// Returns `true` if an immediate clean was requested.
    #[must_use]
    pub const fn clean(&self) -> bool {
        self.clean
    }

    /// Returns the new name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&DeviceName> {
        self.name.as_ref()
    }

    /// Returns `true` if the request carries no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interval.is_none() && !self.clean && self.name.is_none()
    }

    /// Builds the wire payload for `POST /control`.
    pub(crate) fn to_body<'a>(&'a self, token: &'a str, uid: &'a str) -> ControlBody<'a> {
        ControlBody {
            token,
            uid,
            interval: self.interval.map(|i| i.minutes()),
            // The vendor API expects the string "true", not a boolean.
            clean: self.clean.then_some("true"),
            name: self.name.as_ref().map(DeviceName::as_str),
        }
    }
}

/// Serialized body of `POST /control`. Absent optional fields are omitted
/// from the JSON entirely.
#[derive(Debug, Serialize)]
pub(crate) struct ControlBody<'a> {
    pub token: &'a str,
    pub uid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(request: &ControlRequest) -> serde_json::Value {
        serde_json::to_value(request.to_body("tok", "abc123")).unwrap()
    }

    #[test]
    fn empty_request_sends_only_token_and_uid() {
        let request = ControlRequest::new();
        assert!(request.is_empty());
        assert_eq!(
            to_json(&request),
            serde_json::json!({"token": "tok", "uid": "abc123"})
        );
    }

    #[test]
    fn interval_only_omits_clean_and_name() {
        let request = ControlRequest::new().with_interval(CleanInterval::new(30).unwrap());
        assert_eq!(
            to_json(&request),
            serde_json::json!({"token": "tok", "uid": "abc123", "interval": 30})
        );
    }

    #[test]
    fn clean_is_sent_as_string_true() {
        let request = ControlRequest::new().with_clean();
        assert_eq!(
            to_json(&request),
            serde_json::json!({"token": "tok", "uid": "abc123", "clean": "true"})
        );
    }

    #[test]
    fn rename_only_sends_name() {
        let request = ControlRequest::new().with_name(DeviceName::new("Tank1").unwrap());
        assert_eq!(
            to_json(&request),
            serde_json::json!({"token": "tok", "uid": "abc123", "name": "Tank1"})
        );
    }

    #[test]
    fn combined_request_sends_all_supplied_fields() {
        let request = ControlRequest::new()
            .with_interval(CleanInterval::new(120).unwrap())
            .with_clean()
            .with_name(DeviceName::new("Pond").unwrap());
        assert_eq!(
            to_json(&request),
            serde_json::json!({
                "token": "tok",
                "uid": "abc123",
                "interval": 120,
                "clean": "true",
                "name": "Pond"
            })
        );
    }
}
