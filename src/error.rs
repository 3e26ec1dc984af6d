// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `DrumFilter` library.
//!
//! The library splits failures into three groups with deliberately different
//! propagation contracts:
//!
//! - [`ValueError`] - constrained-type construction failed (bad interval, bad name)
//! - [`FetchError`] - a state fetch failed; always propagated to the caller so the
//!   surrounding scheduler can apply its own retry/availability policy
//! - [`CommandError`] - a control command failed; terminal at the command boundary,
//!   returned as a typed result instead of being swallowed

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while fetching device state.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error occurred while sending a control command.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A cleaning interval is outside the allowed range.
    #[error("interval {actual} is out of range [{min}, {max}] minutes")]
    IntervalOutOfRange {
        /// Minimum allowed interval in minutes.
        min: u32,
        /// Maximum allowed interval in minutes.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// A device name is empty.
    #[error("device name must not be empty")]
    EmptyName,

    /// A device name exceeds the maximum length.
    #[error("device name is {len} characters long (max {max})")]
    NameTooLong {
        /// Length of the rejected name in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

/// Errors raised while fetching device state from the vendor API.
///
/// Unlike [`CommandError`], fetch errors always propagate to the caller: the
/// poll scheduler is expected to keep the previous snapshot in place and apply
/// its own retry policy.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connection refused, or timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("upstream returned HTTP {status}")]
    UpstreamStatus {
        /// The HTTP status code received.
        status: u16,
    },

    /// The API answered 200 but the body was not valid JSON.
    #[error("upstream returned malformed JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Errors raised while sending a control command.
///
/// Commands are user-triggered, fire-and-forget actions with no automatic
/// retry. Each variant is distinguishable so callers do not have to parse
/// log strings to tell a precondition failure from a transport failure.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No device uid is known yet (no fetch has succeeded). No HTTP call
    /// is made in this case.
    #[error("no device uid known yet; fetch state before sending commands")]
    MissingUid,

    /// Transport-level failure: DNS, connection refused, or timeout.
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("upstream returned HTTP {status}")]
    UpstreamStatus {
        /// The HTTP status code received.
        status: u16,
    },

    /// The API answered 200 but the body was not valid JSON.
    #[error("upstream returned malformed JSON: {0}")]
    InvalidBody(serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
