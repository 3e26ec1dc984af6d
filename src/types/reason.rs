// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleaning-record reasons.

use std::fmt;

/// Why a cleaning cycle ran.
///
/// The API reports `"timing"` (scheduled), `"manual"` (user-triggered) or
/// `"limit"` (water-level triggered). Anything else is preserved verbatim in
/// [`CleanReason::Unrecognized`] so a record with an unexpected reason is
/// never dropped; display layers should group it under an "unknown" category.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::types::CleanReason;
///
/// assert_eq!(CleanReason::from_api("manual"), CleanReason::Manual);
///
/// let odd = CleanReason::from_api("foo");
/// assert!(!odd.is_known());
/// assert_eq!(odd.as_str(), "foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CleanReason {
    /// Cleaning ran on the configured schedule.
    Timing,
    /// Cleaning was triggered manually by the user.
    Manual,
    /// Cleaning was triggered by the water-level limit.
    Limit,
    /// A reason string the library does not recognize, kept as received.
    Unrecognized(String),
}

impl CleanReason {
    /// Parses the API reason string.
    #[must_use]
    pub fn from_api(s: &str) -> Self {
        match s {
            "timing" => Self::Timing,
            "manual" => Self::Manual,
            "limit" => Self::Limit,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the raw reason string as received from the API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Timing => "timing",
            Self::Manual => "manual",
            Self::Limit => "limit",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` if the reason is one of the documented values.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for CleanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
