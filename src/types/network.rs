// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Network status reported by the vendor API.

use std::fmt;

/// Connectivity state of the drum filter as reported by the cloud API.
///
/// The API reports `"online"` or `"offline"`; any other value maps to
/// [`NetworkStatus::Unknown`] rather than failing the whole fetch.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::types::NetworkStatus;
///
/// assert_eq!(NetworkStatus::from_api("online"), NetworkStatus::Online);
/// assert_eq!(NetworkStatus::from_api("weird"), NetworkStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkStatus {
    /// Device is reachable by the vendor cloud.
    Online,
    /// Device is not reachable by the vendor cloud.
    Offline,
    /// Status has not been reported or was not recognized.
    #[default]
    Unknown,
}

impl NetworkStatus {
    /// Parses the API status string. Unrecognized values become `Unknown`.
    #[must_use]
    pub fn from_api(s: &str) -> Self {
        match s {
            "online" => Self::Online,
            "offline" => Self::Offline,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical API string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` if the device is currently reachable.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
