// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated device name for rename commands.

use std::fmt;

use crate::error::ValueError;

/// A display name for the device, validated for rename commands.
///
/// Names must be non-empty and at most 50 characters. As with intervals,
/// the constraint applies only to outbound renames; a longer name reported
/// by the API is stored as-is.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::types::DeviceName;
///
/// let name = DeviceName::new("Pond Filter").unwrap();
/// assert_eq!(name.as_str(), "Pond Filter");
///
/// assert!(DeviceName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceName(String);

impl DeviceName {
    /// Maximum accepted name length in characters.
    pub const MAX_LENGTH: usize = 50;

    /// Creates a new device name.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyName` for an empty string and
    /// `ValueError::NameTooLong` for names over 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValueError::EmptyName);
        }
        let len = name.chars().count();
        if len > Self::MAX_LENGTH {
            return Err(ValueError::NameTooLong {
                len,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
