// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated cleaning interval for outbound commands.

use std::fmt;

use crate::error::ValueError;

/// A cleaning interval in minutes, constrained to the device's accepted
/// range of 10 minutes to 30 days.
///
/// The constraint applies to values *sent* to the device. Interval values
/// *reported* by the API are stored as-is on the snapshot: an out-of-range
/// value there is an upstream data-quality issue and is not clamped.
///
/// # Examples
///
/// ```
/// use drumfilter_lib::types::CleanInterval;
///
/// let interval = CleanInterval::new(30).unwrap();
/// assert_eq!(interval.minutes(), 30);
///
/// assert!(CleanInterval::new(5).is_err());
/// assert!(CleanInterval::new(50_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CleanInterval(u32);

impl CleanInterval {
    /// Minimum accepted interval (10 minutes).
    pub const MIN: u32 = 10;
    /// Maximum accepted interval (43200 minutes, 30 days).
    pub const MAX: u32 = 43_200;

    /// Creates a new cleaning interval.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::IntervalOutOfRange` if `minutes` is outside
    /// `[10, 43200]`.
    pub fn new(minutes: u32) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&minutes) {
            return Err(ValueError::IntervalOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: minutes,
            });
        }
        Ok(Self(minutes))
    }

    /// Returns the interval in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CleanInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(CleanInterval::new(10).unwrap().minutes(), 10);
        assert_eq!(CleanInterval::new(43_200).unwrap().minutes(), 43_200);
    }

    #[test]
    fn rejects_below_minimum() {
        let err = CleanInterval::new(9).unwrap_err();
        assert_eq!(
            err,
            ValueError::IntervalOutOfRange {
                min: 10,
                max: 43_200,
                actual: 9,
            }
        );
    }

    #[test]
    fn rejects_above_maximum() {
        assert!(CleanInterval::new(43_201).is_err());
        assert!(CleanInterval::new(0).is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(CleanInterval::new(60).unwrap().to_string(), "60 min");
    }
}
