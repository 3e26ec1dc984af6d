// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field capability table for host adapters.
//!
//! Host automation platforms project device data onto their own entity
//! types (sensors, number inputs, text inputs, action buttons). Instead of
//! baking any one platform's entity model into the library, each exposed
//! datum is described by a [`FieldId`] tagged with a [`FieldKind`]: a
//! generic adapter layer can walk [`fields`] once and build whatever its
//! host needs.
//!
//! # Examples
//!
//! ```
//! use drumfilter_lib::fields::{fields, FieldKind};
//!
//! for field in fields() {
//!     match field.kind() {
//!         FieldKind::ReadOnly => println!("{field}: sensor"),
//!         FieldKind::WritableNumber { min, max, .. } => {
//!             println!("{field}: number input [{min}, {max}]");
//!         }
//!         FieldKind::WritableText { max_length } => {
//!             println!("{field}: text input (max {max_length})");
//!         }
//!         FieldKind::Action => println!("{field}: button"),
//!     }
//! }
//! ```

use std::fmt;

use crate::client::DeviceClient;
use crate::error::CommandError;
use crate::state::{CleanRecord, DeviceSnapshot};
use crate::types::{CleanInterval, DeviceName, NetworkStatus};

/// Identifies one exposed field of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Device display name (writable text).
    Name,
    /// Network status (read-only).
    Network,
    /// Most recent cleaning record (read-only).
    LastRecord,
    /// Cleaning interval in minutes (writable number).
    Interval,
    /// Immediate clean trigger (action, no value).
    Clean,
}

/// What a host adapter may do with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Value can only be displayed.
    ReadOnly,
    /// Value is a writable number with an inclusive range.
    WritableNumber {
        /// Minimum accepted value.
        min: u32,
        /// Maximum accepted value.
        max: u32,
        /// Step between accepted values.
        step: u32,
    },
    /// Value is a writable string.
    WritableText {
        /// Maximum accepted length in characters.
        max_length: usize,
    },
    /// A trigger with no associated value.
    Action,
}

/// A value read from a snapshot for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A plain text value.
    Text(String),
    /// A numeric value.
    Number(i64),
    /// A network status.
    Status(NetworkStatus),
    /// A cleaning record.
    Record(CleanRecord),
}

/// Returns the full field table for this device class.
#[must_use]
pub const fn fields() -> [FieldId; 5] {
    [
        FieldId::Name,
        FieldId::Network,
        FieldId::LastRecord,
        FieldId::Interval,
        FieldId::Clean,
    ]
}

impl FieldId {
    /// Returns the stable key for this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Network => "network",
            Self::LastRecord => "last_record",
            Self::Interval => "interval",
            Self::Clean => "clean",
        }
    }

    /// Returns what a host adapter may do with this field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Name => FieldKind::WritableText {
                max_length: DeviceName::MAX_LENGTH,
            },
            Self::Network | Self::LastRecord => FieldKind::ReadOnly,
            Self::Interval => FieldKind::WritableNumber {
                min: CleanInterval::MIN,
                max: CleanInterval::MAX,
                step: 1,
            },
            Self::Clean => FieldKind::Action,
        }
    }

    /// Builds a unique identifier for an entity derived from this field,
    /// keyed by the device uid.
    #[must_use]
    pub fn unique_id(&self, uid: &str) -> String {
        format!("{uid}_{}", self.as_str())
    }

    /// Reads this field's current value from a snapshot.
    ///
    /// Returns `None` for [`FieldId::Clean`] (actions carry no value) and
    /// for [`FieldId::LastRecord`] when the device has no history yet.
    #[must_use]
    pub fn read(&self, snapshot: &DeviceSnapshot) -> Option<FieldValue> {
        match self {
            Self::Name => Some(FieldValue::Text(snapshot.name().to_string())),
            Self::Network => Some(FieldValue::Status(snapshot.network())),
            Self::LastRecord => snapshot.last_record().cloned().map(FieldValue::Record),
            Self::Interval => Some(FieldValue::Number(snapshot.interval_minutes())),
            Self::Clean => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed write to one of the writable fields.
///
/// The value types make kind mismatches unrepresentable: an interval write
/// always carries a validated [`CleanInterval`], a rename a validated
/// [`DeviceName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWrite {
    /// Set the cleaning interval.
    Interval(CleanInterval),
    /// Rename the device.
    Name(DeviceName),
    /// Trigger an immediate cleaning cycle.
    CleanNow,
}

impl FieldWrite {
    /// Returns the field this write targets.
    #[must_use]
    pub const fn field(&self) -> FieldId {
        match self {
            Self::Interval(_) => FieldId::Interval,
            Self::Name(_) => FieldId::Name,
            Self::CleanNow => FieldId::Clean,
        }
    }
}

impl DeviceClient {
    /// Applies a field write by dispatching the matching control command.
    ///
    /// # Errors
    ///
    /// See [`control`](Self::control).
    pub async fn write_field(&self, write: FieldWrite) -> Result<(), CommandError> {
        match write {
            FieldWrite::Interval(interval) => self.set_interval(interval).await,
            FieldWrite::Name(name) => self.rename(name).await,
            FieldWrite::CleanNow => self.clean_now().await,
        }
    }
}
