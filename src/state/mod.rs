// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! [`DeviceSnapshot`] is the value type produced by every successful fetch.
//! It is replaced wholesale, never merged field by field, which is what makes
//! the snapshot cache safe to share between a poll in flight and a command
//! being issued.

mod snapshot;

pub use snapshot::{CleanRecord, DeviceSnapshot};
