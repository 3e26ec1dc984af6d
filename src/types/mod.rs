// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types used across the library.
//!
//! Constrained types ([`CleanInterval`], [`DeviceName`]) validate on
//! construction and are required by the command builders, so an invalid
//! value can never reach the wire. Status types ([`NetworkStatus`],
//! [`CleanReason`]) parse leniently: unrecognized API values degrade to
//! an "unknown" category instead of failing a fetch.

mod interval;
mod name;
mod network;
mod reason;

pub use interval::CleanInterval;
pub use name::DeviceName;
pub use network::NetworkStatus;
pub use reason::CleanReason;
