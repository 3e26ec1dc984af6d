// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `DrumFilter` Lib - A Rust client for cloud-connected drum filter devices.
//!
//! This library polls the vendor cloud HTTP API for the state of a drum
//! (rotary) water filter and sends user commands back through the same API.
//! It is designed as the standalone core of a home-automation integration:
//! the embedding host supplies the scheduler and the UI entities, this crate
//! supplies the client, the snapshot cache, and the poll loop.
//!
//! # Supported Features
//!
//! - **State polling**: name, network status, cleaning interval, cleaning history
//! - **Commands**: set the cleaning interval, rename the device, trigger a clean
//! - **Snapshot cache**: last-known state stays readable while a poll is in flight
//! - **Field table**: a host-agnostic description of every exposed datum
//!
//! # Quick Start
//!
//! ## Fetch state and send a command
//!
//! ```no_run
//! use drumfilter_lib::DeviceClient;
//! use drumfilter_lib::types::CleanInterval;
//!
//! #[tokio::main]
//! async fn main() -> drumfilter_lib::Result<()> {
//!     let client = DeviceClient::new("my-api-token")?;
//!
//!     let snapshot = client.fetch_state().await?;
//!     println!(
//!         "{} ({}) cleaned {} times",
//!         snapshot.name(),
//!         snapshot.network(),
//!         snapshot.total_records()
//!     );
//!
//!     // Clean every 30 minutes from now on.
//!     client.set_interval(CleanInterval::new(30)?).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Poll on a fixed cadence with subscribers
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use drumfilter_lib::{DeviceClient, Poller};
//!
//! #[tokio::main]
//! async fn main() -> drumfilter_lib::Result<()> {
//!     let client = Arc::new(DeviceClient::new("my-api-token")?);
//!     let poller = Arc::new(Poller::new(Arc::clone(&client)));
//!
//!     poller.subscribe(|snapshot| {
//!         println!("network: {}", snapshot.network());
//!     });
//!
//!     // Ticks forever; cancel by dropping the future.
//!     poller.run(Duration::from_secs(10)).await;
//!     Ok(())
//! }
//! ```
//!
//! # Error Contract
//!
//! Fetch failures ([`error::FetchError`]) propagate to the caller so the
//! surrounding scheduler can apply its own retry and "not ready" policy.
//! Command failures ([`error::CommandError`]) are terminal typed results:
//! a bad command never takes down the poll loop, and a command issued before
//! the first successful fetch fails fast without touching the network.

mod client;
pub mod command;
pub mod error;
pub mod fields;
mod poll;
pub mod response;
pub mod state;
pub mod types;

pub use client::{ClientConfig, DeviceClient};
pub use command::ControlRequest;
pub use error::{CommandError, Error, FetchError, Result, ValueError};
pub use fields::{FieldId, FieldKind, FieldValue, FieldWrite};
pub use poll::{Poller, SubscriptionId};
pub use response::QueryResponse;
pub use state::{CleanRecord, DeviceSnapshot};
pub use types::{CleanInterval, CleanReason, DeviceName, NetworkStatus};
