// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Poll loop bridging an external scheduler to the device client.
//!
//! A [`Poller`] owns no schedule of its own: some external scheduler calls
//! [`Poller::tick`] on its cadence, and every registered subscriber receives
//! the fresh snapshot after each successful fetch. Fetch failures propagate
//! to the scheduler untouched; the previous snapshot stays available through
//! [`Poller::snapshot`]. For hosts without a scheduler, [`Poller::run`] drives
//! ticks on a fixed `tokio` interval.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use drumfilter_lib::{DeviceClient, Poller};
//!
//! #[tokio::main]
//! async fn main() -> drumfilter_lib::Result<()> {
//!     let client = Arc::new(DeviceClient::new("my-token")?);
//!     let poller = Poller::new(Arc::clone(&client));
//!
//!     poller.subscribe(|snapshot| {
//!         println!("{} cleaned {} times", snapshot.name(), snapshot.total_records());
//!     });
//!
//!     poller.tick().await?;
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::RwLock;

use crate::client::DeviceClient;
use crate::error::FetchError;
use crate::state::DeviceSnapshot;

/// Unique identifier for a snapshot subscription.
///
/// Returned by [`Poller::subscribe`] and used to unsubscribe later.
/// IDs are unique within a poller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for snapshot callbacks.
type SnapshotCallback = Arc<dyn Fn(&DeviceSnapshot) + Send + Sync>;

/// Bridges a fixed-cadence scheduler to [`DeviceClient::fetch_state`] and
/// fans the result out to independent readers without redundant fetches.
///
/// The only state beyond the subscriber registry is a single boolean: has a
/// fetch ever succeeded. The vendor API is a stateless query endpoint, so no
/// further session tracking exists.
pub struct Poller {
    client: Arc<DeviceClient>,
    next_id: AtomicU64,
    subscribers: RwLock<HashMap<SubscriptionId, SnapshotCallback>>,
    had_success: AtomicBool,
}

impl Poller {
    /// Creates a poller around an existing client.
    #[must_use]
    pub fn new(client: Arc<DeviceClient>) -> Self {
        Self {
            client,
            next_id: AtomicU64::new(0),
            subscribers: RwLock::new(HashMap::new()),
            had_success: AtomicBool::new(false),
        }
    }

    /// Registers a callback invoked with every freshly fetched snapshot.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().insert(id, Arc::new(callback));
        id
    }

    /// Removes a subscription. Returns `true` if it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.write().remove(&id).is_some()
    }

    /// Returns the number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Fetches fresh state and publishes it to all subscribers.
    ///
    /// On failure the previous snapshot stays in place, no subscriber is
    /// notified, and the error surfaces to the caller so the external
    /// scheduler can apply its own retry and availability policy.
    ///
    /// # Errors
    ///
    /// Propagates any [`FetchError`] from the client.
    pub async fn tick(&self) -> Result<(), FetchError> {
        let snapshot = self.client.fetch_state().await?;
        self.had_success.store(true, Ordering::Relaxed);

        let subscribers: Vec<SnapshotCallback> =
            self.subscribers.read().values().cloned().collect();
        for callback in subscribers {
            callback(&snapshot);
        }
        Ok(())
    }

    /// Returns the most recent successfully fetched snapshot, or the
    /// all-defaults snapshot if none has ever succeeded.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.client.snapshot()
    }

    /// Returns `true` once at least one tick has fetched successfully.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.had_success.load(Ordering::Relaxed)
    }

    /// Returns the client this poller drives.
    #[must_use]
    pub fn client(&self) -> &Arc<DeviceClient> {
        &self.client
    }

    /// Drives [`tick`](Self::tick) forever on a fixed period, logging
    /// failures instead of stopping. Cancel by dropping the returned future;
    /// an in-flight request is then abandoned and its result discarded.
    pub async fn run(&self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if let Err(err) = self.tick().await {
                tracing::warn!(error = %err, "scheduled poll failed, keeping previous snapshot");
            }
        }
    }
}
