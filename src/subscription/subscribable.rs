// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that notify the host of entity updates.

use crate::subscription::SubscriptionId;

/// Trait for types that let the host subscribe to entity updates.
///
/// # Examples
///
/// ```no_run
/// use baums_ac::{Integration, IntegrationConfig};
/// use baums_ac::subscription::Subscribable;
///
/// # async fn example() -> baums_ac::Result<()> {
/// let integration = Integration::setup(IntegrationConfig::new("192.168.1.40"))?;
///
/// let sub_id = integration.on_entity_updated(|unique_id| {
///     println!("re-read {unique_id}");
/// });
///
/// integration.unsubscribe(sub_id);
/// # Ok(())
/// # }
/// ```
pub trait Subscribable {
    /// Subscribes to entity updates.
    ///
    /// The callback receives the unique id of an entity that has just
    /// refreshed after a command and should have its properties re-read.
    fn on_entity_updated<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
