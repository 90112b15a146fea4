// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for entity update notifications.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry shared by all entities of an integration

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Unique identifier for a subscription.
///
/// IDs are unique within a registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

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

/// Callback receiving the unique id of the entity whose properties changed.
type EntityUpdatedCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Registry for entity update callbacks.
///
/// Entities dispatch their unique id after a command's follow-up fetch so
/// that the host knows to re-read their properties.
///
/// # Thread Safety
///
/// Interior mutability via `parking_lot::RwLock`. Callbacks run
/// synchronously on the dispatching task, in arbitrary order, and must not
/// register or unregister callbacks themselves.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    entity_updated_callbacks: RwLock<HashMap<SubscriptionId, EntityUpdatedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entity_updated_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback for entity updates.
    pub fn on_entity_updated<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.entity_updated_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.entity_updated_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.entity_updated_callbacks.write().clear();
    }

    /// Notifies every subscriber that `unique_id` should be re-read.
    pub fn dispatch_entity_updated(&self, unique_id: &str) {
        // Snapshot so callbacks run without the lock held.
        let callbacks: Vec<EntityUpdatedCallback> = self
            .entity_updated_callbacks
            .read()
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(unique_id);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.entity_updated_callbacks.read().len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish_non_exhaustive()
    }
}
