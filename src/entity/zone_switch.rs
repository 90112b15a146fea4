// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone damper switch entity.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::entity::{DOMAIN, DeviceInfo, Entity, Switch};
use crate::protocol::{HttpClient, Protocol};
use crate::subscription::CallbackRegistry;
use crate::types::{DamperState, Zone};

/// One zone's damper, projected as an on/off switch.
///
/// On means the unit reports exactly `"open"` for the zone.
#[derive(Debug)]
pub struct ZoneSwitchAdapter<P: Protocol = HttpClient> {
    client: Arc<ApiClient<P>>,
    notifier: Arc<CallbackRegistry>,
    zone: Zone,
    name: String,
    unique_id: String,
    device_info: DeviceInfo,
}

impl<P: Protocol> ZoneSwitchAdapter<P> {
    /// Creates the switch for `zone`.
    pub fn new(client: Arc<ApiClient<P>>, notifier: Arc<CallbackRegistry>, zone: Zone) -> Self {
        Self {
            client,
            notifier,
            name: format!("Zone {zone}"),
            unique_id: format!("{DOMAIN}_zone_{}", zone.slug()),
            device_info: DeviceInfo::link(),
            zone,
        }
    }

    /// Returns the zone this switch controls.
    #[must_use]
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Returns the damper state as reported, if recognized.
    #[must_use]
    pub fn damper_state(&self) -> Option<DamperState> {
        self.client.with_state(|state| state.zone(self.zone.name()))
    }

    async fn set_damper(&self, damper: DamperState) -> bool {
        let accepted = self
            .client
            .set_zone_state(self.zone.name(), damper)
            .await;
        self.client.fetch_state().await;
        self.notifier.dispatch_entity_updated(&self.unique_id);
        accepted
    }
}

impl<P: Protocol> Entity for ZoneSwitchAdapter<P> {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    async fn update(&self) {
        // The climate entity's poll refreshes the shared cache.
        tracing::debug!(zone = %self.zone, "Updating switch entity state");
    }
}

impl<P: Protocol> Switch for ZoneSwitchAdapter<P> {
    fn is_on(&self) -> bool {
        self.client
            .with_state(|state| state.is_zone_open(self.zone.name()))
    }

    async fn turn_on(&self) -> bool {
        self.set_damper(DamperState::Open).await
    }

    async fn turn_off(&self) -> bool {
        self.set_damper(DamperState::Closed).await
    }
}
