// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration lifecycle.
//!
//! [`Integration`] is what a host sets up for one configured unit: a single
//! HTTP client shared by the climate entity and one switch per zone, plus
//! the callback registry those entities notify through.
//!
//! # Examples
//!
//! ```no_run
//! use baums_ac::entity::{Climate, Entity, Switch};
//! use baums_ac::{Integration, IntegrationConfig};
//!
//! # async fn example() -> baums_ac::Result<()> {
//! let integration = Integration::setup(IntegrationConfig::new("192.168.1.40"))?;
//!
//! // Host polling tick
//! integration.climate().update().await;
//!
//! for switch in integration.zone_switches() {
//!     println!("{:?}: {}", switch.name(), switch.is_on());
//! }
//!
//! integration.unload();
//! # Ok(())
//! # }
//! ```

mod config;

pub use config::{DEFAULT_ZONES, IntegrationConfig};

use std::sync::Arc;

use crate::client::ApiClient;
use crate::entity::{ClimateAdapter, ZoneSwitchAdapter};
use crate::error::Result;
use crate::protocol::{HttpClient, Protocol};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};

/// Entity platforms an integration provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// The thermostat entity.
    Climate,
    /// Zone damper switches.
    Switch,
}

/// A configured unit and its entities.
///
/// Holds the only strong owner of the transport outside the entities. The
/// connection pool lives until [`unload`](Self::unload) consumes the
/// integration, which happens at most once by construction.
#[derive(Debug)]
pub struct Integration<P: Protocol = HttpClient> {
    title: String,
    client: Arc<ApiClient<P>>,
    notifier: Arc<CallbackRegistry>,
    climate: ClimateAdapter<P>,
    zone_switches: Vec<ZoneSwitchAdapter<P>>,
}

impl Integration<HttpClient> {
    /// Validates `config` and sets up the client and entities.
    ///
    /// No request is made; the first poll populates the cache.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn setup(config: IntegrationConfig) -> Result<Self> {
        config.validate()?;
        let client = ApiClient::http(config.http_config())?;

        tracing::info!(
            base_url = %client.base_url(),
            zones = config.zones().len(),
            "Setting up AC integration"
        );

        Ok(Self::with_client(&config, client))
    }
}

impl<P: Protocol> Integration<P> {
    /// Sets up entities over an existing client.
    ///
    /// `config` is assumed valid.
    #[must_use]
    pub fn with_client(config: &IntegrationConfig, client: ApiClient<P>) -> Self {
        let client = Arc::new(client);
        let notifier = Arc::new(CallbackRegistry::new());
        let title = config.title();

        let climate = ClimateAdapter::new(client.clone(), notifier.clone(), title.clone());
        let zone_switches = config
            .zones()
            .iter()
            .map(|zone| ZoneSwitchAdapter::new(client.clone(), notifier.clone(), zone.clone()))
            .collect();

        Self {
            title,
            client,
            notifier,
            climate,
            zone_switches,
        }
    }

    /// Platforms this integration provides entities for.
    #[must_use]
    pub fn platforms(&self) -> &'static [Platform] {
        &[Platform::Climate, Platform::Switch]
    }

    /// Returns the entry title, also used as device name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the shared client.
    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient<P>> {
        &self.client
    }

    /// Returns the climate entity.
    #[must_use]
    pub fn climate(&self) -> &ClimateAdapter<P> {
        &self.climate
    }

    /// Returns the zone switches, in configured order.
    #[must_use]
    pub fn zone_switches(&self) -> &[ZoneSwitchAdapter<P>] {
        &self.zone_switches
    }

    /// Returns the switch for a zone name.
    #[must_use]
    pub fn zone_switch(&self, zone: &str) -> Option<&ZoneSwitchAdapter<P>> {
        self.zone_switches.iter().find(|s| s.zone().name() == zone)
    }

    /// Tears down the integration, releasing the shared client.
    pub fn unload(self) {
        tracing::info!(title = %self.title, "Unloading AC integration");
        self.notifier.clear();
    }
}

impl<P: Protocol> Subscribable for Integration<P> {
    fn on_entity_updated<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.notifier.on_entity_updated(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
