// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `baums_ac` - Home-automation bridge for a custom zoned air-conditioning unit.
//!
//! The unit exposes a small JSON-over-HTTP API. This library polls it,
//! caches the latest state document, and projects that state onto
//! host-facing entities: one thermostat and one on/off switch per zone
//! damper.
//!
//! # Supported Features
//!
//! - **State polling**: `GET /api/v1/state`, cached and replaced wholesale
//! - **Control**: Power, HVAC mode, setpoint, fan speed via `/api/v1/control`
//! - **Zones**: Damper open/close via `/api/v1/zones`
//! - **Notifications**: Callbacks after each command and refresh
//!
//! # Quick Start
//!
//! ## Integration Setup
//!
//! ```no_run
//! use baums_ac::entity::{Climate, Entity, Switch};
//! use baums_ac::types::HvacMode;
//! use baums_ac::{Integration, IntegrationConfig, Subscribable};
//!
//! #[tokio::main]
//! async fn main() -> baums_ac::Result<()> {
//!     let config = IntegrationConfig::new("192.168.1.40")
//!         .with_zones(["Master Bedroom", "Lounge & Study"]);
//!     let integration = Integration::setup(config)?;
//!
//!     integration.on_entity_updated(|unique_id| {
//!         println!("{unique_id} changed");
//!     });
//!
//!     // Host polling tick
//!     integration.climate().update().await;
//!     println!("mode: {:?}", integration.climate().hvac_mode());
//!
//!     integration.climate().set_hvac_mode(HvacMode::Cool).await;
//!     if let Some(lounge) = integration.zone_switch("Lounge & Study") {
//!         lounge.turn_on().await;
//!     }
//!
//!     integration.unload();
//!     Ok(())
//! }
//! ```
//!
//! ## Direct Client Access
//!
//! ```no_run
//! use baums_ac::ApiClient;
//! use baums_ac::protocol::HttpConfig;
//! use baums_ac::types::{DamperState, FanSpeed};
//!
//! #[tokio::main]
//! async fn main() -> baums_ac::Result<()> {
//!     let client = ApiClient::http(HttpConfig::new("192.168.1.40"))?;
//!
//!     // Distinguish failures from an empty document
//!     let state = client.try_fetch_state().await?;
//!     println!("target: {:?}", state.target_temperature());
//!
//!     client.set_fan_speed(FanSpeed::Low).await;
//!     client.set_zone_state("Kids Bedroom", DamperState::Closed).await;
//!     Ok(())
//! }
//! ```

mod client;
pub mod command;
pub mod entity;
pub mod error;
mod integration;
pub mod protocol;
pub mod state;
pub mod subscription;
pub mod types;

pub use client::ApiClient;
pub use command::{Command, ControlCommand, ZoneCommand};
pub use entity::{
    Climate, ClimateAdapter, ClimateFeatures, DOMAIN, DeviceInfo, Entity, Switch, TemperatureUnit,
    ZoneSwitchAdapter,
};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use integration::{DEFAULT_ZONES, Integration, IntegrationConfig, Platform};
pub use protocol::{HttpClient, HttpConfig};
pub use state::DeviceState;
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{DamperState, FanSpeed, HvacMode, PowerState, Zone};
