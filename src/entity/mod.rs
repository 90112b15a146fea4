// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing entities.
//!
//! Entities are thin projections of the [`ApiClient`](crate::ApiClient)'s
//! cached state. They hold no state of their own: every read property is
//! computed from the cache at the time of the call, and every command goes
//! through the client followed by a fresh fetch.
//!
//! # Entities
//!
//! - [`ClimateAdapter`] - The unit itself, as a thermostat ([`Climate`])
//! - [`ZoneSwitchAdapter`] - One per configured zone, as a damper toggle ([`Switch`])
//!
//! # Polling
//!
//! The host calls [`Entity::update`] on its own schedule. Only the climate
//! entity fetches; zone switches rely on it because all entities read the
//! same client-owned cache.

mod climate;
mod features;
mod zone_switch;

pub use climate::ClimateAdapter;
pub use features::{ClimateFeatures, TemperatureUnit};
pub use zone_switch::ZoneSwitchAdapter;

use crate::types::{FanSpeed, HvacMode};

/// Integration domain, used as the prefix of every unique id.
pub const DOMAIN: &str = "baums_ac";

/// Identifier of the single physical unit all entities belong to.
pub const DEVICE_IDENTIFIER: &str = "main_ac_unit";

/// Manufacturer reported in device info.
pub const MANUFACTURER: &str = "My Custom Build";

/// Registry information linking entities to a physical device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// `(domain, identifier)` pair.
    pub identifier: (String, String),
    /// Device name, when this entity defines the device.
    pub name: Option<String>,
    /// Manufacturer, when this entity defines the device.
    pub manufacturer: Option<String>,
}

impl DeviceInfo {
    /// Info that only links to the unit.
    #[must_use]
    pub fn link() -> Self {
        Self {
            identifier: (DOMAIN.to_string(), DEVICE_IDENTIFIER.to_string()),
            name: None,
            manufacturer: None,
        }
    }

    /// Info that defines the unit, with its display name.
    #[must_use]
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            manufacturer: Some(MANUFACTURER.to_string()),
            ..Self::link()
        }
    }
}

/// Common surface of every entity.
#[allow(async_fn_in_trait)]
pub trait Entity {
    /// Stable id, unique within the host.
    fn unique_id(&self) -> &str;

    /// Entity name, or `None` to use the device name.
    fn name(&self) -> Option<&str>;

    /// Device this entity belongs to.
    fn device_info(&self) -> &DeviceInfo;

    /// Periodic refresh, called by the host on its own schedule.
    async fn update(&self);
}

/// Thermostat-like surface of the unit.
///
/// Command methods return `true` only if every request they issued was
/// accepted. Either way the entity refreshes and notifies afterwards.
#[allow(async_fn_in_trait)]
pub trait Climate: Entity {
    /// Current operating mode. `Off` whenever the unit is not powered.
    fn hvac_mode(&self) -> Option<HvacMode>;

    /// Measured room temperature.
    fn current_temperature(&self) -> Option<f64>;

    /// Setpoint.
    fn target_temperature(&self) -> Option<f64>;

    /// Current fan speed.
    fn fan_mode(&self) -> Option<FanSpeed>;

    /// Modes the host may request.
    fn hvac_modes(&self) -> &[HvacMode];

    /// Fan speeds the host may request.
    fn fan_modes(&self) -> &[FanSpeed];

    /// Advertised features.
    fn supported_features(&self) -> ClimateFeatures;

    /// Unit of all temperatures.
    fn temperature_unit(&self) -> TemperatureUnit;

    /// Changes the operating mode.
    async fn set_hvac_mode(&self, mode: HvacMode) -> bool;

    /// Changes the setpoint.
    async fn set_temperature(&self, temperature: f64) -> bool;

    /// Changes the fan speed.
    async fn set_fan_mode(&self, speed: FanSpeed) -> bool;

    /// Turns the unit on in cooling mode.
    async fn turn_on(&self) -> bool {
        self.set_hvac_mode(HvacMode::Cool).await
    }

    /// Turns the unit off.
    async fn turn_off(&self) -> bool {
        self.set_hvac_mode(HvacMode::Off).await
    }
}

/// On/off toggle surface.
#[allow(async_fn_in_trait)]
pub trait Switch: Entity {
    /// Whether the switch is on.
    fn is_on(&self) -> bool;

    /// Turns the switch on.
    async fn turn_on(&self) -> bool;

    /// Turns the switch off.
    async fn turn_off(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_info_has_identifier_only() {
        let info = DeviceInfo::link();
        assert_eq!(
            info.identifier,
            ("baums_ac".to_string(), "main_ac_unit".to_string())
        );
        assert!(info.name.is_none());
        assert!(info.manufacturer.is_none());
    }

    #[test]
    fn unit_info_names_the_device() {
        let info = DeviceInfo::unit("My AC (10.0.0.5)");
        assert_eq!(info.name.as_deref(), Some("My AC (10.0.0.5)"));
        assert_eq!(info.manufacturer.as_deref(), Some(MANUFACTURER));
        assert_eq!(info.identifier, DeviceInfo::link().identifier);
    }
}
