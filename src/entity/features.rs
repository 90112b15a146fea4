// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate feature flags and units.

use std::fmt;

/// Features a climate entity advertises to the host.
///
/// # Examples
///
/// ```
/// use baums_ac::entity::ClimateFeatures;
///
/// let features = ClimateFeatures::default();
/// assert!(features.target_temperature);
/// assert!(features.fan_mode);
/// assert_eq!(features.names(), ["target_temperature", "fan_mode", "turn_on", "turn_off"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// Independent host feature flags; not a state machine.
#[allow(clippy::struct_excessive_bools)]
pub struct ClimateFeatures {
    /// Setpoint can be changed.
    pub target_temperature: bool,

    /// Fan speed can be changed.
    pub fan_mode: bool,

    /// Entity can be turned on directly.
    pub turn_on: bool,

    /// Entity can be turned off directly.
    pub turn_off: bool,
}

impl Default for ClimateFeatures {
    fn default() -> Self {
        Self::all()
    }
}

impl ClimateFeatures {
    /// Every feature enabled. This is what the unit supports.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            target_temperature: true,
            fan_mode: true,
            turn_on: true,
            turn_off: true,
        }
    }

    /// No features enabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            target_temperature: false,
            fan_mode: false,
            turn_on: false,
            turn_off: false,
        }
    }

    /// Returns the host-facing names of the enabled features.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.target_temperature, "target_temperature"),
            (self.fan_mode, "fan_mode"),
            (self.turn_on, "turn_on"),
            (self.turn_off, "turn_off"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}

/// Unit in which temperatures are reported and accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
}

impl TemperatureUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
