// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state snapshot.
//!
//! [`DeviceState`] is the last state document fetched from the unit. It is
//! owned by [`ApiClient`](crate::ApiClient) and replaced wholesale on every
//! successful fetch; entities only ever read it.
//!
//! # Examples
//!
//! ```
//! use baums_ac::state::DeviceState;
//!
//! let state = DeviceState::from_json(r#"{"power": "off", "mode": "cool"}"#).unwrap();
//! assert_eq!(state.power_raw(), Some("off"));
//! ```

mod device_state;

pub use device_state::DeviceState;

/// Field names of the unit's state document and control payloads.
pub mod fields {
    /// `"on"` / `"off"`.
    pub const POWER: &str = "power";
    /// HVAC mode string.
    pub const MODE: &str = "mode";
    /// Setpoint, number.
    pub const TARGET_TEMP: &str = "target_temp";
    /// Measured temperature, number. Read-only.
    pub const CURRENT_TEMP: &str = "current_temp";
    /// Fan speed string.
    pub const FAN_SPEED: &str = "fan_speed";
    /// Object mapping zone name to damper string.
    pub const ZONES: &str = "zones";
    /// Zone name in a zone command.
    pub const ZONE: &str = "zone";
    /// Damper string in a zone command.
    pub const STATE: &str = "state";
}
