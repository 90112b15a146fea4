// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands for the main control endpoint.

use serde_json::{Value, json};

use crate::command::Command;
use crate::error::ValueError;
use crate::protocol::endpoints;
use crate::state::fields;
use crate::types::{FanSpeed, HvacMode, PowerState};

/// A single-field update sent to `/api/v1/control`.
///
/// Each variant sets exactly one field; the unit leaves the others alone.
///
/// # Examples
///
/// ```
/// use baums_ac::command::{Command, ControlCommand};
///
/// let cmd = ControlCommand::target_temperature(22.5).unwrap();
/// assert_eq!(cmd.payload(), serde_json::json!({"target_temp": 22.5}));
///
/// assert!(ControlCommand::target_temperature(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    /// Power the unit on or off.
    Power(PowerState),
    /// Select the operating mode.
    Mode(HvacMode),
    /// Set the setpoint in degrees Celsius.
    TargetTemperature(f64),
    /// Select the fan speed.
    FanSpeed(FanSpeed),
}

impl ControlCommand {
    /// Creates a setpoint command, rejecting NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NonFiniteTemperature`] if `value` is not finite.
    pub fn target_temperature(value: f64) -> Result<Self, ValueError> {
        if value.is_finite() {
            Ok(Self::TargetTemperature(value))
        } else {
            Err(ValueError::NonFiniteTemperature(value))
        }
    }
}

impl Command for ControlCommand {
    fn endpoint(&self) -> &'static str {
        endpoints::CONTROL
    }

    fn payload(&self) -> Value {
        match self {
            Self::Power(state) => json!({ fields::POWER: state.as_str() }),
            Self::Mode(mode) => json!({ fields::MODE: mode.as_str() }),
            Self::TargetTemperature(value) => json!({ fields::TARGET_TEMP: value }),
            Self::FanSpeed(speed) => json!({ fields::FAN_SPEED: speed.as_str() }),
        }
    }
}
