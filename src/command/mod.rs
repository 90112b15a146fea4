// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air-conditioner command definitions.
//!
//! A command is an ephemeral request: an endpoint plus a small JSON body.
//! It has no persisted representation; the only observable outcome of
//! sending one is whether the unit accepted it.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Example body |
//! |-------------|----------|--------------|
//! | [`ControlCommand::Power`] | `/api/v1/control` | `{"power": "on"}` |
//! | [`ControlCommand::Mode`] | `/api/v1/control` | `{"mode": "cool"}` |
//! | [`ControlCommand::TargetTemperature`] | `/api/v1/control` | `{"target_temp": 22.0}` |
//! | [`ControlCommand::FanSpeed`] | `/api/v1/control` | `{"fan_speed": "auto"}` |
//! | [`ZoneCommand`] | `/api/v1/zones` | `{"zone": "Office", "state": "close"}` |
//!
//! # Examples
//!
//! ```
//! use baums_ac::command::{Command, ControlCommand};
//! use baums_ac::types::HvacMode;
//!
//! let cmd = ControlCommand::Mode(HvacMode::FanOnly);
//! assert_eq!(cmd.endpoint(), "/api/v1/control");
//! assert_eq!(cmd.payload(), serde_json::json!({"mode": "fan_only"}));
//! ```

mod control;
mod zone;

pub use control::ControlCommand;
pub use zone::ZoneCommand;

use serde_json::Value;

/// A command that can be sent to the unit.
pub trait Command {
    /// Returns the path the command is POSTed to.
    fn endpoint(&self) -> &'static str;

    /// Returns the JSON body.
    fn payload(&self) -> Value;
}
