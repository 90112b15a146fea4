// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone damper command.

use serde_json::{Value, json};

use crate::command::Command;
use crate::protocol::endpoints;
use crate::state::fields;
use crate::types::DamperState;

/// Opens or closes one zone's damper via `/api/v1/zones`.
///
/// # Examples
///
/// ```
/// use baums_ac::command::{Command, ZoneCommand};
/// use baums_ac::types::DamperState;
///
/// let cmd = ZoneCommand::new("Office", DamperState::Closed);
/// assert_eq!(
///     cmd.payload(),
///     serde_json::json!({"zone": "Office", "state": "close"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneCommand {
    zone: String,
    state: DamperState,
}

impl ZoneCommand {
    /// Creates a zone command.
    #[must_use]
    pub fn new(zone: impl Into<String>, state: DamperState) -> Self {
        Self {
            zone: zone.into(),
            state,
        }
    }

    /// Returns the target zone.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Returns the requested damper state.
    #[must_use]
    pub fn state(&self) -> DamperState {
        self.state
    }
}

impl Command for ZoneCommand {
    fn endpoint(&self) -> &'static str {
        endpoints::ZONES
    }

    fn payload(&self) -> Value {
        json!({
            fields::ZONE: self.zone,
            fields::STATE: self.state.as_command_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_payload() {
        let cmd = ZoneCommand::new("Master Bedroom", DamperState::Open);
        assert_eq!(
            cmd.payload(),
            json!({"zone": "Master Bedroom", "state": "open"})
        );
    }

    #[test]
    fn zone_name_is_sent_verbatim() {
        let cmd = ZoneCommand::new("Lounge & Study", DamperState::Closed);
        assert_eq!(cmd.zone(), "Lounge & Study");
        assert_eq!(cmd.payload()["zone"], "Lounge & Study");
        assert_eq!(cmd.payload()["state"], "close");
    }
}
