// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC operating mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode of the air conditioner.
///
/// The unit's own `mode` field carries one of these values; [`HvacMode::Off`]
/// is also what the climate entity reports whenever power is off.
///
/// # Examples
///
/// ```
/// use baums_ac::types::HvacMode;
///
/// assert_eq!(HvacMode::FanOnly.as_str(), "fan_only");
/// assert_eq!("cool".parse::<HvacMode>().unwrap(), HvacMode::Cool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    /// Cooling.
    Cool,
    /// Heating.
    Heat,
    /// Fan only, no compressor.
    FanOnly,
    /// Unit off.
    Off,
}

impl HvacMode {
    /// Every mode the unit supports, in display order.
    pub const ALL: [Self; 4] = [Self::Cool, Self::Heat, Self::FanOnly, Self::Off];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Heat => "heat",
            Self::FanOnly => "fan_only",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cool" => Ok(Self::Cool),
            "heat" => Ok(Self::Heat),
            "fan_only" => Ok(Self::FanOnly),
            "off" => Ok(Self::Off),
            _ => Err(ValueError::InvalidHvacMode(s.to_string())),
        }
    }
}
