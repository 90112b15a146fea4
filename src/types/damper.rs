// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone damper state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// State of a zone's airflow damper.
///
/// The unit is asymmetric on the wire: it *reports* a shut damper as
/// `"closed"` in the state document but *accepts* `"close"` in zone
/// commands. [`as_str`](Self::as_str) gives the reported form and
/// [`as_command_str`](Self::as_command_str) the command form; parsing
/// accepts both.
///
/// # Examples
///
/// ```
/// use baums_ac::types::DamperState;
///
/// assert_eq!(DamperState::Closed.as_str(), "closed");
/// assert_eq!(DamperState::Closed.as_command_str(), "close");
/// assert_eq!("close".parse::<DamperState>().unwrap(), DamperState::Closed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamperState {
    /// Air flows into the zone.
    Open,
    /// Zone is shut off.
    #[serde(alias = "close")]
    Closed,
}

impl DamperState {
    /// Returns the form the unit reports in its state document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the form the unit accepts in zone commands.
    #[must_use]
    pub const fn as_command_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "close",
        }
    }

    /// Returns `true` if the damper is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for DamperState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DamperState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" | "close" => Ok(Self::Closed),
            _ => Err(ValueError::InvalidDamperState(s.to_string())),
        }
    }
}

impl From<bool> for DamperState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}
