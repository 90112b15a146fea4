// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named subdivision of the conditioned space with its own damper.
///
/// A zone is a static, configured identifier. The name must match the key
/// the unit uses in its `zones` object exactly, including case and
/// punctuation.
///
/// # Examples
///
/// ```
/// use baums_ac::types::Zone;
///
/// let zone = Zone::new("Lounge & Study");
/// assert_eq!(zone.name(), "Lounge & Study");
/// assert_eq!(zone.slug(), "lounge_&_study");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone(String);

impl Zone {
    /// Creates a zone from its configured name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as the unit knows it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns a lowercase identifier with spaces replaced by underscores.
    ///
    /// Used to build stable entity ids; no other characters are touched.
    #[must_use]
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Zone {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Zone {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Zone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_slug_lowercases_and_replaces_spaces() {
        assert_eq!(Zone::new("Master Bedroom").slug(), "master_bedroom");
        assert_eq!(Zone::new("Kids  Bedroom").slug(), "kids__bedroom");
    }

    #[test]
    fn zone_display_is_raw_name() {
        assert_eq!(Zone::new("Lounge & Study").to_string(), "Lounge & Study");
    }

    #[test]
    fn zone_serializes_as_plain_string() {
        let zone: Zone = serde_json::from_str("\"Office\"").unwrap();
        assert_eq!(zone, Zone::new("Office"));
        assert_eq!(serde_json::to_string(&zone).unwrap(), "\"Office\"");
    }
}
