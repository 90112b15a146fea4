// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration configuration.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::protocol::HttpConfig;
use crate::types::Zone;

/// Zones configured when none are given.
pub const DEFAULT_ZONES: [&str; 4] = [
    "Master Bedroom",
    "Middle Bedroom",
    "Kids Bedroom",
    "Lounge & Study",
];

/// Configuration for one air-conditioning unit.
///
/// Only `host` is required. It deserializes from the host's stored entry
/// data, so `{"host": "192.168.1.40"}` is a complete configuration.
///
/// # Examples
///
/// ```
/// use baums_ac::IntegrationConfig;
///
/// let config = IntegrationConfig::new("192.168.1.40");
/// assert_eq!(config.title(), "My AC (192.168.1.40)");
/// assert_eq!(config.zones().len(), 4);
///
/// let config: IntegrationConfig =
///     serde_json::from_str(r#"{"host": "ac.local", "zones": ["Office"]}"#).unwrap();
/// assert_eq!(config.zones()[0].name(), "Office");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default = "default_zones")]
    zones: Vec<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

fn default_zones() -> Vec<Zone> {
    DEFAULT_ZONES.into_iter().map(Zone::from).collect()
}

impl IntegrationConfig {
    /// Creates a configuration for `host` with the default zones.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            title: None,
            zones: default_zones(),
            timeout_secs: None,
        }
    }

    /// Sets the entry title, which is also the device name.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the zone list.
    #[must_use]
    pub fn with_zones<I, Z>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = Z>,
        Z: Into<Zone>,
    {
        self.zones = zones.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.trim()
    }

    /// Returns the title, defaulting to `"My AC ({host})"`.
    #[must_use]
    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("My AC ({})", self.host()))
    }

    /// Returns the configured zones.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Returns the request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is blank, a zone name is blank, or a zone
    /// is listed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host().is_empty() {
            return Err(ConfigError::MissingHost);
        }

        let mut seen = HashSet::new();
        for zone in &self.zones {
            if zone.name().trim().is_empty() {
                return Err(ConfigError::EmptyZoneName);
            }
            if !seen.insert(zone.name()) {
                return Err(ConfigError::DuplicateZone(zone.name().to_string()));
            }
        }
        Ok(())
    }

    /// Builds the HTTP configuration for the unit.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let config = HttpConfig::new(self.host());
        match self.timeout() {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = IntegrationConfig::new("10.0.0.5");
        assert_eq!(config.host(), "10.0.0.5");
        assert_eq!(config.title(), "My AC (10.0.0.5)");
        assert_eq!(
            config.zones().iter().map(Zone::name).collect::<Vec<_>>(),
            DEFAULT_ZONES
        );
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_host_only_entry() {
        let config: IntegrationConfig = serde_json::from_str(r#"{"host": "10.0.0.5"}"#).unwrap();
        assert_eq!(config, IntegrationConfig::new("10.0.0.5"));
    }

    #[test]
    fn missing_host_fails_to_deserialize() {
        assert!(serde_json::from_str::<IntegrationConfig>(r#"{"zones": []}"#).is_err());
    }

    #[test]
    fn blank_host_is_invalid() {
        let config = IntegrationConfig::new("   ");
        assert_eq!(config.validate(), Err(ConfigError::MissingHost));
    }

    #[test]
    fn duplicate_zone_is_invalid() {
        let config = IntegrationConfig::new("10.0.0.5").with_zones(["Office", "Office"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateZone("Office".to_string()))
        );
    }

    #[test]
    fn blank_zone_is_invalid() {
        let config = IntegrationConfig::new("10.0.0.5").with_zones(["Office", " "]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyZoneName));
    }

    #[test]
    fn custom_title_and_timeout() {
        let config = IntegrationConfig::new("10.0.0.5")
            .with_title("Upstairs")
            .with_timeout(Duration::from_secs(4));
        assert_eq!(config.title(), "Upstairs");
        assert_eq!(config.http_config().timeout(), Some(Duration::from_secs(4)));
    }

    #[test]
    fn http_config_uses_trimmed_host() {
        let config = IntegrationConfig::new(" 10.0.0.5 ");
        assert_eq!(config.http_config().base_url(), "http://10.0.0.5");
    }
}
