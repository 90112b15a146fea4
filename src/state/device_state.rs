// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached device state snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::types::{DamperState, FanSpeed, HvacMode, PowerState};

use super::fields;

/// Snapshot of the unit's state document.
///
/// The snapshot is the JSON object returned by `GET /api/v1/state`, kept
/// verbatim: no schema validation happens and unknown fields are preserved.
/// The typed accessors return `None` when a field is absent or holds a value
/// they do not recognize.
///
/// # Examples
///
/// ```
/// use baums_ac::state::DeviceState;
/// use baums_ac::types::{FanSpeed, HvacMode, PowerState};
///
/// let state = DeviceState::from_json(r#"{
///     "power": "on", "mode": "cool", "target_temp": 22,
///     "current_temp": 24, "fan_speed": "auto",
///     "zones": {"Lounge & Study": "open"}
/// }"#).unwrap();
///
/// assert_eq!(state.power(), Some(PowerState::On));
/// assert_eq!(state.mode(), Some(HvacMode::Cool));
/// assert_eq!(state.target_temperature(), Some(22.0));
/// assert_eq!(state.fan_speed(), Some(FanSpeed::Auto));
/// assert!(state.is_zone_open("Lounge & Study"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceState(Map<String, Value>);

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a state document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the body is not valid JSON and
    /// [`ParseError::UnexpectedFormat`] if it is valid JSON but not an object.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Returns `true` if the snapshot holds no fields.
    ///
    /// This is the case before the first successful fetch, and also what
    /// [`ApiClient::fetch_state`](crate::ApiClient::fetch_state) returns on
    /// failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a raw field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the snapshot and returns the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    // ========== Power & Mode ==========

    /// Returns the raw `power` string.
    #[must_use]
    pub fn power_raw(&self) -> Option<&str> {
        self.str_field(fields::POWER)
    }

    /// Returns the parsed power state.
    #[must_use]
    pub fn power(&self) -> Option<PowerState> {
        self.power_raw().and_then(|s| s.parse().ok())
    }

    /// Returns the parsed `mode`, independent of power.
    #[must_use]
    pub fn mode(&self) -> Option<HvacMode> {
        self.str_field(fields::MODE).and_then(|s| s.parse().ok())
    }

    // ========== Temperatures ==========

    /// Returns the setpoint in degrees Celsius.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f64> {
        self.0.get(fields::TARGET_TEMP).and_then(Value::as_f64)
    }

    /// Returns the measured room temperature in degrees Celsius.
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.0.get(fields::CURRENT_TEMP).and_then(Value::as_f64)
    }

    // ========== Fan ==========

    /// Returns the parsed fan speed.
    #[must_use]
    pub fn fan_speed(&self) -> Option<FanSpeed> {
        self.str_field(fields::FAN_SPEED)
            .and_then(|s| s.parse().ok())
    }

    // ========== Zones ==========

    /// Returns the raw damper string reported for `zone`.
    #[must_use]
    pub fn zone_raw(&self, zone: &str) -> Option<&str> {
        self.zones_object()
            .and_then(|zones| zones.get(zone))
            .and_then(Value::as_str)
    }

    /// Returns the parsed damper state for `zone`.
    #[must_use]
    pub fn zone(&self, zone: &str) -> Option<DamperState> {
        self.zone_raw(zone).and_then(|s| s.parse().ok())
    }

    /// Returns `true` only if the unit reports exactly `"open"` for `zone`.
    ///
    /// A missing `zones` object, a missing zone, and any other value all
    /// count as closed.
    #[must_use]
    pub fn is_zone_open(&self, zone: &str) -> bool {
        self.zone_raw(zone) == Some(DamperState::Open.as_str())
    }

    /// Returns the zone names the unit reports, in document order.
    #[must_use]
    pub fn zone_names(&self) -> Vec<&str> {
        self.zones_object()
            .map(|zones| zones.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    // ========== Helpers ==========

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn zones_object(&self) -> Option<&Map<String, Value>> {
        self.0.get(fields::ZONES).and_then(Value::as_object)
    }
}

impl From<Map<String, Value>> for DeviceState {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeviceState {
        DeviceState::from_json(
            r#"{
                "power": "on",
                "mode": "heat",
                "target_temp": 21.5,
                "current_temp": 18,
                "fan_speed": "high",
                "zones": {"Office": "open", "Kids Bedroom": "closed", "Garage": "stuck"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn new_state_is_empty() {
        let state = DeviceState::new();
        assert!(state.is_empty());
        assert!(state.power().is_none());
        assert!(state.mode().is_none());
        assert!(state.target_temperature().is_none());
        assert!(state.zone_names().is_empty());
    }

    #[test]
    fn typed_accessors() {
        let state = sample();
        assert_eq!(state.power(), Some(PowerState::On));
        assert_eq!(state.mode(), Some(HvacMode::Heat));
        assert_eq!(state.target_temperature(), Some(21.5));
        assert_eq!(state.current_temperature(), Some(18.0));
        assert_eq!(state.fan_speed(), Some(FanSpeed::High));
    }

    #[test]
    fn zone_accessors() {
        let state = sample();
        assert!(state.is_zone_open("Office"));
        assert!(!state.is_zone_open("Kids Bedroom"));
        assert!(!state.is_zone_open("Garage"));
        assert!(!state.is_zone_open("Attic"));
        assert_eq!(state.zone("Kids Bedroom"), Some(DamperState::Closed));
        assert_eq!(state.zone("Garage"), None);
        assert_eq!(state.zone_raw("Garage"), Some("stuck"));
        assert_eq!(state.zone_names(), ["Office", "Kids Bedroom", "Garage"]);
    }

    #[test]
    fn zone_open_is_case_sensitive() {
        let state = DeviceState::from_json(r#"{"zones": {"Office": "OPEN"}}"#).unwrap();
        assert!(!state.is_zone_open("Office"));
    }

    #[test]
    fn unrecognized_values_read_as_none() {
        let state = DeviceState::from_json(
            r#"{"power": "standby", "mode": "dry", "target_temp": "warm", "fan_speed": 3}"#,
        )
        .unwrap();
        assert_eq!(state.power_raw(), Some("standby"));
        assert!(state.power().is_none());
        assert!(state.mode().is_none());
        assert!(state.target_temperature().is_none());
        assert!(state.fan_speed().is_none());
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let state = DeviceState::from_json(r#"{"power": "on", "filter_hours": 120}"#).unwrap();
        assert_eq!(state.get("filter_hours"), Some(&serde_json::json!(120)));
        assert_eq!(state.as_map().len(), 2);
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = DeviceState::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedFormat(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn from_json_rejects_malformed_body() {
        let err = DeviceState::from_json("{\"power\": ").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn zones_not_an_object() {
        let state = DeviceState::from_json(r#"{"zones": ["Office"]}"#).unwrap();
        assert!(!state.is_zone_open("Office"));
        assert!(state.zone_names().is_empty());
    }
}
