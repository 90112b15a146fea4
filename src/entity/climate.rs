// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity for the air-conditioning unit.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::entity::{
    Climate, ClimateFeatures, DOMAIN, DeviceInfo, Entity, TemperatureUnit,
};
use crate::protocol::{HttpClient, Protocol};
use crate::state::{DeviceState, fields};
use crate::subscription::CallbackRegistry;
use crate::types::{FanSpeed, HvacMode, PowerState};

/// The unit, projected as a thermostat.
///
/// Also the entity that drives polling: its [`update`](Entity::update)
/// fetches the state document that every other entity reads.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use baums_ac::entity::{Climate, ClimateAdapter};
/// use baums_ac::protocol::HttpConfig;
/// use baums_ac::subscription::CallbackRegistry;
/// use baums_ac::types::HvacMode;
/// use baums_ac::ApiClient;
///
/// # async fn example() -> baums_ac::Result<()> {
/// let client = Arc::new(ApiClient::http(HttpConfig::new("192.168.1.40"))?);
/// let climate = ClimateAdapter::new(client, Arc::new(CallbackRegistry::new()), "Living AC");
///
/// climate.set_hvac_mode(HvacMode::Heat).await;
/// println!("now {:?}", climate.hvac_mode());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClimateAdapter<P: Protocol = HttpClient> {
    client: Arc<ApiClient<P>>,
    notifier: Arc<CallbackRegistry>,
    unique_id: String,
    device_info: DeviceInfo,
}

impl<P: Protocol> ClimateAdapter<P> {
    /// Creates the climate entity for the unit named `device_name`.
    pub fn new(
        client: Arc<ApiClient<P>>,
        notifier: Arc<CallbackRegistry>,
        device_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            notifier,
            unique_id: format!("{DOMAIN}_climate"),
            device_info: DeviceInfo::unit(device_name),
        }
    }

    /// Returns the shared client.
    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient<P>> {
        &self.client
    }

    async fn refresh_and_notify(&self) {
        self.client.fetch_state().await;
        self.notifier.dispatch_entity_updated(&self.unique_id);
    }
}

impl<P: Protocol> Entity for ClimateAdapter<P> {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> Option<&str> {
        None
    }

    fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    async fn update(&self) {
        tracing::debug!("Updating climate entity state");
        self.client.fetch_state().await;
    }
}

impl<P: Protocol> Climate for ClimateAdapter<P> {
    fn hvac_mode(&self) -> Option<HvacMode> {
        // Only a missing field or the literal "off" means unpowered.
        self.client.with_state(|state| {
            let powered = state
                .get(fields::POWER)
                .is_some_and(|power| power.as_str() != Some(PowerState::Off.as_str()));
            if powered {
                state.mode()
            } else {
                Some(HvacMode::Off)
            }
        })
    }

    fn current_temperature(&self) -> Option<f64> {
        self.client.with_state(DeviceState::current_temperature)
    }

    fn target_temperature(&self) -> Option<f64> {
        self.client.with_state(DeviceState::target_temperature)
    }

    fn fan_mode(&self) -> Option<FanSpeed> {
        self.client.with_state(DeviceState::fan_speed)
    }

    fn hvac_modes(&self) -> &[HvacMode] {
        &HvacMode::ALL
    }

    fn fan_modes(&self) -> &[FanSpeed] {
        &FanSpeed::ALL
    }

    fn supported_features(&self) -> ClimateFeatures {
        ClimateFeatures::all()
    }

    fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    async fn set_hvac_mode(&self, mode: HvacMode) -> bool {
        let accepted = if mode == HvacMode::Off {
            self.client.set_power(false).await
        } else {
            // No rollback: a rejected mode leaves the unit powered in its old mode.
            let powered = self.client.set_power(true).await;
            let mode_set = self.client.set_mode(mode).await;
            if powered != mode_set {
                tracing::warn!(
                    mode = %mode,
                    power_accepted = powered,
                    mode_accepted = mode_set,
                    "HVAC mode change only partially applied"
                );
            }
            powered && mode_set
        };
        self.refresh_and_notify().await;
        accepted
    }

    async fn set_temperature(&self, temperature: f64) -> bool {
        let accepted = self.client.set_temperature(temperature).await;
        self.refresh_and_notify().await;
        accepted
    }

    async fn set_fan_mode(&self, speed: FanSpeed) -> bool {
        let accepted = self.client.set_fan_speed(speed).await;
        self.refresh_and_notify().await;
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::endpoints;
    use crate::protocol::mock::{MockProtocol, Request};
    use parking_lot::Mutex;
    use serde_json::json;

    const SCENARIO: &str = r#"{"power":"on","mode":"cool","target_temp":22,"current_temp":24,"fan_speed":"auto","zones":{"Lounge & Study":"open"}}"#;

    fn adapter(mock: MockProtocol) -> (ClimateAdapter<MockProtocol>, Arc<CallbackRegistry>) {
        let notifier = Arc::new(CallbackRegistry::new());
        let adapter = ClimateAdapter::new(
            Arc::new(ApiClient::new(mock)),
            notifier.clone(),
            "My AC (10.0.0.5)",
        );
        (adapter, notifier)
    }

    fn notified(notifier: &CallbackRegistry) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        notifier.on_entity_updated(move |id| seen_clone.lock().push(id.to_string()));
        seen
    }

    #[tokio::test]
    async fn reads_scenario_state() {
        let mock = MockProtocol::new();
        mock.push_state(SCENARIO);
        let (climate, _) = adapter(mock);

        climate.update().await;

        assert_eq!(climate.hvac_mode(), Some(HvacMode::Cool));
        assert_eq!(climate.target_temperature(), Some(22.0));
        assert_eq!(climate.current_temperature(), Some(24.0));
        assert_eq!(climate.fan_mode(), Some(FanSpeed::Auto));
    }

    #[tokio::test]
    async fn power_off_overrides_mode() {
        for mode in ["cool", "heat", "fan_only", "off", "bogus"] {
            let mock = MockProtocol::new();
            mock.push_state(&format!(r#"{{"power":"off","mode":"{mode}"}}"#));
            let (climate, _) = adapter(mock);
            climate.update().await;

            assert_eq!(climate.hvac_mode(), Some(HvacMode::Off), "mode {mode}");
        }
    }

    #[test]
    fn empty_cache_reads_off() {
        let (climate, _) = adapter(MockProtocol::new());
        assert_eq!(climate.hvac_mode(), Some(HvacMode::Off));
        assert!(climate.target_temperature().is_none());
        assert!(climate.fan_mode().is_none());
    }

    #[tokio::test]
    async fn non_string_power_falls_through_to_mode() {
        for power in ["false", "0", "null", r#"{"state":"off"}"#] {
            let mock = MockProtocol::new();
            mock.push_state(&format!(r#"{{"power":{power},"mode":"heat"}}"#));
            let (climate, _) = adapter(mock);
            climate.update().await;

            assert_eq!(climate.hvac_mode(), Some(HvacMode::Heat), "power {power}");
        }
    }

    #[tokio::test]
    async fn powered_with_unknown_mode_reads_none() {
        let mock = MockProtocol::new();
        mock.push_state(r#"{"power":"on","mode":"dry"}"#);
        let (climate, _) = adapter(mock);
        climate.update().await;

        assert_eq!(climate.hvac_mode(), None);
    }

    #[tokio::test]
    async fn set_off_sends_single_power_command_then_refreshes() {
        let (climate, notifier) = adapter(MockProtocol::new());
        let seen = notified(&notifier);

        climate.set_hvac_mode(HvacMode::Off).await;

        let requests = climate.client().protocol().requests();
        assert_eq!(
            requests,
            vec![
                Request::Post {
                    path: endpoints::CONTROL.to_string(),
                    body: json!({"power": "off"}),
                },
                Request::Get {
                    path: endpoints::STATE.to_string(),
                },
            ]
        );
        assert_eq!(*seen.lock(), vec!["baums_ac_climate".to_string()]);
    }

    #[tokio::test]
    async fn set_mode_powers_on_first() {
        let (climate, _) = adapter(MockProtocol::new());

        assert!(climate.set_hvac_mode(HvacMode::FanOnly).await);

        assert_eq!(
            climate.client().protocol().posts(),
            vec![
                (endpoints::CONTROL.to_string(), json!({"power": "on"})),
                (endpoints::CONTROL.to_string(), json!({"mode": "fan_only"})),
            ]
        );
        assert_eq!(climate.client().protocol().get_count(), 1);
    }

    #[tokio::test]
    async fn partial_mode_change_is_not_compensated() {
        let mock = MockProtocol::new();
        mock.push_post_status(200);
        mock.push_post_status(500);
        let (climate, _) = adapter(mock);

        assert!(!climate.set_hvac_mode(HvacMode::Heat).await);

        // Power-on stays applied; no power-off is sent afterwards.
        let posts = climate.client().protocol().posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(climate.client().protocol().get_count(), 1);
    }

    #[tokio::test]
    async fn failed_command_still_refreshes_and_notifies() {
        let mock = MockProtocol::new();
        mock.push_state(SCENARIO);
        mock.push_post_status(500);
        let (climate, notifier) = adapter(mock);
        let seen = notified(&notifier);
        climate.update().await;
        let before = climate.client().state();

        assert!(!climate.set_temperature(19.0).await);

        assert_eq!(climate.client().protocol().get_count(), 2);
        assert_eq!(climate.client().state(), before);
        assert_eq!(seen.lock().len(), 1);
    }

    #[tokio::test]
    async fn set_fan_mode_then_refresh() {
        let mock = MockProtocol::new();
        mock.push_state(r#"{"power":"on","fan_speed":"high"}"#);
        let (climate, _) = adapter(mock);

        assert!(climate.set_fan_mode(FanSpeed::High).await);
        assert_eq!(climate.fan_mode(), Some(FanSpeed::High));
    }

    #[tokio::test]
    async fn turn_on_defaults_to_cool() {
        let (climate, _) = adapter(MockProtocol::new());

        climate.turn_on().await;

        assert_eq!(
            climate.client().protocol().posts(),
            vec![
                (endpoints::CONTROL.to_string(), json!({"power": "on"})),
                (endpoints::CONTROL.to_string(), json!({"mode": "cool"})),
            ]
        );
    }

    #[tokio::test]
    async fn turn_off_only_powers_off() {
        let (climate, _) = adapter(MockProtocol::new());

        climate.turn_off().await;

        assert_eq!(
            climate.client().protocol().posts(),
            vec![(endpoints::CONTROL.to_string(), json!({"power": "off"}))]
        );
    }

    #[test]
    fn entity_metadata() {
        let (climate, _) = adapter(MockProtocol::new());
        assert_eq!(climate.unique_id(), "baums_ac_climate");
        assert!(climate.name().is_none());
        assert_eq!(
            climate.device_info().name.as_deref(),
            Some("My AC (10.0.0.5)")
        );
        assert_eq!(climate.hvac_modes(), HvacMode::ALL);
        assert_eq!(climate.fan_modes(), FanSpeed::ALL);
        assert_eq!(climate.supported_features(), ClimateFeatures::all());
        assert_eq!(climate.temperature_unit(), TemperatureUnit::Celsius);
    }

    #[tokio::test]
    async fn update_does_not_notify() {
        let mock = MockProtocol::new();
        mock.push_state(SCENARIO);
        let (climate, notifier) = adapter(mock);
        let seen = notified(&notifier);

        climate.update().await;

        assert!(seen.lock().is_empty());
    }
}
