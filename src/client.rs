// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! API client for the air-conditioning unit.
//!
//! [`ApiClient`] is the single point of contact with the unit. It owns the
//! transport and the cached [`DeviceState`], and it is the only writer of
//! that cache.
//!
//! # Failure Handling
//!
//! Transport failures, non-2xx statuses, and malformed bodies never reach
//! the caller of the convenience methods: [`ApiClient::fetch_state`] returns
//! an empty state and the command methods return `false`, after logging the
//! cause. [`ApiClient::try_fetch_state`] is available when the caller needs
//! to tell an empty document from a failed fetch.
//!
//! ```no_run
//! use baums_ac::ApiClient;
//! use baums_ac::protocol::HttpConfig;
//! use baums_ac::types::HvacMode;
//!
//! # async fn example() -> baums_ac::Result<()> {
//! let client = ApiClient::http(HttpConfig::new("192.168.1.40"))?;
//!
//! let state = client.fetch_state().await;
//! println!("room is {:?} °C", state.current_temperature());
//!
//! if client.set_power(true).await && client.set_mode(HvacMode::Cool).await {
//!     client.fetch_state().await;
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;

use crate::command::{Command, ControlCommand, ZoneCommand};
use crate::error::{Error, Result};
use crate::protocol::{HttpClient, HttpConfig, Protocol, endpoints};
use crate::state::DeviceState;
use crate::types::{DamperState, FanSpeed, HvacMode, PowerState};

#[derive(Debug, Default)]
struct Cache {
    state: DeviceState,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Client for the unit's REST API with a cached state snapshot.
///
/// The cache starts empty, is replaced wholesale on each successful fetch,
/// and never expires. The lock guarding it is never held across an
/// `.await`, so concurrent fetches simply race and the last one to
/// complete wins.
#[derive(Debug)]
pub struct ApiClient<P: Protocol = HttpClient> {
    protocol: P,
    cache: RwLock<Cache>,
}

impl ApiClient<HttpClient> {
    /// Creates a client talking HTTP to the configured host.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self> {
        let protocol = config.into_client().map_err(Error::Protocol)?;
        Ok(Self::new(protocol))
    }

    /// Returns the base URL of the unit.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.protocol.base_url()
    }
}

impl<P: Protocol> ApiClient<P> {
    /// Creates a client over the given transport with an empty cache.
    pub fn new(protocol: P) -> Self {
        Self {
            protocol,
            cache: RwLock::new(Cache::default()),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    // ========== Cache ==========

    /// Returns a copy of the cached state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.cache.read().state.clone()
    }

    /// Runs `f` against the cached state without copying it.
    ///
    /// `f` must not call back into the client.
    pub fn with_state<R>(&self, f: impl FnOnce(&DeviceState) -> R) -> R {
        f(&self.cache.read().state)
    }

    /// Returns when the cache was last replaced, if ever.
    #[must_use]
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.cache.read().refreshed_at
    }

    // ========== State Fetch ==========

    /// Fetches the state document and replaces the cache with it.
    ///
    /// On failure the cache is left untouched and an empty state is
    /// returned. An empty state is also what a unit reporting `{}` yields;
    /// use [`try_fetch_state`](Self::try_fetch_state) to tell them apart.
    pub async fn fetch_state(&self) -> DeviceState {
        match self.try_fetch_state().await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "Failed to get state from AC API");
                DeviceState::new()
            }
        }
    }

    /// Fetches the state document and replaces the cache with it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] on transport failure or a non-2xx status
    /// and [`Error::Parse`] if the body is not a JSON object. The cache is
    /// unchanged in both cases.
    pub async fn try_fetch_state(&self) -> Result<DeviceState> {
        let response = self.protocol.get(endpoints::STATE).await?;
        let state = response.parse_state()?;

        tracing::debug!(fields = state.as_map().len(), "Got state from API");

        let mut cache = self.cache.write();
        cache.state = state.clone();
        cache.refreshed_at = Some(Utc::now());

        Ok(state)
    }

    // ========== Commands ==========

    /// Sets the operating mode.
    pub async fn set_mode(&self, mode: HvacMode) -> bool {
        tracing::info!(mode = %mode, "Setting mode");
        self.send_command(&ControlCommand::Mode(mode)).await
    }

    /// Sets the target temperature in degrees Celsius.
    ///
    /// Non-finite values are refused without contacting the unit.
    pub async fn set_temperature(&self, temperature: f64) -> bool {
        tracing::info!(temperature, "Setting temperature");
        match ControlCommand::target_temperature(temperature) {
            Ok(cmd) => self.send_command(&cmd).await,
            Err(e) => {
                tracing::warn!(error = %e, "Refusing to send temperature");
                false
            }
        }
    }

    /// Sets the fan speed.
    pub async fn set_fan_speed(&self, speed: FanSpeed) -> bool {
        tracing::info!(fan_speed = %speed, "Setting fan speed");
        self.send_command(&ControlCommand::FanSpeed(speed)).await
    }

    /// Turns the unit on or off.
    pub async fn set_power(&self, on: bool) -> bool {
        let state = PowerState::from(on);
        tracing::info!(power = %state, "Setting power");
        self.send_command(&ControlCommand::Power(state)).await
    }

    /// Opens or closes a zone damper.
    pub async fn set_zone_state(&self, zone: &str, state: DamperState) -> bool {
        tracing::info!(zone = %zone, state = state.as_command_str(), "Setting zone");
        self.send_command(&ZoneCommand::new(zone, state)).await
    }

    /// Sends a command and reports whether the unit accepted it.
    ///
    /// The cache is not touched; fetch again to observe the effect.
    pub async fn send_command<C: Command + ?Sized>(&self, command: &C) -> bool {
        self.send_raw(command.endpoint(), &command.payload()).await
    }

    /// POSTs an arbitrary JSON payload and reports whether the unit accepted it.
    pub async fn send_raw(&self, path: &str, payload: &Value) -> bool {
        match self.protocol.post_json(path, payload).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, path, "Failed to send command to AC API");
                false
            }
        }
    }
}
