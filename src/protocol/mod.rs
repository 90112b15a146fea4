// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for the unit's REST API.
//!
//! [`Protocol`] is the seam between [`ApiClient`](crate::ApiClient) and the
//! wire. [`HttpClient`] is the production implementation; tests can plug in
//! their own.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::{HttpClient, HttpConfig};

use serde_json::Value;

use crate::error::{ParseError, ProtocolError};
use crate::state::DeviceState;

/// Paths of the unit's REST API.
pub mod endpoints {
    /// `GET` the full state document.
    pub const STATE: &str = "/api/v1/state";
    /// `POST` power, mode, setpoint, or fan speed updates.
    pub const CONTROL: &str = "/api/v1/control";
    /// `POST` zone damper updates.
    pub const ZONES: &str = "/api/v1/zones";
}

/// Successful response from the unit.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The raw response body.
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a state document.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not a JSON object.
    pub fn parse_state(&self) -> Result<DeviceState, ParseError> {
        DeviceState::from_json(&self.body)
    }
}

/// Trait for transports that can reach the unit.
///
/// Implementations must return `Err` for transport failures and for any
/// non-2xx status, so that callers only ever see successful bodies.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Issues a `GET` for `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 2xx.
    async fn get(&self, path: &str) -> Result<ApiResponse, ProtocolError>;

    /// Issues a `POST` for `path` with `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the status is not 2xx.
    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, ProtocolError>;
}
