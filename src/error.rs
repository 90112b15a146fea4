// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `baums_ac` library.
//!
//! Failures fall into three families when talking to the unit: transport
//! failures and non-2xx statuses ([`ProtocolError`]) and malformed bodies
//! ([`ParseError`]). The client collapses them into an empty state or a
//! `false` command result at its boundary; the typed errors are still
//! available through [`ApiClient::try_fetch_state`](crate::ApiClient::try_fetch_state).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the unit.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Integration configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised when parsing or constructing typed values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// An unknown power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An unknown HVAC mode string was provided.
    #[error("invalid HVAC mode: {0}")]
    InvalidHvacMode(String),

    /// An unknown fan speed string was provided.
    #[error("invalid fan speed: {0}")]
    InvalidFanSpeed(String),

    /// An unknown damper state string was provided.
    #[error("invalid damper state: {0}")]
    InvalidDamperState(String),

    /// A temperature that cannot be sent (NaN or infinite).
    #[error("temperature {0} is not a finite number")]
    NonFiniteTemperature(f64),
}

/// Errors related to HTTP communication with the unit.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a status was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The unit answered with a non-success status.
    #[error("HTTP {code} - {reason}")]
    Status {
        /// Numeric status code.
        code: u16,
        /// Canonical reason phrase, or `"Unknown"`.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding state responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Body was valid JSON but not the expected shape.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to integration setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The required host field is empty.
    #[error("host is required")]
    MissingHost,

    /// The same zone appears more than once.
    #[error("duplicate zone: {0}")]
    DuplicateZone(String),

    /// A zone name is empty.
    #[error("zone name must not be empty")]
    EmptyZoneName,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHvacMode("dry".to_string());
        assert_eq!(err.to_string(), "invalid HVAC mode: dry");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidFanSpeed("turbo".to_string()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidFanSpeed(_))));
    }

    #[test]
    fn status_error_display() {
        let err = ProtocolError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 - Internal Server Error");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnexpectedFormat("expected object, got array".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected response format: expected object, got array"
        );
    }

    #[test]
    fn config_error_into_error() {
        let err: Error = ConfigError::MissingHost.into();
        assert_eq!(err.to_string(), "config error: host is required");
    }
}
