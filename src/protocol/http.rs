// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the unit's REST API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Protocol};

// ============================================================================
// HttpConfig
// ============================================================================

/// Connection parameters for the unit.
///
/// `host` may be a bare address (`"192.168.1.40"`, `"ac.local:8080"`) or a
/// full base URL (`"http://192.168.1.40:8080"`). When a scheme is present the
/// port and HTTPS settings are ignored. When the host already carries a port,
/// [`with_port`](Self::with_port) is ignored.
///
/// No request timeout is set unless [`with_timeout`](Self::with_timeout) is
/// called; the transport's own defaults apply.
///
/// # Examples
///
/// ```
/// use baums_ac::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.40");
/// assert_eq!(config.base_url(), "http://192.168.1.40");
///
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.40:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: Option<u16>,
    use_https: bool,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;

    /// Creates a configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().trim().to_string(),
            port: None,
            use_https: false,
            timeout: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the effective port.
    #[must_use]
    pub fn port(&self) -> u16 {
        if let Some(port) = embedded_port(&self.host) {
            return port;
        }
        self.port.unwrap_or(if self.use_https {
            Self::DEFAULT_HTTPS_PORT
        } else {
            Self::DEFAULT_PORT
        })
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if has_scheme(&self.host) {
            return self.host.trim_end_matches('/').to_string();
        }

        let scheme = if self.use_https { "https" } else { "http" };
        let default_port = if self.use_https {
            Self::DEFAULT_HTTPS_PORT
        } else {
            Self::DEFAULT_PORT
        };
        if embedded_port(&self.host).is_some() {
            return format!("{scheme}://{}", self.host);
        }
        match self.port {
            Some(port) if port != default_port => format!("{scheme}://{}:{port}", self.host),
            _ => format!("{scheme}://{}", self.host),
        }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let base_url = self.base_url();

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

fn has_scheme(host: &str) -> bool {
    host.starts_with("http://") || host.starts_with("https://")
}

/// Port written into a bare host (`"ac.local:8080"`, `"[fe80::1]:8080"`).
fn embedded_port(host: &str) -> Option<u16> {
    let port = if host.starts_with('[') {
        host.rsplit_once("]:")?.1
    } else {
        let (name, port) = host.split_once(':')?;
        if port.contains(':') || name.is_empty() {
            return None;
        }
        port
    };
    port.parse().ok()
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the unit.
///
/// Wraps a single `reqwest::Client`, whose connection pool is shared by every
/// clone and released when the last clone is dropped.
///
/// # Examples
///
/// ```no_run
/// use baums_ac::protocol::{HttpClient, Protocol, endpoints};
///
/// # async fn example() -> baums_ac::Result<()> {
/// let client = HttpClient::new("192.168.1.40")?;
/// let response = client.get(endpoints::STATE).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the unit.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a path.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn execute(request: RequestBuilder) -> Result<ApiResponse, ProtocolError> {
        let response = request.send().await.map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(ApiResponse::new(body))
    }
}

impl Protocol for HttpClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP GET");

        Self::execute(self.client.get(&url)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, payload = %body, "Sending HTTP POST");

        Self::execute(self.client.post(&url).json(body)).await
    }
}
