// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport to the gateway.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::ProtocolError;

/// Prefix of the status line the gateway embeds in a 200 body when a
/// command failed internally.
const EMBEDDED_SERVER_ERROR: &str = "HTTP/1.0 500";

/// Connection parameters of a gateway.
///
/// Every request is an independent GET; the session id travels in the
/// query string.
///
/// # Examples
///
/// ```
/// use avm_homeauto::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Local gateway with default address
/// let config = HttpConfig::default().with_credentials("smarthome", "secret");
/// assert_eq!(config.base_url(), "http://fritz.box");
///
/// // With all options
/// let config = HttpConfig::new("192.168.178.1")
///     .with_port(8443)
///     .with_https()
///     .with_credentials("smarthome", "secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://192.168.178.1:8443");
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Option<(String, String)>,
    timeout: Duration,
}

impl HttpConfig {
    /// Well-known local address of the gateway.
    pub const DEFAULT_HOST: &'static str = "fritz.box";
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname, IP address, or a full `http(s)://` base URL
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the login credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    ///
    /// A host given as full URL is used as is, without port or scheme
    /// adjustments.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` for an empty host and
    /// `ProtocolError::Http` if the client cannot be created.
    pub fn build_client(&self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url(),
            client,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST)
    }
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("use_https", &self.use_https)
            .field("username", &self.credentials.as_ref().map(|(u, _)| u))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// HTTP client for the gateway's Lua resources.
///
/// Applies the response classification shared by all resources: non-success
/// statuses and the embedded `HTTP/1.0 500` marker become errors, other
/// bodies are returned without trailing whitespace.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Returns the base URL of the gateway.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a resource and query.
    fn build_url(&self, resource: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}/{resource}", self.base_url);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Performs a GET on `resource` and returns the classified body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Unauthorized` for 401/403,
    /// `ProtocolError::HttpStatus` for other non-success statuses,
    /// `ProtocolError::InternalServerError` for the embedded 500 marker and
    /// `ProtocolError::Http` if the request fails.
    pub async fn get(
        &self,
        resource: &str,
        query: &[(String, String)],
    ) -> Result<String, ProtocolError> {
        let url = self.build_url(resource, query);

        // the query carries the session id, keep it out of the logs
        tracing::debug!(resource, "Sending HTTP request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::trace!(status = status.as_u16(), body = %body, "Received HTTP response");

        classify(status, &body)
    }
}

/// Maps status and body onto the reply or an error.
///
/// The embedded-500 marker wins over the outer status.
fn classify(status: StatusCode, body: &str) -> Result<String, ProtocolError> {
    if body.starts_with(EMBEDDED_SERVER_ERROR) {
        return Err(ProtocolError::InternalServerError);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ProtocolError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ProtocolError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }
    Ok(body.trim_end().to_string())
}
