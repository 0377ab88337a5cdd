// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client builder.

use std::time::Duration;

use super::HomeAutomation;
use crate::error::{Error, LoginError};
use crate::protocol::{Dispatcher, HttpConfig, SessionManager};

/// Builder for [`HomeAutomation`] clients.
///
/// Created with [`HomeAutomation::builder`] (default address `fritz.box`)
/// or [`HomeAutomation::with_config`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// use avm_homeauto::HomeAutomation;
///
/// # async fn example() -> avm_homeauto::Result<()> {
/// // Default gateway address
/// let client = HomeAutomation::builder()
///     .with_credentials("smarthome", "secret")
///     .build()
///     .await?;
///
/// // Explicit address and timeout
/// let client = HomeAutomation::builder()
///     .host("192.168.178.1")
///     .with_timeout(Duration::from_secs(3))
///     .with_credentials("smarthome", "secret")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HomeAutomationBuilder {
    config: HttpConfig,
}

impl HomeAutomationBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets the gateway host, keeping the other settings.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        let mut config = HttpConfig::new(host)
            .with_port(self.config.port())
            .with_timeout(self.config.timeout());
        if let Some((username, password)) = self.config.credentials() {
            config = config.with_credentials(username, password);
        }
        if self.config.use_https() {
            config = config.with_https();
        }
        self.config = config;
        self
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.config = self.config.with_https();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the login credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_credentials(username, password);
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the client and logs in.
    ///
    /// # Errors
    ///
    /// Returns `Error::Login` if credentials are missing or the handshake
    /// fails, and `Error::Protocol` if the HTTP client cannot be created.
    pub async fn build(self) -> Result<HomeAutomation, Error> {
        let client = self.build_without_login()?;
        client.dispatcher.session().login().await?;
        Ok(client)
    }

    /// Builds the client without logging in.
    ///
    /// Commands fail with `Error::NotConnected` until
    /// [`HomeAutomation::relogin`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns `Error::Login` if credentials are missing and
    /// `Error::Protocol` if the HTTP client cannot be created.
    pub fn build_without_login(self) -> Result<HomeAutomation, Error> {
        let (username, password) = self
            .config
            .credentials()
            .ok_or(LoginError::MissingCredentials)?;
        let http = self.config.build_client()?;
        let session = SessionManager::new(http.clone(), username, password);
        Ok(HomeAutomation {
            dispatcher: Dispatcher::new(http, session),
        })
    }
}
